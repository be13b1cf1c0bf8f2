use crate::interpreter::{environment::CellId, value::Value};

/// An abstract syntax tree (AST) node representing a command in the language.
///
/// Commands are executed for their effects: declaring and assigning
/// variables, printing through the `debug` channel, and control flow.
/// The tree mirrors the block nesting of the source; ownership is strictly
/// hierarchical.
///
/// Variable references are stored as [`CellId`]s resolved while parsing, so
/// executing a command never looks a name up.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// An ordered sequence of commands executed front to back.
    Blocks {
        /// The commands in source order.
        commands: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Stores the initial value of a freshly declared variable.
    Initialize {
        /// The storage cell created by the declaration.
        variable: CellId,
        /// The initializer, or a `undefined` constant when none was written.
        expr:     Expr,
        /// Line number in the source code.
        line:     usize,
    },
    /// An assignment, or a bare expression evaluated for its effect.
    Assign {
        /// The right-hand side, always evaluated.
        rhs:  Expr,
        /// The settable target; `None` for a plain expression statement.
        lhs:  Option<CellId>,
        /// Line number in the source code.
        line: usize,
    },
    /// Prints one rendered value to the debug channel.
    Debug {
        /// The expression to render.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// Conditional execution with an optional `else` branch.
    If {
        /// The condition, converted to a boolean by truthiness.
        condition:   Expr,
        /// Executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Executed when the condition is falsy, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A `while` loop; the condition is re-tested before every iteration.
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `for (name in expr)` loop.
    ///
    /// Parsed structurally with its own scope frame, but iteration requires
    /// list values, which this core does not evaluate; executing it raises an
    /// unsupported-construct error.
    For {
        /// The loop variable, declared in the loop's own scope.
        variable: CellId,
        /// The expression that would be iterated.
        iterable: Expr,
        /// The loop body.
        body:     Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

/// An AST node representing an expression.
///
/// Expression trees are built once by the parser and may be evaluated any
/// number of times (loop bodies re-evaluate the same tree on each
/// iteration).
///
/// The `List`, `Object`, `Function`, and `Call` variants are recognized by
/// the grammar but have no runtime semantics in this core; evaluating them
/// raises an unsupported-construct error.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant value (number, text, boolean, or `undefined`).
    Const {
        /// The constant value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// A reference to a variable's storage cell.
    Variable {
        /// The cell resolved at parse time.
        cell: CellId,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (e.g. negation or logical NOT).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation (arithmetic, comparison, or logical).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A list literal, e.g. `[1, 2, 3]`.
    List {
        /// Element expressions.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// An object literal, e.g. `{ a: 1, b: 2 }`.
    Object {
        /// Field names paired with their value expressions, in source order.
        fields: Vec<(String, Self)>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A function literal, e.g. `function () { return 1; }`.
    Function {
        /// The body commands.
        body: Box<Command>,
        /// The optional trailing `return` expression.
        ret:  Option<Box<Self>>,
        /// Line number in the source code.
        line: usize,
    },
    /// A call suffix applied to an expression, e.g. `f(1, 2)`.
    Call {
        /// The expression being called.
        callee:    Box<Self>,
        /// Argument expressions.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use minijs::{ast::Expr, interpreter::value::Value};
    ///
    /// let expr = Expr::Const { value: Value::Number(1.0),
    ///                          line:  5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Const { line, .. }
            | Self::Variable { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::List { line, .. }
            | Self::Object { line, .. }
            | Self::Function { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, and the short-circuit
/// logical connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Logical and (`&&`), short-circuit.
    And,
    /// Logical or (`||`), short-circuit.
    Or,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    LowerThan,
    /// Less than or equal (`<=`)
    LowerEqual,
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
///
/// The increment and decrement forms require a settable operand (a variable
/// reference), which the parser enforces.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (e.g. `!x`); the operand is converted by truthiness.
    Not,
    /// Unary plus (e.g. `+x`); coerces the operand to a number.
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
    /// Pre-increment (`++x`); mutates the cell and yields the new value.
    PreIncrement,
    /// Pre-decrement (`--x`); mutates the cell and yields the new value.
    PreDecrement,
    /// Post-increment (`x++`); mutates the cell and yields the old value.
    PostIncrement,
    /// Post-decrement (`x--`); mutates the cell and yields the old value.
    PostDecrement,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, GreaterEqual, GreaterThan, LowerEqual, LowerThan, Mul, NotEqual,
            Or, Sub,
        };
        let operator = match self {
            And => "&&",
            Or => "||",
            Equal => "==",
            NotEqual => "!=",
            LowerThan => "<",
            LowerEqual => "<=",
            GreaterThan => ">",
            GreaterEqual => ">=",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}
