use std::collections::HashMap;

use crate::{error::ParseError, interpreter::value::Value};

/// Index of a scope frame inside an [`Environment`].
pub type ScopeId = usize;
/// Index of a variable storage cell inside an [`Environment`].
pub type CellId = usize;

/// A named, scoped storage cell created by a declaration.
///
/// Exactly one scope frame owns each cell; every expression that references
/// the name within its lexical extent resolves to the same cell, so a
/// mutation through one reference is visible to all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    name:     String,
    constant: bool,
    value:    Value,
}

impl Cell {
    /// The declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the cell was declared with `const`.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.constant
    }

    /// The current content of the cell.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

/// One lexical scope: its own name bindings plus a link to the parent.
#[derive(Debug, Default)]
struct Scope {
    locals: HashMap<String, CellId>,
    parent: Option<ScopeId>,
}

/// The chain of lexical scopes and the variable cells they own.
///
/// Scopes and cells both live in arenas and are addressed by index, so AST
/// nodes can hold plain [`CellId`]s instead of back-pointers. The parser
/// creates a child scope whenever it enters a block or a loop body and
/// returns to the parent when it leaves; declarations inside never leak out.
///
/// Because every reference is resolved to a `CellId` while parsing, the
/// evaluator reads and writes cells directly and performs no name lookups.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
    cells:  Vec<Cell>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an environment containing only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::default()],
               cells:  Vec::new(), }
    }

    /// The global scope, parent of every scope chain.
    #[must_use]
    pub const fn global(&self) -> ScopeId {
        0
    }

    /// Creates a fresh scope whose lookups fall through to `parent`.
    pub fn new_scope(&mut self, parent: ScopeId) -> ScopeId {
        self.scopes.push(Scope { locals: HashMap::new(),
                                 parent: Some(parent), });
        self.scopes.len() - 1
    }

    /// Declares a new variable in `scope` and returns its storage cell.
    ///
    /// The cell starts out holding `undefined`. Shadowing a name from an
    /// enclosing scope is allowed; declaring a name twice in the same scope
    /// is not.
    ///
    /// # Errors
    /// Returns [`ParseError::Redeclaration`] if `name` already exists in this
    /// exact scope.
    ///
    /// # Example
    /// ```
    /// use minijs::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// let global = env.global();
    ///
    /// let x = env.declare(global, "x", false, 1).unwrap();
    /// assert_eq!(env.cell(x).name(), "x");
    ///
    /// // Same scope: rejected.
    /// assert!(env.declare(global, "x", false, 2).is_err());
    ///
    /// // Child scope: shadows the outer binding.
    /// let inner = env.new_scope(global);
    /// let shadow = env.declare(inner, "x", true, 3).unwrap();
    /// assert_ne!(x, shadow);
    /// ```
    pub fn declare(&mut self,
                   scope: ScopeId,
                   name: &str,
                   constant: bool,
                   line: usize)
                   -> Result<CellId, ParseError> {
        if self.scopes[scope].locals.contains_key(name) {
            return Err(ParseError::Redeclaration { name: name.to_string(),
                                                   line });
        }

        let cell = self.cells.len();
        self.cells.push(Cell { name: name.to_string(),
                               constant,
                               value: Value::Undefined, });
        self.scopes[scope].locals.insert(name.to_string(), cell);

        Ok(cell)
    }

    /// Resolves a name to its storage cell, searching `scope` and then each
    /// parent in turn.
    ///
    /// # Errors
    /// Returns [`ParseError::UndeclaredName`] if the chain is exhausted
    /// without a match.
    ///
    /// # Example
    /// ```
    /// use minijs::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// let global = env.global();
    /// let x = env.declare(global, "x", false, 1).unwrap();
    ///
    /// let inner = env.new_scope(global);
    /// assert_eq!(env.get(inner, "x", 2).unwrap(), x);
    /// assert!(env.get(inner, "y", 2).is_err());
    /// ```
    pub fn get(&self, scope: ScopeId, name: &str, line: usize) -> Result<CellId, ParseError> {
        let mut current = Some(scope);
        while let Some(id) = current {
            if let Some(cell) = self.scopes[id].locals.get(name) {
                return Ok(*cell);
            }
            current = self.scopes[id].parent;
        }

        Err(ParseError::UndeclaredName { name: name.to_string(),
                                         line })
    }

    /// The cell behind a resolved reference.
    #[must_use]
    pub fn cell(&self, cell: CellId) -> &Cell {
        &self.cells[cell]
    }

    /// The current content of a cell.
    #[must_use]
    pub fn value(&self, cell: CellId) -> &Value {
        &self.cells[cell].value
    }

    /// Overwrites the content of a cell.
    ///
    /// Constant-ness is a language rule checked by the evaluator at the
    /// assignment site, not here; initialization writes through this method
    /// too.
    pub fn set_value(&mut self, cell: CellId, value: Value) {
        self.cells[cell].value = value;
    }
}
