use crate::{
    ast::{Command, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_expression,
            command::parse_command,
            core::{ParseResult, Parser},
        },
        value::Value,
    },
};

/// Parses an optional prefix operator followed by its operand.
///
/// Prefix operators nest (`!!x` is two negations), and the increment and
/// decrement forms additionally require the operand to be a plain variable
/// reference.
///
/// # Errors
/// Returns [`ParseError::InvalidAssignmentTarget`] when `++` or `--` is
/// applied to anything other than a variable.
pub fn parse_prefix<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match parser.peek() {
        Some((Token::Bang, _)) => UnaryOperator::Not,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Minus, _)) => UnaryOperator::Minus,
        Some((Token::PlusPlus, _)) => UnaryOperator::PreIncrement,
        Some((Token::MinusMinus, _)) => UnaryOperator::PreDecrement,
        _ => return parse_factor(parser),
    };

    parser.advance();
    let line = parser.current_line();
    let operand = parse_prefix(parser)?;

    if matches!(op, UnaryOperator::PreIncrement | UnaryOperator::PreDecrement)
       && !matches!(operand, Expr::Variable { .. })
    {
        return Err(ParseError::InvalidAssignmentTarget { line: operand.line_number() });
    }

    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     line })
}

/// Parses a factor: a parenthesized expression or an rvalue, then any call
/// suffixes, then an optional postfix `++` or `--`.
fn parse_factor<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut expr = if matches!(parser.peek(), Some((Token::LParen, _))) {
        parser.advance();
        let inner = parse_expression(parser)?;
        parser.expect(&Token::RParen)?;
        inner
    } else {
        parse_rvalue(parser)?
    };

    expr = parse_calls(parser, expr)?;

    let postfix = match parser.peek() {
        Some((Token::PlusPlus, _)) => Some(UnaryOperator::PostIncrement),
        Some((Token::MinusMinus, _)) => Some(UnaryOperator::PostDecrement),
        _ => None,
    };

    if let Some(op) = postfix {
        parser.advance();
        let line = parser.current_line();

        if !matches!(expr, Expr::Variable { .. }) {
            return Err(ParseError::InvalidAssignmentTarget { line });
        }

        expr = Expr::Unary { op,
                             operand: Box::new(expr),
                             line };
    }

    Ok(expr)
}

/// Parses an rvalue: a literal, a list, an object, a function, or a variable
/// reference.
///
/// In expression position `{` always opens an object literal; blocks never
/// occur inside expressions.
fn parse_rvalue<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match parser.peek() {
        Some((Token::Number(_) | Token::Text(_) | Token::True | Token::False | Token::Undefined, _)) => {
            parse_const(parser)
        },
        Some((Token::LBracket, _)) => parse_list(parser),
        Some((Token::LBrace, _)) => parse_object(parser),
        Some((Token::Function, _)) => parse_function(parser),
        Some((Token::Identifier(_), _)) => parse_lvalue(parser),

        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("found {token:?}, expected an expression"),
                                              line:  *line, })
        },

        None => Err(ParseError::UnexpectedEndOfInput { line: parser.current_line() }),
    }
}

/// Parses a constant literal into its runtime value.
fn parse_const<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, line)) = parser.advance() else {
        return Err(ParseError::UnexpectedEndOfInput { line: parser.current_line() });
    };

    let value = match token {
        Token::Number(n) => Value::Number(*n),
        Token::Text(t) => Value::Text(t.clone()),
        Token::True => Value::Bool(true),
        Token::False => Value::Bool(false),
        Token::Undefined => Value::Undefined,

        other => {
            return Err(ParseError::UnexpectedToken { token: format!("found {other:?}, expected a literal"),
                                                     line:  *line, })
        },
    };

    Ok(Expr::Const { value, line: *line })
}

/// Parses a `[e1, e2, ...]` list literal.
fn parse_list<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = parser.expect(&Token::LBracket)?;

    let mut elements = Vec::new();
    if !matches!(parser.peek(), Some((Token::RBracket, _))) {
        loop {
            elements.push(parse_expression(parser)?);

            if !parser.match_token(&Token::Comma) {
                break;
            }
        }
    }

    parser.expect(&Token::RBracket)?;

    Ok(Expr::List { elements, line })
}

/// Parses a `{ name: expr, ... }` object literal.
fn parse_object<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = parser.expect(&Token::LBrace)?;

    let mut fields = Vec::new();
    if !matches!(parser.peek(), Some((Token::RBrace, _))) {
        loop {
            let (name, _) = parser.parse_name()?;
            parser.expect(&Token::Colon)?;
            fields.push((name, parse_expression(parser)?));

            if !parser.match_token(&Token::Comma) {
                break;
            }
        }
    }

    parser.expect(&Token::RBrace)?;

    Ok(Expr::Object { fields, line })
}

/// Parses a `function () { ... [return expr;] }` literal.
///
/// The body is parsed inside its own scope frame; an optional `return`
/// expression must be the last thing before the closing brace.
fn parse_function<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = parser.expect(&Token::Function)?;
    parser.expect(&Token::LParen)?;
    parser.expect(&Token::RParen)?;
    parser.expect(&Token::LBrace)?;

    let enclosing = parser.scope;
    parser.scope = parser.environment.new_scope(enclosing);

    let mut commands = Vec::new();
    while !matches!(parser.peek(), Some((Token::Return | Token::RBrace, _))) {
        if parser.peek().is_none() {
            return Err(ParseError::UnexpectedEndOfInput { line: parser.current_line() });
        }

        commands.push(parse_command(parser)?);
    }

    let ret = if parser.match_token(&Token::Return) {
        let expr = parse_expression(parser)?;
        parser.expect(&Token::Semicolon)?;
        Some(Box::new(expr))
    } else {
        None
    };

    parser.expect(&Token::RBrace)?;
    parser.scope = enclosing;

    Ok(Expr::Function { body: Box::new(Command::Blocks { commands, line }),
                        ret,
                        line })
}

/// Parses a variable reference, resolving the name through the scope chain.
fn parse_lvalue<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, line) = parser.parse_name()?;
    let cell = parser.environment.get(parser.scope, &name, line)?;

    Ok(Expr::Variable { cell, line })
}

/// Parses any number of `(args)` call suffixes applied to `expr`.
fn parse_calls<'a, I>(parser: &mut Parser<'a, '_, I>, mut expr: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    while matches!(parser.peek(), Some((Token::LParen, _))) {
        parser.advance();
        let line = parser.current_line();

        let mut arguments = Vec::new();
        if !matches!(parser.peek(), Some((Token::RParen, _))) {
            loop {
                arguments.push(parse_expression(parser)?);

                if !parser.match_token(&Token::Comma) {
                    break;
                }
            }
        }

        parser.expect(&Token::RParen)?;

        expr = Expr::Call { callee: Box::new(expr),
                            arguments,
                            line };
    }

    Ok(expr)
}
