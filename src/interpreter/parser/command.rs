use crate::{
    ast::{Command, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_expression,
            core::{ParseResult, Parser},
        },
        value::Value,
    },
};

/// Parses a single command, dispatching on the leading token.
///
/// Anything that does not start with a command keyword or `{` is parsed as
/// an assignment or a bare expression statement.
///
/// # Errors
/// Returns the first [`ParseError`] raised by the command's sub-parsers, or
/// [`ParseError::UnexpectedEndOfInput`] when the stream is already
/// exhausted.
pub fn parse_command<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match parser.peek() {
        Some((Token::LBrace, _)) => parse_block(parser),
        Some((Token::Let | Token::Const, _)) => parse_declaration(parser),
        Some((Token::Debug, _)) => parse_debug(parser),
        Some((Token::If, _)) => parse_if(parser),
        Some((Token::While, _)) => parse_while(parser),
        Some((Token::For, _)) => parse_for(parser),
        Some(_) => parse_assignment(parser),
        None => Err(ParseError::UnexpectedEndOfInput { line: parser.current_line() }),
    }
}

/// Parses a `{ ... }` block.
///
/// The block's commands are parsed inside a fresh child scope, so
/// declarations made within it are invisible once the closing brace is
/// consumed.
fn parse_block<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = parser.expect(&Token::LBrace)?;

    let enclosing = parser.scope;
    parser.scope = parser.environment.new_scope(enclosing);

    let mut commands = Vec::new();
    while !matches!(parser.peek(), Some((Token::RBrace, _))) {
        if parser.peek().is_none() {
            return Err(ParseError::UnexpectedEndOfInput { line: parser.current_line() });
        }

        commands.push(parse_command(parser)?);
    }

    parser.expect(&Token::RBrace)?;
    parser.scope = enclosing;

    Ok(Command::Blocks { commands, line })
}

/// Parses a `let` or `const` declaration.
///
/// A declaration may introduce several comma-separated names; each is
/// declared into the current scope immediately and paired with its
/// initializer, or with an `undefined` constant when none is written.
fn parse_declaration<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let constant = matches!(parser.peek(), Some((Token::Const, _)));
    let line = if constant {
        parser.expect(&Token::Const)?
    } else {
        parser.expect(&Token::Let)?
    };

    let mut commands = Vec::new();
    loop {
        let (name, name_line) = parser.parse_name()?;
        let variable = parser.environment.declare(parser.scope, &name, constant, name_line)?;

        let expr = if parser.match_token(&Token::Equals) {
            parse_expression(parser)?
        } else {
            Expr::Const { value: Value::Undefined,
                          line:  name_line, }
        };

        commands.push(Command::Initialize { variable,
                                            expr,
                                            line: name_line });

        if !parser.match_token(&Token::Comma) {
            break;
        }
    }

    parser.expect(&Token::Semicolon)?;

    Ok(Command::Blocks { commands, line })
}

/// Parses a `debug expr;` statement.
fn parse_debug<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = parser.expect(&Token::Debug)?;
    let expr = parse_expression(parser)?;
    parser.expect(&Token::Semicolon)?;

    Ok(Command::Debug { expr, line })
}

/// Parses an `if (cond) cmd [else cmd]` statement.
///
/// The dangling `else` binds to the nearest `if`, which falls out of the
/// recursion for free.
fn parse_if<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = parser.expect(&Token::If)?;

    parser.expect(&Token::LParen)?;
    let condition = parse_expression(parser)?;
    parser.expect(&Token::RParen)?;

    let then_branch = Box::new(parse_command(parser)?);
    let else_branch = if parser.match_token(&Token::Else) {
        Some(Box::new(parse_command(parser)?))
    } else {
        None
    };

    Ok(Command::If { condition,
                     then_branch,
                     else_branch,
                     line })
}

/// Parses a `while (cond) cmd` statement.
///
/// The body is parsed inside its own scope frame even when it is a single
/// command, so a declaration in the body never leaks past the loop.
fn parse_while<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = parser.expect(&Token::While)?;

    parser.expect(&Token::LParen)?;
    let condition = parse_expression(parser)?;
    parser.expect(&Token::RParen)?;

    let enclosing = parser.scope;
    parser.scope = parser.environment.new_scope(enclosing);
    let body = Box::new(parse_command(parser)?);
    parser.scope = enclosing;

    Ok(Command::While { condition, body, line })
}

/// Parses a `for ([let] name in expr) cmd` statement.
///
/// The loop variable is declared in the loop's own scope frame whether or
/// not `let` is written, so it is invisible after the loop.
fn parse_for<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = parser.expect(&Token::For)?;
    parser.expect(&Token::LParen)?;

    let enclosing = parser.scope;
    parser.scope = parser.environment.new_scope(enclosing);

    parser.match_token(&Token::Let);
    let (name, name_line) = parser.parse_name()?;
    let variable = parser.environment.declare(parser.scope, &name, false, name_line)?;

    parser.expect(&Token::In)?;
    let iterable = parse_expression(parser)?;
    parser.expect(&Token::RParen)?;

    let body = Box::new(parse_command(parser)?);
    parser.scope = enclosing;

    Ok(Command::For { variable,
                      iterable,
                      body,
                      line })
}

/// Parses an assignment or a bare expression statement.
///
/// The statement starts as an expression; if an `=` follows, that expression
/// must be a plain variable reference and becomes the assignment target.
fn parse_assignment<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(parser)?;
    let line = expr.line_number();

    let command = if parser.match_token(&Token::Equals) {
        let Expr::Variable { cell, .. } = expr else {
            return Err(ParseError::InvalidAssignmentTarget { line });
        };

        let rhs = parse_expression(parser)?;
        Command::Assign { rhs,
                          lhs: Some(cell),
                          line }
    } else {
        Command::Assign { rhs: expr,
                          lhs: None,
                          line }
    };

    parser.expect(&Token::Semicolon)?;

    Ok(command)
}
