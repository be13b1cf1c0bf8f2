use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser},
            unary::parse_prefix,
        },
    },
};

/// Parses a full expression.
///
/// This is the entry point every grammar rule that contains an expression
/// goes through; the precedence layers below it are private.
///
/// # Errors
/// Returns the first [`crate::error::ParseError`] raised while descending
/// through the precedence layers.
pub fn parse_expression<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_condition(parser)
}

/// Parses a chain of `&&` and `||` connectives, left-associative.
///
/// Both connectives share one precedence level, so `a || b && c` groups as
/// `(a || b) && c`.
fn parse_condition<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_relational(parser)?;

    loop {
        let op = match parser.peek() {
            Some((Token::AndAnd, _)) => BinaryOperator::And,
            Some((Token::OrOr, _)) => BinaryOperator::Or,
            _ => break,
        };

        parser.advance();
        let line = parser.current_line();
        let right = parse_relational(parser)?;

        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Parses at most one comparison between two arithmetic operands.
///
/// Relational operators do not chain: `a < b < c` stops after `a < b` and
/// leaves `< c` for the caller, which rejects it.
fn parse_relational<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_additive(parser)?;

    let op = match parser.peek() {
        Some((Token::EqualEqual, _)) => BinaryOperator::Equal,
        Some((Token::BangEqual, _)) => BinaryOperator::NotEqual,
        Some((Token::Less, _)) => BinaryOperator::LowerThan,
        Some((Token::LessEqual, _)) => BinaryOperator::LowerEqual,
        Some((Token::Greater, _)) => BinaryOperator::GreaterThan,
        Some((Token::GreaterEqual, _)) => BinaryOperator::GreaterEqual,
        _ => return Ok(left),
    };

    parser.advance();
    let line = parser.current_line();
    let right = parse_additive(parser)?;

    Ok(Expr::Binary { left: Box::new(left),
                      op,
                      right: Box::new(right),
                      line })
}

/// Parses a chain of `+` and `-` operations, left-associative.
fn parse_additive<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(parser)?;

    loop {
        let op = match parser.peek() {
            Some((Token::Plus, _)) => BinaryOperator::Add,
            Some((Token::Minus, _)) => BinaryOperator::Sub,
            _ => break,
        };

        parser.advance();
        let line = parser.current_line();
        let right = parse_multiplicative(parser)?;

        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Parses a chain of `*` and `/` operations, left-associative.
fn parse_multiplicative<'a, I>(parser: &mut Parser<'a, '_, I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_prefix(parser)?;

    loop {
        let op = match parser.peek() {
            Some((Token::Star, _)) => BinaryOperator::Mul,
            Some((Token::Slash, _)) => BinaryOperator::Div,
            _ => break,
        };

        parser.advance();
        let line = parser.current_line();
        let right = parse_prefix(parser)?;

        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}
