use std::iter::Peekable;

use crate::{
    ast::Command,
    error::ParseError,
    interpreter::{
        environment::{Environment, ScopeId},
        lexer::Token,
        parser::command::parse_command,
    },
};

/// A specialized [`Result`] type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// The state threaded through the recursive descent.
///
/// Couples the peekable token stream with the environment and the scope the
/// parser is currently inside. Block and loop parsers push a child scope on
/// entry and restore the enclosing one on exit, so every name is declared
/// and resolved against the scope that lexically contains it.
pub struct Parser<'a, 'e, I>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens:          Peekable<I>,
    /// The scope chain and cell arena being populated.
    pub environment: &'e mut Environment,
    /// The scope the parser is currently inside.
    pub scope:       ScopeId,
    line:            usize,
}

impl<'a, 'e, I> Parser<'a, 'e, I> where I: Iterator<Item = &'a (Token, usize)>
{
    fn new(tokens: I, environment: &'e mut Environment) -> Self {
        let scope = environment.global();

        Self { tokens: tokens.peekable(),
               environment,
               scope,
               line: 1 }
    }

    /// Looks at the next token without consuming it.
    pub fn peek(&mut self) -> Option<&'a (Token, usize)> {
        self.tokens.peek().copied()
    }

    /// Consumes the next token, remembering its line for error reporting.
    pub fn advance(&mut self) -> Option<&'a (Token, usize)> {
        let next = self.tokens.next();
        if let Some((_, line)) = next {
            self.line = *line;
        }

        next
    }

    /// The line of the most recently consumed token.
    pub const fn current_line(&self) -> usize {
        self.line
    }

    /// Consumes the next token and returns its line if it equals `expected`.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] on a mismatch and
    /// [`ParseError::UnexpectedEndOfInput`] if the stream is exhausted.
    pub fn expect(&mut self, expected: &Token) -> ParseResult<usize> {
        match self.advance() {
            Some((token, line)) if token == expected => Ok(*line),

            Some((token, line)) => {
                Err(ParseError::UnexpectedToken { token: format!("found {token:?}, expected {expected:?}"),
                                                  line:  *line, })
            },

            None => Err(ParseError::UnexpectedEndOfInput { line: self.line }),
        }
    }

    /// Consumes the next token only if it equals `expected`.
    pub fn match_token(&mut self, expected: &Token) -> bool {
        if matches!(self.peek(), Some((token, _)) if token == expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the next token, which must be an identifier, and returns the
    /// name together with its line.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] if the next token is not an
    /// identifier, or [`ParseError::UnexpectedEndOfInput`] if the stream is
    /// exhausted.
    pub fn parse_name(&mut self) -> ParseResult<(String, usize)> {
        match self.advance() {
            Some((Token::Identifier(name), line)) => Ok((name.clone(), *line)),

            Some((token, line)) => {
                Err(ParseError::UnexpectedToken { token: format!("found {token:?}, expected an identifier"),
                                                  line:  *line, })
            },

            None => Err(ParseError::UnexpectedEndOfInput { line: self.line }),
        }
    }
}

/// Parses a complete token stream into a program.
///
/// Declarations are entered into `environment` as they are parsed, and every
/// variable reference in the returned tree is already resolved to its
/// storage cell.
///
/// # Parameters
/// - `tokens`: The `(token, line)` pairs produced by the lexer.
/// - `environment`: The environment to declare and resolve names in.
///
/// # Returns
/// - `Ok(Command)`: The program as a single block of commands.
/// - `Err(ParseError)`: The first syntax or resolution error encountered.
///
/// # Example
/// ```
/// use minijs::interpreter::{environment::Environment, lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("let x = 1; debug x;").unwrap();
/// let mut environment = Environment::new();
/// assert!(parse_program(tokens.iter(), &mut environment).is_ok());
///
/// // `y` is never declared.
/// let tokens = tokenize("debug y;").unwrap();
/// let mut environment = Environment::new();
/// assert!(parse_program(tokens.iter(), &mut environment).is_err());
/// ```
pub fn parse_program<'a, I>(tokens: I, environment: &mut Environment) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut parser = Parser::new(tokens, environment);

    let mut commands = Vec::new();
    while parser.peek().is_some() {
        commands.push(parse_command(&mut parser)?);
    }

    Ok(Command::Blocks { commands, line: 1 })
}
