use std::iter::Peekable;

use crate::{
    ast::{Expr, FunctionCall, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            call::{parse_arguments, parse_call},
            literal::{parse_dict_literal, parse_list_literal, parse_word},
        },
        stack::ensure_sufficient_stack,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// The source is tokenized and then split into top-level calls, each of the
/// form `name(arg, ...)`, until the token stream is exhausted. The returned
/// sequence is the program in execution order.
///
/// Every node records the 1-based position of the top-level call it belongs
/// to; that position is also the `line` reported by parse errors.
///
/// # Errors
/// Returns a `ParseError` if tokenization fails, a call is malformed, a
/// trailing comma appears, a dict key is not a string literal, or the input
/// ends where a token was expected.
///
/// # Example
/// ```
/// use eucalyptus::interpreter::parser::parse;
///
/// let program = parse("def(x, 1) print(x)").unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert_eq!(program[0].name, "def");
/// assert_eq!(program[1].line, 2);
/// ```
pub fn parse(source: &str) -> ParseResult<Vec<FunctionCall>> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let mut program = Vec::new();
    let mut line = 1;

    while iter.peek().is_some() {
        program.push(parse_call(&mut iter, line)?);
        line += 1;
    }

    tracing::debug!(statements = program.len(), "parsed program");
    Ok(program)
}

/// Parses a single argument, list element or dict value.
///
/// Dispatches on the next token:
/// - `[` starts a list literal,
/// - `{` starts a dict literal,
/// - a quoted token is a string literal,
/// - `true`, `false` and `null` are literal keywords,
/// - a word followed by `(` is a nested call,
/// - any other word is a number if it parses as one, else a variable.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the statement.
/// - `line`: Position of the enclosing top-level call.
///
/// # Returns
/// The parsed expression node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    ensure_sufficient_stack(|| match tokens.next() {
        Some(Token::LBracket) => parse_list_literal(tokens, line),
        Some(Token::LBrace) => parse_dict_literal(tokens, line),
        Some(Token::Str(raw)) => Ok(Expr::Literal { value: strip_delimiters(raw).into(),
                                                    line }),
        Some(Token::Word(word)) => match word.as_str() {
            "true" => Ok(Expr::Literal { value: true.into(),
                                         line }),
            "false" => Ok(Expr::Literal { value: false.into(),
                                          line }),
            "null" => Ok(Expr::Literal { value: LiteralValue::Null,
                                         line }),
            _ if matches!(tokens.peek(), Some(Token::LParen)) => {
                tokens.next();
                let arguments = parse_arguments(tokens, line)?;
                Ok(Expr::FunctionCall(FunctionCall { name: word.clone(),
                                                     arguments,
                                                     line }))
            },
            _ => parse_word(word, line),
        },
        Some(tok) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                       line }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "a statement",
                                                       line }),
    })
}

/// Removes the opening and closing quote of a string token.
fn strip_delimiters(raw: &str) -> &str {
    raw.get(1..raw.len().saturating_sub(1)).unwrap_or_default()
}
