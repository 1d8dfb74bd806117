use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
///
/// The language has no keywords at the lexical level: every run of characters
/// that is not punctuation, whitespace or a quote becomes a [`Token::Word`],
/// and the parser decides whether it is a number, a literal keyword, a call
/// name or a variable.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// A quoted string, kept verbatim including its delimiters.
    ///
    /// Either `"` or `'` may delimit a string; a backslash prevents the next
    /// character from closing it.
    #[regex(r#""([^"\\]|\\[\s\S])*""#, string_slice)]
    #[regex(r#"'([^'\\]|\\[\s\S])*'"#, string_slice)]
    Str(String),
    /// A bare token: identifier, number or literal keyword text.
    #[regex(r#"[^\s()\[\]{},:"']+"#, |lex| lex.slice().to_string())]
    Word(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `:`
    #[token(":")]
    Colon,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Other whitespace.
    #[regex(r"[ \t\r\f\x0B]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) | Self::Word(s) => write!(f, "{s}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Colon => write!(f, ":"),
            Self::NewLine => writeln!(f),
            Self::Ignored => Ok(()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current physical line number for lexical error reporting.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Copies a string token verbatim, counting any newlines it spans.
fn string_slice(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();
    slice.to_string()
}

/// Converts raw source text into a flat token stream.
///
/// Scanning is a single left-to-right pass. Punctuation always forms its own
/// token, whitespace separates bare tokens, and quotes open string tokens.
///
/// # Errors
/// - [`LexError::UnterminatedString`] if the input ends inside a string.
/// - [`LexError::UnexpectedCharacter`] for characters no token accepts.
///
/// # Example
/// ```
/// use eucalyptus::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize(r#"print("hi", x)"#).unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::Word("print".into()),
///                 Token::LParen,
///                 Token::Str("\"hi\"".into()),
///                 Token::Comma,
///                 Token::Word("x".into()),
///                 Token::RParen]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let slice = lexer.slice();
            let line = lexer.extras.line;
            if slice.starts_with(['"', '\'']) {
                return Err(LexError::UnterminatedString { line });
            }
            return Err(LexError::UnexpectedCharacter { token: slice.to_string(),
                                                       line });
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
