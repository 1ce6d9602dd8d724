use log::debug;
use logos::Logos;

use crate::error::ParseError;

/// Longest accepted input line, in bytes (1 GiB).
///
/// Anything longer is rejected before a single field is inspected.
pub const MAX_FORMULA_LEN: usize = 1024 * 1024 * 1024;

/// Represents a lexical token of a formula.
/// A token is produced from exactly one space-separated field of the input
/// line. This enum defines all recognized tokens in the formula language.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `-.5`, `2.` or `2.1e-10`.
    /// Signs belong to the literal; there is no unary minus operator.
    #[regex(r"[+-]?[0-9]+\.?[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits one input line into a sequence of tokens.
///
/// The line is split on single space characters, and every resulting field
/// must lex to exactly one token with nothing left over. One trailing space
/// is tolerated, so a line like `"1 + 2 "` still parses; any other empty
/// field (a leading space, doubled spaces) is an error. Parentheses are
/// counted during the scan and must balance.
///
/// On any failure no tokens are returned at all, never a partial sequence.
///
/// # Errors
/// - [`ParseError::FormulaTooLong`] when the line exceeds
///   [`MAX_FORMULA_LEN`] bytes; the content is not inspected at all.
/// - [`ParseError::EmptyExpression`] when the line contains no fields.
/// - [`ParseError::EmptyField`] for consecutive or leading separators.
/// - [`ParseError::UnexpectedToken`] when a field is not an operator, a
///   parenthesis, or a complete numeric literal. The scan stops at the first
///   such field.
/// - [`ParseError::UnbalancedParens`] when the scan succeeds but the `(` and
///   `)` counts differ.
///
/// # Example
/// ```
/// use fcalc::interpreter::tokenizer::{Token, tokenize};
///
/// let tokens = tokenize("( 1 + 2 )").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[1], Token::Number(1.0));
///
/// assert!(tokenize("1.2.3").is_err());
/// ```
pub fn tokenize(formula: &str) -> Result<Vec<Token>, ParseError> {
    if formula.len() > MAX_FORMULA_LEN {
        return Err(ParseError::FormulaTooLong { length: formula.len() });
    }

    // Line-oriented entry leaves at most one separator at the end of the
    // line; swallow it instead of reporting an empty field.
    let formula = formula.strip_suffix(' ').unwrap_or(formula);
    if formula.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut tokens = Vec::new();
    let mut opening = 0;
    let mut closing = 0;

    for field in formula.split(' ') {
        if field.is_empty() {
            return Err(ParseError::EmptyField);
        }

        let mut lexer = Token::lexer(field);
        let token = match lexer.next() {
            Some(Ok(token)) => token,
            _ => return Err(ParseError::UnexpectedToken { token: field.to_string() }),
        };
        // A field must be consumed entirely by a single token; `1.2.3` lexes
        // to a number and a leftover, and both are rejected here.
        if lexer.next().is_some() {
            return Err(ParseError::UnexpectedToken { token: field.to_string() });
        }

        match token {
            Token::LParen => opening += 1,
            Token::RParen => closing += 1,
            _ => {},
        }

        tokens.push(token);
    }

    if opening != closing {
        return Err(ParseError::UnbalancedParens { opening, closing });
    }

    debug!("tokenized formula into {} tokens", tokens.len());

    Ok(tokens)
}
