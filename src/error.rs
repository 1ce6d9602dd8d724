/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing a formula line or
/// building its expression tree. Parse errors include malformed numeric
/// literals, unbalanced parentheses, oversized input, and stack shapes that
/// cannot form a well-formed tree.
pub mod parse_error;

pub use parse_error::ParseError;
