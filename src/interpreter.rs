/// The builder module assembles the expression tree from tokens.
///
/// The builder consumes the token sequence produced by the tokenizer and
/// constructs the tree of binary operations that represents the formula. It
/// keeps operands and pending operators on an explicit stack and folds them
/// into sub-trees as operator priorities demand, recursing only for
/// parenthesized groups.
///
/// # Responsibilities
/// - Converts the token sequence into a single [`crate::ast::Expr`] tree.
/// - Orders operations by priority, left to right among equals.
/// - Reports structural errors such as dangling operators, adjacent
///   operands, unclosed groups, and leftover tokens.
pub mod builder;
/// The tokenizer module splits a formula into tokens.
///
/// The tokenizer reads the raw formula text and produces the sequence of
/// tokens the builder works on: numbers, the five operator symbols, and
/// parentheses. Fields are separated by single spaces and each field must
/// lex to exactly one token. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Splits the formula at spaces and lexes every field into one token.
/// - Parses numeric literals, including signs, fractions, and exponents.
/// - Rejects oversized formulas, empty fields, unknown tokens, and
///   unbalanced parentheses.
pub mod tokenizer;
