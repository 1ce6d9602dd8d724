use std::iter::Peekable;

use log::{debug, trace};

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::tokenizer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest allowed nesting of parenthesized groups.
///
/// Every `(` starts a fresh builder level, so this bound also caps the
/// builder's recursion depth on hostile input.
pub const MAX_GROUP_DEPTH: usize = 64;

/// One slot of the operand/operator stack.
///
/// The builder pushes finished operands and still-childless operators onto
/// the same stack; a collapse tells them apart by the entry kind. Outside a
/// collapse the stack alternates operand, operator, operand, and so on.
#[derive(Debug)]
enum StackEntry {
    /// A finished sub-expression, usable as an operand.
    Operand(Expr),
    /// An operator that has not received its operands yet.
    Pending(BinaryOperator),
}

/// Outcome of one reduction step during a collapse.
#[derive(Debug)]
enum Reduction {
    /// An `{operand, operator, operand}` triple was folded into one operand.
    Folded,
    /// A pending operator below the target priority stopped the collapse.
    Blocked,
}

/// Builds the expression tree for a complete token sequence.
///
/// The whole sequence must form exactly one expression: after the top level
/// has been built, no token may remain. A stray but individually balanced
/// `)` therefore fails here instead of silently ending the parse early.
///
/// # Errors
/// Returns the first structural failure encountered: a dangling operator,
/// two adjacent operands, an empty expression or group, groups nested beyond
/// [`MAX_GROUP_DEPTH`], a group that never closes, or leftover tokens after
/// the expression ended.
///
/// # Example
/// ```
/// use fcalc::interpreter::{builder::build_expression, tokenizer::tokenize};
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// let tree = build_expression(&tokens).unwrap();
///
/// assert_eq!(tree.evaluate(), 14.0);
/// ```
pub fn build_expression(tokens: &[Token]) -> ParseResult<Expr> {
    debug!("building expression tree from {} tokens", tokens.len());

    let mut tokens = tokens.iter().peekable();
    let expression = build_level(&mut tokens, 0)?;

    if let Some(token) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string() });
    }

    Ok(expression)
}

/// Builds one expression level: a run of tokens that ends at the first
/// unmatched `)` or at the end of input.
///
/// Each level owns a fresh operand/operator stack. Numbers are pushed as
/// operands and `(` recurses into a new level for the group. An incoming
/// operator first collapses every pending operator that binds at least as
/// tightly, which is what makes equal priorities evaluate left to right
/// while higher priorities fold into sub-trees early. The final collapse
/// must leave exactly one operand on the stack.
fn build_level<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if depth > MAX_GROUP_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_GROUP_DEPTH });
    }

    trace!("entering builder level at depth {depth}");

    let mut stack = Vec::new();
    let mut last_operator: Option<BinaryOperator> = None;

    while let Some(&token) = tokens.peek() {
        trace!("token {token} at depth {depth}, {} stack entries", stack.len());

        if let Some(op) = token_to_operator(token) {
            tokens.next();

            if let Some(previous) = last_operator
               && previous.priority() >= op.priority()
            {
                collapse(&mut stack, op.priority())?;
            }

            stack.push(StackEntry::Pending(op));
            last_operator = Some(op);
            continue;
        }

        match token {
            Token::Number(value) => {
                let value = *value;
                tokens.next();
                stack.push(StackEntry::Operand(Expr::Literal { value }));
            },

            Token::LParen => {
                tokens.next();
                let group = build_group(tokens, depth + 1)?;
                stack.push(StackEntry::Operand(group));
            },

            // Only `)` can reach this arm; it ends the level and stays put
            // for the enclosing group to consume.
            _ => break,
        }
    }

    collapse(&mut stack, 0)?;

    match stack.pop() {
        Some(StackEntry::Operand(expression)) => Ok(expression),
        Some(StackEntry::Pending(_)) => Err(ParseError::MissingOperand),
        None => Err(ParseError::EmptyExpression),
    }
}

/// Builds one parenthesized group and consumes its closing `)`.
///
/// The caller has already consumed the opening `(`; the group's tokens are
/// built as their own level, whose result becomes a single operand for the
/// caller's stack.
fn build_group<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let group = build_level(tokens, depth)?;

    match tokens.next() {
        Some(Token::RParen) => {
            trace!("closed group at depth {depth}");
            Ok(group)
        },
        _ => Err(ParseError::ExpectedClosingParen),
    }
}

/// Collapses the stack until one entry remains or a pending operator with a
/// priority below `min_priority` blocks any further reduction.
fn collapse(stack: &mut Vec<StackEntry>, min_priority: usize) -> ParseResult<()> {
    trace!("collapsing {} stack entries down to priority {min_priority}",
           stack.len());

    while stack.len() > 1 {
        match reduce_once(stack, min_priority)? {
            Reduction::Folded => {},
            Reduction::Blocked => break,
        }
    }

    Ok(())
}

/// Reduces the topmost `{operand, operator, operand}` triple into a single
/// operand.
///
/// A pending operator whose priority is below `min_priority` is not ready
/// yet: the popped entries go back unchanged and the step reports
/// [`Reduction::Blocked`] so the enclosing collapse stops. A stack that does
/// not hold such a triple at this point is malformed input.
fn reduce_once(stack: &mut Vec<StackEntry>, min_priority: usize) -> ParseResult<Reduction> {
    let right = match stack.pop() {
        Some(StackEntry::Operand(expression)) => expression,
        Some(StackEntry::Pending(_)) => return Err(ParseError::MissingOperand),
        None => return Err(ParseError::EmptyExpression),
    };

    let op = match stack.pop() {
        Some(StackEntry::Pending(op)) => op,
        Some(StackEntry::Operand(_)) => return Err(ParseError::MissingOperator),
        None => return Err(ParseError::MissingOperand),
    };

    if op.priority() < min_priority {
        trace!("operator {op} blocks the collapse");
        stack.push(StackEntry::Pending(op));
        stack.push(StackEntry::Operand(right));
        return Ok(Reduction::Blocked);
    }

    let left = match stack.pop() {
        Some(StackEntry::Operand(expression)) => expression,
        _ => return Err(ParseError::MissingOperand),
    };

    stack.push(StackEntry::Operand(Expr::BinaryOp { left:  Box::new(left),
                                                    op,
                                                    right: Box::new(right) }));

    Ok(Reduction::Folded)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the five
/// binary operators (`+`, `-`, `*`, `/`, `%`) and `None` for all other
/// tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use fcalc::{
///     ast::BinaryOperator,
///     interpreter::{builder::token_to_operator, tokenizer::Token},
/// };
///
/// assert_eq!(token_to_operator(&Token::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Rem),
        _ => None,
    }
}
