use crate::util::num::truncated_rem;

/// An abstract syntax tree (AST) node representing one formula expression.
///
/// `Expr` covers the two shapes a formula can take: literal numbers and
/// binary operations. Every binary node owns its operands exclusively, so a
/// finished tree is always a tree rather than a graph, and a node that is
/// missing an operand cannot be represented at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal numeric value.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Evaluates the expression tree to a single number.
    ///
    /// Evaluation is a pure recursive fold: it never mutates the tree and
    /// never fails, so evaluating the same tree twice yields the same result.
    /// Division follows IEEE 754 (`1 / 0` is infinity, `0 / 0` is NaN); the
    /// remainder semantics are described on [`BinaryOperator::apply`].
    ///
    /// # Example
    /// ```
    /// use fcalc::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 2.0 }),
    ///                             op:    BinaryOperator::Add,
    ///                             right: Box::new(Expr::Literal { value: 3.0 }), };
    ///
    /// assert_eq!(expr.evaluate(), 5.0);
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        match self {
            Self::Literal { value } => *value,
            Self::BinaryOp { left, op, right } => op.apply(left.evaluate(), right.evaluate()),
        }
    }
}

/// Represents a binary operator.
///
/// The formula language has exactly five, all of them arithmetic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Rem,
}

impl BinaryOperator {
    /// Returns the operator's binding priority.
    ///
    /// The builder collapses every pending operator whose priority is at
    /// least as high as the incoming one, which makes higher priorities bind
    /// tighter and equal priorities evaluate left to right.
    ///
    /// # Example
    /// ```
    /// use fcalc::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.priority() > BinaryOperator::Add.priority());
    /// assert_eq!(BinaryOperator::Sub.priority(), BinaryOperator::Add.priority());
    /// ```
    #[must_use]
    pub const fn priority(self) -> usize {
        match self {
            Self::Add | Self::Sub => 0,
            Self::Mul | Self::Div | Self::Rem => 1,
        }
    }

    /// Applies the operator to two evaluated operands.
    ///
    /// `+`, `-`, `*` and `/` follow plain IEEE 754 semantics. `%` truncates
    /// both operands toward zero and takes the signed integer remainder; see
    /// [`truncated_rem`] for the edge cases that yield NaN.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Rem => truncated_rem(left, right),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Rem, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Rem => "%",
        };
        write!(f, "{operator}")
    }
}
