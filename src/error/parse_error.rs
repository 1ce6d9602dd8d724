#[derive(Debug)]
/// Represents all errors that can occur while tokenizing or building a
/// formula.
pub enum ParseError {
    /// Found a field that is neither an operator, a parenthesis, nor a
    /// number.
    UnexpectedToken {
        /// The offending input field.
        token: String,
    },
    /// Consecutive separators produced an empty field.
    EmptyField,
    /// The counts of `(` and `)` differ.
    UnbalancedParens {
        /// How many `(` the input contains.
        opening: usize,
        /// How many `)` the input contains.
        closing: usize,
    },
    /// The input line exceeds the maximum accepted length.
    FormulaTooLong {
        /// Byte length of the rejected input.
        length: usize,
    },
    /// Parenthesized groups nest deeper than the builder allows.
    NestingTooDeep {
        /// The deepest allowed nesting level.
        limit: usize,
    },
    /// The input, or a parenthesized group, contains no tokens at all.
    EmptyExpression,
    /// An operator is missing one of its operands.
    MissingOperand,
    /// Two operands follow each other with no operator between them.
    MissingOperator,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => {
                write!(f, "Unexpected token: {token}.")
            },

            Self::EmptyField => write!(f,
                                       "Found an empty field. Separate tokens with single spaces."),

            Self::UnbalancedParens { opening, closing } => write!(f,
                                                                  "Unbalanced parentheses: {opening} opening and {closing} closing."),

            Self::FormulaTooLong { length } => {
                write!(f, "The formula is too long: {length} bytes.")
            },

            Self::NestingTooDeep { limit } => write!(f,
                                                     "Parenthesized groups nest deeper than the supported {limit} levels."),

            Self::EmptyExpression => write!(f, "The expression is empty."),

            Self::MissingOperand => write!(f, "An operator is missing an operand."),

            Self::MissingOperator => write!(f,
                                            "Two operands follow each other without an operator."),

            Self::ExpectedClosingParen => write!(f,
                                                 "Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token } => write!(f,
                                                               "Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
