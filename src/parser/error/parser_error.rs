//! Parser error types and error collection.

use super::span::Span;
use crate::{
    lexer::token::{Token, TokenType},
    parser::error::ParserErrorType,
};
use std::fmt;

/// A parser error with location and kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserError {
    pub kind: ParserErrorType,
    pub span: Span,
}

impl ParserError {
    /// Create a new parser error.
    pub fn new(kind: ParserErrorType, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create error from token position.
    pub fn at_token(kind: ParserErrorType, token: &Token) -> Self {
        Self {
            kind,
            span: Span::from_token(token),
        }
    }

    /// Create error at specific position.
    pub fn at(kind: ParserErrorType, line: usize, column: usize) -> Self {
        Self {
            kind,
            span: Span::new(line, column),
        }
    }

    // ============================================================================
    // Convenience constructors for common errors
    // ============================================================================

    /// Expected token error.
    pub fn expected_token(expected: TokenType, token: &Token) -> Self {
        Self::at_token(
            ParserErrorType::ExpectedToken {
                expected,
                got: token.token_type,
                literal: token.literal.clone(),
            },
            token,
        )
    }

    /// No prefix parse function error.
    pub fn no_prefix_fn(token: &Token) -> Self {
        Self::at_token(
            ParserErrorType::NoPrefixParseFunction {
                token_type: token.token_type,
                literal: token.literal.clone(),
            },
            token,
        )
    }

    /// Invalid integer literal error.
    pub fn invalid_integer(token: &Token) -> Self {
        Self::at_token(
            ParserErrorType::InvalidIntegerLiteral {
                literal: token.literal.clone(),
            },
            token,
        )
    }

    /// Failed to parse prefix RHS.
    pub fn prefix_rhs_failed(operator: &str, token: &Token) -> Self {
        Self::at_token(
            ParserErrorType::FailedToParsePrefixRHS {
                operator: operator.to_string(),
            },
            token,
        )
    }

    /// Failed to parse infix RHS.
    pub fn infix_rhs_failed(operator: &str, token: &Token) -> Self {
        Self::at_token(
            ParserErrorType::FailedToParseInfixRHS {
                operator: operator.to_string(),
            },
            token,
        )
    }

    /// Expected parameter identifier.
    pub fn expected_param_ident(token: &Token) -> Self {
        Self::at_token(
            ParserErrorType::ExpectedParameterIdentifier {
                got: token.token_type,
                literal: token.literal.clone(),
            },
            token,
        )
    }

    /// Unclosed call arguments.
    pub fn unclosed_call(token: &Token) -> Self {
        Self::at_token(
            ParserErrorType::UnclosedCallArguments {
                got: token.token_type,
                literal: token.literal.clone(),
            },
            token,
        )
    }

    /// Unclosed array literal.
    pub fn unclosed_array(token: &Token) -> Self {
        Self::at_token(
            ParserErrorType::UnclosedArrayLiteral {
                got: token.token_type,
                literal: token.literal.clone(),
            },
            token,
        )
    }

    /// Unclosed index expression.
    pub fn unclosed_index(token: &Token) -> Self {
        Self::at_token(
            ParserErrorType::UnclosedIndexExpression {
                got: token.token_type,
                literal: token.literal.clone(),
            },
            token,
        )
    }

    /// Expected ':' in hash literal.
    pub fn expected_colon_in_hash(token: &Token) -> Self {
        Self::at_token(
            ParserErrorType::ExpectedColonInHash {
                got: token.token_type,
                literal: token.literal.clone(),
            },
            token,
        )
    }

    /// Unclosed hash literal.
    pub fn unclosed_hash(token: &Token) -> Self {
        Self::at_token(
            ParserErrorType::UnclosedHashLiteral {
                got: token.token_type,
                literal: token.literal.clone(),
            },
            token,
        )
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.span, self.kind)
    }
}

impl std::error::Error for ParserError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ParserError::at(
            ParserErrorType::ExpectedToken {
                expected: TokenType::SEMICOLON,
                got: TokenType::RBRACE,
                literal: "}".to_string(),
            },
            1,
            10,
        );
        assert_eq!(
            error.to_string(),
            "[line 1:10] expected SEMICOLON, got RBRACE ('}')"
        );
    }
}
