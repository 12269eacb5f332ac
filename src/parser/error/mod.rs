//! Parser error types and handling for the Monkey language.
//!
//! This module provides structured error types that eliminate scattered format! strings
//! and enable proper error handling throughout the parser.

mod parser_error;
mod span;

use crate::lexer::token::TokenType;
pub use parser_error::ParserError;
pub use span::Span;
use thiserror::Error;

/// All parser error types - centralized and exhaustive.
///
/// This enum represents every possible error that can occur during parsing.
/// Each variant contains the necessary context to generate a helpful error message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParserErrorType {
    // === Token expectation errors ===
    #[error("expected {expected:?}, got {got:?} ('{literal}')")]
    ExpectedToken {
        expected: TokenType,
        got: TokenType,
        literal: String,
    },
    #[error("unexpected end of file")]
    UnexpectedEOF,

    // === Parse function errors ===
    #[error("no prefix parse function for {token_type:?} ('{literal}')")]
    NoPrefixParseFunction {
        token_type: TokenType,
        literal: String,
    },
    #[error("no infix parse function for {token_type:?}")]
    NoInfixParseFunction { token_type: TokenType },

    // === Literal parsing errors ===
    #[error("could not parse '{literal}' as integer")]
    InvalidIntegerLiteral { literal: String },

    // === Expression parsing errors ===
    #[error("failed to parse expression {context}")]
    FailedToParseExpression { context: &'static str },
    #[error("failed to parse expression after prefix operator '{operator}'")]
    FailedToParsePrefixRHS { operator: String },
    #[error("failed to parse expression after infix operator '{operator}'")]
    FailedToParseInfixRHS { operator: String },
    #[error("failed to parse expression inside parentheses")]
    FailedToParseGroupedExpression,

    // === If expression errors ===
    #[error("failed to parse condition in if expression")]
    FailedToParseIfCondition,
    #[error("expected block statement for {context}")]
    ExpectedBlockStatement { context: &'static str },
    #[error("failed to parse {context} block in if expression")]
    FailedToParseIfBlock { context: &'static str },

    // === Block statement errors ===
    #[error("failed to parse statement in block")]
    FailedToParseStatementInBlock,

    // === Function errors ===
    #[error("failed to parse function parameters")]
    FailedToParseFunctionParameters,
    #[error("failed to parse function body")]
    FailedToParseFunctionBody,
    #[error("expected identifier for parameter, got {got:?} ('{literal}')")]
    ExpectedParameterIdentifier { got: TokenType, literal: String },
    #[error("failed to parse {context} parameter")]
    FailedToParseParameter { context: &'static str },

    // === Call expression errors ===
    #[error("failed to parse call arguments")]
    FailedToParseCallArguments,
    #[error("failed to parse {context} argument in function call")]
    FailedToParseCallArgument { context: &'static str },
    #[error("expected ')' to close arguments, got {got:?} ('{literal}')")]
    UnclosedCallArguments { got: TokenType, literal: String },

    // === Array/index errors ===
    #[error("failed to parse array element at index {index}")]
    FailedToParseArrayElement { index: usize },
    #[error("expected ']' to close array literal, got {got:?} ('{literal}')")]
    UnclosedArrayLiteral { got: TokenType, literal: String },
    #[error("failed to parse index expression")]
    FailedToParseIndexExpression,
    #[error("expected ']' to close index expression, got {got:?} ('{literal}')")]
    UnclosedIndexExpression { got: TokenType, literal: String },

    // === Hash literal errors ===
    #[error("failed to parse hash key")]
    FailedToParseHashKey,
    #[error("failed to parse hash value")]
    FailedToParseHashValue,
    #[error("expected ':' between hash key and value, got {got:?} ('{literal}')")]
    ExpectedColonInHash { got: TokenType, literal: String },
    #[error("expected ',' or '}{{' after hash pair, got {got:?} ('{literal}')")]
    UnclosedHashLiteral { got: TokenType, literal: String },
}
