//! Parser for the Monkey language producing an Abstract Syntax Tree (AST).
//!
//! This module exposes the `Parser` struct that turns tokens from the
//! `lexer` module into an AST defined in `crate::ast`.
//!
//! Parsing approach:
//! - Maintains a two-token lookahead (`curr_token`, `peek_token`).
//! - Provides helpers like `expect_peek`, `is_curr_token`, and `is_peek_token`.
//! - Pratt-parses expressions via prefix/infix function tables keyed by `TokenType`.
//! - Statement terminators (`;`) are optional, consumed when present.
//! - Reports structured errors via the `errors` vector instead of aborting.

pub mod error;
mod precedence;
pub mod test_helper;

use crate::ast::{
    Program,
    expression::{
        ArrayLiteral, BooleanLiteral, CallExpression, Expression, FunctionLiteral, HashLiteral,
        Identifier, IfExpression, IndexExpression, InfixExpression, IntegerLiteral,
        PrefixExpression, StringLiteral,
    },
    statement::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement},
};
use crate::lexer::{
    Lexer,
    token::{Token, TokenType},
};
use crate::parser::error::{ParserError, ParserErrorType};
use precedence::Precedence;
use std::collections::HashMap;

/// A parser that converts tokens from a lexer into an Abstract Syntax Tree (AST).
///
/// The parser maintains a two-token lookahead buffer (current and peek tokens)
/// to make parsing decisions. It processes tokens sequentially and builds
/// the AST by parsing different statement types.
#[derive(Debug, Clone)]
pub struct Parser {
    l: Lexer,
    curr_token: Token,
    peek_token: Token,
    pub errors: Vec<ParserError>,
    prefix_parse_fns: HashMap<TokenType, PrefixParseFn>,
    infix_parse_fns: HashMap<TokenType, InfixParseFn>,
}

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

impl Parser {
    /// Creates a new parser instance with the given lexer.
    ///
    /// Initializes the parser with empty tokens and then reads the first two tokens
    /// to set up the lookahead buffer. This ensures the parser always has
    /// both current and peek tokens available for parsing decisions.
    pub fn new(l: Lexer) -> Self {
        let mut p = Parser {
            l,
            curr_token: Token::new(TokenType::EOF, "".to_string(), 0, 0),
            peek_token: Token::new(TokenType::EOF, "".to_string(), 0, 0),
            errors: Vec::<ParserError>::new(),
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
        };
        // Register prefix parse functions
        p.register_prefix_parse_fn(TokenType::IDENT, Parser::parse_identifier);
        p.register_prefix_parse_fn(TokenType::INT, Parser::parse_integer_literal);
        p.register_prefix_parse_fn(TokenType::STRING, Parser::parse_string_literal);
        p.register_prefix_parse_fn(TokenType::BANG, Parser::parse_prefix_expression);
        p.register_prefix_parse_fn(TokenType::MINUS, Parser::parse_prefix_expression);
        p.register_prefix_parse_fn(TokenType::TRUE, Parser::parse_boolean_literal);
        p.register_prefix_parse_fn(TokenType::FALSE, Parser::parse_boolean_literal);
        p.register_prefix_parse_fn(TokenType::LPAREN, Parser::parse_grouped_expression);
        p.register_prefix_parse_fn(TokenType::IF, Parser::parse_if_expression);
        p.register_prefix_parse_fn(TokenType::FUNCTION, Parser::parse_function_literal);
        p.register_prefix_parse_fn(TokenType::LBRACKET, Parser::parse_array_literal);
        p.register_prefix_parse_fn(TokenType::LBRACE, Parser::parse_hash_literal);
        // Register Infix parse functions
        p.register_infix_parse_fn(TokenType::PLUS, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::MINUS, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::SLASH, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::ASTERISK, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::EQ, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::NOTEQ, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::LT, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::GT, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::LPAREN, Parser::parse_call_expression);
        p.register_infix_parse_fn(TokenType::LBRACKET, Parser::parse_index_expression);
        // Advance the token buffer to have a two-token lookahead
        p.next_token();
        p.next_token();
        p
    }

    /// Advances the token buffer by one position.
    ///
    /// Moves the peek token to the current token position and reads
    /// the next token from the lexer into the peek position. This maintains
    /// the two-token lookahead buffer/window used for parsing decisions.
    fn next_token(&mut self) {
        self.curr_token = self.peek_token.clone();
        self.peek_token = self.l.next_token();
    }

    /// Checks if the current token matches the expected token type.
    fn is_curr_token(&self, token_type: TokenType) -> bool {
        self.curr_token.token_type == token_type
    }

    /// Checks if the peek token matches the expected token type.
    fn is_peek_token(&self, token_type: TokenType) -> bool {
        self.peek_token.token_type == token_type
    }

    /// Expects the peek token to be of a specific type and advances if it matches.
    ///
    /// If the peek token matches the expected type, advances the token buffer
    /// and returns true. If it doesn't match, adds an error to the parser's
    /// error list and returns false.
    fn expect_peek(&mut self, token_type: TokenType) -> bool {
        if self.is_peek_token(token_type) {
            self.next_token();
            true
        } else {
            self.push_error(ParserError::expected_token(token_type, &self.peek_token));
            false
        }
    }

    /// If a semicolon follows, consume it. Statement terminators are optional.
    fn skip_optional_semicolon(&mut self) {
        if self.is_peek_token(TokenType::SEMICOLON) {
            self.next_token();
        }
    }

    fn push_error(&mut self, error: ParserError) {
        log::error!("{}", error);
        self.errors.push(error);
    }

    fn no_prefix_parse_function_error(&mut self) {
        self.push_error(ParserError::no_prefix_fn(&self.curr_token.clone()));
    }

    fn register_prefix_parse_fn(&mut self, token_type: TokenType, parse_fn: PrefixParseFn) {
        self.prefix_parse_fns.insert(token_type, parse_fn);
    }

    fn register_infix_parse_fn(&mut self, token_type: TokenType, parse_fn: InfixParseFn) {
        self.infix_parse_fns.insert(token_type, parse_fn);
    }

    /// Returns a reference to the parser's error list.
    pub fn errors(&self) -> &Vec<ParserError> {
        &self.errors
    }

    /// Parses the entire program and returns the root AST node.
    ///
    /// Iterates through all tokens until EOF is reached, parsing each
    /// statement encountered. Collects all successfully parsed statements
    /// into a Program node. If parsing of a statement fails, it continues
    /// with the next statement rather than stopping the entire parse.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program {
            statements: Vec::new(),
        };
        while self.curr_token.token_type != TokenType::EOF {
            let statement = self.parse_statement();
            if let Some(stmt) = statement {
                program.statements.push(stmt);
            }
            self.next_token();
        }
        program
    }

    /// Parses a single statement based on the current token type.
    fn parse_statement(&mut self) -> Option<Statement> {
        match self.curr_token.token_type {
            TokenType::LET => self.parse_let_statement().map(Statement::Let),
            TokenType::RETURN => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    /// Parses a let statement with the format: `let <identifier> = <expression>[;]`
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.curr_token.clone();

        if !self.expect_peek(TokenType::IDENT) {
            return None;
        }
        let name = Identifier {
            token: self.curr_token.clone(),
            value: self.curr_token.literal.clone(),
        };

        if !self.expect_peek(TokenType::ASSIGN) {
            return None;
        }
        self.next_token();
        let value = self.parse_expression(Precedence::LOWEST as i32)?;

        self.skip_optional_semicolon();

        Some(LetStatement { token, name, value })
    }

    /// Parses a return statement with the format: `return <expression>[;]`
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.curr_token.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::LOWEST as i32)?;

        self.skip_optional_semicolon();

        Some(ReturnStatement { token, value })
    }

    /// Parses an identifier expression.
    fn parse_identifier(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let value = self.curr_token.literal.clone();
        Some(Expression::Identifier(Identifier { token, value }))
    }

    /// Parses an expression statement: an expression optionally followed by `;`.
    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.curr_token.clone();
        let expr = self.parse_expression(Precedence::LOWEST as i32)?;
        self.skip_optional_semicolon();
        Some(ExpressionStatement { token, value: expr })
    }

    /// Parses an expression starting from the current token position.
    ///
    /// This is the main entry point for expression parsing. It uses the Pratt parsing
    /// algorithm approach, where expressions are parsed based on precedence levels.
    fn parse_expression(&mut self, precedence: i32) -> Option<Expression> {
        let token_type = self.curr_token.token_type;
        let prefix = self.prefix_parse_fns.get(&token_type);
        let mut left = if let Some(prefix_parse_fn) = prefix {
            prefix_parse_fn(self)?
        } else {
            self.no_prefix_parse_function_error();
            return None;
        };

        while !self.is_peek_token(TokenType::SEMICOLON) && precedence < self.peek_precedence() {
            let peek_token_type = self.peek_token.token_type;
            let infix = self.infix_parse_fns.get(&peek_token_type).copied();
            let infix_parse_fn = match infix {
                Some(f) => f,
                None => return Some(left),
            };
            self.next_token();
            left = infix_parse_fn(self, left)?;
        }

        Some(left)
    }

    /// Parses an integer literal expression from the current token.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                self.push_error(ParserError::invalid_integer(&token));
                None
            }
        }
    }

    /// Parses a string literal expression from the current token.
    fn parse_string_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let value = token.literal.clone();
        Some(Expression::StringLiteral(StringLiteral { token, value }))
    }

    /// Parses a boolean literal expression from the current token.
    fn parse_boolean_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let value = self.is_curr_token(TokenType::TRUE);
        Some(Expression::BooleanLiteral(BooleanLiteral { token, value }))
    }

    /// Parses a prefix expression (e.g., `!true`, `-5`).
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let operator = self.curr_token.literal.clone();

        self.next_token();

        let right = match self.parse_expression(Precedence::PREFIX as i32) {
            Some(expr) => expr,
            None => {
                self.push_error(ParserError::prefix_rhs_failed(&operator, &self.curr_token.clone()));
                return None;
            }
        };

        Some(Expression::PrefixExpression(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    /// Returns the precedence level for the next token, or the lowest if unknown.
    fn peek_precedence(&self) -> i32 {
        Precedence::from_token_type(&self.peek_token.token_type)
    }

    /// Returns the precedence level for the current token, or the lowest if unknown.
    fn curr_precedence(&self) -> i32 {
        Precedence::from_token_type(&self.curr_token.token_type)
    }

    /// Parses an infix expression (e.g., `5 + 5`, `x == y`).
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.curr_token.clone();
        let operator = self.curr_token.literal.clone();
        let precedence = self.curr_precedence();

        self.next_token();

        let right = match self.parse_expression(precedence) {
            Some(expr) => expr,
            None => {
                self.push_error(ParserError::infix_rhs_failed(&operator, &self.curr_token.clone()));
                return None;
            }
        };
        Some(Expression::InfixExpression(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// Parses a grouped expression (e.g., `(5 + 5)`).
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expr = match self.parse_expression(Precedence::LOWEST as i32) {
            Some(e) => e,
            None => {
                self.push_error(ParserError::new(
                    ParserErrorType::FailedToParseGroupedExpression,
                    error::Span::from_token(&self.curr_token),
                ));
                return None;
            }
        };

        if !self.expect_peek(TokenType::RPAREN) {
            return None;
        }

        Some(expr)
    }

    /// Parses an if expression: `if (<condition>) <consequence> [else <alternative>]`.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();

        if !self.expect_peek(TokenType::LPAREN) {
            return None;
        }
        self.next_token();
        let condition = match self.parse_expression(Precedence::LOWEST as i32) {
            Some(e) => e,
            None => {
                self.push_error(ParserError::new(
                    ParserErrorType::FailedToParseIfCondition,
                    error::Span::from_token(&self.curr_token),
                ));
                return None;
            }
        };
        if !self.expect_peek(TokenType::RPAREN) {
            return None;
        }
        if !self.expect_peek(TokenType::LBRACE) {
            return None;
        }
        let consequence = self.parse_block_statement()?;

        let alternative = if self.is_peek_token(TokenType::ELSE) {
            self.next_token();
            if !self.expect_peek(TokenType::LBRACE) {
                return None;
            }
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::IfExpression(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// Parses a block statement: `{ <statements> }`.
    ///
    /// Expects the current token to be the opening brace. Parses statements
    /// until the matching closing brace or EOF.
    fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        let token = self.curr_token.clone();
        let mut statements = Vec::new();

        while !self.is_peek_token(TokenType::RBRACE) && !self.is_peek_token(TokenType::EOF) {
            self.next_token();
            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None => {
                    self.push_error(ParserError::new(
                        ParserErrorType::FailedToParseStatementInBlock,
                        error::Span::from_token(&self.curr_token),
                    ));
                }
            }
        }
        if !self.expect_peek(TokenType::RBRACE) {
            return None;
        }
        Some(BlockStatement { token, statements })
    }

    /// Parses a function literal expression: `fn(<parameters>) <body>`.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        if !self.expect_peek(TokenType::LPAREN) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;
        if !self.expect_peek(TokenType::LBRACE) {
            return None;
        }
        let body = self.parse_block_statement()?;
        Some(Expression::FunctionLiteral(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Parses the function parameters (e.g., `x, y`).
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.is_peek_token(TokenType::RPAREN) {
            self.next_token();
            return Some(parameters);
        }
        self.next_token();

        parameters.push(self.parse_identifier_param()?);

        while self.is_peek_token(TokenType::COMMA) {
            self.next_token();
            self.next_token();
            parameters.push(self.parse_identifier_param()?);
        }

        if !self.expect_peek(TokenType::RPAREN) {
            return None;
        }

        Some(parameters)
    }

    fn parse_identifier_param(&mut self) -> Option<Identifier> {
        if !self.is_curr_token(TokenType::IDENT) {
            self.push_error(ParserError::expected_param_ident(&self.curr_token.clone()));
            return None;
        }
        Some(Identifier {
            token: self.curr_token.clone(),
            value: self.curr_token.literal.clone(),
        })
    }

    /// Parses a generic comma-separated expression list terminated by `end`.
    /// Current token must be the token immediately before the first element
    /// (or `end` itself for an empty list).
    fn parse_expression_list(&mut self, end: TokenType) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.is_peek_token(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::LOWEST as i32)?);

        while self.is_peek_token(TokenType::COMMA) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::LOWEST as i32)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.curr_token.clone();
        let arguments = match self.parse_expression_list(TokenType::RPAREN) {
            Some(args) => args,
            None => {
                self.push_error(ParserError::unclosed_call(&self.curr_token.clone()));
                return None;
            }
        };
        Some(Expression::CallExpression(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// Parses an array literal: `[<elements>]`.
    fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let elements = match self.parse_expression_list(TokenType::RBRACKET) {
            Some(elements) => elements,
            None => {
                self.push_error(ParserError::unclosed_array(&self.curr_token.clone()));
                return None;
            }
        };
        Some(Expression::ArrayLiteral(ArrayLiteral { token, elements }))
    }

    /// Parses an index expression: `<left>[<index>]`.
    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.curr_token.clone();
        self.next_token();
        let index = match self.parse_expression(Precedence::LOWEST as i32) {
            Some(e) => e,
            None => {
                self.push_error(ParserError::new(
                    ParserErrorType::FailedToParseIndexExpression,
                    error::Span::from_token(&self.curr_token),
                ));
                return None;
            }
        };
        if !self.expect_peek(TokenType::RBRACKET) {
            self.push_error(ParserError::unclosed_index(&self.curr_token.clone()));
            return None;
        }
        Some(Expression::IndexExpression(IndexExpression {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }))
    }

    /// Parses a hash literal: `{<key>: <value>, ...}`.
    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let mut pairs = Vec::new();

        while !self.is_peek_token(TokenType::RBRACE) {
            self.next_token();
            let key = match self.parse_expression(Precedence::LOWEST as i32) {
                Some(e) => e,
                None => {
                    self.push_error(ParserError::new(
                        ParserErrorType::FailedToParseHashKey,
                        error::Span::from_token(&self.curr_token),
                    ));
                    return None;
                }
            };

            if !self.expect_peek(TokenType::COLON) {
                self.push_error(ParserError::expected_colon_in_hash(&self.curr_token.clone()));
                return None;
            }

            self.next_token();
            let value = match self.parse_expression(Precedence::LOWEST as i32) {
                Some(e) => e,
                None => {
                    self.push_error(ParserError::new(
                        ParserErrorType::FailedToParseHashValue,
                        error::Span::from_token(&self.curr_token),
                    ));
                    return None;
                }
            };

            pairs.push((key, value));

            if !self.is_peek_token(TokenType::RBRACE) && !self.expect_peek(TokenType::COMMA) {
                self.push_error(ParserError::unclosed_hash(&self.curr_token.clone()));
                return None;
            }
        }

        if !self.expect_peek(TokenType::RBRACE) {
            return None;
        }

        Some(Expression::HashLiteral(HashLiteral { token, pairs }))
    }
}
