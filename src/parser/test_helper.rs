//! This module contains helper functions for testing the parser.
//! It makes it easier to test the parser.
use super::Parser;
use crate::ast::{Expression, Node, Statement};

/// A literal value a test expects an `Expression` to hold.
/// Implements `From` for the primitive types tests commonly write inline.
#[derive(Debug, Clone)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value as i64)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

/// Checks for parser errors and prints them if any exist.
#[track_caller]
pub fn check_parser_errors(p: &Parser) {
    let errors = p.errors();
    if errors.is_empty() {
        return;
    }
    println!("parser errors:");
    for err in errors {
        println!("{}", err);
    }
    panic!("parser has {:?} errors", errors.len());
}

/// Verifies that `exp` is an `IntegerLiteral` with the given value.
#[track_caller]
pub fn test_integer_literal(exp: Expression, value: i64) -> bool {
    let int_lit = match exp {
        Expression::IntegerLiteral(il) => il,
        _ => panic!("il not IntegerLiteral. got={:?}", exp),
    };

    if int_lit.value != value {
        panic!("integ.Value not {}. got={}", value, int_lit.value);
    }

    let expected_token_literal = value.to_string();
    if int_lit.token_literal() != expected_token_literal {
        panic!(
            "integ.TokenLiteral not {}. got='{}'",
            value,
            int_lit.token_literal()
        );
    }

    true
}

/// Verifies that `exp` is an `Identifier` with the given value.
#[track_caller]
pub fn test_identifier(exp: Expression, value: &str) -> bool {
    let ident = match exp {
        Expression::Identifier(ident) => ident,
        _ => panic!("exp is not an Identifier expression. got={:?}", exp),
    };

    assert_eq!(
        ident.value, value,
        "ident.value is not {}. got={}",
        value, ident.value
    );
    assert_eq!(
        ident.token_literal(),
        value,
        "ident.token_literal() is not {}. got={}",
        value,
        ident.token_literal()
    );

    true
}

/// Verifies that `exp` is a `BooleanLiteral` with the given value.
#[track_caller]
pub fn test_boolean_literal(exp: Expression, value: bool) -> bool {
    let bool_lit = match exp {
        Expression::BooleanLiteral(bl) => bl,
        _ => panic!("exp is not a BooleanLiteral. got={:?}", exp),
    };

    if bool_lit.value != value {
        panic!("boolean.Value not {}. got={}", value, bool_lit.value);
    }

    true
}

/// Dispatches to the appropriate literal test based on the expected type.
#[track_caller]
pub fn test_literal_expression<E: Into<Literal>>(exp: Expression, expected: E) -> bool {
    match expected.into() {
        Literal::Int(value) => test_integer_literal(exp, value),
        Literal::Bool(value) => test_boolean_literal(exp, value),
        Literal::Str(value) => test_identifier(exp, &value),
    }
}

#[track_caller]
pub fn test_infix_expression<L: Into<Literal>, R: Into<Literal>>(
    exp: Expression,
    left: L,
    operator: &str,
    right: R,
) -> bool {
    let infix_expr = match exp {
        Expression::InfixExpression(infix_expr) => infix_expr,
        _ => panic!("exp is not an InfixExpression. got={:?}", exp),
    };

    test_literal_expression(*infix_expr.left, left);

    assert_eq!(
        infix_expr.operator, operator,
        "infix_expr.operator is not the expected operator. got={}",
        infix_expr.operator
    );

    test_literal_expression(*infix_expr.right, right);

    true
}

/// Verifies that `stmt` is a `LetStatement` binding `name`.
#[track_caller]
pub fn test_let_statement(stmt: &Statement, name: &str) -> bool {
    assert_eq!(
        stmt.token_literal(),
        "let",
        "s.token_literal() not 'let'. got={}",
        stmt.token_literal()
    );

    let let_stmt = match stmt {
        Statement::Let(let_stmt) => let_stmt,
        _ => panic!("stmt is not a LetStatement"),
    };

    assert_eq!(
        let_stmt.name.value, name,
        "letStmt.name.value not '{}'. got={}",
        name, let_stmt.name.value
    );
    assert_eq!(
        let_stmt.name.token_literal(),
        name,
        "letStmt.name.token_literal() not '{}'. got={}",
        name,
        let_stmt.name.token_literal()
    );

    true
}

/// Verifies that `stmt` is a `ReturnStatement`.
#[track_caller]
pub fn is_return_statement(stmt: &Statement) -> bool {
    assert_eq!(
        stmt.token_literal(),
        "return",
        "token_literal() is not 'return'. got={}",
        stmt.token_literal()
    );

    let return_stmt = match stmt {
        Statement::Return(return_stmt) => return_stmt,
        _ => panic!("stmt is not a ReturnStatement. got={:?}", stmt),
    };

    assert_eq!(
        return_stmt.token_literal(),
        "return",
        "returnStmt.token_literal() not 'return'. got={}",
        return_stmt.token_literal()
    );

    true
}
