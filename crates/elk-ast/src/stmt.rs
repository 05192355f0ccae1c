//! Statement AST nodes.

use crate::expr::{Expr, Ident};
use crate::token::Token;
use crate::Node;

/// A statement in the AST.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stmt {
    /// Let binding (`let x = 5;`)
    Let(LetStmt),
    /// Return statement (`return x;`)
    Return(ReturnStmt),
    /// A bare expression in statement position
    Expr(ExprStmt),
}

/// A `let` binding.
///
/// `value` is `None` when the parser bailed out before the initializer; the
/// node still renders.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetStmt {
    pub token: Token,
    pub name: Ident,
    pub value: Option<Expr>,
}

/// A `return` statement.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
}

/// An expression in statement position.
///
/// The token is the first token of the expression.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprStmt {
    pub token: Token,
    pub expr: Option<Expr>,
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(s) => s.token_literal(),
            Stmt::Return(s) => s.token_literal(),
            Stmt::Expr(s) => s.token_literal(),
        }
    }
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Node for ExprStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}
