// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Expression AST nodes.

use crate::token::Token;
use crate::Node;

/// An expression in the AST.
///
/// One payload struct per variant; each embeds the token it was parsed from.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// Identifier reference
    Ident(Ident),
    /// Integer literal
    Int(IntLit),
    /// Boolean literal
    Bool(BoolLit),
    /// Prefix operation (`!x`, `-x`)
    Prefix(PrefixExpr),
    /// Infix operation (`a + b`)
    Infix(InfixExpr),
}

/// An identifier (e.g. `foo`).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ident {
    pub token: Token,
    pub name: String,
}

/// An integer literal.
///
/// Keeps both the parsed value and, via the token, the exact source
/// spelling; rendering uses the spelling.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntLit {
    pub token: Token,
    pub value: i64,
}

/// A boolean literal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoolLit {
    pub token: Token,
    pub value: bool,
}

/// A prefix operator applied to an operand.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub operand: Box<Expr>,
}

/// A binary operator between two operands.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        match self {
            Expr::Ident(e) => e.token_literal(),
            Expr::Int(e) => e.token_literal(),
            Expr::Bool(e) => e.token_literal(),
            Expr::Prefix(e) => e.token_literal(),
            Expr::Infix(e) => e.token_literal(),
        }
    }
}

impl Node for Ident {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Node for IntLit {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Node for BoolLit {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Node for InfixExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}
