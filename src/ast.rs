//! # Picket Filter Language - Abstract Syntax Tree
//!
//! This module defines the tokens and the Abstract Syntax Tree (AST) for
//! the Picket filter language, a small boolean expression grammar over
//! typed fields.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, identifiers, unary,
//!   binary, grouping)
//! - **[operators]** - Binary operators (comparison and boolean)
//!
//! ## Grammar
//!
//! ```text
//! expression        = suffixExpression [ binaryOp suffixExpression [ boolOp expression ] ]
//! suffixExpression  = literal | NOT suffixExpression | "(" expression ")"
//! literal           = INTEGER | FLOAT | STRING | IDENT
//! binaryOp          = "==" | "!=" | ">" | ">=" | "<" | "<=" | "&&" | "||"
//! boolOp            = "&&" | "||"
//! ```
//!
//! Chains of `&&`/`||` are right-associative over whole comparison
//! terms, and two comparisons can never be adjacent without an explicit
//! connective between them:
//!
//! ```text
//! destination == "Saturn" && traveltime > 30000000
//! ```
//!
//! parses as `(destination == "Saturn") && (traveltime > 30000000)`.
//!
//! `!` binds to the following operand, not to a whole comparison, so
//! `!arrived == false` negates `arrived` before comparing. Use
//! parentheses to negate a comparison: `!(captain == "Henry Cavill")`.
//!
//! ## Type System
//!
//! Operands are booleans, strings, fixed-width integers of any native
//! width, arbitrary-precision integers, or floats. All integer kinds
//! compare exactly through arbitrary precision; integer/float
//! comparisons follow an exact-rounding discipline so that orderings
//! stay correct even when the float has no integer representation.
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{Expr, Literal};
pub use operators::BinOp;
pub use tokens::{Token, TokenAt};
