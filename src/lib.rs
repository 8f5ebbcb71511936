pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod store;
pub mod value;

pub use ast::{BinOp, Expr, Literal, Token, TokenAt};
pub use evaluator::{compile, EvalError, Filter};
pub use lexer::Lexer;
pub use parser::{ParseError, Parser};
pub use store::{FindError, Store};
pub use value::Value;
