//! Tokenizer and parser for the polynomial expression language used by expresso.
//!
//! The language has two operators, `+` and `*`, nonnegative number literals, alphabetic variable
//! names, and parentheses:
//!
//! ```text
//! expr      ::= term ('+' term)*
//! term      ::= primary ('*' primary)*
//! primary   ::= NUMBER | VARIABLE | '(' expr ')'
//! NUMBER    ::= digit+ ('.' digit+)?
//! VARIABLE  ::= alpha+
//! ```
//!
//! Parse an expression with [`parser::Parser::try_parse_full`]:
//!
//! ```
//! use expresso_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("2 * (x + 1)");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "2 * (x + 1)");
//! ```

pub mod parser;
pub mod tokenizer;
