//! Facilities for parsing cartridge directive files.

mod atom;
mod config;
mod lex;
mod types;

pub use config::{AddrAst, CartConfigAst, DirectiveAst, RangeAst};
pub use lex::{Token, TokenLexer, TokenValue};
pub use types::{ParseError, ParseResult, SrcSpan};

//===========================================================================//
