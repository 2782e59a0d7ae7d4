//! Facilities for parsing cartridge directive files.

use super::atom::{
    PError, keyword, line_end, linebreak, parse_tokens, tokenize,
};
use super::lex::{Token, TokenValue};
use super::types::{ParseResult, SrcSpan};
use crate::addr::AddrRange;
use crate::dis::DisasmOptions;
use chumsky::error::Rich;
use chumsky::{self, IterParser, Parser};

//===========================================================================//

/// The largest address a directive may name.
const MAX_ADDR: u32 = 0xffff;

//===========================================================================//

/// The abstract syntax tree for a cartridge directive file.
#[derive(Debug, Eq, PartialEq)]
pub struct CartConfigAst {
    /// Directives in the order they appear in the file.
    pub directives: Vec<DirectiveAst>,
}

impl CartConfigAst {
    /// Parses a cartridge directive file.
    pub fn parse_source(source: &str) -> ParseResult<CartConfigAst> {
        let tokens = tokenize(source)?;
        parse_tokens(CartConfigAst::parser(), &tokens)
    }

    fn parser<'a>() -> impl Parser<'a, &'a [Token], CartConfigAst, PError<'a>>
    {
        linebreak()
            .or_not()
            .ignore_then(DirectiveAst::parser().repeated().collect::<Vec<_>>())
            .map(|directives| CartConfigAst { directives })
    }

    /// Adds the entry points and address ranges from these directives to
    /// `options`.
    pub fn apply(&self, options: &mut DisasmOptions) {
        for directive in self.directives.iter() {
            match directive {
                DirectiveAst::Entry(addr) => {
                    options.entries.push(addr.value as u16);
                }
                DirectiveAst::Gfx(range) => options.gfx.push(range.range()),
                DirectiveAst::Data(range) => options.data.push(range.range()),
            }
        }
    }
}

//===========================================================================//

/// The abstract syntax tree for a single directive.
#[derive(Debug, Eq, PartialEq)]
pub enum DirectiveAst {
    /// An `ENTRY` directive, naming an additional code entry point.
    Entry(AddrAst),
    /// A `GFX` directive, naming bytes that hold graphics.
    Gfx(RangeAst),
    /// A `DATA` directive, naming bytes that hold data.
    Data(RangeAst),
}

impl DirectiveAst {
    fn parser<'a>() -> impl Parser<'a, &'a [Token], DirectiveAst, PError<'a>>
    {
        let entry = keyword("ENTRY")
            .ignore_then(AddrAst::parser())
            .map(DirectiveAst::Entry);
        let gfx = keyword("GFX")
            .ignore_then(RangeAst::parser())
            .map(DirectiveAst::Gfx);
        let data = keyword("DATA")
            .ignore_then(RangeAst::parser())
            .map(DirectiveAst::Data);
        chumsky::prelude::choice((entry, gfx, data)).then_ignore(line_end())
    }
}

//===========================================================================//

/// An address literal within a directive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AddrAst {
    /// The location of the literal in the source file.
    pub span: SrcSpan,
    /// The address value.
    pub value: u32,
}

impl AddrAst {
    fn parser<'a>()
    -> impl Parser<'a, &'a [Token], AddrAst, PError<'a>> + Clone {
        chumsky::prelude::any()
            .try_map(|token: Token, span| {
                if let TokenValue::IntLiteral(value) = token.value {
                    Ok(AddrAst { span: token.span, value })
                } else {
                    Err(Rich::custom(span, ""))
                }
            })
            .labelled("address")
            .validate(|addr: AddrAst, extra, emitter| {
                if addr.value > MAX_ADDR {
                    let message =
                        format!("address ${:X} is too large", addr.value);
                    emitter.emit(Rich::custom(extra.span(), message));
                }
                addr
            })
    }
}

//===========================================================================//

/// An inclusive address range within a directive.  A range written as a
/// single address covers just that address.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RangeAst {
    /// The first address in the range.
    pub first: AddrAst,
    /// The last address in the range, if different from the first.
    pub last: Option<AddrAst>,
}

impl RangeAst {
    /// Returns the location of the range in the source file.
    pub fn span(&self) -> SrcSpan {
        match self.last {
            Some(last) => self.first.span.merged_with(last.span),
            None => self.first.span,
        }
    }

    /// Returns the addresses this range covers.
    pub fn range(&self) -> AddrRange {
        let last = self.last.unwrap_or(self.first);
        AddrRange::with_bounds(self.first.value, last.value)
            .unwrap_or(AddrRange::single(self.first.value))
    }

    fn parser<'a>()
    -> impl Parser<'a, &'a [Token], RangeAst, PError<'a>> + Clone {
        AddrAst::parser().then(AddrAst::parser().or_not()).validate(
            |(first, last), extra, emitter| {
                if let Some(last) = last
                    && last.value < first.value
                {
                    let message = format!(
                        "range end ${:04X} precedes start ${:04X}",
                        last.value, first.value
                    );
                    emitter.emit(Rich::custom(extra.span(), message));
                }
                RangeAst { first, last }
            },
        )
    }
}

//===========================================================================//


//===========================================================================//
