use super::lex::{Token, TokenLexer, TokenValue};
use super::types::{ParseError, ParseResult, SrcSpan};
use chumsky::error::{Rich, RichReason};
use chumsky::{self, Parser};

//===========================================================================//

/// The error type used for `chumsky::Parser`s in this crate.
pub(crate) type PError<'a> = chumsky::extra::Err<Rich<'a, Token>>;

//===========================================================================//

/// Matches an identifier equal to `word`, ignoring ASCII case.
pub(crate) fn keyword<'a>(
    word: &'static str,
) -> impl Parser<'a, &'a [Token], Token, PError<'a>> + Clone {
    chumsky::prelude::any()
        .filter(move |token: &Token| {
            if let TokenValue::Identifier(id) = &token.value {
                id.eq_ignore_ascii_case(word)
            } else {
                false
            }
        })
        .labelled(word)
}

/// Matches one or more linebreaks, or the end of input.
pub(crate) fn line_end<'a>()
-> impl Parser<'a, &'a [Token], (), PError<'a>> + Clone {
    linebreak().or(chumsky::prelude::end())
}

pub(crate) fn linebreak<'a>()
-> impl Parser<'a, &'a [Token], (), PError<'a>> + Clone {
    symbol(TokenValue::Linebreak).repeated().at_least(1)
}

pub(crate) fn symbol<'a>(
    value: TokenValue,
) -> impl Parser<'a, &'a [Token], Token, PError<'a>> + Clone {
    let name = value.name();
    chumsky::prelude::any()
        .filter(move |token: &Token| token.value == value)
        .labelled(name)
}

//===========================================================================//

/// Splits `source` into tokens, collecting every lexical error.
pub(crate) fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for result in TokenLexer::new(source) {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => errors.push(error),
        }
    }
    if errors.is_empty() { Ok(tokens) } else { Err(errors) }
}

/// Runs `parser` over `tokens`, translating token-index error spans back
/// into source spans.
pub(crate) fn parse_tokens<'a, T>(
    parser: impl Parser<'a, &'a [Token], T, PError<'a>>,
    tokens: &'a [Token],
) -> ParseResult<T> {
    parser.parse(tokens).into_result().map_err(|errors| {
        errors
            .into_iter()
            .map(|error| {
                let index = error.span().start;
                let span = if index < tokens.len() {
                    tokens[index].span
                } else if let Some(last) = tokens.last() {
                    last.span.end_span()
                } else {
                    SrcSpan::from_byte_range(0..0)
                };
                ParseError::new(span, error_message(&error))
            })
            .collect()
    })
}

fn error_message(error: &Rich<'_, Token>) -> String {
    if let RichReason::Custom(message) = error.reason()
        && !message.is_empty()
    {
        return message.clone();
    }
    match error.found() {
        Some(token) => format!("unexpected {}", token.value.name()),
        None => "unexpected end of input".to_string(),
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{keyword, line_end, parse_tokens, symbol, tokenize};
    use crate::parse::{SrcSpan, TokenValue};
    use chumsky::Parser;

    #[test]
    fn keywords_ignore_case() {
        let tokens = tokenize("Entry").unwrap();
        assert!(parse_tokens(keyword("ENTRY"), &tokens).is_ok());
        let tokens = tokenize("ENTRYWAY").unwrap();
        assert!(parse_tokens(keyword("ENTRY"), &tokens).is_err());
    }

    #[test]
    fn line_end_accepts_end_of_input() {
        let tokens = tokenize("x").unwrap();
        let parser = keyword("x").then_ignore(line_end());
        assert!(parse_tokens(parser, &tokens).is_ok());
        let tokens = tokenize("x\n\n").unwrap();
        let parser = keyword("x").then_ignore(line_end());
        assert!(parse_tokens(parser, &tokens).is_ok());
    }

    #[test]
    fn error_spans_map_to_source() {
        let tokens = tokenize("GFX 12").unwrap();
        let parser = keyword("GFX").then(symbol(TokenValue::Linebreak));
        let errors = parse_tokens(parser, &tokens).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span, SrcSpan::from_byte_range(4..6));
        assert_eq!(errors[0].message, "unexpected integer literal");

        let tokens = tokenize("GFX").unwrap();
        let parser = keyword("GFX").then(symbol(TokenValue::Linebreak));
        let errors = parse_tokens(parser, &tokens).unwrap_err();
        assert_eq!(errors[0].span, SrcSpan::from_byte_range(3..3));
        assert_eq!(errors[0].message, "unexpected end of input");
    }

    #[test]
    fn lexical_errors_are_collected() {
        let errors = tokenize("` ENTRY ~").unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}

//===========================================================================//
