use super::types::{ParseError, SrcSpan};
use logos::{self, Logos};

//===========================================================================//

#[derive(Clone, Debug, Default, PartialEq)]
enum LexerError {
    #[default]
    InvalidToken,
    IntOverflow,
}

//===========================================================================//

fn dollar_hex_literal_callback(
    lexer: &mut logos::Lexer<TokenKind>,
) -> Result<u32, LexerError> {
    int_literal(&lexer.slice()[1..], 16)
}

fn c_hex_literal_callback(
    lexer: &mut logos::Lexer<TokenKind>,
) -> Result<u32, LexerError> {
    int_literal(&lexer.slice()[2..], 16)
}

fn decimal_literal_callback(
    lexer: &mut logos::Lexer<TokenKind>,
) -> Result<u32, LexerError> {
    int_literal(lexer.slice(), 10)
}

fn int_literal(digits: &str, radix: u32) -> Result<u32, LexerError> {
    u32::from_str_radix(digits, radix).map_err(|_| LexerError::IntOverflow)
}

#[derive(Debug, Eq, Logos, PartialEq)]
#[logos(error = LexerError)]
#[logos(skip r"[ \t\r]+")] // whitespace
#[logos(skip r";[^\n]*")] // comments
enum TokenKind {
    #[regex(r"[_A-Za-z][_A-Za-z0-9]*")]
    Identifier,
    #[regex(r"\$[0-9A-Fa-f]+", dollar_hex_literal_callback)]
    #[regex(r"0[xX][0-9A-Fa-f]+", c_hex_literal_callback)]
    #[regex(r"[0-9]+", decimal_literal_callback)]
    IntLiteral(u32),
    #[token("\n")]
    Linebreak,
}

impl TokenKind {
    fn into_token(self, lexer: &logos::Lexer<TokenKind>) -> Token {
        let span = SrcSpan::from_byte_range(lexer.span());
        let value = match self {
            TokenKind::Identifier => {
                TokenValue::Identifier(lexer.slice().to_string())
            }
            TokenKind::IntLiteral(int) => TokenValue::IntLiteral(int),
            TokenKind::Linebreak => TokenValue::Linebreak,
        };
        Token { span, value }
    }
}

//===========================================================================//

/// The contents of a single lexical token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenValue {
    /// An identifier or keyword.
    Identifier(String),
    /// An integer literal.
    IntLiteral(u32),
    /// A linebreak.
    Linebreak,
}

impl TokenValue {
    /// Returns the human-readable name for this kind of token.
    pub fn name(&self) -> &'static str {
        match &self {
            TokenValue::Identifier(_) => "identifier",
            TokenValue::IntLiteral(_) => "integer literal",
            TokenValue::Linebreak => "linebreak",
        }
    }
}

//===========================================================================//

/// A single lexical token, including location information.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// The location in the file of this token.
    pub span: SrcSpan,
    /// The contents of the token.
    pub value: TokenValue,
}

//===========================================================================//

/// A lexer for tokenizing an input file.
pub struct TokenLexer<'a> {
    lexer: logos::Lexer<'a, TokenKind>,
}

impl<'a> TokenLexer<'a> {
    /// Constructs a new lexer in its initial state.
    pub fn new(input: &'a str) -> TokenLexer<'a> {
        TokenLexer { lexer: TokenKind::lexer(input) }
    }
}

impl Iterator for TokenLexer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Result<Token, ParseError>> {
        let result = self.lexer.next()?;
        let span = SrcSpan::from_byte_range(self.lexer.span());
        Some(match result {
            Ok(kind) => Ok(kind.into_token(&self.lexer)),
            Err(LexerError::InvalidToken) => {
                let message = format!(
                    "invalid character: {}",
                    self.lexer.slice().escape_default()
                );
                Err(ParseError::new(span, message))
            }
            Err(LexerError::IntOverflow) => {
                let message = format!(
                    "integer literal too large: {}",
                    self.lexer.slice()
                );
                Err(ParseError::new(span, message))
            }
        })
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{ParseError, SrcSpan, Token, TokenLexer, TokenValue};

    fn token(start: usize, end: usize, value: TokenValue) -> Token {
        Token { span: SrcSpan::from_byte_range(start..end), value }
    }

    fn read_all(input: &str) -> Vec<Token> {
        TokenLexer::new(input).collect::<Result<_, _>>().unwrap()
    }

    fn expect_error(input: &str) -> ParseError {
        for result in TokenLexer::new(input) {
            if let Err(error) = result {
                return error;
            }
        }
        panic!("no error occurred");
    }

    #[test]
    fn empty_input() {
        assert_eq!(read_all(""), vec![]);
    }

    #[test]
    fn comment() {
        assert_eq!(read_all(";;; Hello, world!"), vec![]);
        assert_eq!(read_all(";\n"), vec![token(1, 2, TokenValue::Linebreak)]);
    }

    #[test]
    fn int_literals() {
        assert_eq!(
            read_all("$F00d 0x1F 42"),
            vec![
                token(0, 5, TokenValue::IntLiteral(0xf00d)),
                token(6, 10, TokenValue::IntLiteral(0x1f)),
                token(11, 13, TokenValue::IntLiteral(42)),
            ]
        );
    }

    #[test]
    fn directive_line() {
        assert_eq!(
            read_all("gfx $FE00 ; sprites\r\n"),
            vec![
                token(0, 3, TokenValue::Identifier("gfx".to_string())),
                token(4, 9, TokenValue::IntLiteral(0xfe00)),
                token(20, 21, TokenValue::Linebreak),
            ]
        );
    }

    #[test]
    fn int_overflow() {
        let error = expect_error("ENTRY $123456789");
        assert_eq!(error.span, SrcSpan::from_byte_range(6..16));
        assert_eq!(error.message, "integer literal too large: $123456789");
    }

    #[test]
    fn invalid_token() {
        let error = expect_error(" `foo\n");
        assert_eq!(error.span, SrcSpan::from_byte_range(1..2));
        assert_eq!(error.message, "invalid character: `");
    }
}

//===========================================================================//
