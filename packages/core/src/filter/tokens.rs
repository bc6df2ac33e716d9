//! Token definitions for filter lexical analysis
//!
//! Keywords are not distinguished lexically: `and`, `pr`, `eq`, attribute paths
//! and bare literals all arrive as [`Token::Word`] and the parser interprets them
//! by position, since an attribute may legitimately be called `not` or `pr`.

/// Tokens for filter expression lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Left parenthesis token (()
    LeftParen,
    /// Right parenthesis token ())
    RightParen,
    /// Left bracket token ([)
    LeftBracket,
    /// Right bracket token (])
    RightBracket,
    /// Double-quoted string, kept verbatim including quotes and escapes
    String(String),
    /// Run of non-delimiter characters: keyword, attribute path, number or JSON keyword
    Word(String),
    /// End of input
    EOF,
}

impl Token {
    /// The word text, for `Word` tokens
    #[inline]
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(word),
            _ => None,
        }
    }

    /// Check if token is the given keyword, ignoring ASCII case
    #[inline]
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.as_word()
            .is_some_and(|word| word.eq_ignore_ascii_case(keyword))
    }

    /// Check if token can stand as a comparison value
    #[inline]
    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(self, Token::String(_) | Token::Word(_))
    }

    /// Human-readable rendering for diagnostics
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Token::LeftParen => "'('".to_string(),
            Token::RightParen => "')'".to_string(),
            Token::LeftBracket => "'['".to_string(),
            Token::RightBracket => "']'".to_string(),
            Token::String(raw) | Token::Word(raw) => format!("'{raw}'"),
            Token::EOF => "end of input".to_string(),
        }
    }
}

/// A token together with the character offset where it starts
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub position: usize,
}
