use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::sync::LazyLock;

use ahash::AHasher;

use super::token::TokenKind;

type KeywordTable = HashMap<&'static [u8], TokenKind, BuildHasherDefault<AHasher>>;

static KEYWORDS: LazyLock<KeywordTable> = LazyLock::new(|| {
    let mut keywords = KeywordTable::with_capacity_and_hasher(16, Default::default());
    keywords.insert(b"and", TokenKind::And);
    keywords.insert(b"class", TokenKind::Class);
    keywords.insert(b"else", TokenKind::Else);
    keywords.insert(b"false", TokenKind::False);
    keywords.insert(b"for", TokenKind::For);
    keywords.insert(b"fun", TokenKind::Fun);
    keywords.insert(b"if", TokenKind::If);
    keywords.insert(b"nil", TokenKind::Nil);
    keywords.insert(b"or", TokenKind::Or);
    keywords.insert(b"print", TokenKind::Print);
    keywords.insert(b"return", TokenKind::Return);
    keywords.insert(b"super", TokenKind::Super);
    keywords.insert(b"this", TokenKind::This);
    keywords.insert(b"true", TokenKind::True);
    keywords.insert(b"var", TokenKind::Var);
    keywords.insert(b"while", TokenKind::While);
    keywords
});

/// Exact, case-sensitive keyword lookup for a fully scanned identifier.
pub fn keyword(lexeme: &[u8]) -> Option<TokenKind> {
    KEYWORDS.get(lexeme).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words() {
        assert_eq!(keyword(b"while"), Some(TokenKind::While));
        assert_eq!(keyword(b"super"), Some(TokenKind::Super));
        assert_eq!(keyword(b"nil"), Some(TokenKind::Nil));
    }

    #[test]
    fn test_no_partial_or_case_insensitive_match() {
        assert_eq!(keyword(b"whiles"), None);
        assert_eq!(keyword(b"whil"), None);
        assert_eq!(keyword(b"While"), None);
        assert_eq!(keyword(b""), None);
    }
}
