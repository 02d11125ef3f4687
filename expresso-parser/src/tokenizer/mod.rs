pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns a lexer over the source, yielding one token kind at a time.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Tokenizes the whole source up front, so the parser can move its cursor back freely.
///
/// Characters the tokenizer does not recognize become [`TokenKind::Unrecognized`] tokens, which no
/// grammar rule accepts, so they are reported by the parser with a proper span.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    tokenize(input)
        .spanned()
        .map(|(result, span)| Token {
            lexeme: &input[span.clone()],
            span,
            kind: result.unwrap_or(TokenKind::Unrecognized),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn complex_expr() {
        compare_tokens(
            "3.25*(foo\t+Bar)\n- 2",
            [
                (TokenKind::Float, "3.25"),
                (TokenKind::Mul, "*"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "foo"),
                (TokenKind::Whitespace, "\t"),
                (TokenKind::Add, "+"),
                (TokenKind::Name, "Bar"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, "\n"),
                (TokenKind::Unrecognized, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn names_do_not_absorb_digits() {
        compare_tokens(
            "x2",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn complete_keeps_spans() {
        let tokens = tokenize_complete("ab * 10");
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![0..2, 2..3, 3..4, 4..5, 5..7]);
        assert!(tokens[1].is_whitespace());
    }
}
