use std::{fmt, rc::Rc};

use logos::Logos;

/// The kind of a lexical token.
///
/// Literal text (identifier names, digits, string contents) is not stored in
/// the kind; it travels in [`Token::literal`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Identifier tokens; variable or function names such as `x` or `to_string`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// Double-quoted string literal. Strings have no escapes and may span lines.
    #[token("\"", lex_string)]
    Str,
    /// `# comment until the end of the line`
    #[token("#", lex_comment)]
    Comment,
    /// `let`
    #[token("let")]
    Let,
    /// `return`
    #[token("return")]
    Return,
    /// `fun`
    #[token("fun")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Eq,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// End of input. Produced by [`Lexer`], never matched by logos.
    Eof,
    /// Unrecognized characters or an unterminated string.
    Illegal,
}

/// Consumes the body of a string literal up to and including the closing
/// quote. An unterminated string is a lexing error spanning the rest of the
/// input.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> Option<()> {
    let Some(end) = lex.remainder().find('"') else {
        lex.bump(lex.remainder().len());
        return None;
    };
    lex.bump(end + 1);
    Some(())
}

/// Consumes a comment up to, but not including, the end of the line.
fn lex_comment(lex: &mut logos::Lexer<TokenKind>) {
    let rest = lex.remainder();
    let end = rest.find(['\n', '\r']).unwrap_or(rest.len());
    lex.bump(end);
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Str => "STRING",
            Self::Comment => "COMMENT",
            Self::Let => "LET",
            Self::Return => "RETURN",
            Self::Function => "FUNCTION",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Nil => "NIL",
            Self::Assign => "=",
            Self::Eq => "==",
            Self::Bang => "!",
            Self::NotEq => "!=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
        };
        write!(f, "{name}")
    }
}

/// Where a token starts: the line (1-based) and the name of the source it
/// came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// The source line, starting at 1.
    pub line: usize,
    /// The file name (or a label such as `repl`) of the source.
    pub file: Rc<str>,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The source text of the token. For strings this is the text between the
    /// quotes; for `EOF` it is empty.
    pub literal:  String,
    /// Where the token starts.
    pub position: Position,
}

/// A pull-based source of tokens.
///
/// Implementors must keep returning a [`TokenKind::Eof`] token once the input
/// is exhausted.
pub trait TokenStream {
    /// Returns the next token.
    fn next_token(&mut self) -> Token;
}

/// Turns source text into [`Token`]s, tracking line numbers.
///
/// # Example
/// ```
/// use lainoa::interpreter::lexer::{Lexer, TokenKind, TokenStream};
///
/// let mut lexer = Lexer::new("let x = 5;", "example.ln");
/// let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
///                                 let token = lexer.next_token();
///                                 (token.kind != TokenKind::Eof).then_some(token.kind)
///                             }).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let, TokenKind::Ident, TokenKind::Assign, TokenKind::Int,
///             TokenKind::Semicolon]);
/// ```
pub struct Lexer<'source> {
    inner:  logos::Lexer<'source, TokenKind>,
    source: &'source str,
    file:   Rc<str>,
    line:   usize,
    cursor: usize,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over `source`; `file` names the source in positions.
    #[must_use]
    pub fn new(source: &'source str, file: &str) -> Self {
        Self { inner: TokenKind::lexer(source),
               source,
               file: Rc::from(file),
               line: 1,
               cursor: 0 }
    }

    /// Moves the line counter forward to byte offset `offset`.
    fn advance_to(&mut self, offset: usize) {
        if offset > self.cursor {
            self.line += self.source[self.cursor..offset].matches('\n').count();
            self.cursor = offset;
        }
    }

    fn position(&self) -> Position {
        Position { line: self.line,
                    file: Rc::clone(&self.file), }
    }
}

impl TokenStream for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            self.advance_to(self.source.len());
            return Token { kind:     TokenKind::Eof,
                           literal:  String::new(),
                           position: self.position(), };
        };

        let start = self.inner.span().start;
        self.advance_to(start);
        let position = self.position();
        let slice = self.inner.slice();

        let (kind, literal) = match result {
            Ok(TokenKind::Str) => (TokenKind::Str, &slice[1..slice.len() - 1]),
            Ok(TokenKind::Comment) => (TokenKind::Comment, slice[1..].trim()),
            Ok(kind) => (kind, slice),
            Err(()) => (TokenKind::Illegal, slice),
        };

        Token { kind,
                literal: literal.to_string(),
                position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source, "test.ln");
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn operators_and_keywords() {
        let kinds: Vec<_> = lex("let add = fun(a, b) { return a + b; }; a == b != !c < d > e")
            .into_iter()
            .map(|t| t.kind)
            .collect();

        use TokenKind::*;
        assert_eq!(kinds,
                   [Let, Ident, Assign, Function, LParen, Ident, Comma, Ident, RParen, LBrace,
                    Return, Ident, Plus, Ident, Semicolon, RBrace, Semicolon, Ident, Eq, Ident,
                    NotEq, Bang, Ident, Lt, Ident, Gt, Ident]);
    }

    #[test]
    fn literals_carry_their_text() {
        let tokens = lex(r#"to_string(42) "hello world" [nil, true, false]"#);

        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].literal, "to_string");
        assert_eq!(tokens[2].kind, TokenKind::Int);
        assert_eq!(tokens[2].literal, "42");
        assert_eq!(tokens[4].kind, TokenKind::Str);
        assert_eq!(tokens[4].literal, "hello world");
        assert_eq!(tokens[6].kind, TokenKind::Nil);
        assert_eq!(tokens[8].kind, TokenKind::True);
        assert_eq!(tokens[10].kind, TokenKind::False);
    }

    #[test]
    fn comments_become_tokens() {
        let tokens = lex("1 # the rest is ignored\n2");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Comment);
        assert_eq!(tokens[1].literal, "the rest is ignored");
        assert_eq!(tokens[2].literal, "2");
    }

    #[test]
    fn tracks_lines_across_newlines_and_strings() {
        let tokens = lex("a\n\"multi\nline\"\nb");

        assert_eq!(tokens[0].position.line, 1);
        assert_eq!(tokens[1].position.line, 2);
        assert_eq!(tokens[2].position.line, 4);
        assert_eq!(&*tokens[2].position.file, "test.ln");
    }

    #[test]
    fn unknown_characters_are_illegal() {
        let tokens = lex("1 @ 2");

        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].literal, "@");
    }

    #[test]
    fn unterminated_string_swallows_the_rest() {
        let tokens = lex("let s = \"abc def");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3].kind, TokenKind::Illegal);
        assert_eq!(tokens[3].literal, "\"abc def");
    }

    #[test]
    fn eof_repeats() {
        let mut lexer = Lexer::new("x", "test.ln");
        lexer.next_token();

        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}
