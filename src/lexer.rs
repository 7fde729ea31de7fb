use crate::ast::Token;

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Current cursor offset, used by the parser for error messages.
    pub fn position(&self) -> usize {
        self.position
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> Token {
        let mut number = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Number(number)
    }

    /// Consume and classify exactly one token.
    ///
    /// Never fails: anything unrecognized is consumed and returned as
    /// [`Token::Undefined`], leaving the rejection to the parser. Once the
    /// input is exhausted every further call returns [`Token::Eof`].
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        match self.current_char() {
            None => Token::Eof,
            Some('^') => {
                self.advance();
                Token::Caret
            }
            Some('*') => {
                self.advance();
                Token::Star
            }
            Some('/') => {
                self.advance();
                Token::Slash
            }
            Some('+') => {
                self.advance();
                Token::Plus
            }
            Some('-') => {
                self.advance();
                Token::Minus
            }
            Some('(') => {
                self.advance();
                Token::LParen
            }
            Some(')') => {
                self.advance();
                Token::RParen
            }
            Some('=') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::EqEq
                } else {
                    // No single-character `=` operator in this grammar.
                    self.advance();
                    Token::Undefined('=')
                }
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::NotEq
                } else {
                    self.advance();
                    Token::Undefined('!')
                }
            }
            Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::GtEq
                } else {
                    self.advance();
                    Token::Gt
                }
            }
            Some('<') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::LtEq
                } else {
                    self.advance();
                    Token::Lt
                }
            }
            Some('&') => {
                if self.peek_char(1) == Some('&') {
                    self.advance();
                    self.advance();
                    Token::AndAnd
                } else {
                    self.advance();
                    Token::Undefined('&')
                }
            }
            Some('|') => {
                if self.peek_char(1) == Some('|') {
                    self.advance();
                    self.advance();
                    Token::OrOr
                } else {
                    self.advance();
                    Token::Undefined('|')
                }
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            Some(ch) => {
                self.advance();
                Token::Undefined(ch)
            }
        }
    }
}

#[test]
fn test_two_char_operators() {
    let mut lexer = Lexer::new("== != >= <= && ||");
    assert_eq!(lexer.next_token(), Token::EqEq);
    assert_eq!(lexer.next_token(), Token::NotEq);
    assert_eq!(lexer.next_token(), Token::GtEq);
    assert_eq!(lexer.next_token(), Token::LtEq);
    assert_eq!(lexer.next_token(), Token::AndAnd);
    assert_eq!(lexer.next_token(), Token::OrOr);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_expression() {
    let mut lexer = Lexer::new("(2 + 30) ^ 4");
    assert_eq!(lexer.next_token(), Token::LParen);
    assert_eq!(lexer.next_token(), Token::Number("2".to_string()));
    assert_eq!(lexer.next_token(), Token::Plus);
    assert_eq!(lexer.next_token(), Token::Number("30".to_string()));
    assert_eq!(lexer.next_token(), Token::RParen);
    assert_eq!(lexer.next_token(), Token::Caret);
    assert_eq!(lexer.next_token(), Token::Number("4".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}
