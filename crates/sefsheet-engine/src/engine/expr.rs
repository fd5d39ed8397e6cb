//! Arithmetic expression parsing and evaluation.
//!
//! Evaluates the pure arithmetic language formulas reduce to after reference
//! substitution: numbers, `+ - * /`, unary sign, and parentheses. A
//! hand-written recursive descent parser computes the value directly from the
//! token stream; no code strings are ever synthesized or executed.
//!
//! GRAMMAR:
//!   expression     --> additive
//!   additive       --> multiplicative ( ("+" | "-") multiplicative )*
//!   multiplicative --> unary ( ("*" | "/") unary )*
//!   unary          --> ("-" | "+") unary | primary
//!   primary        --> NUMBER | "(" expression ")"

/// Why an expression failed to produce a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExprError {
    /// Malformed expression: unbalanced parens, dangling operator, empty
    /// sub-expression, bad number literal, trailing tokens.
    Syntax,
    /// Structurally valid, but the value is not a finite real number
    /// (division by zero, overflow).
    NonFinite,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>, ExprError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            b'-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            b'*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            b'/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            b'(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            b')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            b'0'..=b'9' | b'.' => {
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                // Rejects literals like "1.2.3" or a lone ".".
                let value = input[start..i].parse::<f64>().map_err(|_| ExprError::Syntax)?;
                tokens.push(Token::Number(value));
            }
            _ => return Err(ExprError::Syntax),
        }
    }

    Ok(tokens)
}

/// Evaluate an arithmetic expression to a finite number.
pub fn eval_expr(input: &str) -> Result<f64, ExprError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
    };
    let value = parser.additive()?;
    if parser.pos != tokens.len() {
        return Err(ExprError::Syntax);
    }
    finite(value)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn additive(&mut self) -> Result<f64, ExprError> {
        let mut left = self.multiplicative()?;
        loop {
            let value = match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    left + self.multiplicative()?
                }
                Some(Token::Minus) => {
                    self.advance();
                    left - self.multiplicative()?
                }
                _ => break,
            };
            left = finite(value)?;
        }
        Ok(left)
    }

    fn multiplicative(&mut self) -> Result<f64, ExprError> {
        let mut left = self.unary()?;
        loop {
            let value = match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    left * self.unary()?
                }
                Some(Token::Slash) => {
                    self.advance();
                    left / self.unary()?
                }
                _ => break,
            };
            left = finite(value)?;
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<f64, ExprError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                Ok(-self.unary()?)
            }
            Some(Token::Plus) => {
                self.advance();
                self.unary()
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, ExprError> {
        match self.peek() {
            Some(Token::Number(n)) => {
                self.advance();
                Ok(n)
            }
            Some(Token::LParen) => {
                self.advance();
                let value = self.additive()?;
                match self.peek() {
                    Some(Token::RParen) => {
                        self.advance();
                        Ok(value)
                    }
                    _ => Err(ExprError::Syntax),
                }
            }
            _ => Err(ExprError::Syntax),
        }
    }
}

fn finite(value: f64) -> Result<f64, ExprError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExprError::NonFinite)
    }
}
