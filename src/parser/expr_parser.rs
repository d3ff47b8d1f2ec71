use super::ast::{AstNode, BinaryOp};
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};
use crate::runtime::Number;

/// Default bound on nesting depth and tree height
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Recursive-descent parser for arithmetic expressions
///
/// ```text
/// expr   := term ( (PLUS | MINUS) term )*
/// term   := factor ( (STAR | SLASH) factor )*
/// factor := NUMBER | LPAREN expr RPAREN | MINUS factor
/// ```
///
/// Unary minus desugars to `0 - factor`.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    /// Current parenthesis / unary minus nesting
    nesting: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a new parser over a token sequence
    pub fn new(mut tokens: Vec<Token>) -> Self {
        // The cursor relies on a terminal END token
        if !tokens.last().is_some_and(Token::is_end) {
            let position = tokens.last().map_or(0, |t| t.position + 1);
            tokens.push(Token::new(TokenKind::End, position));
        }

        Parser {
            tokens,
            current: 0,
            nesting: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth and tree height
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the whole token stream into a single expression tree
    pub fn parse(&mut self) -> Result<AstNode> {
        let (node, _height) = self.parse_expr()?;

        if !self.is_at_end() {
            let token = self.peek();
            return Err(Error::syntax(
                token.position,
                format!("unexpected {} after complete expression", token.kind),
            ));
        }

        Ok(node)
    }

    // Each level returns the node with its height so an operator chain is
    // rejected as soon as it grows past max_depth, before a deep tree exists.

    fn parse_expr(&mut self) -> Result<(AstNode, usize)> {
        let (mut node, mut height) = self.parse_term()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let (right, right_height) = self.parse_term()?;
            height = self.combined_height(height, right_height)?;
            node = AstNode::binary(op, node, right);
        }

        Ok((node, height))
    }

    fn parse_term(&mut self) -> Result<(AstNode, usize)> {
        let (mut node, mut height) = self.parse_factor()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            self.advance();
            let (right, right_height) = self.parse_factor()?;
            height = self.combined_height(height, right_height)?;
            node = AstNode::binary(op, node, right);
        }

        Ok((node, height))
    }

    fn parse_factor(&mut self) -> Result<(AstNode, usize)> {
        let token = self.peek().clone();

        match token.kind {
            TokenKind::Number(n) => {
                self.advance();
                Ok((AstNode::Number(n), 1))
            }
            TokenKind::LeftParen => {
                self.advance();
                self.enter()?;
                let inner = self.parse_expr()?;
                self.consume(TokenKind::RightParen, "')'")?;
                self.nesting -= 1;
                Ok(inner)
            }
            TokenKind::Minus => {
                self.advance();
                self.enter()?;
                let (operand, operand_height) = self.parse_factor()?;
                self.nesting -= 1;
                let height = self.combined_height(1, operand_height)?;
                Ok((
                    AstNode::binary(BinaryOp::Sub, AstNode::Number(Number::Int(0)), operand),
                    height,
                ))
            }
            TokenKind::End => Err(Error::UnexpectedEof {
                position: token.position,
                expected: "a number, '(' or '-'".to_string(),
            }),
            kind => Err(Error::syntax(
                token.position,
                format!("unexpected token {}", kind),
            )),
        }
    }

    /// Height of a binary node over two children, bounded by max_depth
    fn combined_height(&self, left: usize, right: usize) -> Result<usize> {
        let height = left.max(right) + 1;
        if height > self.max_depth {
            return Err(Error::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        Ok(height)
    }

    fn enter(&mut self) -> Result<()> {
        self.nesting += 1;
        if self.nesting > self.max_depth {
            return Err(Error::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.peek().is_end()
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    fn consume(&mut self, kind: TokenKind, expected: &str) -> Result<Token> {
        let token = self.peek();
        if token.kind == kind {
            return Ok(self.advance());
        }

        if token.is_end() {
            Err(Error::UnexpectedEof {
                position: token.position,
                expected: expected.to_string(),
            })
        } else {
            Err(Error::syntax(
                token.position,
                format!("expected {}, found {}", expected, token.kind),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;

    fn parse(source: &str) -> Result<AstNode> {
        let tokens = Scanner::new(source).scan_tokens()?;
        Parser::new(tokens).parse()
    }

    #[test]
    fn test_left_associativity() {
        let ast = parse("1-2-3").unwrap();
        assert_eq!(ast.to_string(), "BinOp(BinOp(1, -, 2), -, 3)");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            parse("2+3*4").unwrap().to_string(),
            "BinOp(2, +, BinOp(3, *, 4))"
        );
        assert_eq!(
            parse("(2+3)*4").unwrap().to_string(),
            "BinOp(BinOp(2, +, 3), *, 4)"
        );
    }

    #[test]
    fn test_unary_minus_desugars() {
        let ast = parse("-(4-2)*(3+1)").unwrap();
        assert_eq!(
            ast.to_string(),
            "BinOp(BinOp(0, -, BinOp(4, -, 2)), *, BinOp(3, +, 1))"
        );
        assert_eq!(parse("--1").unwrap().to_string(), "BinOp(0, -, BinOp(0, -, 1))");
    }

    #[test]
    fn test_unexpected_operator() {
        let err = parse("3 + * 2").unwrap_err();
        assert_eq!(
            err,
            Error::SyntaxError {
                position: 4,
                message: "unexpected token '*'".to_string()
            }
        );
    }

    #[test]
    fn test_trailing_input() {
        let err = parse("(1 + 2) 3").unwrap_err();
        assert!(matches!(err, Error::SyntaxError { position: 8, .. }));
    }

    #[test]
    fn test_unclosed_paren() {
        let err = parse("(1 + 2").unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { position: 6, .. }));
    }

    #[test]
    fn test_wrong_closing_token() {
        let err = parse("(1 + 2(").unwrap_err();
        assert!(matches!(err, Error::SyntaxError { position: 6, .. }));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse("").unwrap_err(),
            Error::UnexpectedEof { position: 0, .. }
        ));
    }

    #[test]
    fn test_missing_end_token_is_tolerated() {
        let tokens = vec![Token::new(TokenKind::Number(Number::Int(4)), 0)];
        assert_eq!(Parser::new(tokens).parse().unwrap(), AstNode::number(4i64));
    }

    #[test]
    fn test_nesting_limit() {
        let source = format!("{}1{}", "(".repeat(10), ")".repeat(10));
        let tokens = Scanner::new(&source).scan_tokens().unwrap();
        let err = Parser::new(tokens).with_max_depth(5).parse().unwrap_err();
        assert_eq!(err, Error::NestingTooDeep { limit: 5 });
    }

    #[test]
    fn test_chain_height_at_limit_is_accepted() {
        let source = vec!["1"; 8].join("+");
        let tokens = Scanner::new(&source).scan_tokens().unwrap();
        let ast = Parser::new(tokens).with_max_depth(8).parse().unwrap();
        assert_eq!(ast.depth(), 8);
    }

    #[test]
    fn test_long_chain_rejected_while_building() {
        let source = format!("{}1", "1+".repeat(200_000));
        assert_eq!(
            parse(&source),
            Err(Error::NestingTooDeep {
                limit: DEFAULT_MAX_DEPTH
            })
        );

        let source = format!("{}1", "2*".repeat(200_000));
        assert_eq!(
            parse(&source),
            Err(Error::NestingTooDeep {
                limit: DEFAULT_MAX_DEPTH
            })
        );
    }

    #[test]
    fn test_long_unary_chain_rejected() {
        let source = format!("{}1", "-".repeat(200_000));
        assert_eq!(
            parse(&source),
            Err(Error::NestingTooDeep {
                limit: DEFAULT_MAX_DEPTH
            })
        );
    }

    #[test]
    fn test_chain_height_limit() {
        let source = vec!["1"; 20].join("+");
        let tokens = Scanner::new(&source).scan_tokens().unwrap();
        let err = Parser::new(tokens).with_max_depth(8).parse().unwrap_err();
        assert_eq!(err, Error::NestingTooDeep { limit: 8 });
    }
}
