//! Expressions, by precedence level (lowest first):
//!
//! 1. assignment, right-associative, identifier target
//! 2. `||` `&&` (one level, left-associative)
//! 3. `==` `!=` `<` `<=` `>` `>=`
//! 4. `+` `-`
//! 5. `*` `/`
//! 6. `|` `&`
//! 7. prefix `-` `!` `~` `(int)` `(double)`
//! 8. primaries

use mini_ir::{BinaryOp, ExprId, Ident, UnaryOp};
use mini_lexer::TokenKind;
use mini_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_, '_> {
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    fn parse_assignment(&mut self) -> Result<ExprId, ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            if matches!(self.cursor.peek(1).kind, TokenKind::Assign) {
                let target = Ident {
                    name: name.clone(),
                    line: self.advance().line,
                };
                let line = self.advance().line;
                let value = self.parse_expr()?;
                return Ok(self.builder.assign(line, target, value));
            }
        }

        let expr = self.parse_logical()?;
        if self.check(&TokenKind::Assign) {
            return Err(ParseError::new(
                self.current_line(),
                "left-hand side of assignment must be a variable",
            ));
        }
        Ok(expr)
    }

    fn parse_logical(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_relational()?;
        while let Some(op) = self.match_logical_op() {
            let line = self.advance().line;
            let right = self.parse_relational()?;
            left = self.builder.binary(line, op, left, right);
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.match_relational_op() {
            let line = self.advance().line;
            let right = self.parse_additive()?;
            left = self.builder.binary(line, op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            let line = self.advance().line;
            let right = self.parse_multiplicative()?;
            left = self.builder.binary(line, op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_bitwise()?;
        while let Some(op) = self.match_multiplicative_op() {
            let line = self.advance().line;
            let right = self.parse_bitwise()?;
            left = self.builder.binary(line, op, left, right);
        }
        Ok(left)
    }

    fn parse_bitwise(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_bitwise_op() {
            let line = self.advance().line;
            let right = self.parse_unary()?;
            left = self.builder.binary(line, op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_primary();
        };
        let line = self.advance().line;
        if matches!(op, UnaryOp::CastInt | UnaryOp::CastDouble) {
            // `(` already consumed; skip the type keyword and `)`.
            self.advance();
            self.advance();
        }
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        Ok(self.builder.unary(line, op, operand))
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.current();
        let line = token.line;
        let expr = match &token.kind {
            TokenKind::Ident(name) => self.builder.ident(line, name.clone()),
            TokenKind::Int(value) => self.builder.int(line, *value),
            TokenKind::Real(value) => self.builder.double(line, *value),
            TokenKind::True => self.builder.bool(line, true),
            TokenKind::False => self.builder.bool(line, false),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                return Ok(inner);
            }
            _ => return Err(ParseError::unexpected(token, "expression")),
        };
        self.advance();
        Ok(expr)
    }

    // Operator matching

    fn match_logical_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::PipePipe => Some(BinaryOp::Or),
            TokenKind::AmpAmp => Some(BinaryOp::And),
            _ => None,
        }
    }

    fn match_relational_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    fn match_bitwise_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Pipe => Some(BinaryOp::BitOr),
            TokenKind::Amp => Some(BinaryOp::BitAnd),
            _ => None,
        }
    }

    /// Prefix operators, including the `(int)` / `(double)` casts, which
    /// are recognized by looking two tokens past the `(`.
    fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            TokenKind::LParen if self.cursor.peek(2).kind == TokenKind::RParen => {
                match self.cursor.peek(1).kind {
                    TokenKind::IntType => Some(UnaryOp::CastInt),
                    TokenKind::DoubleType => Some(UnaryOp::CastDouble),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
