//! Instructions.

use mini_ir::{ExprId, IoFormat, StmtId};
use mini_lexer::TokenKind;
use mini_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_, '_> {
    pub(super) fn parse_stmt(&mut self) -> Result<StmtId, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<StmtId, ParseError> {
        match self.current_kind() {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Read => self.parse_read(),
            TokenKind::Write => self.parse_write(),
            TokenKind::Return => {
                let line = self.advance().line;
                self.expect(&TokenKind::Semicolon)?;
                Ok(self.builder.return_stmt(line))
            }
            _ => {
                let line = self.current_line();
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon)?;
                Ok(self.builder.expr_stmt(line, expr))
            }
        }
    }

    /// `{ instr* }`. Errors inside the block are recovered here so the
    /// block itself survives.
    fn parse_block(&mut self) -> Result<StmtId, ParseError> {
        let line = self.advance().line;
        let mut body = Vec::new();
        loop {
            if self.eat(&TokenKind::RBrace) {
                break;
            }
            if self.is_at_end() {
                return Err(ParseError::unexpected(self.current(), "'}'"));
            }
            match self.parse_stmt() {
                Ok(stmt) => body.push(stmt),
                Err(error) => self.recover(error),
            }
        }
        Ok(self.builder.block(line, body))
    }

    fn parse_if(&mut self) -> Result<StmtId, ParseError> {
        let line = self.advance().line;
        let cond = self.parse_condition()?;
        let then_branch = self.parse_stmt()?;
        let else_branch = if self.eat(&TokenKind::Else) {
            Some(self.parse_stmt()?)
        } else {
            None
        };
        Ok(self.builder.if_stmt(line, cond, then_branch, else_branch))
    }

    fn parse_while(&mut self) -> Result<StmtId, ParseError> {
        let line = self.advance().line;
        let cond = self.parse_condition()?;
        let body = self.parse_stmt()?;
        Ok(self.builder.while_stmt(line, cond, body))
    }

    /// `( expr )`
    fn parse_condition(&mut self) -> Result<ExprId, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;
        Ok(cond)
    }

    /// `read ident [, hex];`
    fn parse_read(&mut self) -> Result<StmtId, ParseError> {
        let line = self.advance().line;
        let target = self.expect_ident()?;
        let format = self.parse_io_format()?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(self.builder.read(line, target, format))
    }

    /// `write expr [, hex];` or `write "text";`
    fn parse_write(&mut self) -> Result<StmtId, ParseError> {
        let line = self.advance().line;

        if let TokenKind::Str(bytes) = self.current_kind() {
            self.advance();
            if self.check(&TokenKind::Comma) {
                return Err(ParseError::new(
                    self.current_line(),
                    "hex format cannot be applied to a string",
                ));
            }
            self.expect(&TokenKind::Semicolon)?;
            return Ok(self.builder.write_string(line, bytes.clone()));
        }

        let value = self.parse_expr()?;
        let format = self.parse_io_format()?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(self.builder.write(line, value, format))
    }

    /// Optional `, hex` suffix.
    fn parse_io_format(&mut self) -> Result<IoFormat, ParseError> {
        if self.eat(&TokenKind::Comma) {
            self.expect(&TokenKind::Hex)?;
            Ok(IoFormat::Hex)
        } else {
            Ok(IoFormat::Plain)
        }
    }
}
