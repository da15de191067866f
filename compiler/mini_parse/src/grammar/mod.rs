//! Grammar productions, one module per syntactic category.

mod decl;
mod expr;
mod stmt;

use mini_ir::{Declaration, StmtId};
use mini_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_, '_> {
    /// `program { decl* instr* }`
    pub(crate) fn parse_root(&mut self) -> (Vec<Declaration>, Vec<StmtId>) {
        if let Err(error) = self.parse_header() {
            self.report(error);
        }

        let declarations = self.parse_declarations();

        let mut body = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            match self.parse_stmt() {
                Ok(stmt) => body.push(stmt),
                Err(error) => self.recover(error),
            }
        }

        match self.expect(&TokenKind::RBrace) {
            Ok(_) => {
                if !self.is_at_end() {
                    let token = self.current();
                    self.report(ParseError::new(
                        token.line,
                        format!("unexpected {} after end of program", token.kind),
                    ));
                }
            }
            Err(error) => self.report(error),
        }

        (declarations, body)
    }

    /// Both header tokens are optional for recovery purposes: whichever is
    /// present is consumed, and a single error covers the pair.
    fn parse_header(&mut self) -> Result<(), ParseError> {
        let program = self.expect(&TokenKind::Program).map(|_| ());
        if program.is_err() && !self.check(&TokenKind::LBrace) {
            return program;
        }
        let brace = self.expect(&TokenKind::LBrace).map(|_| ());
        program.and(brace)
    }
}
