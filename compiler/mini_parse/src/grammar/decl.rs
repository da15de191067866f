//! Declarations: `int a, b;`

use mini_ir::{AstBuilder, Declaration, PrimType};
use mini_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_, '_> {
    /// All leading declarations. Stops at the first token that cannot start
    /// one.
    pub(super) fn parse_declarations(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        while let Some(ty) = self.match_type_keyword() {
            if let Err(error) = self.parse_declaration(ty, &mut declarations) {
                self.recover(error);
            }
        }
        declarations
    }

    /// One declaration statement. Names parsed before an error are kept.
    fn parse_declaration(
        &mut self,
        ty: PrimType,
        declarations: &mut Vec<Declaration>,
    ) -> Result<(), ParseError> {
        self.advance();
        loop {
            let name = self.expect_ident()?;
            declarations.push(AstBuilder::declaration(name.line, name.name, ty));
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::Semicolon)?;
        Ok(())
    }

    fn match_type_keyword(&self) -> Option<PrimType> {
        match self.current_kind() {
            TokenKind::IntType => Some(PrimType::Int),
            TokenKind::DoubleType => Some(PrimType::Double),
            TokenKind::BoolType => Some(PrimType::Bool),
            _ => None,
        }
    }
}
