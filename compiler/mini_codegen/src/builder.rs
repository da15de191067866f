//! Generation state shared by all lowering rules.

use mini_ir::{ExprId, ExprTypes, Ident, Line, PrimType, Program, Ty};

use crate::emitter::IrEmitter;
use crate::names::NameAllocator;
use crate::CodegenError;

/// Everything one generation run reads and writes.
///
/// The `impl` blocks are split by concern: statements and branching in
/// `control_flow`, expressions in `operators`, read/write in `io`, module
/// layout in `module`.
pub(crate) struct Builder<'a> {
    pub(crate) program: &'a Program,
    types: &'a ExprTypes,
    pub(crate) names: NameAllocator,
    pub(crate) out: IrEmitter,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(program: &'a Program, types: &'a ExprTypes) -> Self {
        Builder {
            program,
            types,
            names: NameAllocator::new(),
            out: IrEmitter::new(),
        }
    }

    pub(crate) fn finish(self) -> Vec<String> {
        self.out.into_lines()
    }

    /// Checked tag of `id`. Missing tags and sentinels are internal errors.
    pub(crate) fn type_of(&self, id: ExprId) -> Result<Ty, CodegenError> {
        let line = self.program.arena.expr(id).line;
        let ty = self.types.get(id).ok_or(CodegenError::UncheckedExpr {
            index: id.index(),
            line,
        })?;
        if ty.is_sentinel() {
            return Err(CodegenError::SentinelType { ty, line });
        }
        Ok(ty)
    }

    /// Storage slot and declared type of a variable.
    pub(crate) fn storage(&self, ident: &Ident) -> Result<(String, PrimType), CodegenError> {
        self.storage_of(&ident.name, ident.line)
    }

    pub(crate) fn storage_of(
        &self,
        name: &str,
        line: Line,
    ) -> Result<(String, PrimType), CodegenError> {
        let decl = self
            .program
            .symbols
            .lookup(name)
            .ok_or_else(|| CodegenError::UnknownVariable {
                name: name.to_string(),
                line,
            })?;
        Ok((storage_name(&decl.name), decl.ty))
    }

    /// Open a block: emit its label and make it the current one.
    pub(crate) fn start_block(&mut self, label: &str) {
        self.out.label(label);
        self.names.declare_label(label);
    }

    pub(crate) fn br(&mut self, target: &str) {
        self.out.instr(format_args!("br label %{target}"));
    }

    pub(crate) fn cond_br(&mut self, cond: &str, then_label: &str, else_label: &str) {
        self.out.instr(format_args!(
            "br i1 {cond}, label %{then_label}, label %{else_label}"
        ));
    }

    /// Emit `%rN = <rhs>` and return `%rN`.
    pub(crate) fn assign_register(&mut self, rhs: std::fmt::Arguments<'_>) -> String {
        let register = self.names.next_register();
        self.out.instr(format_args!("{register} = {rhs}"));
        register
    }
}

/// Name of the stack slot for a variable.
pub(crate) fn storage_name(variable: &str) -> String {
    format!("%var_{variable}")
}
