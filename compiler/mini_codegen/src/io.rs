//! `read` / `write` lowering onto `scanf` / `printf`.

use mini_ir::{ExprId, Ident, IoFormat, Line, PrimType, StringId, Ty};

use crate::builder::Builder;
use crate::module::{
    FMT_DOUBLE_PRINT, FMT_DOUBLE_SCAN, FMT_FALSE_PRINT, FMT_HEX_PRINT, FMT_HEX_SCAN,
    FMT_INT_PRINT, FMT_INT_SCAN, FMT_TRUE_PRINT,
};
use crate::CodegenError;

impl Builder<'_> {
    pub(crate) fn compile_write(
        &mut self,
        value: ExprId,
        format: IoFormat,
        line: Line,
    ) -> Result<(), CodegenError> {
        let ty = self.type_of(value)?;
        let value = self.compile_expr(value)?;
        match (format, ty) {
            (IoFormat::Plain, Ty::Int) => self.printf(FMT_INT_PRINT, &format!("i32 {value}")),
            (IoFormat::Hex, Ty::Int) => self.printf(FMT_HEX_PRINT, &format!("i32 {value}")),
            (IoFormat::Plain, Ty::Double) => {
                self.printf(FMT_DOUBLE_PRINT, &format!("double {value}"));
            }
            (IoFormat::Plain, Ty::Bool) => {
                let text = self.assign_register(format_args!(
                    "select i1 {value}, ptr @{FMT_TRUE_PRINT}, ptr @{FMT_FALSE_PRINT}"
                ));
                self.out
                    .instr(format_args!("call i32 (ptr, ...) @printf(ptr {text})"));
            }
            _ => {
                return Err(CodegenError::InvalidIoType {
                    format: format_name("write", format),
                    ty,
                    line,
                })
            }
        }
        Ok(())
    }

    /// Print a pooled literal as the format string itself.
    pub(crate) fn compile_write_string(&mut self, id: StringId) {
        let program = self.program;
        let constant = program.strings.get(id);
        self.out.instr(format_args!(
            "call i32 (ptr, ...) @printf(ptr getelementptr inbounds ([{} x i8], ptr @{}, i32 0, i32 0))",
            constant.len_with_nul(),
            constant.name
        ));
    }

    /// `scanf` straight into the variable's slot.
    pub(crate) fn compile_read(
        &mut self,
        target: &Ident,
        format: IoFormat,
    ) -> Result<(), CodegenError> {
        let (slot, prim) = self.storage(target)?;
        let fmt = match (format, prim) {
            (IoFormat::Plain, PrimType::Int) => FMT_INT_SCAN,
            (IoFormat::Hex, PrimType::Int) => FMT_HEX_SCAN,
            (IoFormat::Plain, PrimType::Double) => FMT_DOUBLE_SCAN,
            _ => {
                return Err(CodegenError::InvalidIoType {
                    format: format_name("read", format),
                    ty: prim.ty(),
                    line: target.line,
                })
            }
        };
        self.out.instr(format_args!(
            "call i32 (ptr, ...) @scanf(ptr @{fmt}, ptr {slot})"
        ));
        Ok(())
    }

    fn printf(&mut self, fmt: &str, argument: &str) {
        self.out.instr(format_args!(
            "call i32 (ptr, ...) @printf(ptr @{fmt}, {argument})"
        ));
    }
}

fn format_name(direction: &'static str, format: IoFormat) -> &'static str {
    match (direction, format) {
        ("read", IoFormat::Hex) => "hex read",
        ("read", IoFormat::Plain) => "read",
        (_, IoFormat::Hex) => "hex write",
        (_, IoFormat::Plain) => "write",
    }
}
