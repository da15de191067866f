//! Module layout: constants, external declarations, the `main` routine.

use mini_ir::{escape_bytes, StmtId};
use tracing::trace;

use crate::builder::{storage_name, Builder};
use crate::names::ENTRY_LABEL;
use crate::types::prim_ir_type;
use crate::CodegenError;

/// Format strings handed to `printf` / `scanf`, in emission order.
pub(crate) const FORMAT_CONSTANTS: [(&str, &str); 8] = [
    (FMT_INT_PRINT, "%d"),
    (FMT_HEX_PRINT, "0X%X"),
    (FMT_DOUBLE_PRINT, "%f"),
    (FMT_TRUE_PRINT, "True"),
    (FMT_FALSE_PRINT, "False"),
    (FMT_INT_SCAN, "%d"),
    (FMT_HEX_SCAN, "%X"),
    (FMT_DOUBLE_SCAN, "%lf"),
];

pub(crate) const FMT_INT_PRINT: &str = "fmt_int_print";
pub(crate) const FMT_HEX_PRINT: &str = "fmt_hex_print";
pub(crate) const FMT_DOUBLE_PRINT: &str = "fmt_double_print";
pub(crate) const FMT_TRUE_PRINT: &str = "fmt_true_print";
pub(crate) const FMT_FALSE_PRINT: &str = "fmt_false_print";
pub(crate) const FMT_INT_SCAN: &str = "fmt_int_scan";
pub(crate) const FMT_HEX_SCAN: &str = "fmt_hex_scan";
pub(crate) const FMT_DOUBLE_SCAN: &str = "fmt_double_scan";

impl Builder<'_> {
    pub(crate) fn emit_module(&mut self) -> Result<(), CodegenError> {
        self.emit_constants();
        self.out.blank();
        self.out.line("declare i32 @printf(ptr, ...)");
        self.out.line("declare i32 @scanf(ptr, ...)");
        self.out.blank();
        self.emit_main()
    }

    fn emit_constants(&mut self) {
        for (name, text) in FORMAT_CONSTANTS {
            self.emit_constant(name, text.as_bytes());
        }
        let program = self.program;
        for constant in program.strings.iter() {
            trace!(name = %constant.name, len = constant.len(), "string constant");
            self.emit_constant(&constant.name, &constant.bytes);
        }
    }

    /// `@name = private unnamed_addr constant [N x i8] c"..."`, N counting
    /// the terminator.
    fn emit_constant(&mut self, name: &str, bytes: &[u8]) {
        self.out.line(format!(
            "@{name} = private unnamed_addr constant [{} x i8] c\"{}\"",
            bytes.len() + 1,
            escape_bytes(bytes)
        ));
    }

    fn emit_main(&mut self) -> Result<(), CodegenError> {
        let program = self.program;
        self.out.line("define i32 @main() {");
        self.start_block(ENTRY_LABEL);
        for decl in program.symbols.iter() {
            self.out.instr(format_args!(
                "{} = alloca {}",
                storage_name(&decl.name),
                prim_ir_type(decl.ty)
            ));
        }
        self.compile_body(&program.body)?;
        self.out.instr("ret i32 0");
        self.out.line("}");
        Ok(())
    }

    pub(crate) fn compile_body(&mut self, body: &[StmtId]) -> Result<(), CodegenError> {
        for &stmt in body {
            self.compile_stmt(stmt)?;
        }
        Ok(())
    }
}
