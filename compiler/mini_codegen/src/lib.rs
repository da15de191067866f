//! Textual LLVM IR generation for MINI.
//!
//! [`generate`] walks a type-checked [`Program`] once and returns the IR as
//! a list of lines, in this order:
//!
//! 1. format-string constants, then one constant per pooled string literal
//! 2. `printf` / `scanf` declarations
//! 3. `define i32 @main()` with its `entry` block
//! 4. one `alloca` per declared variable
//! 5. the lowered instructions
//! 6. the closing `ret i32 0`
//!
//! Generation assumes the type checker accepted the program. Anything that
//! contradicts that (an untyped node, a sentinel type, an operator applied
//! to types it has no lowering for) stops generation with a
//! [`CodegenError`] and no output.
//!
//! Pointers are opaque (`ptr`). Registers are `%r<n>` and labels `L<n>`,
//! both numbered from 1 in allocation order.

mod builder;
mod control_flow;
mod emitter;
mod error;
mod io;
mod module;
mod names;
mod operators;
mod types;

use tracing::{debug, instrument};

use mini_ir::{ExprTypes, Program};

pub use emitter::IrEmitter;
pub use error::CodegenError;
pub use names::NameAllocator;

use builder::Builder;

/// Generate IR for a checked program.
#[instrument(level = "debug", skip_all, fields(variables = program.symbols.len()))]
pub fn generate(program: &Program, types: &ExprTypes) -> Result<Vec<String>, CodegenError> {
    let mut builder = Builder::new(program, types);
    builder.emit_module()?;
    let lines = builder.finish();
    debug!(lines = lines.len(), "generated module");
    Ok(lines)
}
