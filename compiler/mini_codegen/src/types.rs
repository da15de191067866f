//! IR spellings of MINI types.

use mini_ir::{Line, PrimType, Ty};

use crate::CodegenError;

pub(crate) const fn prim_ir_type(prim: PrimType) -> &'static str {
    match prim {
        PrimType::Int => "i32",
        PrimType::Double => "double",
        PrimType::Bool => "i1",
    }
}

/// IR type for a checked tag. Sentinels have none.
pub(crate) fn ir_type(ty: Ty, line: Line) -> Result<&'static str, CodegenError> {
    ty.as_prim()
        .map(prim_ir_type)
        .ok_or(CodegenError::SentinelType { ty, line })
}

/// Operand spelling of a real literal: the exact 64-bit pattern in hex.
pub(crate) fn double_literal(bits: u64) -> String {
    format!("0x{bits:016X}")
}
