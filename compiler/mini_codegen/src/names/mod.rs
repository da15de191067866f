//! Register and label naming.

use tracing::trace;

/// Label of the block every routine starts in.
pub const ENTRY_LABEL: &str = "entry";

/// Hands out virtual register names (`%r1`, `%r2`, ...) and block labels
/// (`L1`, `L2`, ...) and remembers which block is currently open.
///
/// Both counters only move forward: a name is never handed out twice within
/// one allocator, and one allocator lives for exactly one compilation.
#[derive(Clone, Debug)]
pub struct NameAllocator {
    registers: u32,
    labels: u32,
    current_label: String,
}

impl NameAllocator {
    pub fn new() -> Self {
        NameAllocator {
            registers: 0,
            labels: 0,
            current_label: ENTRY_LABEL.to_string(),
        }
    }

    pub fn next_register(&mut self) -> String {
        self.registers += 1;
        let name = format!("%r{}", self.registers);
        trace!(%name, "register");
        name
    }

    pub fn next_label(&mut self) -> String {
        self.labels += 1;
        let name = format!("L{}", self.labels);
        trace!(%name, "label");
        name
    }

    /// Label of the block instructions are currently appended to; the
    /// predecessor to name in a phi.
    pub fn current_label(&self) -> &str {
        &self.current_label
    }

    /// Record that `label` has been opened.
    pub fn declare_label(&mut self, label: &str) {
        label.clone_into(&mut self.current_label);
    }
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
