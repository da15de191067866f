//! Diagnostic system for the MINI compiler.
//!
//! Every lexical, syntax, and semantic problem becomes a [`Diagnostic`] that
//! is pushed into a [`DiagnosticQueue`]. Nothing is thrown: the phase that
//! found the problem records it and keeps going on a best-effort value, so a
//! single run surfaces as many real problems as possible.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] can only be obtained from a queue that has counted at
//! least one error. Code generation is gated on the queue *not* producing one.
//!
//! ```text
//! if let Some(guar) = queue.has_errors() {
//!     return CompileOutcome::Failed(guar);
//! }
//! ```

mod diagnostic;
pub mod emitter;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, ErrorKind, Line};
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
