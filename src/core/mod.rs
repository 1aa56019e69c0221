// This module serves as the central hub for vecir's core infrastructure, the pieces shared
// by the reference IR and the analyses: the IrAdaptor trait the analyses read the IR
// through, the error types raised while building graphs, the diagnostic sinks that
// receive degraded-extraction reports, and the inspector configuration. It also owns the
// logging bootstrap used by tests and embedding tools.

//! Core vecir Infrastructure
//!
//! # Key Components
//!
//! ## IR Adaptor (`adaptor`)
//! - Read-only bridge to the host IR
//! - Closed vocabularies for value kinds and type shapes
//!
//! ## Diagnostics (`diagnostics`)
//! - Sink trait plus logging, collecting and null sinks
//!
//! ## Configuration (`config`)
//! - Which "all undefined" notion the inspector answers with

pub mod adaptor;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod test_utils;

pub use adaptor::{FloatKind, FloatLiteral, IrAdaptor, TypeShape, ValueKind};
pub use config::{InspectorConfig, UndefinedCheck};
pub use diagnostics::{
    CollectingSink, Diagnostic, DiagnosticAction, DiagnosticKind, DiagnosticSink, LogSink,
    NullSink, NON_SIMPLE_CONSTANT,
};
pub use error::{IrError, IrResult, NonConstantIndex};

/// Route `log` output through `env_logger` for tests. Honors `RUST_LOG`;
/// safe to call more than once.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
