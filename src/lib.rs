//! vecir - lane analysis for a vector shader IR.
//!
//! A shader compiler backend lowering a vector-oriented SSA IR has to decide,
//! for every vector operation, whether it can be emitted as independent
//! per-lane operations, and it regularly needs the literal behind a constant.
//! This crate answers both questions over any IR that implements
//! [`IrAdaptor`].
//!
//! # Primary Usage
//!
//! ```
//! use bumpalo::Bump;
//! use vecir::analysis::{is_per_component_op, Inspector};
//! use vecir::core::{FloatKind, LogSink};
//! use vecir::ir::{Graph, Intrinsic, Opcode};
//!
//! let arena = Bump::new();
//! let mut graph = Graph::new(&arena);
//! let f32_ty = graph.float_type(FloatKind::Single);
//! let v4 = graph.vector_type(f32_ty, 4)?;
//! let x = graph.argument(v4, "x")?;
//! let sum = graph.instruction(Opcode::FAdd, v4, &[x, x])?;
//! let dot = graph.call_intrinsic(Intrinsic::FDot4, f32_ty, &[x, sum])?;
//!
//! assert!(is_per_component_op(&graph, sum));
//! assert!(!is_per_component_op(&graph, dot));
//!
//! let one = graph.const_float(f32_ty, 1.0)?;
//! let sink = LogSink;
//! let inspector = Inspector::new(&graph, &sink);
//! assert_eq!(inspector.constant_float(one), 1.0);
//! # Ok::<(), vecir::core::IrError>(())
//! ```
//!
//! # Architecture
//!
//! - [`core`] - adaptor trait, errors, diagnostics, configuration
//! - [`ir`] - arena-backed reference IR implementing the adaptor
//! - [`analysis`] - inspection, extraction, definedness, masks, index chains
//!   and per-component classification

pub mod analysis;
pub mod core;
pub mod ir;

pub use analysis::Inspector;
pub use core::{
    // Framework traits
    DiagnosticSink, IrAdaptor,
    // Errors
    IrError, IrResult, NonConstantIndex,
};
pub use ir::{Graph, Intrinsic, Opcode};
