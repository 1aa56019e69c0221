// This module gathers the lane analyses the lowering and folding passes query. The pure
// queries (value inspection, definedness, index-chain conversion, per-component
// classification) are free functions generic over IrAdaptor. Everything that may need to
// report degraded extraction goes through Inspector, which bundles the adaptor with a
// diagnostic sink and the inspector configuration. None of these functions allocate graph
// nodes or mutate the IR; an Inspector is Copy and can be handed to as many passes as need it.

//! Lane analyses over any [`IrAdaptor`].
//!
//! # Components
//!
//! - [`inspect`] - undefined/constant/lane-count queries
//! - [`constant`] - literal extraction with a placeholder fallback
//! - [`definedness`] - "all defined" and "all undefined" walks
//! - [`bitmask`] - all-bits-set detection
//! - [`indices`] - access chains to unsigned index lists
//! - [`per_component`] - can an operation be split lane by lane

use crate::core::adaptor::IrAdaptor;
use crate::core::config::{InspectorConfig, UndefinedCheck};
use crate::core::diagnostics::DiagnosticSink;

pub mod bitmask;
pub mod constant;
pub mod definedness;
pub mod indices;
pub mod inspect;
pub mod per_component;

pub use definedness::{are_all_defined, are_all_undefined, are_all_undefined_deep};
pub use indices::{collect_unsigned_indices, convert_values_to_unsigned};
pub use inspect::{component_count, is_constant, is_scalar, is_undef, value_component_count};
pub use per_component::{
    is_per_component_inst, is_per_component_intrinsic, is_per_component_op,
    INTRINSIC_DEFAULT_PER_COMPONENT, OPCODE_DEFAULT_PER_COMPONENT,
};

/// Read-only view of an IR together with the diagnostic sink extraction
/// reports to.
pub struct Inspector<'a, A: IrAdaptor + ?Sized> {
    ir: &'a A,
    diags: &'a dyn DiagnosticSink,
    config: InspectorConfig,
}

impl<A: IrAdaptor + ?Sized> Clone for Inspector<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: IrAdaptor + ?Sized> Copy for Inspector<'_, A> {}

impl<'a, A: IrAdaptor + ?Sized> Inspector<'a, A> {
    pub fn new(ir: &'a A, diags: &'a dyn DiagnosticSink) -> Self {
        Self::with_config(ir, diags, InspectorConfig::default())
    }

    pub fn with_config(ir: &'a A, diags: &'a dyn DiagnosticSink, config: InspectorConfig) -> Self {
        Self { ir, diags, config }
    }

    pub fn ir(&self) -> &'a A {
        self.ir
    }

    pub fn config(&self) -> InspectorConfig {
        self.config
    }

    pub(crate) fn diags(&self) -> &'a dyn DiagnosticSink {
        self.diags
    }

    /// "All undefined" in the configured sense.
    pub fn is_fully_undefined(&self, val: A::ValueRef) -> bool {
        match self.config.undefined_check {
            UndefinedCheck::TopLevel => are_all_undefined(self.ir, val),
            UndefinedCheck::Recursive => are_all_undefined_deep(self.ir, val),
        }
    }
}
