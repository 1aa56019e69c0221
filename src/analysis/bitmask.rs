//! All-bits-set detection for mask constants.

use super::inspect::{is_constant, is_scalar, value_component_count};
use super::Inspector;
use crate::core::adaptor::{IrAdaptor, TypeShape, ValueKind};

impl<'a, A: IrAdaptor + ?Sized> Inspector<'a, A> {
    /// True if `val` is a constant with every bit of every lane set.
    ///
    /// Non-scalar constants must be vector constants built from their lanes.
    /// Each lane is read through [`constant_int`](Self::constant_int), so only
    /// the low 32 bits of a wider lane are inspected.
    pub fn has_all_set(&self, val: A::ValueRef) -> bool {
        let ir = self.ir();
        if !is_constant(ir, val) {
            return false;
        }

        if is_scalar(ir, ir.value_type(val)) {
            return self.constant_int(val) == -1;
        }

        debug_assert!(
            ir.value_kind(val) == ValueKind::ConstantAggregate
                && matches!(ir.type_shape(ir.value_type(val)), TypeShape::Vector { .. }),
            "has_all_set expects a scalar or vector constant"
        );

        (0..value_component_count(ir, val) as usize).all(|lane| {
            match ir.aggregate_element(val, lane) {
                Some(element) => self.constant_int(element) == -1,
                None => false,
            }
        })
    }
}
