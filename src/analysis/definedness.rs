//! Definedness of aggregate values.
//!
//! Aggregate nesting follows the type, so these walks terminate after as
//! many levels as the type nests. The operands of an aggregate-typed value
//! are visited whatever its kind, so an instruction producing a vector from
//! an undefined operand is not "all defined" either. Values reached this
//! way must not form a cycle through aggregate-typed phis.

use super::inspect::is_undef;
use crate::core::adaptor::IrAdaptor;

fn is_aggregate_value<A: IrAdaptor + ?Sized>(ir: &A, val: A::ValueRef) -> bool {
    ir.type_shape(ir.value_type(val)).is_aggregate()
}

/// False if the value, or any element reachable through aggregate operands,
/// is undefined.
pub fn are_all_defined<A: IrAdaptor + ?Sized>(ir: &A, val: A::ValueRef) -> bool {
    if is_undef(ir, val) {
        return false;
    }

    if is_aggregate_value(ir, val) {
        return ir.operands(val).all(|op| are_all_defined(ir, op));
    }

    true
}

/// True only when the value itself is undefined.
///
/// A fully undefined aggregate is expected to be represented by a single
/// undefined value, so aggregates are not walked. An aggregate whose every
/// element is undefined but which is not itself undefined answers false.
/// Use [`are_all_undefined_deep`] when that distinction matters.
pub fn are_all_undefined<A: IrAdaptor + ?Sized>(ir: &A, val: A::ValueRef) -> bool {
    is_undef(ir, val)
}

/// True if the value is undefined, or is an aggregate with at least one
/// element and every element is (recursively) all undefined.
pub fn are_all_undefined_deep<A: IrAdaptor + ?Sized>(ir: &A, val: A::ValueRef) -> bool {
    if is_undef(ir, val) {
        return true;
    }

    if !is_aggregate_value(ir, val) || ir.operand_count(val) == 0 {
        return false;
    }

    ir.operands(val).all(|op| are_all_undefined_deep(ir, op))
}
