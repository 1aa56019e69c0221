//! Low-level value queries.

use crate::core::adaptor::{IrAdaptor, TypeShape, ValueKind};

pub fn is_undef<A: IrAdaptor + ?Sized>(ir: &A, val: A::ValueRef) -> bool {
    ir.value_kind(val) == ValueKind::Undef
}

pub fn is_constant<A: IrAdaptor + ?Sized>(ir: &A, val: A::ValueRef) -> bool {
    ir.value_kind(val).is_constant()
}

/// Anything that is not a vector, array or struct.
pub fn is_scalar<A: IrAdaptor + ?Sized>(ir: &A, ty: A::TypeRef) -> bool {
    !ir.type_shape(ty).is_aggregate()
}

/// Lanes of a vector, elements of an array, fields of a struct, 1 otherwise.
pub fn component_count<A: IrAdaptor + ?Sized>(ir: &A, ty: A::TypeRef) -> u32 {
    match ir.type_shape(ty) {
        TypeShape::Vector { lanes, .. } => lanes,
        TypeShape::Array { len, .. } => len,
        TypeShape::Struct { fields } => fields,
        _ => 1,
    }
}

pub fn value_component_count<A: IrAdaptor + ?Sized>(ir: &A, val: A::ValueRef) -> u32 {
    component_count(ir, ir.value_type(val))
}
