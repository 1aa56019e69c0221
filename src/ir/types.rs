//! Interned IR types.

use crate::core::adaptor::{FloatKind, TypeShape};

/// Handle to an interned type of a [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRef(pub u32);

/// Type payload. Struct field lists live in the graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeData<'arena> {
    Void,
    Int { bits: u32 },
    Float(FloatKind),
    Pointer,
    Vector { elem: TypeRef, lanes: u32 },
    Array { elem: TypeRef, len: u32 },
    Struct { fields: &'arena [TypeRef] },
}

impl<'arena> TypeData<'arena> {
    /// Types a vector may hold.
    pub const fn is_vector_element(&self) -> bool {
        matches!(self, TypeData::Int { .. } | TypeData::Float(_) | TypeData::Pointer)
    }

    pub fn shape(&self) -> TypeShape<TypeRef> {
        match *self {
            TypeData::Void => TypeShape::Void,
            TypeData::Int { bits } => TypeShape::Int { bits },
            TypeData::Float(kind) => TypeShape::Float(kind),
            TypeData::Pointer => TypeShape::Pointer,
            TypeData::Vector { elem, lanes } => TypeShape::Vector { elem, lanes },
            TypeData::Array { elem, len } => TypeShape::Array { elem, len },
            TypeData::Struct { fields } => TypeShape::Struct {
                fields: fields.len() as u32,
            },
        }
    }

    /// Type of element `idx`, for aggregates.
    pub fn element(&self, idx: usize) -> Option<TypeRef> {
        match *self {
            TypeData::Vector { elem, lanes } if idx < lanes as usize => Some(elem),
            TypeData::Array { elem, len } if idx < len as usize => Some(elem),
            TypeData::Struct { fields } => fields.get(idx).copied(),
            _ => None,
        }
    }

    /// Number of elements, for aggregates.
    pub fn element_count(&self) -> Option<usize> {
        match *self {
            TypeData::Vector { lanes, .. } => Some(lanes as usize),
            TypeData::Array { len, .. } => Some(len as usize),
            TypeData::Struct { fields } => Some(fields.len()),
            _ => None,
        }
    }
}

/// Sign-extend the low `bits` of `value`.
pub(crate) const fn sign_extend(value: i64, bits: u32) -> i64 {
    if bits >= 64 {
        value
    } else {
        let shift = 64 - bits;
        (value << shift) >> shift
    }
}
