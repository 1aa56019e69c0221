// This module defines the IrAdaptor trait, which serves as the bridge between the lane
// analyses and whatever SSA IR the surrounding compiler uses. The analyses never own or
// mutate nodes; they only read them through this trait. The trait exposes node kind, type
// shape, operands, literal payloads of simple constants, aggregate elements, and the
// opcode or intrinsic identity of operations. ValueKind and TypeShape are the small closed
// vocabularies the adaptor speaks in, and FloatLiteral carries a float payload together
// with the precision it was written in.

//! IrAdaptor responsibilities.
//!
//! The adaptor is the glue between the analyses and the host IR. The
//! framework assumes:
//! - Values are addressed by small copyable references.
//! - Constants that were folded expose their payload directly; everything
//!   else (including unfolded constant expressions) does not.
//! - Aggregate constants list their lanes as operands, in lane order.
//! - An intrinsic call is a `Call` instruction whose callee is an intrinsic.
//!
//! Passing a reference that does not belong to the adaptor's IR is a caller
//! contract violation; implementations are free to panic.

use crate::ir::{Intrinsic, Opcode};
use half::f16;

/// What a value is, independent of its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Folded integer literal.
    ConstantInt,
    /// Folded floating point literal.
    ConstantFloat,
    /// Vector, array or struct constant whose operands are its elements.
    ConstantAggregate,
    /// Constant expression that was never folded to a literal.
    ConstantExpr,
    /// The undefined value of some type.
    Undef,
    /// Function argument.
    Argument,
    /// Instruction, including intrinsic calls.
    Instruction,
}

impl ValueKind {
    /// Constants include `Undef`, aggregates and unfolded expressions.
    pub const fn is_constant(self) -> bool {
        matches!(
            self,
            ValueKind::ConstantInt
                | ValueKind::ConstantFloat
                | ValueKind::ConstantAggregate
                | ValueKind::ConstantExpr
                | ValueKind::Undef
        )
    }
}

/// Floating point precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    Half,
    Single,
    Double,
}

impl FloatKind {
    pub const fn bits(self) -> u32 {
        match self {
            FloatKind::Half => 16,
            FloatKind::Single => 32,
            FloatKind::Double => 64,
        }
    }
}

/// Structural shape of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape<T> {
    Void,
    Int { bits: u32 },
    Float(FloatKind),
    Pointer,
    Vector { elem: T, lanes: u32 },
    Array { elem: T, len: u32 },
    Struct { fields: u32 },
}

impl<T> TypeShape<T> {
    /// Vectors, arrays and structs.
    pub const fn is_aggregate(&self) -> bool {
        matches!(
            self,
            TypeShape::Vector { .. } | TypeShape::Array { .. } | TypeShape::Struct { .. }
        )
    }
}

/// Floating point literal tagged with its source precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatLiteral {
    pub kind: FloatKind,
    pub value: f64,
}

impl FloatLiteral {
    pub fn new(kind: FloatKind, value: f64) -> Self {
        // Rounded to the source precision once, at construction.
        let value = match kind {
            FloatKind::Double => value,
            FloatKind::Single => value as f32 as f64,
            FloatKind::Half => f16::from_f64(value).to_f64(),
        };
        Self { kind, value }
    }

    pub fn to_f32(self) -> f32 {
        self.value as f32
    }

    pub fn to_f64(self) -> f64 {
        self.value
    }
}

/// Bridge between an SSA IR and the lane analyses.
pub trait IrAdaptor {
    type ValueRef: Copy + Eq;
    type TypeRef: Copy + Eq;

    /// Kind of the value.
    fn value_kind(&self, val: Self::ValueRef) -> ValueKind;

    /// Type of the value.
    fn value_type(&self, val: Self::ValueRef) -> Self::TypeRef;

    /// Structural shape of a type.
    fn type_shape(&self, ty: Self::TypeRef) -> TypeShape<Self::TypeRef>;

    /// Number of operands. Aggregate constants count their elements.
    fn operand_count(&self, val: Self::ValueRef) -> usize;

    /// Operand at `idx`, or `None` past the end.
    fn operand(&self, val: Self::ValueRef, idx: usize) -> Option<Self::ValueRef>;

    /// Iterator over all operands in order.
    fn operands(&self, val: Self::ValueRef) -> Box<dyn Iterator<Item = Self::ValueRef> + '_> {
        Box::new((0..self.operand_count(val)).filter_map(move |idx| self.operand(val, idx)))
    }

    /// Sign-extended payload of a folded integer literal.
    fn int_literal(&self, val: Self::ValueRef) -> Option<i64>;

    /// Payload of a folded float literal.
    fn float_literal(&self, val: Self::ValueRef) -> Option<FloatLiteral>;

    /// Element `idx` of an aggregate constant.
    fn aggregate_element(&self, val: Self::ValueRef, idx: usize) -> Option<Self::ValueRef> {
        match self.value_kind(val) {
            ValueKind::ConstantAggregate => self.operand(val, idx),
            _ => None,
        }
    }

    /// Opcode of an instruction (or of an unfolded constant expression).
    fn opcode(&self, val: Self::ValueRef) -> Option<Opcode>;

    /// Intrinsic identity when the value is an intrinsic call.
    fn intrinsic(&self, val: Self::ValueRef) -> Option<Intrinsic>;

    /// Name of the value (for printing).
    fn value_name(&self, _val: Self::ValueRef) -> &str {
        ""
    }
}
