//! IrAdaptor implementation for the reference [`Graph`].
//!
//! This adaptor lets the analyses run directly against the arena graph,
//! which is how the crate's own tests exercise them.

use super::graph::{Graph, Payload, ValueRef};
use super::types::TypeRef;
use super::{Intrinsic, Opcode};
use crate::core::adaptor::{FloatLiteral, IrAdaptor, TypeShape, ValueKind};

impl<'arena> IrAdaptor for Graph<'arena> {
    type ValueRef = ValueRef;
    type TypeRef = TypeRef;

    fn value_kind(&self, val: ValueRef) -> ValueKind {
        self.node(val).kind
    }

    fn value_type(&self, val: ValueRef) -> TypeRef {
        self.node(val).ty
    }

    fn type_shape(&self, ty: TypeRef) -> TypeShape<TypeRef> {
        self.type_data(ty).shape()
    }

    fn operand_count(&self, val: ValueRef) -> usize {
        self.node(val).operands.len()
    }

    fn operand(&self, val: ValueRef, idx: usize) -> Option<ValueRef> {
        self.node(val).operands.get(idx).copied()
    }

    fn operands(&self, val: ValueRef) -> Box<dyn Iterator<Item = ValueRef> + '_> {
        Box::new(self.node(val).operands.iter().copied())
    }

    fn int_literal(&self, val: ValueRef) -> Option<i64> {
        let node = self.node(val);
        match (node.kind, node.payload) {
            (ValueKind::ConstantInt, Payload::Int(value)) => Some(value),
            _ => None,
        }
    }

    fn float_literal(&self, val: ValueRef) -> Option<FloatLiteral> {
        let node = self.node(val);
        match (node.kind, node.payload) {
            (ValueKind::ConstantFloat, Payload::Float(lit)) => Some(lit),
            _ => None,
        }
    }

    fn opcode(&self, val: ValueRef) -> Option<Opcode> {
        self.node(val).opcode()
    }

    fn intrinsic(&self, val: ValueRef) -> Option<Intrinsic> {
        match self.node(val).payload {
            Payload::Intrinsic(intr) => Some(intr),
            _ => None,
        }
    }

    fn value_name(&self, val: ValueRef) -> &str {
        self.node(val).name
    }
}
