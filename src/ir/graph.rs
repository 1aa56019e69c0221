// This module implements the reference IR graph the analyses are exercised against. Nodes
// are stored in creation order and addressed by ValueRef indices, the same flat layout the
// host compiler's test IR uses, which keeps phi back edges expressible without cyclic
// borrows. Operand lists, struct field lists and value names are allocated in a bumpalo
// arena owned by the caller, so a whole graph is freed at once when the arena goes away.
// Types are hash-consed through a hashbrown map: structurally equal types share one
// TypeRef, which makes type equality a plain integer comparison. Builder methods validate
// their input and report problems through IrError instead of panicking.

//! Arena-backed IR graph.

use bumpalo::Bump;
use hashbrown::HashMap;

use super::types::{sign_extend, TypeData, TypeRef};
use super::{Intrinsic, Opcode};
use crate::core::adaptor::{FloatKind, FloatLiteral, ValueKind};
use crate::core::error::{IrError, IrResult};

/// Handle to a node of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRef(pub u32);

/// Kind-specific payload of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload {
    None,
    /// Sign-extended integer literal.
    Int(i64),
    Float(FloatLiteral),
    /// Opcode of an instruction or unfolded constant expression.
    Op(Opcode),
    /// Callee of an intrinsic call.
    Intrinsic(Intrinsic),
}

#[derive(Debug, Clone, Copy)]
pub struct Node<'arena> {
    pub name: &'arena str,
    pub kind: ValueKind,
    pub ty: TypeRef,
    pub payload: Payload,
    pub operands: &'arena [ValueRef],
}

impl<'arena> Node<'arena> {
    pub fn opcode(&self) -> Option<Opcode> {
        match self.payload {
            Payload::Op(op) => Some(op),
            Payload::Intrinsic(_) => Some(Opcode::Call),
            _ => None,
        }
    }
}

/// A data-flow graph of values.
pub struct Graph<'arena> {
    arena: &'arena Bump,
    types: Vec<TypeData<'arena>>,
    type_map: HashMap<TypeData<'arena>, TypeRef>,
    nodes: Vec<Node<'arena>>,
    names: HashMap<&'arena str, ValueRef>,
}

impl<'arena> Graph<'arena> {
    /// Create an empty graph allocating into `arena`.
    pub fn new(arena: &'arena Bump) -> Self {
        Self {
            arena,
            types: Vec::new(),
            type_map: HashMap::new(),
            nodes: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node handles in creation order.
    pub fn values(&self) -> impl Iterator<Item = ValueRef> + '_ {
        (0..self.nodes.len() as u32).map(ValueRef)
    }

    /// Node behind `val`. Panics on a handle from another graph.
    pub fn node(&self, val: ValueRef) -> &Node<'arena> {
        &self.nodes[val.0 as usize]
    }

    pub fn get(&self, val: ValueRef) -> Option<&Node<'arena>> {
        self.nodes.get(val.0 as usize)
    }

    /// Type payload behind `ty`. Panics on a handle from another graph.
    pub fn type_data(&self, ty: TypeRef) -> &TypeData<'arena> {
        &self.types[ty.0 as usize]
    }

    /// Find a value by name.
    pub fn lookup(&self, name: &str) -> Option<ValueRef> {
        self.names.get(name).copied()
    }

    // ---------------------------------------------------------------------
    // Types
    // ---------------------------------------------------------------------

    fn intern(&mut self, data: TypeData<'arena>) -> TypeRef {
        if let Some(&ty) = self.type_map.get(&data) {
            return ty;
        }
        let ty = TypeRef(self.types.len() as u32);
        self.types.push(data);
        self.type_map.insert(data, ty);
        ty
    }

    fn check_type(&self, ty: TypeRef) -> IrResult<&TypeData<'arena>> {
        self.types
            .get(ty.0 as usize)
            .ok_or(IrError::InvalidType { index: ty.0 })
    }

    pub fn void_type(&mut self) -> TypeRef {
        self.intern(TypeData::Void)
    }

    pub fn int_type(&mut self, bits: u32) -> IrResult<TypeRef> {
        if !(1..=64).contains(&bits) {
            return Err(IrError::UnsupportedWidth { width: bits });
        }
        Ok(self.intern(TypeData::Int { bits }))
    }

    pub fn float_type(&mut self, kind: FloatKind) -> TypeRef {
        self.intern(TypeData::Float(kind))
    }

    pub fn pointer_type(&mut self) -> TypeRef {
        self.intern(TypeData::Pointer)
    }

    pub fn vector_type(&mut self, elem: TypeRef, lanes: u32) -> IrResult<TypeRef> {
        let elem_data = self.check_type(elem)?;
        if !elem_data.is_vector_element() {
            return Err(IrError::TypeMismatch {
                expected: "integer, float or pointer vector element",
                found: self.type_name(elem),
            });
        }
        if lanes == 0 {
            return Err(IrError::AggregateMismatch {
                reason: "vector types need at least one lane".to_string(),
            });
        }
        Ok(self.intern(TypeData::Vector { elem, lanes }))
    }

    pub fn array_type(&mut self, elem: TypeRef, len: u32) -> IrResult<TypeRef> {
        if matches!(self.check_type(elem)?, TypeData::Void) {
            return Err(IrError::TypeMismatch {
                expected: "sized array element",
                found: "void".to_string(),
            });
        }
        Ok(self.intern(TypeData::Array { elem, len }))
    }

    pub fn struct_type(&mut self, fields: &[TypeRef]) -> IrResult<TypeRef> {
        for &field in fields {
            if matches!(self.check_type(field)?, TypeData::Void) {
                return Err(IrError::TypeMismatch {
                    expected: "sized struct field",
                    found: "void".to_string(),
                });
            }
        }
        let fields = self.arena.alloc_slice_copy(fields);
        Ok(self.intern(TypeData::Struct { fields }))
    }

    /// Printable spelling of a type.
    pub fn type_name(&self, ty: TypeRef) -> String {
        let Some(data) = self.types.get(ty.0 as usize) else {
            return format!("<bad type #{}>", ty.0);
        };
        match *data {
            TypeData::Void => "void".to_string(),
            TypeData::Int { bits } => format!("i{bits}"),
            TypeData::Float(FloatKind::Half) => "half".to_string(),
            TypeData::Float(FloatKind::Single) => "float".to_string(),
            TypeData::Float(FloatKind::Double) => "double".to_string(),
            TypeData::Pointer => "ptr".to_string(),
            TypeData::Vector { elem, lanes } => format!("<{lanes} x {}>", self.type_name(elem)),
            TypeData::Array { elem, len } => format!("[{len} x {}]", self.type_name(elem)),
            TypeData::Struct { fields } => {
                let fields: Vec<String> = fields.iter().map(|&f| self.type_name(f)).collect();
                format!("{{ {} }}", fields.join(", "))
            }
        }
    }

    // ---------------------------------------------------------------------
    // Values
    // ---------------------------------------------------------------------

    fn push(
        &mut self,
        kind: ValueKind,
        ty: TypeRef,
        payload: Payload,
        operands: &[ValueRef],
    ) -> ValueRef {
        let val = ValueRef(self.nodes.len() as u32);
        let operands = self.arena.alloc_slice_copy(operands);
        self.nodes.push(Node {
            name: "",
            kind,
            ty,
            payload,
            operands,
        });
        val
    }

    fn check_value(&self, val: ValueRef) -> IrResult<&Node<'arena>> {
        self.nodes.get(val.0 as usize).ok_or_else(|| IrError::InvalidValue {
            reason: format!("no value #{} in graph of {} values", val.0, self.nodes.len()),
        })
    }

    fn check_operands(&self, operands: &[ValueRef]) -> IrResult<()> {
        operands.iter().try_for_each(|&op| self.check_value(op).map(|_| ()))
    }

    /// Give `val` a name. Later names shadow earlier ones in [`lookup`](Self::lookup).
    pub fn set_name(&mut self, val: ValueRef, name: &str) -> IrResult<()> {
        self.check_value(val)?;
        let name: &'arena str = self.arena.alloc_str(name);
        self.nodes[val.0 as usize].name = name;
        self.names.insert(name, val);
        Ok(())
    }

    /// Integer literal, truncated to the type's width and stored sign-extended.
    pub fn const_int(&mut self, ty: TypeRef, value: i64) -> IrResult<ValueRef> {
        let bits = match *self.check_type(ty)? {
            TypeData::Int { bits } => bits,
            _ => {
                return Err(IrError::TypeMismatch {
                    expected: "integer type",
                    found: self.type_name(ty),
                })
            }
        };
        Ok(self.push(
            ValueKind::ConstantInt,
            ty,
            Payload::Int(sign_extend(value, bits)),
            &[],
        ))
    }

    pub fn const_float(&mut self, ty: TypeRef, value: f64) -> IrResult<ValueRef> {
        let kind = match *self.check_type(ty)? {
            TypeData::Float(kind) => kind,
            _ => {
                return Err(IrError::TypeMismatch {
                    expected: "floating point type",
                    found: self.type_name(ty),
                })
            }
        };
        Ok(self.push(
            ValueKind::ConstantFloat,
            ty,
            Payload::Float(FloatLiteral::new(kind, value)),
            &[],
        ))
    }

    /// Vector, array or struct constant from its elements.
    pub fn const_aggregate(&mut self, ty: TypeRef, elements: &[ValueRef]) -> IrResult<ValueRef> {
        let data = *self.check_type(ty)?;
        let Some(count) = data.element_count() else {
            return Err(IrError::TypeMismatch {
                expected: "vector, array or struct type",
                found: self.type_name(ty),
            });
        };
        if count != elements.len() {
            return Err(IrError::AggregateMismatch {
                reason: format!(
                    "{} expects {count} elements, got {}",
                    self.type_name(ty),
                    elements.len()
                ),
            });
        }
        for (idx, &element) in elements.iter().enumerate() {
            let node = self.check_value(element)?;
            if !node.kind.is_constant() {
                return Err(IrError::AggregateMismatch {
                    reason: format!("element {idx} is not a constant"),
                });
            }
            if data.element(idx) != Some(node.ty) {
                return Err(IrError::AggregateMismatch {
                    reason: format!(
                        "element {idx} has type {}, expected {}",
                        self.type_name(node.ty),
                        data.element(idx).map_or_else(String::new, |t| self.type_name(t)),
                    ),
                });
            }
        }
        Ok(self.push(ValueKind::ConstantAggregate, ty, Payload::None, elements))
    }

    /// Vector constant with every lane equal to `element`.
    pub fn const_splat(&mut self, ty: TypeRef, element: ValueRef) -> IrResult<ValueRef> {
        let lanes = match *self.check_type(ty)? {
            TypeData::Vector { lanes, .. } => lanes as usize,
            _ => {
                return Err(IrError::TypeMismatch {
                    expected: "vector type",
                    found: self.type_name(ty),
                })
            }
        };
        let elements = vec![element; lanes];
        self.const_aggregate(ty, &elements)
    }

    /// Constant expression that was not folded to a literal.
    pub fn const_expr(
        &mut self,
        ty: TypeRef,
        opcode: Opcode,
        operands: &[ValueRef],
    ) -> IrResult<ValueRef> {
        self.check_type(ty)?;
        self.check_operands(operands)?;
        Ok(self.push(ValueKind::ConstantExpr, ty, Payload::Op(opcode), operands))
    }

    pub fn undef(&mut self, ty: TypeRef) -> IrResult<ValueRef> {
        self.check_type(ty)?;
        Ok(self.push(ValueKind::Undef, ty, Payload::None, &[]))
    }

    pub fn argument(&mut self, ty: TypeRef, name: &str) -> IrResult<ValueRef> {
        self.check_type(ty)?;
        let val = self.push(ValueKind::Argument, ty, Payload::None, &[]);
        self.set_name(val, name)?;
        Ok(val)
    }

    /// Primitive instruction. Use [`phi`](Self::phi) for phis so incoming
    /// values can be filled in later.
    pub fn instruction(
        &mut self,
        opcode: Opcode,
        ty: TypeRef,
        operands: &[ValueRef],
    ) -> IrResult<ValueRef> {
        self.check_type(ty)?;
        self.check_operands(operands)?;
        Ok(self.push(ValueKind::Instruction, ty, Payload::Op(opcode), operands))
    }

    /// Call of an intrinsic.
    pub fn call_intrinsic(
        &mut self,
        intrinsic: Intrinsic,
        ty: TypeRef,
        args: &[ValueRef],
    ) -> IrResult<ValueRef> {
        self.check_type(ty)?;
        self.check_operands(args)?;
        Ok(self.push(ValueKind::Instruction, ty, Payload::Intrinsic(intrinsic), args))
    }

    /// Phi without incoming values.
    pub fn phi(&mut self, ty: TypeRef) -> IrResult<ValueRef> {
        self.check_type(ty)?;
        Ok(self.push(ValueKind::Instruction, ty, Payload::Op(Opcode::Phi), &[]))
    }

    /// Replace the incoming values of a phi.
    pub fn set_phi_incoming(&mut self, phi: ValueRef, incoming: &[ValueRef]) -> IrResult<()> {
        let node = self.check_value(phi)?;
        if node.payload != Payload::Op(Opcode::Phi) {
            return Err(IrError::InvalidValue {
                reason: format!("value #{} is not a phi", phi.0),
            });
        }
        let ty = node.ty;
        for &val in incoming {
            if self.check_value(val)?.ty != ty {
                return Err(IrError::TypeMismatch {
                    expected: "incoming value of the phi's type",
                    found: self.type_name(self.node(val).ty),
                });
            }
        }
        let incoming = self.arena.alloc_slice_copy(incoming);
        self.nodes[phi.0 as usize].operands = incoming;
        Ok(())
    }
}

impl std::fmt::Debug for Graph<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("types", &self.types.len())
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_interned() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);

        let f32_ty = graph.float_type(FloatKind::Single);
        let v4a = graph.vector_type(f32_ty, 4).unwrap();
        let v4b = graph.vector_type(f32_ty, 4).unwrap();
        let v2 = graph.vector_type(f32_ty, 2).unwrap();
        assert_eq!(v4a, v4b);
        assert_ne!(v4a, v2);

        let i32_ty = graph.int_type(32).unwrap();
        let s1 = graph.struct_type(&[i32_ty, f32_ty]).unwrap();
        let s2 = graph.struct_type(&[i32_ty, f32_ty]).unwrap();
        assert_eq!(s1, s2);
        assert_eq!(graph.type_name(s1), "{ i32, float }");
        assert_eq!(graph.type_name(v4a), "<4 x float>");
    }

    #[test]
    fn test_rejects_bad_types() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);

        assert_eq!(graph.int_type(0), Err(IrError::UnsupportedWidth { width: 0 }));
        assert_eq!(graph.int_type(65), Err(IrError::UnsupportedWidth { width: 65 }));

        let i32_ty = graph.int_type(32).unwrap();
        let v4 = graph.vector_type(i32_ty, 4).unwrap();
        assert!(graph.vector_type(v4, 2).is_err());
        assert!(graph.vector_type(i32_ty, 0).is_err());
        assert_eq!(
            graph.vector_type(TypeRef(99), 2),
            Err(IrError::InvalidType { index: 99 })
        );
    }

    #[test]
    fn test_const_int_truncates_and_sign_extends() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);

        let i8_ty = graph.int_type(8).unwrap();
        let c = graph.const_int(i8_ty, 0x1ff).unwrap();
        assert_eq!(graph.node(c).payload, Payload::Int(-1));

        let i1_ty = graph.int_type(1).unwrap();
        let t = graph.const_int(i1_ty, 1).unwrap();
        assert_eq!(graph.node(t).payload, Payload::Int(-1));

        let f32_ty = graph.float_type(FloatKind::Single);
        assert!(matches!(
            graph.const_int(f32_ty, 1),
            Err(IrError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_aggregate_validation() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);

        let i32_ty = graph.int_type(32).unwrap();
        let i16_ty = graph.int_type(16).unwrap();
        let v2 = graph.vector_type(i32_ty, 2).unwrap();
        let a = graph.const_int(i32_ty, 1).unwrap();
        let b = graph.const_int(i16_ty, 2).unwrap();

        assert!(graph.const_aggregate(v2, &[a]).is_err());
        assert!(graph.const_aggregate(v2, &[a, b]).is_err());
        let ok = graph.const_aggregate(v2, &[a, a]).unwrap();
        assert_eq!(graph.node(ok).operands, &[a, a]);

        let arg = graph.argument(i32_ty, "x").unwrap();
        assert!(graph.const_aggregate(v2, &[a, arg]).is_err());
    }

    #[test]
    fn test_phi_back_edge_and_names() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);

        let i32_ty = graph.int_type(32).unwrap();
        let phi = graph.phi(i32_ty).unwrap();
        let one = graph.const_int(i32_ty, 1).unwrap();
        let next = graph.instruction(Opcode::Add, i32_ty, &[phi, one]).unwrap();
        graph.set_phi_incoming(phi, &[one, next]).unwrap();
        graph.set_name(next, "next").unwrap();

        assert_eq!(graph.node(phi).operands, &[one, next]);
        assert_eq!(graph.lookup("next"), Some(next));
        assert_eq!(graph.lookup("missing"), None);
        assert!(graph.set_phi_incoming(next, &[one]).is_err());
    }
}
