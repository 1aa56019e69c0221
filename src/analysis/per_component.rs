// This module implements the per-component classifier the lowering pass consults before
// splitting a vector operation into scalar operations. An operation is per-component when
// lane i of its result depends only on lane i of its operands. The decision is a pure
// function of the opcode or intrinsic identity, plus operand and result lane counts for
// casts. The two halves use opposite styles: intrinsics are denylisted by category
// (anything that reads pipeline state, packs lanes, samples textures, does vector
// geometry, takes derivatives or reduces lanes), while primitive opcodes are excluded one
// by one. Both fall back to a named default, so an operation missing from these lists is
// silently classified per-component.

//! Per-component classification of operations.

use super::inspect::value_component_count;
use crate::core::adaptor::{IrAdaptor, ValueKind};
use crate::ir::{Intrinsic, IntrinsicCategory, Opcode};

/// Classification of intrinsics outside the denylisted categories.
pub const INTRINSIC_DEFAULT_PER_COMPONENT: bool = true;

/// Classification of opcodes not excluded below.
pub const OPCODE_DEFAULT_PER_COMPONENT: bool = true;

/// Whether an intrinsic computes each result lane from the same lane of its
/// arguments.
pub fn is_per_component_intrinsic(intrinsic: Intrinsic) -> bool {
    match intrinsic.category() {
        IntrinsicCategory::Pipeline
        | IntrinsicCategory::Packing
        | IntrinsicCategory::TextureSample
        | IntrinsicCategory::TextureQuery
        | IntrinsicCategory::Geometry
        | IntrinsicCategory::Derivative
        | IntrinsicCategory::VectorReduction => false,

        _ => INTRINSIC_DEFAULT_PER_COMPONENT,
    }
}

/// Whether an instruction can be split into one operation per lane.
///
/// `inst` must be an instruction.
pub fn is_per_component_inst<A: IrAdaptor + ?Sized>(ir: &A, inst: A::ValueRef) -> bool {
    if let Some(intrinsic) = ir.intrinsic(inst) {
        let result = is_per_component_intrinsic(intrinsic);
        log::trace!("intrinsic {intrinsic} per-component: {result}");
        return result;
    }

    let Some(opcode) = ir.opcode(inst) else {
        return false;
    };

    if opcode.is_terminator() {
        return false;
    }

    // Casts stay lane-local only when they keep the lane count
    if opcode.is_cast() {
        return match ir.operand(inst, 0) {
            Some(source) => {
                let same = value_component_count(ir, source) == value_component_count(ir, inst);
                if !same {
                    log::trace!("{opcode} changes lane count, not per-component");
                }
                same
            }
            None => false,
        };
    }

    match opcode {
        // Vector shape
        Opcode::InsertElement
        | Opcode::ExtractElement
        | Opcode::ShuffleVector

        // Aggregate access
        | Opcode::ExtractValue
        | Opcode::InsertValue

        // Memory
        | Opcode::Alloca
        | Opcode::Load
        | Opcode::Store
        | Opcode::GetElementPtr

        // A phi selects one incoming value per control-flow path, not per
        // lane the way select does. Callers handle phis themselves.
        | Opcode::Phi

        // Calls that are not intrinsics are opaque
        | Opcode::Call

        | Opcode::VaArg => false,

        _ => OPCODE_DEFAULT_PER_COMPONENT,
    }
}

/// Whether `val` is an operation that can be split per lane. Constants,
/// arguments and other non-instructions never are.
pub fn is_per_component_op<A: IrAdaptor + ?Sized>(ir: &A, val: A::ValueRef) -> bool {
    ir.value_kind(val) == ValueKind::Instruction && is_per_component_inst(ir, val)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::adaptor::FloatKind;
    use crate::ir::Graph;
    use bumpalo::Bump;

    #[test]
    fn test_denylisted_intrinsics() {
        for intr in [
            Intrinsic::FReadInterpolant,
            Intrinsic::WriteData,
            Intrinsic::FPackUnorm4x8,
            Intrinsic::FTextureSample,
            Intrinsic::FRTextureSampleLodRefZOffsetGrad3,
            Intrinsic::FTexelGatherOffsets,
            Intrinsic::QueryTextureSize,
            Intrinsic::FDot4,
            Intrinsic::FNormalize3D,
            Intrinsic::FRefract,
            Intrinsic::FDFdy,
            Intrinsic::FFixedTransform,
            Intrinsic::Any,
            Intrinsic::All,
        ] {
            assert!(!is_per_component_intrinsic(intr), "{intr} should not be per-component");
        }
    }

    #[test]
    fn test_lane_local_intrinsics() {
        for intr in [
            Intrinsic::FClamp,
            Intrinsic::FMix,
            Intrinsic::SMin,
            Intrinsic::BitCount,
            Intrinsic::FSwizzle,
            Intrinsic::EmitVertex,
        ] {
            assert!(is_per_component_intrinsic(intr), "{intr} should be per-component");
        }
    }

    #[test]
    fn test_cast_lane_counts() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);
        let i32_ty = graph.int_type(32).unwrap();
        let i64_ty = graph.int_type(64).unwrap();
        let f32_ty = graph.float_type(FloatKind::Single);
        let v4i32 = graph.vector_type(i32_ty, 4).unwrap();
        let v2i64 = graph.vector_type(i64_ty, 2).unwrap();
        let v4f32 = graph.vector_type(f32_ty, 4).unwrap();

        let x = graph.argument(v4i32, "x").unwrap();
        let narrow = graph.instruction(Opcode::BitCast, v2i64, &[x]).unwrap();
        let same = graph.instruction(Opcode::BitCast, v4f32, &[x]).unwrap();
        let conv = graph.instruction(Opcode::SIToFP, v4f32, &[x]).unwrap();

        assert!(!is_per_component_op(&graph, narrow));
        assert!(is_per_component_op(&graph, same));
        assert!(is_per_component_op(&graph, conv));
    }

    #[test]
    fn test_every_cast_checks_lane_count() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);
        let i32_ty = graph.int_type(32).unwrap();
        let v4 = graph.vector_type(i32_ty, 4).unwrap();
        let v2 = graph.vector_type(i32_ty, 2).unwrap();
        let x = graph.argument(v4, "x").unwrap();

        for opcode in Opcode::ALL.into_iter().filter(|op| op.is_cast()) {
            let widen = graph.instruction(opcode, v2, &[x]).unwrap();
            let keep = graph.instruction(opcode, v4, &[x]).unwrap();
            let bare = graph.instruction(opcode, v4, &[]).unwrap();
            assert!(!is_per_component_op(&graph, widen), "{opcode}");
            assert!(is_per_component_op(&graph, keep), "{opcode}");
            assert!(!is_per_component_op(&graph, bare), "{opcode}");
        }
    }

    #[test]
    fn test_excluded_opcodes() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);
        let i32_ty = graph.int_type(32).unwrap();
        let v4 = graph.vector_type(i32_ty, 4).unwrap();
        let ptr = graph.pointer_type();
        let void = graph.void_type();

        let x = graph.argument(v4, "x").unwrap();
        let p = graph.argument(ptr, "p").unwrap();
        let zero = graph.const_int(i32_ty, 0).unwrap();

        let excluded = [
            graph.instruction(Opcode::ExtractElement, i32_ty, &[x, zero]).unwrap(),
            graph.instruction(Opcode::ShuffleVector, v4, &[x, x]).unwrap(),
            graph.instruction(Opcode::Load, v4, &[p]).unwrap(),
            graph.instruction(Opcode::Store, void, &[x, p]).unwrap(),
            graph.instruction(Opcode::Call, v4, &[x]).unwrap(),
            graph.instruction(Opcode::VaArg, v4, &[p]).unwrap(),
            graph.instruction(Opcode::Ret, void, &[x]).unwrap(),
            graph.instruction(Opcode::Br, void, &[]).unwrap(),
            graph.phi(v4).unwrap(),
        ];
        for inst in excluded {
            assert!(!is_per_component_op(&graph, inst), "{}", graph.print());
        }

        let add = graph.instruction(Opcode::Add, v4, &[x, x]).unwrap();
        let select = graph.instruction(Opcode::Select, v4, &[x, x, x]).unwrap();
        assert!(is_per_component_op(&graph, add));
        assert!(is_per_component_op(&graph, select));
    }

    #[test]
    fn test_non_operations() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);
        let i32_ty = graph.int_type(32).unwrap();
        let c = graph.const_int(i32_ty, 1).unwrap();
        let x = graph.argument(i32_ty, "x").unwrap();
        let expr = graph.const_expr(i32_ty, Opcode::Add, &[c, c]).unwrap();

        assert!(!is_per_component_op(&graph, c));
        assert!(!is_per_component_op(&graph, x));
        assert!(!is_per_component_op(&graph, expr));
    }
}
