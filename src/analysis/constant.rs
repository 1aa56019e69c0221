//! Literal extraction from constant values.
//!
//! A constant handed to these methods may still be an unfolded constant
//! expression (for example one with undefined operands). Extraction from
//! such a value is not fatal: a "non-simple constant" diagnostic is reported
//! with a continue action and a zero placeholder is returned so lowering can
//! keep going.

use super::Inspector;
use crate::core::adaptor::IrAdaptor;
use crate::core::diagnostics::Diagnostic;

impl<'a, A: IrAdaptor + ?Sized> Inspector<'a, A> {
    fn non_simple_constant(&self, expected: &str) {
        log::debug!("expected a folded {expected} literal, substituting zero");
        self.diags().report(Diagnostic::non_simple_constant());
    }

    /// Integer literal narrowed to 32 bits (wrapping).
    pub fn constant_int(&self, val: A::ValueRef) -> i32 {
        match self.ir().int_literal(val) {
            Some(value) => value as i32,
            None => {
                self.non_simple_constant("integer");
                0
            }
        }
    }

    /// Float literal converted to single precision.
    pub fn constant_float(&self, val: A::ValueRef) -> f32 {
        match self.ir().float_literal(val) {
            Some(lit) => lit.to_f32(),
            None => {
                self.non_simple_constant("float");
                0.0
            }
        }
    }

    /// Float literal converted to double precision.
    pub fn constant_double(&self, val: A::ValueRef) -> f64 {
        match self.ir().float_literal(val) {
            Some(lit) => lit.to_f64(),
            None => {
                self.non_simple_constant("float");
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::adaptor::FloatKind;
    use crate::core::diagnostics::{CollectingSink, NON_SIMPLE_CONSTANT};
    use crate::ir::{Graph, Opcode};
    use bumpalo::Bump;

    #[test]
    fn test_constant_int_narrows() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);
        let i32_ty = graph.int_type(32).unwrap();
        let i64_ty = graph.int_type(64).unwrap();
        let i8_ty = graph.int_type(8).unwrap();

        let a = graph.const_int(i32_ty, -17).unwrap();
        let b = graph.const_int(i64_ty, 0x1_0000_0002).unwrap();
        let c = graph.const_int(i8_ty, 0xfe).unwrap();
        let d = graph.const_int(i64_ty, i32::MAX as i64 + 1).unwrap();

        let sink = CollectingSink::new();
        let inspector = Inspector::new(&graph, &sink);
        assert_eq!(inspector.constant_int(a), -17);
        assert_eq!(inspector.constant_int(b), 2);
        assert_eq!(inspector.constant_int(c), -2);
        assert_eq!(inspector.constant_int(d), i32::MIN);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_float_precision_conversion() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);
        let f32_ty = graph.float_type(FloatKind::Single);
        let f64_ty = graph.float_type(FloatKind::Double);

        let single = graph.const_float(f32_ty, 0.1).unwrap();
        let double = graph.const_float(f64_ty, 0.1).unwrap();

        let sink = CollectingSink::new();
        let inspector = Inspector::new(&graph, &sink);
        assert_eq!(inspector.constant_float(single), 0.1f32);
        assert_eq!(inspector.constant_double(single), 0.1f32 as f64);
        assert_eq!(inspector.constant_double(double), 0.1);
        assert_eq!(inspector.constant_float(double), 0.1f32);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_half_literals_hold_half_precision() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);
        let f16_ty = graph.float_type(FloatKind::Half);

        let tenth = graph.const_float(f16_ty, 0.1).unwrap();
        let too_big = graph.const_float(f16_ty, 70000.0).unwrap();
        let too_small = graph.const_float(f16_ty, -70000.0).unwrap();
        let max = graph.const_float(f16_ty, 65504.0).unwrap();

        let sink = CollectingSink::new();
        let inspector = Inspector::new(&graph, &sink);
        assert_eq!(inspector.constant_double(tenth), 0.0999755859375);
        assert_eq!(inspector.constant_float(tenth), 0.0999755859375f32);
        assert_eq!(inspector.constant_double(too_big), f64::INFINITY);
        assert_eq!(inspector.constant_float(too_big), f32::INFINITY);
        assert_eq!(inspector.constant_double(too_small), f64::NEG_INFINITY);
        assert_eq!(inspector.constant_double(max), 65504.0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_non_simple_constant_reports_once_per_call() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);
        let i32_ty = graph.int_type(32).unwrap();
        let f32_ty = graph.float_type(FloatKind::Single);

        let u = graph.undef(i32_ty).unwrap();
        let one = graph.const_int(i32_ty, 1).unwrap();
        let expr = graph.const_expr(i32_ty, Opcode::Add, &[u, one]).unwrap();
        let half = graph.const_float(f32_ty, 0.5).unwrap();

        let sink = CollectingSink::new();
        let inspector = Inspector::new(&graph, &sink);

        assert_eq!(inspector.constant_int(expr), 0);
        assert_eq!(sink.len(), 1);
        assert_eq!(inspector.constant_int(half), 0);
        assert_eq!(sink.len(), 2);
        assert_eq!(inspector.constant_float(one), 0.0);
        assert_eq!(inspector.constant_double(expr), 0.0);
        assert_eq!(sink.len(), 4);

        for diag in sink.drain() {
            assert_eq!(diag.message, NON_SIMPLE_CONSTANT);
        }
    }
}
