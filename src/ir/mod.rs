//! Reference IR for the lane analyses.
//!
//! This module provides a small SSA value graph that implements
//! [`IrAdaptor`](crate::core::IrAdaptor), so the analyses can be exercised
//! without the surrounding compiler. The graph is printable:
//!
//! ```text
//! %color = argument <4 x float>
//! %1 = constant float 0.5
//! %2 = constant <4 x float> %1, %1, %1, %1
//! %sum = fadd <4 x float> %color, %2
//! %len = call fLength float %sum
//! ```

use std::fmt;

pub mod adaptor;
pub mod graph;
pub mod intrinsic;
pub mod opcode;
pub mod types;

pub use graph::{Graph, Node, Payload, ValueRef};
pub use intrinsic::{Intrinsic, IntrinsicCategory};
pub use opcode::{OpInfo, Opcode};
pub use types::{TypeData, TypeRef};

use crate::core::adaptor::ValueKind;

/// Remove the `.i` suffix inlining appends to value names.
pub fn strip_inline_suffix(name: &str) -> &str {
    name.strip_suffix(".i").unwrap_or(name)
}

impl Graph<'_> {
    fn value_label(&self, val: ValueRef) -> String {
        let name = self.node(val).name;
        if name.is_empty() {
            format!("%{}", val.0)
        } else {
            format!("%{name}")
        }
    }

    /// Render the whole graph, one value per line.
    pub fn print(&self) -> String {
        let mut output = String::new();
        for val in self.values() {
            let node = self.node(val);
            let ty = self.type_name(node.ty);
            let operands: Vec<String> =
                node.operands.iter().map(|&op| self.value_label(op)).collect();
            let operands = operands.join(", ");

            let body = match (node.kind, node.payload) {
                (ValueKind::ConstantInt, Payload::Int(value)) => format!("constant {ty} {value}"),
                (ValueKind::ConstantFloat, Payload::Float(lit)) => {
                    format!("constant {ty} {}", lit.to_f64())
                }
                (ValueKind::ConstantAggregate, _) => format!("constant {ty} {operands}"),
                (ValueKind::ConstantExpr, Payload::Op(op)) => {
                    format!("constexpr {op} {ty} {operands}")
                }
                (ValueKind::Undef, _) => format!("undef {ty}"),
                (ValueKind::Argument, _) => format!("argument {ty}"),
                (ValueKind::Instruction, Payload::Intrinsic(intr)) => {
                    format!("call {intr} {ty} {operands}")
                }
                (ValueKind::Instruction, Payload::Op(op)) => format!("{op} {ty} {operands}"),
                (kind, payload) => format!("<malformed {kind:?} {payload:?}>"),
            };

            output.push_str(&format!("{} = {}\n", self.value_label(val), body.trim_end()));
        }
        output
    }
}

impl fmt::Display for Graph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::adaptor::FloatKind;
    use bumpalo::Bump;

    #[test]
    fn test_strip_inline_suffix() {
        assert_eq!(strip_inline_suffix("tmp.i"), "tmp");
        assert_eq!(strip_inline_suffix("tmp"), "tmp");
        assert_eq!(strip_inline_suffix(".i"), "");
        assert_eq!(strip_inline_suffix("i"), "i");
        assert_eq!(strip_inline_suffix(""), "");
    }

    #[test]
    fn test_print_graph() {
        let arena = Bump::new();
        let mut graph = Graph::new(&arena);

        let f32_ty = graph.float_type(FloatKind::Single);
        let v4 = graph.vector_type(f32_ty, 4).unwrap();
        let color = graph.argument(v4, "color").unwrap();
        let half = graph.const_float(f32_ty, 0.5).unwrap();
        let splat = graph.const_splat(v4, half).unwrap();
        let sum = graph.instruction(Opcode::FAdd, v4, &[color, splat]).unwrap();
        graph.set_name(sum, "sum").unwrap();
        let len = graph.call_intrinsic(Intrinsic::FLength, f32_ty, &[sum]).unwrap();
        graph.set_name(len, "len").unwrap();
        graph.undef(v4).unwrap();

        let output = graph.to_string();
        let expected = [
            "%color = argument <4 x float>",
            "%1 = constant float 0.5",
            "%2 = constant <4 x float> %1, %1, %1, %1",
            "%sum = fadd <4 x float> %color, %2",
            "%len = call fLength float %sum",
            "%5 = undef <4 x float>",
        ];
        for line in expected {
            assert!(output.contains(line), "missing '{line}' in:\n{output}");
        }
    }
}
