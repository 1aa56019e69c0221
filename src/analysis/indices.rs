//! Access chains as literal unsigned indices.
//!
//! Aggregate accesses such as `extractvalue` take their path as plain
//! unsigned indices rather than values. These helpers convert an operand
//! chain and report whether every element was a constant integer.

use crate::core::adaptor::IrAdaptor;
use crate::core::error::NonConstantIndex;

/// Convert `chain` into `out`, in order.
///
/// Each constant integer is stored as its sign-extended value narrowed to
/// `u32`. Returns the number of indices written, which is `chain.len()` on
/// success. On the first element that is not a constant integer, returns
/// [`NonConstantIndex`] whose `position` is the number of entries already
/// written; those entries are left in place.
///
/// `out` must be at least as long as `chain`.
pub fn convert_values_to_unsigned<A: IrAdaptor + ?Sized>(
    ir: &A,
    chain: &[A::ValueRef],
    out: &mut [u32],
) -> Result<usize, NonConstantIndex> {
    for (position, &val) in chain.iter().enumerate() {
        let Some(value) = ir.int_literal(val) else {
            log::trace!("access chain stops at non-constant index {position}");
            return Err(NonConstantIndex { position });
        };
        out[position] = value as u32;
    }

    Ok(chain.len())
}

/// Like [`convert_values_to_unsigned`], collecting into a fresh vector.
pub fn collect_unsigned_indices<A: IrAdaptor + ?Sized>(
    ir: &A,
    chain: &[A::ValueRef],
) -> Result<Vec<u32>, NonConstantIndex> {
    let mut out = vec![0; chain.len()];
    convert_values_to_unsigned(ir, chain, &mut out)?;
    Ok(out)
}
