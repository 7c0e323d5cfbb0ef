// ─────────────────────────────────────────────────────────────────────
// SCPN Magfield — Ufunc
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Element-wise application of scalar kernels over dynamic-rank arrays.
//!
//! Binary kernels broadcast with NumPy semantics: shapes are aligned on
//! their trailing axes and an axis of length 1 stretches to match.

use magfield_types::error::{MagfieldError, MagfieldResult};
use ndarray::{ArrayD, ArrayViewD, Zip};

/// Broadcast shape of two operands, or `ShapeMismatch` if any aligned axis
/// differs and neither side is 1.
pub fn broadcast_shapes(lhs: &[usize], rhs: &[usize]) -> MagfieldResult<Vec<usize>> {
    let ndim = lhs.len().max(rhs.len());
    let lhs_pad = ndim - lhs.len();
    let rhs_pad = ndim - rhs.len();

    let mut shape = Vec::with_capacity(ndim);
    for axis in 0..ndim {
        let l = if axis < lhs_pad { 1 } else { lhs[axis - lhs_pad] };
        let r = if axis < rhs_pad { 1 } else { rhs[axis - rhs_pad] };
        let len = match (l, r) {
            (l, r) if l == r => l,
            (1, r) => r,
            (l, 1) => l,
            _ => {
                return Err(MagfieldError::ShapeMismatch {
                    lhs: lhs.to_vec(),
                    rhs: rhs.to_vec(),
                })
            }
        };
        shape.push(len);
    }
    Ok(shape)
}

/// Apply `f` to every element of `x`, preserving its shape.
pub fn apply_unary<F>(x: ArrayViewD<'_, f64>, f: F) -> ArrayD<f64>
where
    F: Fn(f64) -> f64,
{
    x.mapv(f)
}

/// Apply `f` pairwise over `x` and `y` broadcast to their common shape.
pub fn apply_binary<F>(
    x: ArrayViewD<'_, f64>,
    y: ArrayViewD<'_, f64>,
    f: F,
) -> MagfieldResult<ArrayD<f64>>
where
    F: Fn(f64, f64) -> f64,
{
    let shape = broadcast_shapes(x.shape(), y.shape())?;
    let mismatch = || MagfieldError::ShapeMismatch {
        lhs: x.shape().to_vec(),
        rhs: y.shape().to_vec(),
    };
    let xb = x.broadcast(shape.as_slice()).ok_or_else(mismatch)?;
    let yb = y.broadcast(shape.as_slice()).ok_or_else(mismatch)?;

    Ok(Zip::from(xb).and(yb).map_collect(|&a, &b| f(a, b)))
}
