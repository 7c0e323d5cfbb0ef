// ─────────────────────────────────────────────────────────────────────
// SCPN Magfield — Dispatch
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Lazy application of plain-array kernels to adapted inputs.
//!
//! Each call materialises its operands, runs the backend once through
//! [`magfield_math::ufunc`] and re-wraps the result in the representation of
//! the first operand. Shape and domain errors come from the backend
//! unchanged.

use crate::array::ArrayAdapter;
use magfield_math::ufunc::{apply_binary, apply_unary};
use magfield_types::error::MagfieldResult;

/// Apply a one-argument scalar kernel element-wise.
pub fn lazy_apply<A, F>(func: F, x: &A) -> MagfieldResult<A::Output>
where
    A: ArrayAdapter + ?Sized,
    F: Fn(f64) -> f64,
{
    let out = apply_unary(x.materialize().view(), func);
    A::wrap(out, x)
}

/// Apply a two-argument scalar kernel over the broadcast of `x` and `y`.
///
/// `y` may use a different representation; the result always takes the
/// representation of `x`, so the broadcast shape must fit it.
pub fn lazy_apply2<A, B, F>(func: F, x: &A, y: &B) -> MagfieldResult<A::Output>
where
    A: ArrayAdapter + ?Sized,
    B: ArrayAdapter + ?Sized,
    F: Fn(f64, f64) -> f64,
{
    let out = apply_binary(x.materialize().view(), y.materialize().view(), func)?;
    A::wrap(out, x)
}
