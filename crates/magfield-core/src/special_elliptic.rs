// ─────────────────────────────────────────────────────────────────────
// SCPN Magfield — Special Elliptic
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Elliptic integrals over caller-owned array representations.
//!
//! Thin dispatchers around [`magfield_math::elliptic`]. Values outside the
//! real domain of `m` are not rejected here; the kernels return NaN or inf
//! exactly as they would on a scalar.
//!
//! The incomplete forms return the representation of `phi`; `m` may be any
//! adapter whose shape broadcasts into it, a plain `f64` included.

use crate::array::ArrayAdapter;
use crate::dispatch::{lazy_apply, lazy_apply2};
use magfield_math::elliptic;
use magfield_types::error::MagfieldResult;

/// Complete elliptic integral of the first kind K(m), element-wise.
pub fn ellipk<A: ArrayAdapter + ?Sized>(m: &A) -> MagfieldResult<A::Output> {
    lazy_apply(elliptic::ellipk, m)
}

/// Complete elliptic integral of the second kind E(m), element-wise.
pub fn ellipe<A: ArrayAdapter + ?Sized>(m: &A) -> MagfieldResult<A::Output> {
    lazy_apply(elliptic::ellipe, m)
}

/// Incomplete elliptic integral of the first kind F(phi | m) over the
/// broadcast of `phi` and `m`.
pub fn ellipkinc<A, B>(phi: &A, m: &B) -> MagfieldResult<A::Output>
where
    A: ArrayAdapter + ?Sized,
    B: ArrayAdapter + ?Sized,
{
    lazy_apply2(elliptic::ellipkinc, phi, m)
}

/// Incomplete elliptic integral of the second kind E(phi | m) over the
/// broadcast of `phi` and `m`.
pub fn ellipeinc<A, B>(phi: &A, m: &B) -> MagfieldResult<A::Output>
where
    A: ArrayAdapter + ?Sized,
    B: ArrayAdapter + ?Sized,
{
    lazy_apply2(elliptic::ellipeinc, phi, m)
}
