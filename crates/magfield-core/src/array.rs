// ─────────────────────────────────────────────────────────────────────
// SCPN Magfield — Array
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Array representations accepted by the special-function dispatchers.
//!
//! An [`ArrayAdapter`] knows how to hand its values to the backend as a
//! plain dynamic-rank `f64` array and how to rebuild its own representation
//! from the backend's result. Callers keep their array type end to end.

use magfield_types::error::MagfieldResult;
use ndarray::{
    arr0, Array, ArrayBase, ArrayD, ArrayView1, CowArray, Data, Dimension, Ix0, Ix1, IxDyn,
};

/// Plain numeric form consumed by the backend kernels.
pub type PlainArray<'a> = CowArray<'a, f64, IxDyn>;

/// Conversion between a caller's array representation and [`PlainArray`].
pub trait ArrayAdapter {
    /// Representation returned to the caller.
    type Output;

    /// Expose the values as a plain array, borrowing where the storage allows.
    fn materialize(&self) -> PlainArray<'_>;

    /// Rebuild the caller's representation from a backend result, using
    /// `original` as the template.
    fn wrap(plain: ArrayD<f64>, original: &Self) -> MagfieldResult<Self::Output>;
}

impl ArrayAdapter for f64 {
    type Output = f64;

    fn materialize(&self) -> PlainArray<'_> {
        CowArray::from(arr0(*self).into_dyn())
    }

    fn wrap(plain: ArrayD<f64>, _original: &Self) -> MagfieldResult<f64> {
        Ok(plain.into_dimensionality::<Ix0>()?.into_scalar())
    }
}

impl ArrayAdapter for [f64] {
    type Output = Vec<f64>;

    fn materialize(&self) -> PlainArray<'_> {
        CowArray::from(ArrayView1::from(self).into_dyn())
    }

    fn wrap(plain: ArrayD<f64>, _original: &Self) -> MagfieldResult<Vec<f64>> {
        Ok(plain.into_dimensionality::<Ix1>()?.iter().copied().collect())
    }
}

impl ArrayAdapter for Vec<f64> {
    type Output = Vec<f64>;

    fn materialize(&self) -> PlainArray<'_> {
        self.as_slice().materialize()
    }

    fn wrap(plain: ArrayD<f64>, original: &Self) -> MagfieldResult<Vec<f64>> {
        <[f64]>::wrap(plain, original.as_slice())
    }
}

/// Owned arrays, views and shared arrays of any dimensionality. The result
/// keeps the input's dimension type.
impl<S, D> ArrayAdapter for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    type Output = Array<f64, D>;

    fn materialize(&self) -> PlainArray<'_> {
        CowArray::from(self.view().into_dyn())
    }

    fn wrap(plain: ArrayD<f64>, _original: &Self) -> MagfieldResult<Array<f64, D>> {
        Ok(plain.into_dimensionality::<D>()?)
    }
}
