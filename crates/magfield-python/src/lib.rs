// ─────────────────────────────────────────────────────────────────────
// SCPN Magfield — Magfield Python
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! PyO3 Python bindings for SCPN Magfield.
//!
//! Exposes the elliptic-integral dispatchers to numpy. Arguments are
//! array-like (numpy arrays of any numeric dtype, lists, scalars) and are
//! converted to float64; new numpy arrays of the broadcast shape come out.

use magfield_core::array::{ArrayAdapter, PlainArray};
use magfield_core::special_elliptic;
use magfield_types::error::{MagfieldError, MagfieldResult};
use ndarray::{ArrayD, CowArray};
use numpy::{AllowTypeChange, IntoPyArray, PyArrayDyn, PyArrayLikeDyn, PyReadonlyArrayDyn};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Float64 argument as accepted from Python.
type ArrayLike<'py> = PyArrayLikeDyn<'py, f64, AllowTypeChange>;

/// Read-only numpy array routed through the dispatchers.
struct NumpyArray<'a, 'py>(&'a PyReadonlyArrayDyn<'py, f64>);

impl<'py> ArrayAdapter for NumpyArray<'_, 'py> {
    type Output = Bound<'py, PyArrayDyn<f64>>;

    fn materialize(&self) -> PlainArray<'_> {
        CowArray::from(self.0.as_array())
    }

    fn wrap(plain: ArrayD<f64>, original: &Self) -> MagfieldResult<Self::Output> {
        Ok(plain.into_pyarray(original.0.py()))
    }
}

fn to_py_err(e: MagfieldError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ─── Complete integrals ───

/// Complete elliptic integral of the first kind K(m).
#[pyfunction]
fn ellipk<'py>(m: ArrayLike<'py>) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
    special_elliptic::ellipk(&NumpyArray(&m)).map_err(to_py_err)
}

/// Complete elliptic integral of the second kind E(m).
#[pyfunction]
fn ellipe<'py>(m: ArrayLike<'py>) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
    special_elliptic::ellipe(&NumpyArray(&m)).map_err(to_py_err)
}

// ─── Incomplete integrals ───

/// Incomplete elliptic integral of the first kind F(phi | m).
#[pyfunction]
fn ellipkinc<'py>(
    phi: ArrayLike<'py>,
    m: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
    special_elliptic::ellipkinc(&NumpyArray(&phi), &NumpyArray(&m)).map_err(to_py_err)
}

/// Incomplete elliptic integral of the second kind E(phi | m).
#[pyfunction]
fn ellipeinc<'py>(
    phi: ArrayLike<'py>,
    m: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
    special_elliptic::ellipeinc(&NumpyArray(&phi), &NumpyArray(&m)).map_err(to_py_err)
}

// ─── Module registration ───

/// SCPN Magfield — Rust-accelerated special functions.
#[pymodule]
fn magfield_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ellipk, m)?)?;
    m.add_function(wrap_pyfunction!(ellipe, m)?)?;
    m.add_function(wrap_pyfunction!(ellipkinc, m)?)?;
    m.add_function(wrap_pyfunction!(ellipeinc, m)?)?;
    Ok(())
}
