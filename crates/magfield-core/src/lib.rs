// ─────────────────────────────────────────────────────────────────────
// SCPN Magfield — Magfield Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Special-function entry points for magnetic-field computation.
//!
//! Callers pass scalars, `Vec`s, slices or any `ndarray` array and get the
//! same representation back.

pub mod array;
pub mod dispatch;
pub mod special_elliptic;
