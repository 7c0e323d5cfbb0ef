// ─────────────────────────────────────────────────────────────────────
// SCPN Magfield — Elliptic
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Complete and incomplete elliptic integrals of the first and second kind.
//!
//! Parameter convention matches scipy: m = k^2. Complete integrals use the
//! arithmetic-geometric mean (DLMF 19.8); incomplete integrals use Carlson's
//! symmetric forms R_F and R_D (DLMF 19.25.5, 19.25.9) on an amplitude
//! reduced to [-pi/2, pi/2].
//!
//! Outside the real domain the kernels return NaN rather than failing, and
//! the singular point m = 1 of K yields +inf, as `scipy.special` does.

use std::f64::consts::FRAC_PI_2;

const AGM_TOL: f64 = 2.0 * f64::EPSILON;
const MAX_AGM_ITER: usize = 64;

// Truncation error of the fifth-order Carlson series is O(tol^6).
const CARLSON_TOL: f64 = 1e-3;
const MAX_CARLSON_ITER: usize = 100;

/// Complete elliptic integral of the first kind K(m).
///
/// Matches `scipy.special.ellipk(m)`: defined for m < 1, +inf at m = 1,
/// NaN for m > 1.
pub fn ellipk(m: f64) -> f64 {
    if m.is_nan() || m > 1.0 {
        return f64::NAN;
    }
    if m == 1.0 {
        return f64::INFINITY;
    }
    if m == f64::NEG_INFINITY {
        return 0.0;
    }

    FRAC_PI_2 / agm(1.0, (1.0 - m).sqrt())
}

/// Complete elliptic integral of the second kind E(m).
///
/// Matches `scipy.special.ellipe(m)`: defined for m <= 1 with E(1) = 1,
/// NaN for m > 1.
pub fn ellipe(m: f64) -> f64 {
    if m.is_nan() || m > 1.0 {
        return f64::NAN;
    }
    if m == 1.0 {
        return 1.0;
    }
    if m == f64::NEG_INFINITY {
        return f64::INFINITY;
    }

    // E(m) = K(m) * (1 - sum_n 2^(n-1) c_n^2), with c_0^2 = m
    let mut a = 1.0;
    let mut b = (1.0 - m).sqrt();
    let mut weight = 0.5;
    let mut sum = weight * m;
    for _ in 0..MAX_AGM_ITER {
        if (a - b).abs() <= AGM_TOL * a {
            break;
        }
        let c = 0.5 * (a - b);
        let next = 0.5 * (a + b);
        b = (a * b).sqrt();
        a = next;
        weight *= 2.0;
        sum += weight * c * c;
    }

    FRAC_PI_2 / a * (1.0 - sum)
}

/// Incomplete elliptic integral of the first kind F(phi | m).
///
/// Matches `scipy.special.ellipkinc(phi, m)`. The amplitude is unrestricted;
/// each half-turn of phi adds 2K(m). At m = 1 the integral diverges for
/// |phi| >= pi/2 and the result is +inf whatever the sign of phi.
pub fn ellipkinc(phi: f64, m: f64) -> f64 {
    if phi.is_nan() || m.is_nan() || m > 1.0 {
        return f64::NAN;
    }
    if phi.is_infinite() || m.is_infinite() {
        return match (phi.is_finite(), m.is_finite()) {
            (false, true) => phi,
            (true, false) => 0.0,
            _ => f64::NAN,
        };
    }
    if m == 0.0 {
        return phi;
    }
    if m == 1.0 {
        if phi.abs() >= FRAC_PI_2 {
            return f64::INFINITY;
        }
        return phi.tan().asinh();
    }

    let (n, phi_r) = reduce_amplitude(phi);
    let (s, c) = phi_r.sin_cos();
    let f = s * carlson_rf(c * c, 1.0 - m * s * s, 1.0);
    if n == 0.0 {
        f
    } else {
        f + n * ellipk(m)
    }
}

/// Incomplete elliptic integral of the second kind E(phi | m).
///
/// Matches `scipy.special.ellipeinc(phi, m)`. Each half-turn of phi adds
/// 2E(m).
pub fn ellipeinc(phi: f64, m: f64) -> f64 {
    if phi.is_nan() || m.is_nan() || m > 1.0 {
        return f64::NAN;
    }
    if phi.is_infinite() {
        return phi;
    }
    if m.is_infinite() {
        return -m;
    }
    if m == 0.0 {
        return phi;
    }

    let (n, phi_r) = reduce_amplitude(phi);
    let (s, c) = phi_r.sin_cos();
    let e = if m == 1.0 {
        s
    } else {
        let x = c * c;
        let y = 1.0 - m * s * s;
        s * carlson_rf(x, y, 1.0) - m / 3.0 * s * s * s * carlson_rd(x, y, 1.0)
    };
    if n == 0.0 {
        e
    } else {
        e + n * ellipe(m)
    }
}

fn agm(mut a: f64, mut b: f64) -> f64 {
    for _ in 0..MAX_AGM_ITER {
        if (a - b).abs() <= AGM_TOL * a {
            break;
        }
        let next = 0.5 * (a + b);
        b = (a * b).sqrt();
        a = next;
    }
    a
}

/// Split phi into `n * pi/2 + phi_r` with n even and |phi_r| <= pi/2.
fn reduce_amplitude(phi: f64) -> (f64, f64) {
    let mut n = (phi / FRAC_PI_2).floor();
    if n % 2.0 != 0.0 {
        n += 1.0;
    }
    (n, phi - n * FRAC_PI_2)
}

/// Carlson's R_F(x, y, z) by the duplication theorem. At most one argument may be zero.
fn carlson_rf(mut x: f64, mut y: f64, mut z: f64) -> f64 {
    for _ in 0..MAX_CARLSON_ITER {
        let mu = (x + y + z) / 3.0;
        let dx = 1.0 - x / mu;
        let dy = 1.0 - y / mu;
        let dz = 1.0 - z / mu;
        if dx.abs().max(dy.abs()).max(dz.abs()) < CARLSON_TOL {
            let e2 = dx * dy - dz * dz;
            let e3 = dx * dy * dz;
            return (1.0 - e2 / 10.0 + e3 / 14.0 + e2 * e2 / 24.0 - 3.0 * e2 * e3 / 44.0)
                / mu.sqrt();
        }

        let (sx, sy, sz) = (x.sqrt(), y.sqrt(), z.sqrt());
        let lambda = sx * (sy + sz) + sy * sz;
        x = 0.25 * (x + lambda);
        y = 0.25 * (y + lambda);
        z = 0.25 * (z + lambda);
    }
    f64::NAN
}

/// Carlson's R_D(x, y, z) by the duplication theorem.
fn carlson_rd(mut x: f64, mut y: f64, mut z: f64) -> f64 {
    let mut sum = 0.0;
    let mut fac = 1.0;
    for _ in 0..MAX_CARLSON_ITER {
        let mu = (x + y + 3.0 * z) / 5.0;
        let dx = 1.0 - x / mu;
        let dy = 1.0 - y / mu;
        let dz = 1.0 - z / mu;
        if dx.abs().max(dy.abs()).max(dz.abs()) < CARLSON_TOL {
            let ea = dx * dy;
            let eb = dz * dz;
            let ec = ea - eb;
            let ed = ea - 6.0 * eb;
            let ee = ed + ec + ec;
            let series = 1.0
                + ed * (-3.0 / 14.0 + 9.0 / 88.0 * ed - 9.0 / 52.0 * dz * ee)
                + dz * (ee / 6.0 + dz * (-9.0 / 22.0 * ec + 3.0 / 26.0 * dz * ea));
            return 3.0 * sum + fac * series / (mu * mu.sqrt());
        }

        let (sx, sy, sz) = (x.sqrt(), y.sqrt(), z.sqrt());
        let lambda = sx * (sy + sz) + sy * sz;
        sum += fac / (sz * (z + lambda));
        fac *= 0.25;
        x = 0.25 * (x + lambda);
        y = 0.25 * (y + lambda);
        z = 0.25 * (z + lambda);
    }
    f64::NAN
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    /// Composite Simpson quadrature of the Legendre integrands, used as an
    /// independent check on the Carlson path.
    fn simpson(phi: f64, n: usize, f: impl Fn(f64) -> f64) -> f64 {
        let h = phi / n as f64;
        let mut acc = f(0.0) + f(phi);
        for i in 1..n {
            let w = if i % 2 == 1 { 4.0 } else { 2.0 };
            acc += w * f(i as f64 * h);
        }
        acc * h / 3.0
    }

    // Reference values from scipy.special
    #[test]
    fn test_ellipk_at_zero() {
        assert_eq!(ellipk(0.0), FRAC_PI_2, "K(0) = pi/2");
    }

    #[test]
    fn test_ellipk_reference_values() {
        let cases: &[(f64, f64)] = &[
            (0.0, FRAC_PI_2),
            (0.1, 1.6124413487202192),
            (0.2, 1.659623598610528),
            (0.3, 1.713889448178791),
            (0.4, 1.7775193714912534),
            (0.5, 1.8540746773013719),
            (0.6, 1.9495677498060258),
            (0.7, 2.075363135292469),
            (0.8, 2.257205326820854),
            (0.9, 2.5780921133481733),
            (0.95, 2.9083372484445515),
            (0.99, 3.6956373629898747),
            (0.999, 4.841132560550296),
            (-1.0, 1.3110287771460599),
            (-10.0, 0.7908718902387385),
        ];
        for &(m, expected) in cases {
            let got = ellipk(m);
            let err = (got - expected).abs();
            assert!(
                err < 1e-12,
                "K({m}) = {got}, expected {expected}, error = {err}"
            );
        }
    }

    #[test]
    fn test_ellipe_at_zero() {
        assert_eq!(ellipe(0.0), FRAC_PI_2, "E(0) = pi/2");
    }

    #[test]
    fn test_ellipe_reference_values() {
        let cases: &[(f64, f64)] = &[
            (0.0, FRAC_PI_2),
            (0.1, 1.5307576368977633),
            (0.2, 1.489035058095853),
            (0.3, 1.4453630644126654),
            (0.4, 1.3993921388974322),
            (0.5, 1.3506438810476755),
            (0.6, 1.2984280350469133),
            (0.7, 1.2416705679458229),
            (0.8, 1.1784899243278386),
            (0.9, 1.1047747327040733),
            (0.95, 1.0604737277662784),
            (0.99, 1.015993545025224),
            (0.999, 1.0021707908344453),
            (-1.0, 1.910098894513856),
            (-10.0, 3.639138038417768),
        ];
        for &(m, expected) in cases {
            let got = ellipe(m);
            let err = (got - expected).abs();
            assert!(
                err < 1e-12,
                "E({m}) = {got}, expected {expected}, error = {err}"
            );
        }
    }

    #[test]
    fn test_ellipe_at_one() {
        assert_eq!(ellipe(1.0), 1.0, "E(1) = 1");
    }

    #[test]
    fn test_complete_domain_edges() {
        assert_eq!(ellipk(1.0), f64::INFINITY);
        assert!(ellipk(1.5).is_nan());
        assert!(ellipe(1.5).is_nan());
        assert!(ellipk(f64::NAN).is_nan());
        assert!(ellipe(f64::NAN).is_nan());
        assert_eq!(ellipk(f64::NEG_INFINITY), 0.0);
        assert_eq!(ellipe(f64::NEG_INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_incomplete_reference_values() {
        // (phi, m, F(phi|m), E(phi|m))
        let cases: &[(f64, f64, f64, f64)] = &[
            (0.5, 0.3, 0.5061402119623553, 0.4939911447289684),
            (1.0, 0.5, 1.0832167728451688, 0.9273298836244401),
            (1.2, 0.9, 1.5648981345066715, 0.967037660288675),
            (-0.7, 0.6, -0.7353391598852432, -0.6675875498135809),
            (2.5, 0.4, 2.896058051104786, 2.1737819863834807),
            (4.0, 0.8, 5.467873527678047, 3.1362364876746756),
            (1.0, -2.0, 0.8295608857883413, 1.2303948166988862),
            (0.3, 0.99, 0.30455600934436817, 0.2955656190853092),
        ];
        for &(phi, m, f_ref, e_ref) in cases {
            let f = ellipkinc(phi, m);
            let e = ellipeinc(phi, m);
            assert!(
                (f - f_ref).abs() < 1e-12,
                "F({phi}|{m}) = {f}, expected {f_ref}"
            );
            assert!(
                (e - e_ref).abs() < 1e-12,
                "E({phi}|{m}) = {e}, expected {e_ref}"
            );
        }
    }

    #[test]
    fn test_incomplete_matches_quadrature() {
        let (phi, m) = (1.1, 0.7);
        let f_quad = simpson(phi, 2000, |t| 1.0 / (1.0 - m * t.sin().powi(2)).sqrt());
        let e_quad = simpson(phi, 2000, |t| (1.0 - m * t.sin().powi(2)).sqrt());
        assert!((ellipkinc(phi, m) - f_quad).abs() < 1e-11);
        assert!((ellipeinc(phi, m) - e_quad).abs() < 1e-11);
    }

    #[test]
    fn test_incomplete_at_zero_parameter_is_identity() {
        for &phi in &[-7.5, -PI, -0.25, 0.0, 0.25, 1.0, PI, 12.0] {
            assert_eq!(ellipkinc(phi, 0.0), phi);
            assert_eq!(ellipeinc(phi, 0.0), phi);
        }
    }

    #[test]
    fn test_incomplete_at_quarter_period_is_complete() {
        for &m in &[-3.0, 0.0, 0.2, 0.5, 0.8, 0.99] {
            assert!((ellipkinc(FRAC_PI_2, m) - ellipk(m)).abs() < 1e-13);
            assert!((ellipeinc(FRAC_PI_2, m) - ellipe(m)).abs() < 1e-13);
        }
    }

    #[test]
    fn test_incomplete_at_unit_parameter() {
        let phi: f64 = 0.8;
        assert!((ellipkinc(phi, 1.0) - phi.sin().atanh()).abs() < 1e-14);
        assert_eq!(ellipkinc(FRAC_PI_2, 1.0), f64::INFINITY);
        assert_eq!(ellipkinc(-2.0, 1.0), f64::INFINITY);
        assert_eq!(ellipkinc(-FRAC_PI_2, 1.0), f64::INFINITY);
        assert!((ellipkinc(-phi, 1.0) + phi.sin().atanh()).abs() < 1e-14);
        assert!((ellipeinc(phi, 1.0) - phi.sin()).abs() < 1e-15);
        assert!((ellipeinc(PI, 1.0) - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_incomplete_domain_edges() {
        assert!(ellipkinc(0.5, 1.5).is_nan());
        assert!(ellipeinc(0.5, 1.5).is_nan());
        assert!(ellipkinc(f64::NAN, 0.5).is_nan());
        assert!(ellipeinc(0.5, f64::NAN).is_nan());
        assert_eq!(ellipkinc(f64::INFINITY, 0.5), f64::INFINITY);
        assert_eq!(ellipeinc(f64::NEG_INFINITY, 0.5), f64::NEG_INFINITY);
        assert_eq!(ellipkinc(0.5, f64::NEG_INFINITY), 0.0);
        assert_eq!(ellipeinc(0.5, f64::NEG_INFINITY), f64::INFINITY);
        assert!(ellipkinc(f64::INFINITY, f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_reduce_amplitude() {
        assert_eq!(reduce_amplitude(0.3), (0.0, 0.3));
        assert_eq!(reduce_amplitude(-0.3), (0.0, -0.3));
        let (n, r) = reduce_amplitude(PI + 0.2);
        assert_eq!(n, 2.0);
        assert!((r - 0.2).abs() < 1e-15);
        let (n, r) = reduce_amplitude(-PI - 0.2);
        assert_eq!(n, -2.0);
        assert!((r + 0.2).abs() < 1e-15);
    }
}
