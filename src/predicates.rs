//! Exact geometric predicates.
//!
//! With feature `geogram` (default): uses [geogram_predicates] (FFI to C++ geogram), the in-circle
//! test goes through the lifted orientation with heights `x² + y²` and symbolic perturbation.
//!
//! With feature `wasm`: uses pure-Rust [robust].

#![allow(non_snake_case)] // match geogram_predicates API (orient_2dlifted_SOS)

use crate::utils::types::Vertex2;

// Exactly one of geogram or wasm must be enabled.
#[cfg(not(any(feature = "geogram", feature = "wasm")))]
compile_error!(
    "Exactly one of features 'geogram' or 'wasm' must be enabled. Use default (geogram) or --no-default-features --features 'std,wasm' for WASM."
);

#[cfg(all(feature = "geogram", feature = "wasm"))]
compile_error!(
    "Features 'geogram' and 'wasm' are mutually exclusive. For WASM use --no-default-features --features 'std,wasm'."
);

#[cfg(all(feature = "geogram", not(feature = "wasm")))]
mod imp {
    use super::*;
    use geogram_predicates as gp;

    /// Lift onto the paraboloid, i.e. an unweighted power-circle height.
    #[inline]
    fn height(v: &Vertex2) -> f64 {
        v[0].powi(2) + v[1].powi(2)
    }

    #[inline]
    const fn sign_i16(r: i16) -> f64 {
        if r > 0 {
            1.0
        } else if r < 0 {
            -1.0
        } else {
            0.0
        }
    }

    #[inline]
    pub fn orient_2d(a: &Vertex2, b: &Vertex2, c: &Vertex2) -> f64 {
        sign_i16(gp::orient_2d(a, b, c))
    }

    #[inline]
    pub fn in_circle_2d(a: &Vertex2, b: &Vertex2, c: &Vertex2, p: &Vertex2) -> f64 {
        sign_i16(gp::orient_2dlifted_SOS(
            a,
            b,
            c,
            p,
            height(a),
            height(b),
            height(c),
            height(p),
        ))
    }
}

#[cfg(all(feature = "wasm", not(feature = "geogram")))]
mod imp {
    use super::*;
    use robust::{Coord, incircle, orient2d};

    /// Normalize predicate result to sign: -1.0, 0.0, or 1.0 so that `==` compares signs.
    #[inline]
    fn sign_f64(x: f64) -> f64 {
        if x > 0.0 {
            1.0
        } else if x < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    #[inline]
    fn coord2(p: &Vertex2) -> Coord<f64> {
        Coord { x: p[0], y: p[1] }
    }

    #[inline]
    pub fn orient_2d(a: &Vertex2, b: &Vertex2, c: &Vertex2) -> f64 {
        sign_f64(orient2d(coord2(a), coord2(b), coord2(c)))
    }

    #[inline]
    pub fn in_circle_2d(a: &Vertex2, b: &Vertex2, c: &Vertex2, p: &Vertex2) -> f64 {
        sign_f64(incircle(coord2(a), coord2(b), coord2(c), coord2(p)))
    }
}

/// Sign of the orientation of `abc`: `1.0` counter-clockwise, `-1.0` clockwise, `0.0` collinear.
pub use imp::orient_2d;

/// For a counter-clockwise `abc`, `1.0` if `p` lies inside the circumcircle.
///
/// The geogram backend never returns `0.0` (symbolic perturbation), so a cocircular `p` may be
/// reported inside.
pub use imp::in_circle_2d;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orient_2d() {
        assert_eq!(orient_2d(&[0.0, 0.0], &[1.0, 0.0], &[0.0, 1.0]), 1.0);
        assert_eq!(orient_2d(&[0.0, 0.0], &[0.0, 1.0], &[1.0, 0.0]), -1.0);
        assert_eq!(orient_2d(&[0.0, 0.0], &[1.0, 1.0], &[2.0, 2.0]), 0.0);
    }

    #[test]
    fn test_in_circle_2d() {
        let (a, b, c) = ([0.0, 0.0], [2.0, 0.0], [0.0, 2.0]);
        assert_eq!(in_circle_2d(&a, &b, &c, &[0.5, 0.5]), 1.0);
        assert_eq!(in_circle_2d(&a, &b, &c, &[5.0, 5.0]), -1.0);
    }
}
