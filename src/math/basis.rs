//! Basis functions a formula term is evaluated with
//!
//! Every term multiplies a primary factor of `z` with a conjugate factor of
//! `conj(z)`. The flavour of a term decides what those factors are, so the
//! relationship resolution and summation in [`crate::formula::term`] are
//! written once and parameterized over a [`Basis`].

use num_complex::Complex64;
use std::f64::consts::TAU;

/// Strategy for the two factors of a formula term
pub trait Basis {
    /// Factor applied to the sample point for the first power of a pairing
    fn primary(z: Complex64, power: i32) -> Complex64;

    /// Factor applied to the complex conjugate for the second power of a pairing
    fn conjugate(z_conjugate: Complex64, power: i32) -> Complex64;
}

/// `z^n · conj(z)^m`, used by rosettes
///
/// Negative powers divide, so evaluating at the origin yields non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerBasis;

impl Basis for PowerBasis {
    fn primary(z: Complex64, power: i32) -> Complex64 {
        z.powi(power)
    }

    fn conjugate(z_conjugate: Complex64, power: i32) -> Complex64 {
        z_conjugate.powi(power)
    }
}

/// `e^(i·n·z) · e^(-i·m·conj(z))`, used by friezes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EulerBasis;

impl Basis for EulerBasis {
    fn primary(z: Complex64, power: i32) -> Complex64 {
        (Complex64::i() * z * f64::from(power)).exp()
    }

    fn conjugate(z_conjugate: Complex64, power: i32) -> Complex64 {
        (-Complex64::i() * z_conjugate * f64::from(power)).exp()
    }
}

/// Plane wave over lattice coordinates, used by wave packets
///
/// The sample point must already be expressed as `a + bi` in lattice
/// coordinates. A term `(n, m)` then evaluates to `e^(2πi(n·a + m·b))`;
/// the conjugate factor reads `b` back out of `conj(z)`, hence the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WaveBasis;

impl Basis for WaveBasis {
    fn primary(z: Complex64, power: i32) -> Complex64 {
        Complex64::from_polar(1.0, TAU * f64::from(power) * z.re)
    }

    fn conjugate(z_conjugate: Complex64, power: i32) -> Complex64 {
        Complex64::from_polar(1.0, -TAU * f64::from(power) * z_conjugate.im)
    }
}
