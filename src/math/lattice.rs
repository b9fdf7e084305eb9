//! Lattice basis vectors and conversion into lattice coordinates

use crate::io::configuration::{COLLINEAR_TOLERANCE, LATTICE_SWAP_THRESHOLD};
use crate::io::error::{PatternError, Result};
use num_complex::Complex64;

/// Two basis vectors defining a periodic tiling of the plane
///
/// Construction through [`LatticeVectorPair::new`] guarantees neither vector
/// is zero and the pair is not collinear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeVectorPair {
    x_lattice_vector: Complex64,
    y_lattice_vector: Complex64,
}

impl LatticeVectorPair {
    /// Create a validated lattice pair
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidLattice`] if either vector is `(0,0)`
    /// or the two vectors are collinear
    pub fn new(x_lattice_vector: Complex64, y_lattice_vector: Complex64) -> Result<Self> {
        let pair = Self {
            x_lattice_vector,
            y_lattice_vector,
        };
        pair.validate()?;
        Ok(pair)
    }

    /// Unit vectors 120° apart, the basis of every hexagonal wave packet
    pub fn hexagonal() -> Self {
        Self {
            x_lattice_vector: Complex64::new(1.0, 0.0),
            y_lattice_vector: Complex64::new(-0.5, 3.0_f64.sqrt() / 2.0),
        }
    }

    /// First basis vector
    pub const fn x_lattice_vector(&self) -> Complex64 {
        self.x_lattice_vector
    }

    /// Second basis vector
    pub const fn y_lattice_vector(&self) -> Complex64 {
        self.y_lattice_vector
    }

    /// Check the pair can span the plane
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidLattice`] if either vector is `(0,0)`
    /// or the two vectors are collinear
    pub fn validate(&self) -> Result<()> {
        let (x, y) = (self.x_lattice_vector, self.y_lattice_vector);
        if is_zero(x) || is_zero(y) {
            return Err(PatternError::InvalidLattice {
                x,
                y,
                reason: "lattice vectors cannot be (0,0)",
            });
        }
        if are_collinear(x, y) {
            return Err(PatternError::InvalidLattice {
                x,
                y,
                reason: "vectors cannot be collinear",
            });
        }
        Ok(())
    }

    /// Express a point as `a + bi` where `point = a·x + b·y`
    ///
    /// The solve divides by the real part of the first vector, so the
    /// vectors trade places when that real part is close to zero. Both
    /// vectors having near-zero real parts is not supported.
    pub fn convert_to_lattice_coordinates(&self, point: Complex64) -> Complex64 {
        let swapped = self.x_lattice_vector.re < LATTICE_SWAP_THRESHOLD;
        let (v1, v2) = if swapped {
            (self.y_lattice_vector, self.x_lattice_vector)
        } else {
            (self.x_lattice_vector, self.y_lattice_vector)
        };

        let determinant = v1.re.mul_add(v2.im, -(v1.im * v2.re));
        let b = point.im.mul_add(v1.re, -(point.re * v1.im)) / determinant;
        let a = b.mul_add(-v2.re, point.re) / v1.re;

        if swapped {
            Complex64::new(b, a)
        } else {
            Complex64::new(a, b)
        }
    }
}

fn is_zero(vector: Complex64) -> bool {
    vector.re == 0.0 && vector.im == 0.0
}

fn are_collinear(x: Complex64, y: Complex64) -> bool {
    let absolute_dot_product = x.re.mul_add(y.re, x.im * y.im).abs();
    x.norm().mul_add(-y.norm(), absolute_dot_product).abs() < COLLINEAR_TOLERANCE
}
