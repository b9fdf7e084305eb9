//! Tests for linear range mapping and complex bounding boxes

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use wallpattern::math::scaling::{bounding_box, extend_bounds, scale_between_ranges};

    // Tests midpoints map to midpoints
    // Verified by swapping output range endpoints
    #[test]
    fn test_scale_midpoint() {
        assert!((scale_between_ranges(5.0, 0.0, 10.0, -1.0, 1.0)).abs() < 1e-12);
        assert!((scale_between_ranges(0.0, 0.0, 10.0, -1.0, 1.0) + 1.0).abs() < 1e-12);
    }

    // Tests values outside the input range are not clamped
    // Verified by clamping the ratio to [0, 1]
    #[test]
    fn test_scale_extrapolates() {
        assert!((scale_between_ranges(20.0, 0.0, 10.0, 0.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((scale_between_ranges(-10.0, 0.0, 10.0, 0.0, 1.0) + 1.0).abs() < 1e-12);
    }

    // Tests bounding box spans both axes independently
    // Verified by tracking the corner with the smallest norm
    #[test]
    fn test_bounding_box_axes() {
        let values = [
            Complex64::new(1.0, -5.0),
            Complex64::new(-3.0, 2.0),
            Complex64::new(0.5, 7.0),
        ];
        let (min, max) = bounding_box(&values).unwrap();
        assert_eq!(min, Complex64::new(-3.0, -5.0));
        assert_eq!(max, Complex64::new(1.0, 7.0));
    }

    // Tests non-finite values are skipped
    // Verified by removing the finiteness filter
    #[test]
    fn test_bounding_box_skips_non_finite() {
        let values = [
            Complex64::new(f64::NAN, 0.0),
            Complex64::new(2.0, 2.0),
            Complex64::new(f64::INFINITY, -1.0),
        ];
        let (min, max) = bounding_box(&values).unwrap();
        assert_eq!(min, Complex64::new(2.0, 2.0));
        assert_eq!(max, Complex64::new(2.0, 2.0));
    }

    // Tests empty or all non-finite input has no bounds
    // Verified by seeding the fold with the origin
    #[test]
    fn test_bounding_box_empty() {
        assert!(bounding_box(&[] as &[Complex64]).is_none());
        assert!(bounding_box(&[Complex64::new(f64::NAN, f64::NAN)]).is_none());
    }

    // Tests incremental extension matches the batch box
    // Verified by replacing instead of extending the bounds
    #[test]
    fn test_extend_bounds_incrementally() {
        let bounds = extend_bounds(None, Complex64::new(1.0, 1.0));
        let bounds = extend_bounds(bounds, Complex64::new(-1.0, 4.0));
        let bounds = extend_bounds(bounds, Complex64::new(f64::NAN, 100.0));
        assert_eq!(
            bounds,
            Some((Complex64::new(-1.0, 1.0), Complex64::new(1.0, 4.0)))
        );
    }
}
