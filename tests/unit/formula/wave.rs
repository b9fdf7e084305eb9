//! Tests for wave packets on hexagonal and custom lattices

#[cfg(test)]
mod tests {
    use crate::assert_complex_close;
    use num_complex::Complex64;
    use std::f64::consts::TAU;
    use wallpattern::PatternError;
    use wallpattern::formula::pattern::Formula;
    use wallpattern::formula::relationship::PowerPair;
    use wallpattern::formula::wave::{WavePacket, WaveTerm};
    use wallpattern::math::lattice::LatticeVectorPair;

    fn plane_wave(phase: f64) -> Complex64 {
        Complex64::from_polar(1.0, TAU * phase)
    }

    fn reference_point() -> Complex64 {
        Complex64::new(3.0_f64.sqrt(), -(3.0_f64.sqrt()))
    }

    fn reference_contributions() -> [Complex64; 3] {
        let root3 = 3.0_f64.sqrt();
        [
            plane_wave(3.0 + root3),
            plane_wave(-2.0 * root3),
            plane_wave(root3 - 3.0),
        ]
    }

    // Tests the hexagonal packet cycles its base pair
    // Verified by using n instead of -(n+m) in the last term
    #[test]
    fn test_hexagonal_packet_terms() {
        let packet = WavePacket::hexagonal(PowerPair::new(1, -2), Complex64::new(1.0, 0.0));
        let powers: Vec<PowerPair> = packet.terms().iter().map(|t| t.powers).collect();
        assert_eq!(
            powers,
            vec![PowerPair::new(1, -2), PowerPair::new(-2, 1), PowerPair::new(1, 1)]
        );
        assert_complex_close(packet.multiplier(), Complex64::new(1.0 / 3.0, 0.0));
        assert_eq!(packet.lattice(), &LatticeVectorPair::hexagonal());
        assert_eq!(packet.base_powers(), Some(PowerPair::new(1, -2)));
    }

    // Tests each term's contribution at the reference point
    // Verified by applying the packet multiplier to each contribution
    #[test]
    fn test_hexagonal_packet_contributions() {
        let packet = WavePacket::hexagonal(PowerPair::new(1, -2), Complex64::new(1.0, 0.0));
        let result = packet.calculate(reference_point());
        let expected = reference_contributions();

        assert_eq!(result.contribution_by_term.len(), 3);
        for (actual, wanted) in result.contribution_by_term.iter().zip(expected) {
            assert_complex_close(*actual, wanted);
        }
        let sum: Complex64 = expected.iter().sum();
        assert_complex_close(result.total, sum / 3.0);
    }

    // Tests a packet with unit multiplier sums its terms unscaled
    // Verified by always dividing the multiplier by three
    #[test]
    fn test_packet_with_explicit_terms() {
        let terms = vec![
            WaveTerm::new(Complex64::new(1.0, 0.0), PowerPair::new(1, -2)),
            WaveTerm::new(Complex64::new(1.0, 0.0), PowerPair::new(-2, 1)),
            WaveTerm::new(Complex64::new(1.0, 0.0), PowerPair::new(1, 1)),
        ];
        let packet = WavePacket::new(terms, Complex64::new(1.0, 0.0), LatticeVectorPair::hexagonal());
        let sum: Complex64 = reference_contributions().iter().sum();
        assert_complex_close(packet.calculate(reference_point()).total, sum);
    }

    // Tests calculate_lattice skips the coordinate conversion
    // Verified by converting the lattice point a second time
    #[test]
    fn test_calculate_lattice() {
        let packet = WavePacket::hexagonal(PowerPair::new(1, -2), Complex64::new(3.0, 0.0));
        let lattice_point = LatticeVectorPair::hexagonal().convert_to_lattice_coordinates(reference_point());
        let sum: Complex64 = reference_contributions().iter().sum();
        assert_complex_close(packet.calculate_lattice(lattice_point).total, sum);
    }

    // Tests multiple base terms each contribute their own cycle
    // Verified by cycling only the first base term
    #[test]
    fn test_hexagonal_from_terms() {
        let packet = WavePacket::hexagonal_from_terms(
            &[
                (PowerPair::new(1, -2), Complex64::new(1.0, 0.0)),
                (PowerPair::new(3, 0), Complex64::new(0.0, 2.0)),
            ],
            Complex64::new(3.0, 0.0),
        );
        assert_eq!(packet.terms().len(), 6);
        assert_eq!(packet.terms()[3].powers, PowerPair::new(3, 0));
        assert_eq!(packet.terms()[4].powers, PowerPair::new(0, -3));
        assert_eq!(packet.terms()[5].powers, PowerPair::new(-3, 3));
        assert_complex_close(packet.terms()[5].scale, Complex64::new(0.0, 2.0));
        assert_complex_close(packet.multiplier(), Complex64::new(1.0, 0.0));
    }

    // Tests JSON loading keeps terms unexpanded
    // Verified by expanding wave terms into cycles
    #[test]
    fn test_wave_from_json() {
        let packet = WavePacket::from_json(
            r#"{
                "multiplier": {"real": -1.0, "imaginary": 2e-2},
                "terms": [
                    {"power_n": 12, "power_m": -10, "multiplier": {"real": -1.0, "imaginary": 2e-2}}
                ]
            }"#,
        )
        .unwrap();
        assert_complex_close(packet.multiplier(), Complex64::new(-1.0, 2e-2));
        assert_eq!(packet.terms().len(), 1);
        assert_eq!(packet.terms()[0].powers.n, 12);
        assert_eq!(packet.lattice(), &LatticeVectorPair::hexagonal());
    }

    // Tests YAML loading with a custom lattice
    // Verified by ignoring lattice_vectors
    #[test]
    fn test_wave_from_yaml_with_lattice() {
        let packet = WavePacket::from_yaml(
            "multiplier:\n  real: 1.0\nterms:\n  - power_n: 1\n    power_m: 0\nlattice_vectors:\n  x: {real: 2.0}\n  y: {imaginary: 1.0}\n",
        )
        .unwrap();
        assert_complex_close(packet.lattice().x_lattice_vector(), Complex64::new(2.0, 0.0));
        // a = 0.25 along x gives a quarter turn
        let result = packet.calculate(Complex64::new(0.5, 0.0));
        assert_complex_close(result.total, Complex64::new(0.0, 1.0));
    }

    // Tests an invalid lattice in a document is rejected
    // Verified by skipping validation when loading
    #[test]
    fn test_wave_invalid_lattice() {
        let result = WavePacket::from_json(
            r#"{
                "terms": [{"power_n": 1, "power_m": 0}],
                "lattice_vectors": {"x": {"real": 1.0}, "y": {"real": -3.0}}
            }"#,
        );
        assert!(matches!(result, Err(PatternError::InvalidLattice { .. })));
    }
}
