//! Tests for hexagonal wallpaper evaluation and symmetry synthesis

#[cfg(test)]
mod tests {
    use crate::assert_complex_close;
    use num_complex::Complex64;
    use std::f64::consts::TAU;
    use wallpattern::PatternError;
    use wallpattern::analysis::hexagonal::HexagonalSymmetry;
    use wallpattern::formula::hexagonal::{HexagonalWallpaperFormula, PowerTerm};
    use wallpattern::formula::pattern::Formula;
    use wallpattern::formula::relationship::PowerPair;
    use wallpattern::formula::wave::WavePacket;

    fn unit_term(n: i32, m: i32) -> PowerTerm {
        PowerTerm::new(PowerPair::new(n, m), Complex64::new(1.0, 0.0))
    }

    fn base_pairs(formula: &HexagonalWallpaperFormula) -> Vec<PowerPair> {
        formula
            .wave_packets()
            .iter()
            .filter_map(WavePacket::base_powers)
            .collect()
    }

    // Tests the averaged packet value at the reference point
    // Verified by skipping the division by three
    #[test]
    fn test_hexagonal_formula_averages_packet() {
        let formula =
            HexagonalWallpaperFormula::from_power_terms(&[unit_term(1, -2)], Complex64::new(1.0, 0.0));
        let root3 = 3.0_f64.sqrt();
        let expected = (Complex64::from_polar(1.0, TAU * (3.0 + root3))
            + Complex64::from_polar(1.0, TAU * (-2.0 * root3))
            + Complex64::from_polar(1.0, TAU * (root3 - 3.0)))
            / 3.0;

        let result = formula.calculate(Complex64::new(root3, -root3));
        assert_complex_close(result.total, expected);
        assert_eq!(result.contribution_by_term.len(), 1);
        assert_complex_close(result.contribution_by_term[0], expected);
    }

    // Tests the overall multiplier scales the total but not packet contributions
    // Verified by scaling each contribution
    #[test]
    fn test_overall_multiplier() {
        let formula = HexagonalWallpaperFormula::from_power_terms(
            &[unit_term(1, -2), unit_term(2, 1)],
            Complex64::new(0.0, 2.0),
        );
        let z = Complex64::new(0.3, -0.8);
        let result = formula.calculate(z);
        let packet_sum: Complex64 = result.contribution_by_term.iter().sum();
        assert_complex_close(result.total, packet_sum * Complex64::new(0.0, 2.0));
        assert_complex_close(
            result.contribution_by_term[1],
            WavePacket::hexagonal(PowerPair::new(2, 1), Complex64::new(1.0, 0.0))
                .calculate(z)
                .total,
        );
    }

    // Tests p6m synthesis emits negated, swapped and negated swapped packets
    // Verified by reordering the extra packets
    #[test]
    fn test_with_symmetry_p6m() {
        let desired = HexagonalSymmetry {
            p3: true,
            p6m: true,
            ..HexagonalSymmetry::default()
        };
        let formula = HexagonalWallpaperFormula::with_symmetry(
            &[unit_term(1, -2)],
            Complex64::new(1.0, 0.0),
            &desired,
        )
        .unwrap();

        assert_eq!(
            base_pairs(&formula),
            vec![
                PowerPair::new(1, -2),
                PowerPair::new(-1, 2),
                PowerPair::new(-2, 1),
                PowerPair::new(2, -1),
            ]
        );
        assert_eq!(
            formula.find_symmetries(),
            HexagonalSymmetry {
                p3: true,
                p6m: true,
                ..HexagonalSymmetry::default()
            }
        );
    }

    // Tests each single extension adds exactly one packet per base term
    // Verified by emitting the swapped packet for p3m1
    #[test]
    fn test_with_symmetry_single_extensions() {
        let cases = [
            (
                HexagonalSymmetry {
                    p31m: true,
                    ..HexagonalSymmetry::default()
                },
                PowerPair::new(-3, 8),
            ),
            (
                HexagonalSymmetry {
                    p3m1: true,
                    ..HexagonalSymmetry::default()
                },
                PowerPair::new(3, -8),
            ),
            (
                HexagonalSymmetry {
                    p6: true,
                    ..HexagonalSymmetry::default()
                },
                PowerPair::new(-8, 3),
            ),
        ];

        for (desired, extra) in cases {
            let formula = HexagonalWallpaperFormula::with_symmetry(
                &[unit_term(8, -3)],
                Complex64::new(1.0, 0.0),
                &desired,
            )
            .unwrap();
            assert_eq!(base_pairs(&formula), vec![PowerPair::new(8, -3), extra]);

            let mut found = formula.find_symmetries();
            found.p3 = false;
            assert_eq!(found, desired);
        }
    }

    // Tests extra packets keep their base term's multiplier
    // Verified by giving extra packets a unit multiplier
    #[test]
    fn test_with_symmetry_multiplier_per_term() {
        let desired = HexagonalSymmetry {
            p6: true,
            ..HexagonalSymmetry::default()
        };
        let formula = HexagonalWallpaperFormula::with_symmetry(
            &[
                PowerTerm::new(PowerPair::new(1, 0), Complex64::new(3.0, 0.0)),
                PowerTerm::new(PowerPair::new(0, 2), Complex64::new(0.0, 6.0)),
            ],
            Complex64::new(1.0, 0.0),
            &desired,
        )
        .unwrap();

        let multipliers: Vec<Complex64> = formula
            .wave_packets()
            .iter()
            .map(WavePacket::multiplier)
            .collect();
        assert_eq!(multipliers.len(), 4);
        assert_complex_close(multipliers[1], Complex64::new(1.0, 0.0));
        assert_complex_close(multipliers[3], Complex64::new(0.0, 2.0));
    }

    // Tests combined extensions are rejected
    // Verified by accepting any combination that includes p3
    #[test]
    fn test_with_symmetry_rejects_combinations() {
        let desired = HexagonalSymmetry {
            p3: true,
            p31m: true,
            p6: true,
            ..HexagonalSymmetry::default()
        };
        let result = HexagonalWallpaperFormula::with_symmetry(
            &[unit_term(1, -2)],
            Complex64::new(1.0, 0.0),
            &desired,
        );
        match result {
            Err(PatternError::InvalidSymmetry { requested }) => {
                assert_eq!(requested, vec!["p31m", "p6"]);
            }
            _ => unreachable!("Expected InvalidSymmetry error type"),
        }
    }

    // Tests p3 alone yields only the base packets
    // Verified by treating p3 as an extension
    #[test]
    fn test_with_symmetry_p3_only() {
        let desired = HexagonalSymmetry {
            p3: true,
            ..HexagonalSymmetry::default()
        };
        let formula = HexagonalWallpaperFormula::with_symmetry(
            &[unit_term(1, -2), unit_term(4, 1)],
            Complex64::new(1.0, 0.0),
            &desired,
        )
        .unwrap();
        assert_eq!(formula.wave_packets().len(), 2);
    }

    // Tests JSON loading expands each base term into a 3-fold packet
    // Verified by keeping the packet multiplier undivided
    #[test]
    fn test_hexagonal_from_json() {
        let formula = HexagonalWallpaperFormula::from_json(
            r#"{
                "multiplier": {"real": -1.0, "imaginary": 2e-2},
                "wave_packets": [
                    {
                        "multiplier": {"real": -1.0, "imaginary": 2e-2},
                        "terms": [{"power_n": 12, "power_m": -10}]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_complex_close(formula.multiplier(), Complex64::new(-1.0, 2e-2));
        assert_eq!(formula.wave_packets().len(), 1);
        let packet = &formula.wave_packets()[0];
        assert_eq!(packet.terms().len(), 3);
        assert_eq!(packet.terms()[0].powers.m, -10);
        assert_complex_close(packet.multiplier(), Complex64::new(-1.0 / 3.0, 2e-2 / 3.0));
    }

    // Tests YAML loading with a desired symmetry synthesizes extra packets
    // Verified by ignoring desired_symmetry
    #[test]
    fn test_hexagonal_from_yaml_with_desired_symmetry() {
        let formula = HexagonalWallpaperFormula::from_yaml(
            "multiplier:\n  real: 1.0\nwave_packets:\n  - multiplier:\n      real: 2.0\n    terms:\n      - power_n: 12\n        power_m: -10\ndesired_symmetry:\n  p31m: true\n",
        )
        .unwrap();

        assert_eq!(
            base_pairs(&formula),
            vec![PowerPair::new(12, -10), PowerPair::new(-10, 12)]
        );
        assert_complex_close(
            formula.wave_packets()[1].multiplier(),
            Complex64::new(2.0 / 3.0, 0.0),
        );
    }

    // Tests an invalid desired symmetry in a document is rejected
    // Verified by validating only in the constructor call path
    #[test]
    fn test_hexagonal_document_invalid_symmetry() {
        let result = HexagonalWallpaperFormula::from_json(
            r#"{
                "wave_packets": [{"terms": [{"power_n": 1, "power_m": -2}]}],
                "desired_symmetry": {"p3m1": true, "p6m": true}
            }"#,
        );
        assert!(matches!(result, Err(PatternError::InvalidSymmetry { .. })));
    }
}
