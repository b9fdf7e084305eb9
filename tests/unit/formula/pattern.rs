//! Tests for the shared formula trait and document-level patterns

#[cfg(test)]
mod tests {
    use crate::assert_complex_close;
    use num_complex::Complex64;
    use std::fs;
    use tempfile::TempDir;
    use wallpattern::PatternError;
    use wallpattern::analysis::rosette::RosetteSymmetry;
    use wallpattern::formula::pattern::{Formula, Pattern, SymmetryReport, sum_terms};
    use wallpattern::formula::relationship::PowerPair;
    use wallpattern::formula::rosette::RosetteTerm;

    const ROSETTE_JSON: &str = r#"{
        "rosette": {
            "terms": [
                {"multiplier": {"real": 3.0}, "power_n": 1, "power_m": 0, "coefficient_relationships": ["+M+N"]}
            ]
        }
    }"#;

    const FRIEZE_YAML: &str = "frieze:\n  terms:\n    - power_n: 2\n      power_m: 0\n      coefficient_relationships: [\"-N-M\"]\n";

    const HEXAGONAL_YAML: &str = "hexagonal_wallpaper:\n  wave_packets:\n    - terms:\n        - power_n: 1\n          power_m: -2\n    - terms:\n        - power_n: -2\n          power_m: 1\n";

    fn write_document(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    // Tests sum_terms keeps per-term values and their sum
    // Verified by dropping the last contribution from the total
    #[test]
    fn test_sum_terms() {
        let terms = vec![
            RosetteTerm::new(Complex64::new(1.0, 0.0), PowerPair::new(1, 0))
                .ignoring_complex_conjugate(true),
            RosetteTerm::new(Complex64::new(2.0, 0.0), PowerPair::new(0, 0)),
        ];
        let result = sum_terms(&terms, Complex64::new(1.0, 1.0));
        assert_eq!(result.contribution_by_term.len(), 2);
        assert_complex_close(result.contribution_by_term[1], Complex64::new(2.0, 0.0));
        assert_complex_close(result.total, Complex64::new(3.0, 1.0));
    }

    // Tests a rosette document loads and evaluates
    // Verified by mapping rosette documents to friezes
    #[test]
    fn test_pattern_from_json_path() {
        let dir = TempDir::new().unwrap();
        let path = write_document(&dir, "rosette.json", ROSETTE_JSON);

        let pattern = Pattern::from_path(&path).unwrap();
        assert!(matches!(pattern, Pattern::Rosette(_)));
        assert_complex_close(
            pattern.calculate(Complex64::new(2.0, 1.0)).total,
            Complex64::new(12.0, 0.0),
        );
        assert_eq!(
            pattern.symmetry_report(),
            SymmetryReport::Rosette(RosetteSymmetry { multifold: 1 })
        );
    }

    // Tests a frieze document in YAML reports its groups
    // Verified by analysing friezes as rosettes
    #[test]
    fn test_pattern_from_yaml_path() {
        let dir = TempDir::new().unwrap();
        let path = write_document(&dir, "frieze.yml", FRIEZE_YAML);

        let pattern = Pattern::from_path(&path).unwrap();
        let names = pattern.symmetry_report().group_names();
        assert_eq!(names, vec!["p111".to_string(), "p211".to_string()]);
    }

    // Tests a hexagonal document reports wallpaper groups
    // Verified by counting a packet as its own partner
    #[test]
    fn test_pattern_hexagonal_report() {
        let dir = TempDir::new().unwrap();
        let path = write_document(&dir, "hex.yaml", HEXAGONAL_YAML);

        let pattern = Pattern::from_path(&path).unwrap();
        let names = pattern.symmetry_report().group_names();
        assert_eq!(names, vec!["p3".to_string(), "p31m".to_string()]);
    }

    // Tests wave documents are not analysed
    // Verified by reporting the hexagonal analysis for waves
    #[test]
    fn test_pattern_wave_unanalyzed() {
        let dir = TempDir::new().unwrap();
        let path = write_document(
            &dir,
            "wave.json",
            r#"{"wave": {"terms": [{"power_n": 1, "power_m": 0}]}}"#,
        );

        let pattern = Pattern::from_path(&path).unwrap();
        assert_eq!(pattern.symmetry_report(), SymmetryReport::Unanalyzed);
        assert!(pattern.symmetry_report().group_names().is_empty());
    }

    // Tests rosette reports name the rotational order
    // Verified by printing the raw struct
    #[test]
    fn test_rosette_report_name() {
        let report = SymmetryReport::Rosette(RosetteSymmetry { multifold: 6 });
        assert_eq!(report.group_names(), vec!["6-fold".to_string()]);
    }

    // Tests unsupported extensions are rejected before reading
    // Verified by defaulting unknown extensions to JSON
    #[test]
    fn test_pattern_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_document(&dir, "rosette.txt", ROSETTE_JSON);
        assert!(matches!(
            Pattern::from_path(&path),
            Err(PatternError::Parse { .. })
        ));
    }

    // Tests missing files report a file system error
    // Verified by mapping read failures to parse errors
    #[test]
    fn test_pattern_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = Pattern::from_path(dir.path().join("absent.json"));
        assert!(matches!(result, Err(PatternError::FileSystem { .. })));
    }
}
