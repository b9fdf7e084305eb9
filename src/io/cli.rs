//! Command-line interface for rendering formula documents against a colour source

use crate::formula::pattern::{Pattern, SymmetryReport};
use crate::io::configuration::{
    DEFAULT_COLOR_VALUE_MAX, DEFAULT_COLOR_VALUE_MIN, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH,
    DEFAULT_SAMPLE_MAX, DEFAULT_SAMPLE_MIN, FORMULA_EXTENSIONS, OUTPUT_SUFFIX,
};
use crate::io::error::{PatternError, Result, invalid_parameter};
use crate::io::image::{ColorBounds, export_png, load_source, recolor};
use crate::io::progress::ProgressManager;
use crate::spatial::sampling::{SampleSpace, TransformedGrid, transform_samples_with_progress};
use clap::Parser;
use num_complex::Complex64;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Parse a complex number written as `re,im`
///
/// # Errors
///
/// Returns a message naming the malformed part
pub fn parse_complex(text: &str) -> std::result::Result<Complex64, String> {
    let (real, imaginary) = text
        .split_once(',')
        .ok_or_else(|| format!("expected 're,im', got '{text}'"))?;
    let real: f64 = real
        .trim()
        .parse()
        .map_err(|e| format!("invalid real part '{real}': {e}"))?;
    let imaginary: f64 = imaginary
        .trim()
        .parse()
        .map_err(|e| format!("invalid imaginary part '{imaginary}': {e}"))?;
    Ok(Complex64::new(real, imaginary))
}

#[derive(Parser)]
#[command(name = "wallpattern")]
#[command(
    author,
    version,
    about = "Render rosette, frieze and wallpaper formulas by recolouring a source image"
)]
/// Command-line arguments for the renderer
pub struct Cli {
    /// Formula document (json, yaml) or directory of documents
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// PNG image the output colours are sampled from
    #[arg(short, long)]
    pub source: PathBuf,

    /// Output file, or output directory when TARGET is a directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output width in pixels
    #[arg(short, long, default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub width: u32,

    /// Output height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_OUTPUT_HEIGHT)]
    pub height: u32,

    /// Lower corner of the sampled region, as re,im
    #[arg(long, value_parser = parse_complex, allow_hyphen_values = true)]
    pub sample_min: Option<Complex64>,

    /// Upper corner of the sampled region, as re,im
    #[arg(long, value_parser = parse_complex, allow_hyphen_values = true)]
    pub sample_max: Option<Complex64>,

    /// Lower corner of the colour window, as re,im
    #[arg(long, value_parser = parse_complex, allow_hyphen_values = true)]
    pub color_min: Option<Complex64>,

    /// Upper corner of the colour window, as re,im
    #[arg(long, value_parser = parse_complex, allow_hyphen_values = true)]
    pub color_max: Option<Complex64>,

    /// Suppress progress and analysis output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render documents even if their output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

const fn from_pair((re, im): (f64, f64)) -> Complex64 {
    Complex64::new(re, im)
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Region of the plane the output samples
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidParameter`] if the corners do not form a rectangle
    pub fn sample_space(&self) -> Result<SampleSpace> {
        SampleSpace::new(
            self.sample_min.unwrap_or_else(|| from_pair(DEFAULT_SAMPLE_MIN)),
            self.sample_max.unwrap_or_else(|| from_pair(DEFAULT_SAMPLE_MAX)),
        )
    }

    /// Window of values that take a colour from the source
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidParameter`] if the corners do not form a rectangle
    pub fn color_bounds(&self) -> Result<ColorBounds> {
        ColorBounds::new(
            self.color_min
                .unwrap_or_else(|| from_pair(DEFAULT_COLOR_VALUE_MIN)),
            self.color_max
                .unwrap_or_else(|| from_pair(DEFAULT_COLOR_VALUE_MAX)),
        )
    }
}

fn is_formula_document(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| FORMULA_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Renders every formula document named by the CLI
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render every document
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target is neither a formula document nor a directory
    /// - The sample region or colour window is degenerate
    /// - The source image cannot be loaded
    /// - A document cannot be parsed or its image cannot be written
    pub fn process(&mut self) -> Result<()> {
        let documents = self.collect_documents()?;

        if documents.is_empty() {
            return Ok(());
        }

        let space = self.cli.sample_space()?;
        let bounds = self.cli.color_bounds()?;
        let source = load_source(&self.cli.source)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(documents.len());
        }

        for (index, document) in documents.iter().enumerate() {
            let start_time = Instant::now();
            let pattern = Pattern::from_path(document)?;
            self.report_symmetries(document, &pattern);

            let grid = self.render(index, document, &pattern, &space)?;
            self.report_term_ranges(&grid);

            let output = recolor(&source, &grid.values, &bounds);
            export_png(&output, &self.output_path(document))?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_render(index, start_time.elapsed());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn render(
        &mut self,
        index: usize,
        document: &Path,
        pattern: &Pattern,
        space: &SampleSpace,
    ) -> Result<TransformedGrid> {
        let (width, height) = (self.cli.width, self.cli.height);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_render(index, document, height);
        }

        let progress = &mut self.progress_manager;
        transform_samples_with_progress(pattern, space, width, height, |rows| {
            if let Some(pm) = progress.as_mut() {
                pm.update_rows(index, rows);
            }
        })
    }

    fn collect_documents(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !is_formula_document(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("formula documents must end in {}", FORMULA_EXTENSIONS.join(", ")),
                ));
            }
            Ok(if self.should_process(target) {
                vec![target.clone()]
            } else {
                Vec::new()
            })
        } else if target.is_dir() {
            let read_error = |e| PatternError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            };
            let mut documents = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.is_file() && is_formula_document(&path) && self.should_process(&path) {
                    documents.push(path);
                }
            }
            documents.sort();
            Ok(documents)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a formula document or a directory",
            ))
        }
    }

    fn should_process(&self, document: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(document);
        if output_path.exists() {
            // Allow print for user feedback on skipped documents
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", document.display());
            }
            false
        } else {
            true
        }
    }

    /// Where the image for `document` is written
    ///
    /// `--output` names the file for a single document and the directory for
    /// a directory target. Otherwise the image sits beside the document as
    /// `<stem>_result.png`.
    pub fn output_path(&self, document: &Path) -> PathBuf {
        let stem = document.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        match &self.cli.output {
            Some(output) if self.cli.target.is_dir() => output.join(output_name),
            Some(output) => output.clone(),
            None => document
                .parent()
                .map_or_else(|| PathBuf::from(&output_name), |parent| parent.join(&output_name)),
        }
    }

    // Allow print for the symmetry summary shown to the user
    #[allow(clippy::print_stderr)]
    fn report_symmetries(&self, document: &Path, pattern: &Pattern) {
        if self.cli.quiet {
            return;
        }
        let report = pattern.symmetry_report();
        let names = report.group_names();
        if report == SymmetryReport::Unanalyzed {
            eprintln!("{}: symmetry not analysed for wave formulas", document.display());
        } else if names.is_empty() {
            eprintln!("{}: no symmetries", document.display());
        } else {
            eprintln!("{}: has symmetries {}", document.display(), names.join(", "));
        }
    }

    // Allow print for the value ranges shown to the user
    #[allow(clippy::print_stderr)]
    fn report_term_ranges(&self, grid: &TransformedGrid) {
        if self.cli.quiet {
            return;
        }
        for line in range_report(grid) {
            eprintln!("{line}");
        }
    }
}

fn describe_range(range: Option<(Complex64, Complex64)>) -> String {
    match range {
        Some((min, max)) => format!("{min:e} - {max:e}"),
        None => "no finite values".to_string(),
    }
}

/// Lines summarising the transformed values: overall, then each term
pub fn range_report(grid: &TransformedGrid) -> Vec<String> {
    let mut lines = vec![
        format!("Min/Max overall: {}", describe_range(grid.total_range())),
        "Min/Max ranges, by term".to_string(),
    ];
    lines.extend(
        grid.term_ranges
            .iter()
            .enumerate()
            .map(|(index, range)| format!("  {index}: {}", describe_range(*range))),
    );
    lines
}
