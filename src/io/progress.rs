//! Row-level progress for rendering batches of formula documents

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Formulas: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

#[derive(Debug, Clone, Default)]
struct RenderState {
    name: String,
    rows_done: u32,
    rows_total: u32,
}

impl RenderState {
    const fn is_started(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Progress display for a batch render
///
/// Shows one bar per document for the most recent renders, plus a batch bar
/// once the batch is too large to list every document.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    render_bars: Vec<ProgressBar>,
    states: Vec<RenderState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an empty progress display
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            render_bars: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Create the bars for a batch of `document_count` renders
    pub fn initialize(&mut self, document_count: usize) {
        if document_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(document_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..document_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(ROW_STYLE.clone());
            self.render_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Begin rendering `path`, which has `rows` output rows
    pub fn start_render(&mut self, index: usize, path: &Path, rows: u32) {
        if index >= self.states.len() {
            self.states.resize(index + 1, RenderState::default());
        }
        if let Some(state) = self.states.get_mut(index) {
            *state = RenderState {
                name: path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
                rows_done: 0,
                rows_total: rows,
            };
        }
        self.refresh();
    }

    /// Record that `rows_done` rows of render `index` are finished
    pub fn update_rows(&mut self, index: usize, rows_done: u32) {
        if let Some(state) = self.states.get_mut(index) {
            state.rows_done = rows_done.min(state.rows_total);
        }
        self.refresh();
    }

    /// Mark render `index` as written
    pub fn complete_render(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.states.get_mut(index) {
            state.name = format!("✓ {} ({:.1}s)", state.name, elapsed.as_secs_f64());
            state.rows_done = state.rows_total;
        }
        self.refresh();
    }

    /// Remove every bar from the terminal
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All formulas rendered");
        }
        let _ = self.multi_progress.clear();
    }

    // Shows the most recently started renders, newest last
    fn refresh(&self) {
        let started: Vec<&RenderState> = self.states.iter().filter(|s| s.is_started()).collect();
        let first_visible = started.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = started.get(first_visible..).unwrap_or(&[]);

        for (bar_index, bar) in self.render_bars.iter().enumerate() {
            if let Some(state) = visible.get(bar_index) {
                bar.set_length(u64::from(state.rows_total));
                bar.set_position(u64::from(state.rows_done));
                let width = state.rows_total.to_string().len();
                bar.set_message(format!("{:>width$}/{} rows", state.rows_done, state.rows_total));
                bar.set_prefix(state.name.clone());
            } else {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
