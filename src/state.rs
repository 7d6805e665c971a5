use std::path::Path;
use std::sync::Arc;

use crate::color::TitlePalette;
use crate::data::aggregate::{title_counts, year_summaries};
use crate::data::export;
use crate::data::model::{SalaryDataset, TitleCount, YearSummary};
use crate::data::view::{TableView, TitleColumn, YearColumn};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file has been loaded successfully).
    pub dataset: Option<Arc<SalaryDataset>>,

    /// One entry per year, recomputed whenever `dataset` changes.
    pub summaries: Vec<YearSummary>,

    /// Year picked in the year table.
    pub selected_year: Option<i32>,

    /// Title breakdown for `selected_year`.
    pub title_counts: Vec<TitleCount>,

    /// Colours for the title bar chart, rebuilt with `title_counts`.
    pub title_palette: TitlePalette,

    pub year_table: TableView<YearColumn>,
    pub title_table: TableView<TitleColumn>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_page_size(crate::config::DEFAULT_PAGE_SIZE)
    }
}

impl AppState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            dataset: None,
            summaries: Vec::new(),
            selected_year: None,
            title_counts: Vec::new(),
            title_palette: TitlePalette::default(),
            year_table: TableView::new(page_size),
            title_table: TableView::new(page_size),
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset: recompute the year table and drop any
    /// selection made against the previous one.
    pub fn set_dataset(&mut self, dataset: SalaryDataset) {
        self.summaries = year_summaries(&dataset.rows);
        self.dataset = Some(Arc::new(dataset));
        self.clear_selection();
        self.year_table.rewind();
        self.status_message = None;
    }

    /// Record a failed load. The dashboard is left with no data.
    pub fn load_failed(&mut self, err: &LoadError) {
        log::error!("Failed to load file: {err:#}");
        self.dataset = None;
        self.summaries.clear();
        self.clear_selection();
        self.year_table.rewind();
        self.status_message = Some(format!("Error: {err:#}"));
    }

    /// Load `path` synchronously and apply the result.
    pub fn load_path(&mut self, path: &Path) {
        match crate::data::loader::load_file(path) {
            Ok(dataset) => {
                if dataset.is_empty() {
                    log::warn!("{} contains no valid salary rows", path.display());
                }
                let (rows, skipped) = (dataset.len(), dataset.skipped_rows);
                self.set_dataset(dataset);
                log::info!(
                    "Loaded {rows} rows ({skipped} skipped) covering {} years from {}",
                    self.summaries.len(),
                    path.display()
                );
                for summary in &self.summaries {
                    log::debug!("  {summary}");
                }
            }
            Err(e) => self.load_failed(&e),
        }
    }

    /// Selection event: recompute the title breakdown for `year`. The latest
    /// call always wins.
    pub fn select_year(&mut self, year: i32) {
        let counts = match &self.dataset {
            Some(ds) => title_counts(&ds.rows, year),
            None => Vec::new(),
        };
        log::debug!("Selected {year}: {} distinct titles", counts.len());
        self.title_palette = TitlePalette::new(&counts);
        self.title_counts = counts;
        self.selected_year = Some(year);
        self.title_table.rewind();
    }

    pub fn clear_selection(&mut self) {
        self.selected_year = None;
        self.title_counts.clear();
        self.title_palette = TitlePalette::default();
        self.title_table.rewind();
    }

    /// The title table is only shown for a selected year with at least one
    /// titled row.
    pub fn title_breakdown(&self) -> Option<(i32, &[TitleCount])> {
        match self.selected_year {
            Some(year) if !self.title_counts.is_empty() => {
                Some((year, self.title_counts.as_slice()))
            }
            _ => None,
        }
    }

    /// Write the current aggregates as JSON, reporting the outcome in the
    /// status bar.
    pub fn export_to(&mut self, path: &Path) {
        match export::write_summaries(path, &self.summaries, self.title_breakdown()) {
            Ok(()) => {
                log::info!("Exported {} year summaries to {}", self.summaries.len(), path.display());
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn dataset() -> SalaryDataset {
        SalaryDataset::new(
            vec![
                Row::new(2021, "ML Engineer", 100_000.0),
                Row::new(2021, "ML Engineer", 120_000.0),
                Row::new(2022, "Data Scientist", 90_000.0),
                Row::new(2023, "", 80_000.0),
            ],
            1,
        )
    }

    #[test]
    fn test_set_dataset_computes_summaries() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        let years: Vec<i32> = state.summaries.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![2021, 2022, 2023]);
        assert!(state.selected_year.is_none());
        assert!(state.title_breakdown().is_none());
    }

    #[test]
    fn test_select_year_shows_breakdown() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.select_year(2021);
        let (year, titles) = state.title_breakdown().unwrap();
        assert_eq!(year, 2021);
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].count, 2);
    }

    #[test]
    fn test_latest_selection_wins() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.select_year(2021);
        state.select_year(2022);
        let (year, titles) = state.title_breakdown().unwrap();
        assert_eq!(year, 2022);
        assert_eq!(titles[0].job_title, "Data Scientist");
    }

    #[test]
    fn test_year_without_titles_hides_breakdown() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.select_year(2023);
        assert_eq!(state.selected_year, Some(2023));
        assert!(state.title_breakdown().is_none());
    }

    #[test]
    fn test_reload_clears_selection() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.select_year(2021);
        state.title_table.page = 3;
        state.set_dataset(SalaryDataset::default());
        assert!(state.summaries.is_empty());
        assert!(state.selected_year.is_none());
        assert!(state.title_counts.is_empty());
        assert_eq!(state.title_table.page, 0);
    }

    #[test]
    fn test_select_without_dataset() {
        let mut state = AppState::default();
        state.select_year(2021);
        assert!(state.title_breakdown().is_none());
    }

    #[test]
    fn test_load_failure_leaves_no_data() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.load_path(Path::new("/no/such/dir/salaries.csv"));
        assert!(state.dataset.is_none());
        assert!(state.summaries.is_empty());
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
    }

    #[test]
    fn test_load_path_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salaries.csv");
        std::fs::write(
            &path,
            "work_year,job_title,salary_in_usd\n2021,A,10\n2021,B,N/A\n2020,A,30\n",
        )
        .unwrap();

        let mut state = AppState::default();
        state.load_path(&path);
        assert_eq!(state.dataset.as_ref().unwrap().skipped_rows, 1);
        assert_eq!(state.summaries.len(), 2);

        // The N/A salary row counts toward neither the job count nor the mean.
        let y2021 = &state.summaries[0];
        assert_eq!(y2021.year, 2021);
        assert_eq!(y2021.job_count, 1);
        assert!((y2021.avg_salary - 10.0).abs() < 1e-9);

        state.select_year(2021);
        let (_, titles) = state.title_breakdown().unwrap();
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].job_title, "A");
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_export_to_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.export_to(&dir.path().join("nested").join("out.json"));
        assert!(state.status_message.is_some());

        let ok_path = dir.path().join("out.json");
        state.export_to(&ok_path);
        assert!(state.status_message.is_none());
        assert!(ok_path.exists());
    }
}
