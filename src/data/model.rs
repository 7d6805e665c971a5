use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Row – one validated salary record
// ---------------------------------------------------------------------------

/// A single salary record that passed parse-time validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// `work_year` column.
    pub year: i32,
    /// `job_title` column, verbatim. May be empty.
    pub job_title: String,
    /// `salary_in_usd` column, always finite.
    pub salary_usd: f64,
}

impl Row {
    pub fn new(year: i32, job_title: impl Into<String>, salary_usd: f64) -> Self {
        Self {
            year,
            job_title: job_title.into(),
            salary_usd,
        }
    }

    /// Whether this row contributes to a job-title breakdown.
    pub fn has_title(&self) -> bool {
        !self.job_title.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Statistics for one distinct year across all valid rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub job_count: usize,
    pub avg_salary: f64,
}

/// Number of rows carrying a given job title within one selected year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleCount {
    pub job_title: String,
    pub count: usize,
}

impl fmt::Display for YearSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} jobs, avg ${:.2}",
            self.year, self.job_count, self.avg_salary
        )
    }
}

// ---------------------------------------------------------------------------
// SalaryDataset – the complete loaded snapshot
// ---------------------------------------------------------------------------

/// Everything produced by one load. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct SalaryDataset {
    /// Valid rows in input order.
    pub rows: Vec<Row>,
    /// Data lines dropped because the year or salary did not parse.
    pub skipped_rows: usize,
}

impl SalaryDataset {
    pub fn new(rows: Vec<Row>, skipped_rows: usize) -> Self {
        Self { rows, skipped_rows }
    }

    /// Number of valid rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no valid rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
