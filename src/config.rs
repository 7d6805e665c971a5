use std::path::PathBuf;

use clap::Parser;

/// Rows per table page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

// ── Command line ──────────────────────────────────────────────────────────────

/// Explore job salary records by year
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "salary-dashboard",
    about = "Explore job salary records by year",
    version
)]
pub struct Cli {
    /// Salary CSV opened at startup (otherwise use File → Open…)
    #[arg(env = "SALARY_DASHBOARD_CSV")]
    pub csv_path: Option<PathBuf>,

    /// Rows per table page
    #[arg(
        long,
        env = "SALARY_DASHBOARD_PAGE_SIZE",
        default_value_t = DEFAULT_PAGE_SIZE as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub page_size: u64,
}

impl Cli {
    /// Page size as used by the table views.
    pub fn rows_per_page(&self) -> usize {
        usize::try_from(self.page_size).unwrap_or(usize::MAX)
    }
}
