use std::cmp::Ordering;
use std::ops::Range;

use super::model::{TitleCount, YearSummary};

// ---------------------------------------------------------------------------
// Sort columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Arrow shown next to a sorted column header.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "⏶",
            SortDirection::Descending => "⏷",
        }
    }
}

/// A table row type that can be ordered by one of its columns.
pub trait Sortable {
    type Column: Copy + PartialEq;

    fn compare_by(&self, other: &Self, column: Self::Column) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearColumn {
    Year,
    JobCount,
    AvgSalary,
}

impl Sortable for YearSummary {
    type Column = YearColumn;

    fn compare_by(&self, other: &Self, column: YearColumn) -> Ordering {
        match column {
            YearColumn::Year => self.year.cmp(&other.year),
            YearColumn::JobCount => self.job_count.cmp(&other.job_count),
            YearColumn::AvgSalary => self.avg_salary.total_cmp(&other.avg_salary),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleColumn {
    Title,
    Count,
}

impl Sortable for TitleCount {
    type Column = TitleColumn;

    fn compare_by(&self, other: &Self, column: TitleColumn) -> Ordering {
        match column {
            TitleColumn::Title => self.job_title.cmp(&other.job_title),
            TitleColumn::Count => self.count.cmp(&other.count),
        }
    }
}

/// Indices of `items` in display order.
///
/// `sort_by` is stable and descending order flips the comparison rather than
/// the result, so items with equal keys always keep their input order.
pub fn sorted_indices<T: Sortable>(
    items: &[T],
    sort: Option<(T::Column, SortDirection)>,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    if let Some((column, direction)) = sort {
        indices.sort_by(|&a, &b| {
            let ord = items[a].compare_by(&items[b], column);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    indices
}

// ---------------------------------------------------------------------------
// Per-table view settings
// ---------------------------------------------------------------------------

/// Sort and page position for one table. Independent of the data it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<C> {
    pub sort: Option<(C, SortDirection)>,
    pub page: usize,
    pub page_size: usize,
}

impl<C: Copy + PartialEq> TableView<C> {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Header click: ascending → descending → input order. Clicking a
    /// different column starts over at ascending.
    pub fn cycle_sort(&mut self, column: C) {
        self.sort = match self.sort {
            Some((c, SortDirection::Ascending)) if c == column => {
                Some((column, SortDirection::Descending))
            }
            Some((c, SortDirection::Descending)) if c == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
        self.page = 0;
    }

    /// Current direction for `column`, if it is the sort column.
    pub fn direction_of(&self, column: C) -> Option<SortDirection> {
        match self.sort {
            Some((c, dir)) if c == column => Some(dir),
            _ => None,
        }
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Range into the sorted index list for the current page, clamped to the
    /// last page when the data has shrunk.
    pub fn page_range(&self, len: usize) -> Range<usize> {
        let page = self.page.min(self.page_count(len) - 1);
        let start = page * self.page_size;
        start..(start + self.page_size).min(len)
    }

    pub fn next_page(&mut self, len: usize) {
        if self.page + 1 < self.page_count(len) {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Back to the first page, keeping the sort.
    pub fn rewind(&mut self) {
        self.page = 0;
    }
}
