//! Grouped reductions over the row sequence.
//!
//! Both aggregators are pure functions of the rows they are handed and keep
//! groups in the order their key is first seen, so the presentation layer can
//! apply its own sort on top without losing the input order as a tie-break.

use std::collections::HashMap;

use super::model::{Row, TitleCount, YearSummary};

/// Running totals for one year.
#[derive(Debug, Clone, Copy, Default)]
struct YearTotals {
    count: usize,
    salary_sum: f64,
}

/// One summary per distinct year, in first-encountered order.
///
/// A year's accumulator is created by its first row, so every summary has a
/// non-zero `job_count` and the average is always defined.
pub fn year_summaries(rows: &[Row]) -> Vec<YearSummary> {
    let mut order: Vec<i32> = Vec::new();
    let mut totals: HashMap<i32, YearTotals> = HashMap::new();

    for row in rows {
        let entry = totals.entry(row.year).or_insert_with(|| {
            order.push(row.year);
            YearTotals::default()
        });
        entry.count += 1;
        entry.salary_sum += row.salary_usd;
    }

    order
        .into_iter()
        .map(|year| {
            let t = totals[&year];
            YearSummary {
                year,
                job_count: t.count,
                avg_salary: t.salary_sum / t.count as f64,
            }
        })
        .collect()
}

/// Job-title counts for `year`, in first-encountered order among that year's
/// rows. Rows with an empty title are not counted.
pub fn title_counts(rows: &[Row], year: i32) -> Vec<TitleCount> {
    let mut counts: Vec<TitleCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows.iter().filter(|r| r.year == year && r.has_title()) {
        match index.get(row.job_title.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(row.job_title.as_str(), counts.len());
                counts.push(TitleCount {
                    job_title: row.job_title.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}
