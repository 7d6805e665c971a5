use std::path::Path;

use serde::Serialize;

use super::model::{TitleCount, YearSummary};
use crate::error::ExportError;

#[derive(Debug, Serialize)]
struct Selection<'a> {
    year: i32,
    titles: &'a [TitleCount],
}

#[derive(Debug, Serialize)]
struct SummaryDocument<'a> {
    years: &'a [YearSummary],
    selection: Option<Selection<'a>>,
}

/// Pretty JSON of the year table plus, when a year is selected, its title
/// breakdown.
pub fn summaries_json(
    years: &[YearSummary],
    selection: Option<(i32, &[TitleCount])>,
) -> Result<String, serde_json::Error> {
    let doc = SummaryDocument {
        years,
        selection: selection.map(|(year, titles)| Selection { year, titles }),
    };
    serde_json::to_string_pretty(&doc)
}

/// Write [`summaries_json`] output to `path`.
pub fn write_summaries(
    path: &Path,
    years: &[YearSummary],
    selection: Option<(i32, &[TitleCount])>,
) -> Result<(), ExportError> {
    let json = summaries_json(years, selection)?;
    std::fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn years() -> Vec<YearSummary> {
        vec![YearSummary {
            year: 2021,
            job_count: 2,
            avg_salary: 110_000.0,
        }]
    }

    #[test]
    fn test_json_without_selection() {
        let text = summaries_json(&years(), None).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({
                "years": [{ "year": 2021, "job_count": 2, "avg_salary": 110000.0 }],
                "selection": null
            })
        );
    }

    #[test]
    fn test_json_with_selection() {
        let titles = vec![TitleCount {
            job_title: "ML Engineer".to_string(),
            count: 2,
        }];
        let text = summaries_json(&years(), Some((2021, &titles))).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["selection"]["year"], 2021);
        assert_eq!(value["selection"]["titles"][0]["job_title"], "ML Engineer");
        assert_eq!(value["selection"]["titles"][0]["count"], 2);
    }

    #[test]
    fn test_write_summaries_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        write_summaries(&path, &years(), None).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"job_count\": 2"));
    }

    #[test]
    fn test_write_summaries_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("summary.json");
        let err = write_summaries(&path, &years(), None).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
