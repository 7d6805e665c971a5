use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use super::model::{Row, SalaryDataset};
use crate::error::LoadError;

/// Header names the dashboard reads. Every other column is ignored.
pub const YEAR_COLUMN: &str = "work_year";
pub const TITLE_COLUMN: &str = "job_title";
pub const SALARY_COLUMN: &str = "salary_in_usd";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a salary dataset from a `.csv` file.
pub fn load_file(path: &Path) -> Result<SalaryDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "csv" {
        return Err(LoadError::UnsupportedExtension(ext));
    }

    // Read the whole file up front so an I/O failure is reported against the
    // path, while undecodable lines further down are still just skipped.
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(bytes.as_slice())
}

/// Parse CSV text that is already in memory.
pub fn parse_csv_str(text: &str) -> Result<SalaryDataset, LoadError> {
    parse_csv(text.as_bytes())
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Positions of the required columns within a record.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    year: usize,
    title: usize,
    salary: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        Ok(Self {
            year: find(YEAR_COLUMN)?,
            title: find(TITLE_COLUMN)?,
            salary: find(SALARY_COLUMN)?,
        })
    }
}

/// Single pass over the records. Output order follows input order; any
/// record that fails [`parse_row`] is dropped and counted.
fn parse_csv<R: io::Read>(source: R) -> Result<SalaryDataset, LoadError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        // Empty input: no header, therefore no rows.
        return Ok(SalaryDataset::default());
    }
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::debug!("Skipping undecodable CSV record: {e}");
                skipped += 1;
                continue;
            }
        };

        match parse_row(&record, columns) {
            Some(row) => rows.push(row),
            None => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                log::debug!("Skipping CSV line {line}: invalid year or salary");
                skipped += 1;
            }
        }
    }

    Ok(SalaryDataset::new(rows, skipped))
}

/// The row filter: keep a record only when the year is an integer and the
/// salary is a finite number. The title is taken as-is.
fn parse_row(record: &StringRecord, columns: ColumnIndex) -> Option<Row> {
    let year = parse_year(record.get(columns.year).unwrap_or(""))?;
    let salary_usd = parse_salary(record.get(columns.salary).unwrap_or(""))?;
    let job_title = record.get(columns.title).unwrap_or("");
    Some(Row::new(year, job_title, salary_usd))
}

/// Plain integers, plus integer-valued decimals such as `2021.0` that
/// spreadsheet and dataframe exports write for year columns with gaps.
fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if let Ok(year) = s.parse::<i32>() {
        return Some(year);
    }
    let (whole, frac) = s.split_once('.')?;
    if !frac.bytes().all(|b| b == b'0') {
        return None;
    }
    whole.parse::<i32>().ok()
}

fn parse_salary(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "work_year,experience_level,job_title,salary,salary_currency,salary_in_usd";

    #[test]
    fn test_parse_valid_rows_in_order() {
        let csv = format!(
            "{HEADER}\n\
             2021,SE,ML Engineer,100000,USD,100000\n\
             2022,MI,Data Scientist,80000,EUR,90000.5\n"
        );
        let ds = parse_csv_str(&csv).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.skipped_rows, 0);
        assert_eq!(ds.rows[0], Row::new(2021, "ML Engineer", 100000.0));
        assert_eq!(ds.rows[1], Row::new(2022, "Data Scientist", 90000.5));
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let ds = parse_csv_str(&format!("{HEADER}\n")).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.skipped_rows, 0);
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        let ds = parse_csv_str("").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn test_non_numeric_salary_is_skipped() {
        let csv = format!(
            "{HEADER}\n\
             2021,SE,ML Engineer,100000,USD,N/A\n\
             2021,SE,ML Engineer,100000,USD,100000\n"
        );
        let ds = parse_csv_str(&csv).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.skipped_rows, 1);
    }

    #[test]
    fn test_non_integer_year_is_skipped() {
        let csv = "work_year,job_title,salary_in_usd\n\
                   twenty,A,1\n\
                   2021.5,A,1\n\
                   ,A,1\n\
                   2020,A,1\n";
        let ds = parse_csv_str(csv).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows[0].year, 2020);
        assert_eq!(ds.skipped_rows, 3);
    }

    #[test]
    fn test_integer_valued_decimal_years_are_kept() {
        let csv = "work_year,job_title,salary_in_usd\n\
                   2021.0,A,10\n\
                   2021,B,20\n\
                   2022.000,C,30\n\
                   2022.01,D,40\n\
                   2022.,E,50\n";
        let ds = parse_csv_str(csv).unwrap();
        let years: Vec<i32> = ds.rows.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2021, 2021, 2022, 2022]);
        assert_eq!(ds.skipped_rows, 1);
    }

    #[test]
    fn test_non_finite_salary_is_skipped() {
        let csv = "work_year,job_title,salary_in_usd\n\
                   2020,A,inf\n\
                   2020,A,NaN\n\
                   2020,A,-infinity\n\
                   2020,A,1e3\n";
        let ds = parse_csv_str(csv).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows[0].salary_usd, 1000.0);
    }

    #[test]
    fn test_numeric_fields_tolerate_whitespace() {
        let csv = "work_year,job_title,salary_in_usd\n 2023 , Analyst ,  5000 \n";
        let ds = parse_csv_str(csv).unwrap();
        assert_eq!(ds.rows[0].year, 2023);
        assert_eq!(ds.rows[0].salary_usd, 5000.0);
        // Title is verbatim.
        assert_eq!(ds.rows[0].job_title, " Analyst ");
    }

    #[test]
    fn test_empty_title_is_retained() {
        let csv = "work_year,job_title,salary_in_usd\n2021,,50000\n";
        let ds = parse_csv_str(csv).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows[0].job_title, "");
    }

    #[test]
    fn test_short_records_read_missing_fields_as_empty() {
        // Title sits after salary here, so a truncated line keeps year and salary.
        let csv = "work_year,salary_in_usd,job_title\n2021,700\n2021\n";
        let ds = parse_csv_str(csv).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows[0].job_title, "");
        assert_eq!(ds.skipped_rows, 1);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let csv = "work_year,job_title,salary_in_usd\n\n2021,A,1\n\n2022,B,2\n";
        let ds = parse_csv_str(csv).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.skipped_rows, 0);
    }

    #[test]
    fn test_quoted_titles_with_commas() {
        let csv = "work_year,job_title,salary_in_usd\n2021,\"Head of Data, EMEA\",200000\n";
        let ds = parse_csv_str(csv).unwrap();
        assert_eq!(ds.rows[0].job_title, "Head of Data, EMEA");
    }

    #[test]
    fn test_missing_column_fails_load() {
        let csv = "work_year,job_title,salary\n2021,A,1\n";
        let err = parse_csv_str(csv).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("salary_in_usd")));
    }

    #[test]
    fn test_load_file_roundtrip() {
        let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(
            tmp,
            "work_year,job_title,salary_in_usd\n2021,A,10\n2021,B,oops\n"
        )
        .unwrap();
        let ds = load_file(tmp.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.skipped_rows, 1);
    }

    #[test]
    fn test_load_file_skips_undecodable_lines() {
        let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        tmp.write_all(b"work_year,job_title,salary_in_usd\n2021,\xff\xfe,10\n2022,B,20\n")
            .unwrap();
        let ds = load_file(tmp.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows[0].year, 2022);
        assert_eq!(ds.skipped_rows, 1);
    }

    #[test]
    fn test_load_file_missing_path() {
        let err = load_file(Path::new("/definitely/not/here/salaries.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_load_file_rejects_other_extensions() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("json");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "json"));
    }
}
