use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use thiserror::Error;

use super::discover::NewsFile;
use super::model::{CellValue, IncidentRow, IncidentSchema, IncidentTable, NewsYearTable};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read workbook {}: {source}", .path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("workbook {} has no worksheets", .0.display())]
    NoSheet(PathBuf),
    #[error("unexpected layout in {}: {detail}", .path.display())]
    Shape { path: PathBuf, detail: String },
    #[error("{}: cell {cell} is not a count: {value:?}", .path.display())]
    Cell {
        path: PathBuf,
        cell: String,
        value: String,
    },
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

// ---------------------------------------------------------------------------
// Workbook access
// ---------------------------------------------------------------------------

/// Open any workbook format calamine understands and return its first sheet.
fn first_sheet(path: &Path) -> Result<Range<Data>, LoaderError> {
    let workbook_err = |source| LoaderError::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_err)?;
    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoaderError::NoSheet(path.to_path_buf()))?
        .map_err(workbook_err)
}

fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| CellValue::DateTime(d.to_string()))
            .unwrap_or(CellValue::Float(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::DateTime(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
        Data::Empty => CellValue::Empty,
    }
}

/// Spreadsheet-style address, `(2, 1)` → `B3`.
fn cell_name(row: u32, col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect::<String>() + &(row + 1).to_string()
}

// ---------------------------------------------------------------------------
// News workbooks
// ---------------------------------------------------------------------------

/// Read one news workbook: first row is the header, every other row an article.
pub fn load_news_table(path: &Path, year: &str) -> Result<NewsYearTable, LoaderError> {
    let range = first_sheet(path)?;
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .map(|header| {
            header
                .iter()
                .enumerate()
                .map(|(i, cell)| match cell {
                    Data::Empty => format!("Unnamed: {i}"),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    let rows = rows
        .map(|row| row.iter().map(to_cell).collect())
        .collect();

    Ok(NewsYearTable {
        year: year.to_string(),
        headers,
        rows,
    })
}

/// Load every discovered news workbook, keyed by year.
///
/// Unreadable files are logged and skipped. `files` is expected in the
/// order produced by [`super::discover::discover_news`]; when two files map
/// to the same year the later one replaces the earlier.
pub fn load_news(files: &[NewsFile]) -> BTreeMap<String, NewsYearTable> {
    let mut news: BTreeMap<String, (PathBuf, NewsYearTable)> = BTreeMap::new();

    for file in files {
        match load_news_table(&file.path, &file.year) {
            Ok(table) => {
                log::info!(
                    "Loaded {} articles for {} from {}",
                    table.len(),
                    file.year,
                    file.path.display()
                );
                if let Some((previous, _)) =
                    news.insert(file.year.clone(), (file.path.clone(), table))
                {
                    log::warn!(
                        "Year {} appears in both {} and {}; keeping the latter",
                        file.year,
                        previous.display(),
                        file.path.display()
                    );
                }
            }
            Err(e) => log::error!("Failed to read {}: {e}", file.path.display()),
        }
    }

    news.into_iter()
        .map(|(year, (_, table))| (year, table))
        .collect()
}

// ---------------------------------------------------------------------------
// Incident summary workbook
// ---------------------------------------------------------------------------

/// Coerce a count cell: integers, whole floats, or text such as `"1,234"`.
fn parse_count(data: &Data) -> Option<u64> {
    match data {
        Data::Int(i) => u64::try_from(*i).ok(),
        Data::Float(f) if f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64 => {
            Some(*f as u64)
        }
        Data::String(s) => s.replace(',', "").trim().parse().ok(),
        _ => None,
    }
}

fn check_shape(
    path: &Path,
    range: &Range<Data>,
    schema: &IncidentSchema,
) -> Result<(), LoaderError> {
    let shape_err = |detail: String| LoaderError::Shape {
        path: path.to_path_buf(),
        detail,
    };

    let (last_row, last_col) = range
        .end()
        .ok_or_else(|| shape_err("first sheet is empty".into()))?;

    let columns = last_col + 1;
    if columns != schema.expected_columns() {
        return Err(shape_err(format!(
            "expected {} columns (label + {} years), found {columns}",
            schema.expected_columns(),
            schema.year_count
        )));
    }

    let rows = last_row + 1;
    if rows < schema.required_rows() {
        return Err(shape_err(format!(
            "expected at least {} rows, found {rows}",
            schema.required_rows()
        )));
    }

    Ok(())
}

/// Slice the incident table out of the summary workbook described by `schema`.
pub fn parse_incident_sheet(
    path: &Path,
    range: &Range<Data>,
    schema: &IncidentSchema,
) -> Result<IncidentTable, LoaderError> {
    check_shape(path, range, schema)?;

    let mut rows = Vec::with_capacity(schema.data_rows.len());
    for sheet_row in schema.sheet_rows() {
        let label = range
            .get_value((sheet_row, 0))
            .map(|d| d.to_string().trim().to_string())
            .unwrap_or_default();

        let counts = (1..schema.expected_columns())
            .map(|col| {
                let data = range.get_value((sheet_row, col)).unwrap_or(&Data::Empty);
                parse_count(data).ok_or_else(|| LoaderError::Cell {
                    path: path.to_path_buf(),
                    cell: cell_name(sheet_row, col),
                    value: data.to_string(),
                })
            })
            .collect::<Result<Vec<u64>, _>>()?;

        rows.push(IncidentRow { label, counts });
    }

    Ok(IncidentTable {
        label_header: schema.label_header.to_string(),
        years: schema.year_labels(),
        rows,
    })
}

/// Load the incident summary; `Ok(None)` when the file does not exist.
pub fn load_incident_table(
    path: &Path,
    schema: &IncidentSchema,
) -> Result<Option<IncidentTable>, LoaderError> {
    if !path.is_file() {
        log::warn!("Incident summary not found at {}", path.display());
        return Ok(None);
    }

    let range = first_sheet(path)?;
    let table = parse_incident_sheet(path, &range, schema)?;
    log::info!(
        "Loaded {} incident types from {}",
        table.rows.len(),
        path.display()
    );
    Ok(Some(table))
}
