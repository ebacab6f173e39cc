use std::fmt;
use std::ops::Range;

// ---------------------------------------------------------------------------
// CellValue – a single spreadsheet cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value as read from a workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Date/time rendered as text, e.g. `2021-03-04 09:30:00`.
    DateTime(String),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) | CellValue::DateTime(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// NewsYearTable – one yearly news workbook
// ---------------------------------------------------------------------------

/// Header of the article title column in the news workbooks.
pub const TITLE_COLUMN: &str = "제목";

/// Articles of one year, as read from a single `news_hackingx_*.xlsx` file.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsYearTable {
    /// Four-digit year taken from the file name.
    pub year: String,
    /// Column names (first sheet row).
    pub headers: Vec<String>,
    /// One row per article, excluding the header row.
    pub rows: Vec<Vec<CellValue>>,
}

impl NewsYearTable {
    /// Number of articles.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Non-empty article titles rendered as text, or `None` when the
    /// workbook has no title column.
    pub fn titles(&self) -> Option<Vec<String>> {
        let idx = self.column_index(TITLE_COLUMN)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.get(idx))
                .filter(|cell| !cell.is_empty())
                .map(|cell| cell.to_string())
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// IncidentSchema – fixed layout of the summary workbook
// ---------------------------------------------------------------------------

/// Describes where the incident sub-table lives inside `hacking.xlsx`.
///
/// Row offsets are counted after the header rows; columns are absolute, with
/// the label in column A followed by one column per year in chronological
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentSchema {
    pub header_rows: u32,
    pub data_rows: Range<u32>,
    pub first_year: u16,
    pub year_count: u16,
    pub label_header: &'static str,
}

/// Layout of `hacking.xlsx`.
pub const HACKING_SUMMARY: IncidentSchema = IncidentSchema {
    header_rows: 1,
    data_rows: 2..5,
    first_year: 2015,
    year_count: 10,
    label_header: "사고유형",
};

impl IncidentSchema {
    /// Year labels, `"2015"..="2024"` for the default layout.
    pub fn year_labels(&self) -> Vec<String> {
        (0..self.year_count)
            .map(|i| (self.first_year + i).to_string())
            .collect()
    }

    /// Label column plus one column per year.
    pub fn expected_columns(&self) -> u32 {
        1 + u32::from(self.year_count)
    }

    /// Number of sheet rows needed to reach the last data row.
    pub fn required_rows(&self) -> u32 {
        self.header_rows + self.data_rows.end
    }

    /// Absolute sheet rows holding the incident rows.
    pub fn sheet_rows(&self) -> impl Iterator<Item = u32> + '_ {
        self.data_rows.clone().map(move |offset| self.header_rows + offset)
    }
}

// ---------------------------------------------------------------------------
// IncidentTable – normalized incident-type × year counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentRow {
    pub label: String,
    /// One count per entry of [`IncidentTable::years`].
    pub counts: Vec<u64>,
}

/// Incident counts by type (rows) and year (columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentTable {
    /// Header of the label column.
    pub label_header: String,
    pub years: Vec<String>,
    pub rows: Vec<IncidentRow>,
}

impl IncidentTable {
    pub fn year_index(&self, year: &str) -> Option<usize> {
        self.years.iter().position(|y| y == year)
    }

    /// Column indices covering `from..=to` (inclusive, by label), or `None`
    /// if either bound is not a year column.
    pub fn year_span(&self, from: &str, to: &str) -> Option<std::ops::RangeInclusive<usize>> {
        let start = self.year_index(from)?;
        let end = self.year_index(to)?;
        (start <= end).then_some(start..=end)
    }
}
