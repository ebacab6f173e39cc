//! Aggregations behind the charts: article counts, title word frequencies,
//! incident trends and period totals.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use regex::Regex;

use crate::data::model::{IncidentTable, NewsYearTable};

/// Number of tokens kept for a word cloud.
pub const TOP_WORDS: usize = 100;

/// Years shown in the incident trend chart.
pub const TREND_YEARS: (&str, &str) = ("2020", "2024");

/// Pandemic period, compared against [`RELAXED_PERIOD`].
pub const PANDEMIC_PERIOD: (&str, &str) = ("2020", "2022");
pub const RELAXED_PERIOD: (&str, &str) = ("2023", "2024");

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

/// `(year, article count)` in ascending year order.
pub fn article_counts(news: &BTreeMap<String, NewsYearTable>) -> Vec<(String, usize)> {
    news.iter()
        .map(|(year, table)| (year.clone(), table.len()))
        .collect()
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[가-힣]{2,}|[A-Za-z0-9]{2,}").expect("static token regex"))
}

/// Runs of two or more Hangul syllables or ASCII alphanumerics.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    token_regex().find_iter(text).map(|m| m.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// The `limit` most frequent tokens across `titles`, most frequent first.
/// Ties keep the order in which the tokens first appeared.
pub fn word_frequencies<S: AsRef<str>>(titles: &[S], limit: usize) -> Vec<WordFrequency> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counted: Vec<WordFrequency> = Vec::new();

    for title in titles {
        for token in tokenize(title.as_ref()) {
            match index.get(token) {
                Some(&i) => counted[i].count += 1,
                None => {
                    index.insert(token, counted.len());
                    counted.push(WordFrequency {
                        word: token.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // stable: equal counts stay in first-seen order
    counted.sort_by(|a, b| b.count.cmp(&a.count));
    counted.truncate(limit);
    counted
}

// ---------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------

/// One line of the trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub label: String,
    /// `[year, count]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// Per incident type, counts for the years `from..=to`.
pub fn incident_trend(table: &IncidentTable, from: &str, to: &str) -> Vec<TrendSeries> {
    let Some(span) = table.year_span(from, to) else {
        return Vec::new();
    };

    table
        .rows
        .iter()
        .map(|row| TrendSeries {
            label: row.label.clone(),
            points: span
                .clone()
                .filter_map(|col| {
                    let year: f64 = table.years[col].parse().ok()?;
                    Some([year, row.counts[col] as f64])
                })
                .collect(),
        })
        .collect()
}

/// Sum of each row over the years `from..=to`, in row order.
pub fn period_totals(table: &IncidentTable, from: &str, to: &str) -> Vec<u64> {
    let Some(span) = table.year_span(from, to) else {
        return vec![0; table.rows.len()];
    };
    table
        .rows
        .iter()
        .map(|row| row.counts[span.clone()].iter().sum())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodComparison {
    pub label: String,
    pub pandemic: u64,
    pub relaxed: u64,
}

/// Totals for [`PANDEMIC_PERIOD`] and [`RELAXED_PERIOD`] per incident type.
pub fn compare_periods(table: &IncidentTable) -> Vec<PeriodComparison> {
    let pandemic = period_totals(table, PANDEMIC_PERIOD.0, PANDEMIC_PERIOD.1);
    let relaxed = period_totals(table, RELAXED_PERIOD.0, RELAXED_PERIOD.1);

    table
        .rows
        .iter()
        .zip(pandemic.into_iter().zip(relaxed))
        .map(|(row, (pandemic, relaxed))| PeriodComparison {
            label: row.label.clone(),
            pandemic,
            relaxed,
        })
        .collect()
}
