use std::collections::BTreeMap;

use crate::config::DashboardConfig;
use crate::data::discover::discover_news;
use crate::data::loader::{load_incident_table, load_news};
use crate::data::model::{IncidentTable, NewsYearTable, HACKING_SUMMARY};
use crate::fonts::FontStatus;

/// What became of `hacking.xlsx`.
#[derive(Debug, Clone, PartialEq)]
pub enum IncidentState {
    Loaded(IncidentTable),
    Missing,
    /// The file exists but does not have the expected layout or contents.
    Failed(String),
}

/// Everything loaded at startup. Built once, then only read by the views.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    /// News tables keyed by year, ascending.
    pub news: BTreeMap<String, NewsYearTable>,
    pub incidents: IncidentState,
    pub font: FontStatus,
}

impl DashboardContext {
    pub fn new(news: BTreeMap<String, NewsYearTable>, incidents: IncidentState) -> Self {
        Self {
            news,
            incidents,
            font: FontStatus::Fallback,
        }
    }

    /// Discover and read every input named by `config`.
    pub fn load(config: &DashboardConfig) -> Self {
        let files = match discover_news(&config.data_dir, &config.news_pattern) {
            Ok(files) => files,
            Err(e) => {
                log::error!("News discovery failed: {e}");
                Vec::new()
            }
        };
        log::info!("Found {} news workbooks", files.len());
        for file in &files {
            log::info!("  {} ({})", file.path.display(), file.year);
        }
        let news = load_news(&files);

        let incidents = match load_incident_table(&config.incident_path(), &HACKING_SUMMARY) {
            Ok(Some(table)) => IncidentState::Loaded(table),
            Ok(None) => IncidentState::Missing,
            Err(e) => {
                log::error!("{e}");
                IncidentState::Failed(e.to_string())
            }
        };

        Self::new(news, incidents)
    }

    pub fn with_font(self, font: FontStatus) -> Self {
        Self { font, ..self }
    }

    pub fn news_years(&self) -> impl Iterator<Item = &str> {
        self.news.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    #[test]
    fn empty_data_dir_loads_nothing_without_failing() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = DashboardContext::load(&DashboardConfig::rooted_at(dir.path()));
        assert!(ctx.news.is_empty());
        assert_eq!(ctx.incidents, IncidentState::Missing);
        assert_eq!(ctx.font, FontStatus::Fallback);
    }

    #[test]
    fn malformed_summary_halts_only_the_incident_path() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir(&data).unwrap();

        let mut news = Workbook::new();
        let sheet = news.add_worksheet();
        sheet.write_string(0, 0, "제목").unwrap();
        sheet.write_string(1, 0, "개인정보 유출").unwrap();
        news.save(data.join("news_hackingx_2023.xlsx")).unwrap();

        let mut summary = Workbook::new();
        summary.add_worksheet().write_string(0, 0, "구분").unwrap();
        summary.save(data.join("hacking.xlsx")).unwrap();

        let ctx = DashboardContext::load(&DashboardConfig::rooted_at(dir.path()));
        assert_eq!(ctx.news_years().collect::<Vec<_>>(), vec!["2023"]);
        assert!(matches!(ctx.incidents, IncidentState::Failed(_)));
    }

    #[test]
    fn font_status_is_attached_after_loading() {
        let ctx = DashboardContext::new(BTreeMap::new(), IncidentState::Missing).with_font(
            FontStatus::Registered {
                name: "NanumGothic-Regular".into(),
            },
        );
        assert!(ctx.font.is_registered());
    }
}
