use crate::wordcloud::WordCloud;

// ---------------------------------------------------------------------------
// Analysis modes
// ---------------------------------------------------------------------------

/// Mutually exclusive views selectable in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisMode {
    #[default]
    NewsVisualization,
    IncidentAnalysis,
    RawData,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::NewsVisualization,
        AnalysisMode::IncidentAnalysis,
        AnalysisMode::RawData,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalysisMode::NewsVisualization => "뉴스 기사 시각화",
            AnalysisMode::IncidentAnalysis => "해킹 사고 분석",
            AnalysisMode::RawData => "원본 데이터",
        }
    }
}

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// A generated word cloud and the year it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCloud {
    pub year: String,
    pub cloud: WordCloud,
}

/// Widget state of the window. The loaded tables live in
/// [`crate::context::DashboardContext`], not here.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub mode: AnalysisMode,
    /// Render the raw tables below the selected view.
    pub show_raw: bool,
    /// Year picked for the word cloud.
    pub cloud_year: Option<String>,
    pub cloud: Option<GeneratedCloud>,
    /// Message shown when the last generate request produced nothing.
    pub cloud_notice: Option<String>,
}

impl ViewState {
    /// The selected word-cloud year, defaulting to the first available one.
    pub fn cloud_year_or<'a>(&'a self, mut years: impl Iterator<Item = &'a str>) -> Option<&'a str> {
        match &self.cloud_year {
            Some(year) => Some(year.as_str()),
            None => years.next(),
        }
    }

    pub fn select_cloud_year(&mut self, year: &str) {
        if self.cloud_year.as_deref() != Some(year) {
            self.cloud_year = Some(year.to_string());
            self.cloud_notice = None;
        }
    }

    /// Cloud for the currently selected year, if one was generated.
    pub fn current_cloud(&self) -> Option<&WordCloud> {
        let cloud = self.cloud.as_ref()?;
        (self.cloud_year.as_deref() == Some(cloud.year.as_str())).then_some(&cloud.cloud)
    }
}
