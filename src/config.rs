use std::path::{Path, PathBuf};

/// Where the dashboard finds its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    /// Glob for the yearly news workbooks, relative to `data_dir`.
    pub news_pattern: String,
    /// Incident summary file name inside `data_dir`.
    pub incident_file: String,
    pub font_path: PathBuf,
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            news_pattern: "news_hackingx_*.xlsx".to_string(),
            incident_file: "hacking.xlsx".to_string(),
            font_path: PathBuf::from("fonts/Nanum_Gothic/NanumGothic-Regular.ttf"),
            window_size: [1200.0, 800.0],
        }
    }
}

impl DashboardConfig {
    /// Default layout with relative paths resolved against `base`.
    pub fn rooted_at(base: &Path) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: base.join(defaults.data_dir),
            font_path: base.join(defaults.font_path),
            ..defaults
        }
    }

    pub fn incident_path(&self) -> PathBuf {
        self.data_dir.join(&self.incident_file)
    }
}
