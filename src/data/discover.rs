use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use super::loader::LoaderError;

/// A news workbook found on disk together with the year in its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsFile {
    pub path: PathBuf,
    pub year: String,
}

fn year_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]{4}").expect("static year regex"))
}

/// First run of four digits in `file_name`, e.g. `news_hackingx_2021.xlsx` → `2021`.
pub fn extract_year(file_name: &str) -> Option<String> {
    year_regex().find(file_name).map(|m| m.as_str().to_string())
}

/// Find news workbooks in `dir` matching the glob `pattern`.
///
/// Files without a four-digit run in their name are skipped. The result is
/// sorted by path so that duplicate years resolve the same way on every run.
pub fn discover_news(dir: &Path, pattern: &str) -> Result<Vec<NewsFile>, LoaderError> {
    let full = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern
    );

    let mut paths = Vec::new();
    for entry in glob::glob(&full)? {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => log::warn!("Skipping unreadable match: {e}"),
        }
    }
    paths.sort();

    let files = paths
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            match extract_year(&name) {
                Some(year) => Some(NewsFile { path, year }),
                None => {
                    log::debug!("No year in file name, skipping {name}");
                    None
                }
            }
        })
        .collect();

    Ok(files)
}
