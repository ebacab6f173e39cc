//! Registration of the Korean UI font.
//!
//! The default egui fonts have no Hangul glyphs. [`register`] loads the
//! configured TrueType file once at startup and reports the outcome as a
//! [`FontStatus`]; rendering code asks the status which family to use.

use std::path::{Path, PathBuf};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use thiserror::Error;

/// Named family that resolves to the registered Korean font.
pub const KOREAN_FAMILY: &str = "korean";

#[derive(Error, Debug)]
pub enum FontError {
    #[error("cannot read font {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a TrueType/OpenType font", .path.display())]
    NotTrueType { path: PathBuf },
}

/// Outcome of font registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontStatus {
    Registered { name: String },
    /// egui's built-in fonts; Hangul renders as replacement boxes.
    Fallback,
}

impl FontStatus {
    pub fn is_registered(&self) -> bool {
        matches!(self, FontStatus::Registered { .. })
    }

    /// Family for text that may contain Hangul.
    pub fn family(&self) -> FontFamily {
        match self {
            FontStatus::Registered { .. } => FontFamily::Name(KOREAN_FAMILY.into()),
            FontStatus::Fallback => FontFamily::Proportional,
        }
    }
}

fn is_sfnt(bytes: &[u8]) -> bool {
    matches!(
        bytes.get(..4),
        Some([0x00, 0x01, 0x00, 0x00]) | Some(b"OTTO") | Some(b"true") | Some(b"ttcf")
    )
}

/// Read a font file, rejecting anything without an sfnt header.
pub fn read_font(path: &Path) -> Result<Vec<u8>, FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if !is_sfnt(&bytes) {
        return Err(FontError::NotTrueType {
            path: path.to_path_buf(),
        });
    }
    Ok(bytes)
}

/// Default definitions with `name` as the primary proportional font, a
/// monospace fallback, and the [`KOREAN_FAMILY`] alias.
pub fn definitions_with(name: &str, bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), FontData::from_owned(bytes).into());

    let proportional = fonts.families.entry(FontFamily::Proportional).or_default();
    proportional.insert(0, name.to_owned());
    let korean = proportional.clone();

    fonts
        .families
        .entry(FontFamily::Monospace)
        .or_default()
        .push(name.to_owned());
    fonts
        .families
        .insert(FontFamily::Name(KOREAN_FAMILY.into()), korean);
    fonts
}

/// Install the font at `path` into `ctx`, returning the registered name.
pub fn install(ctx: &egui::Context, path: &Path) -> Result<String, FontError> {
    let bytes = read_font(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| KOREAN_FAMILY.to_string());

    ctx.set_fonts(definitions_with(&name, bytes));
    Ok(name)
}

/// Best-effort registration: failures are logged and yield [`FontStatus::Fallback`].
pub fn register(ctx: &egui::Context, path: &Path) -> FontStatus {
    match install(ctx, path) {
        Ok(name) => {
            log::info!("Registered font {name} from {}", path.display());
            FontStatus::Registered { name }
        }
        Err(e) => {
            log::warn!("Font registration failed, using built-in fonts: {e}");
            FontStatus::Fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAKE_TTF: &[u8] = &[0x00, 0x01, 0x00, 0x00, 0x00, 0x0c];

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_font(&dir.path().join("NanumGothic-Regular.ttf")).unwrap_err();
        assert!(matches!(err, FontError::Read { .. }));
    }

    #[test]
    fn rejects_non_font_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ttf");
        std::fs::write(&path, b"<html>not found</html>").unwrap();
        assert!(matches!(
            read_font(&path),
            Err(FontError::NotTrueType { .. })
        ));
    }

    #[test]
    fn accepts_sfnt_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ttf");
        std::fs::write(&path, FAKE_TTF).unwrap();
        assert_eq!(read_font(&path).unwrap(), FAKE_TTF);
    }

    #[test]
    fn definitions_put_font_first_and_alias_it() {
        let fonts = definitions_with("NanumGothic-Regular", FAKE_TTF.to_vec());

        assert!(fonts.font_data.contains_key("NanumGothic-Regular"));
        assert_eq!(
            fonts.families[&FontFamily::Proportional][0],
            "NanumGothic-Regular"
        );
        assert_eq!(
            fonts.families[&FontFamily::Monospace].last().map(String::as_str),
            Some("NanumGothic-Regular")
        );
        let korean = &fonts.families[&FontFamily::Name(KOREAN_FAMILY.into())];
        assert_eq!(korean, &fonts.families[&FontFamily::Proportional]);
    }

    #[test]
    fn status_selects_family() {
        let registered = FontStatus::Registered {
            name: "NanumGothic-Regular".into(),
        };
        assert!(registered.is_registered());
        assert_eq!(registered.family(), FontFamily::Name(KOREAN_FAMILY.into()));
        assert_eq!(FontStatus::Fallback.family(), FontFamily::Proportional);
    }
}
