//! Font discovery for the sample documents.
//!
//! `genpdf` embeds TrueType fonts, so the samples need a font family on disk.  The search
//! order is: the [`FONTS_DIR_ENV`] environment variable, the crate's `assets/fonts`
//! directory, and finally a handful of well-known system locations for Liberation Sans.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};
use log::debug;

/// Name of the font family used by all sample documents.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "LiberationSans";

/// Environment variable that overrides the font search path.
pub const FONTS_DIR_ENV: &str = "PDF_BLOCKS_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "LiberationSans-Regular.ttf",
    "LiberationSans-Bold.ttf",
    "LiberationSans-Italic.ttf",
    "LiberationSans-BoldItalic.ttf",
];

const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation-sans",
    "/usr/share/fonts/TTF",
];

fn font_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = env::var(FONTS_DIR_ENV) {
        if !path.trim().is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }

    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"));

    for dir in SYSTEM_FONT_DIRS {
        candidates.push(PathBuf::from(dir));
    }

    candidates
}

fn missing_font_files(path: &Path) -> Vec<PathBuf> {
    FONT_FILES
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in font_directory_candidates() {
        let missing = missing_font_files(&candidate);
        if candidate.is_dir() && missing.is_empty() {
            return Ok(candidate);
        }

        let reason = if !candidate.is_dir() {
            format!("directory missing at {}", candidate.display())
        } else {
            let missing_list = missing
                .iter()
                .map(|path| {
                    path.file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .into_owned()
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("missing files [{}]", missing_list)
        };
        debug!("Skipping font search path: {}", reason);
        attempts.push(format!("{} ({})", candidate.display(), reason));
    }

    Err(Error::new(
        format!(
            "Unable to locate the {} font family. Checked: {}. See assets/fonts/README.md or set {}.",
            DEFAULT_FONT_FAMILY_NAME,
            attempts.join(", "),
            FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "font directory not found"),
    ))
}

/// Loads the Liberation Sans font family from the first search path containing all four styles.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_font_directory()?;

    fonts::from_files(&directory, DEFAULT_FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                DEFAULT_FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

/// Indicates whether the fonts required by the samples are present on disk.
pub fn default_fonts_available() -> bool {
    resolve_font_directory().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_directory_is_always_a_candidate() {
        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
        assert!(font_directory_candidates().contains(&manifest));
    }

    #[test]
    fn missing_files_are_reported_for_empty_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = missing_font_files(dir.path());
        assert_eq!(missing.len(), FONT_FILES.len());
    }
}
