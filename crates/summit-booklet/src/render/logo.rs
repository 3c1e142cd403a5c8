//! Sponsor logo resolution
//!
//! Logo availability is only known when a load is attempted, so the renderer
//! always tries the load and substitutes the sponsor's name when it fails.

use std::path::{Path, PathBuf};

use crate::types::{BookletError, Result};

/// A logo that loaded successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    /// The image reference as written in the sponsor record
    pub source: String,
    pub width: u32,
    pub height: u32,
}

/// Resolves a sponsor's image reference
pub trait LogoLoader {
    fn load(&self, logo: &str) -> Result<LogoImage>;
}

/// Decodes logos from files under an asset directory
#[derive(Debug, Clone)]
pub struct FsLogoLoader {
    root: PathBuf,
}

impl FsLogoLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LogoLoader for FsLogoLoader {
    fn load(&self, logo: &str) -> Result<LogoImage> {
        let path = self.root.join(logo);
        let image = image::open(&path)
            .map_err(|e| BookletError::Logo(format!("{}: {}", path.display(), e)))?;
        Ok(LogoImage {
            source: logo.to_string(),
            width: image.width(),
            height: image.height(),
        })
    }
}

/// Loader for text-only output: every logo falls back to the sponsor name
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOnlyLogos;

impl LogoLoader for TextOnlyLogos {
    fn load(&self, logo: &str) -> Result<LogoImage> {
        Err(BookletError::Logo(format!("{}: images disabled", logo)))
    }
}
