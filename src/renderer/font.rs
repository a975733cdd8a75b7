//! Font asset loading
//!
//! The HUD font is parsed once at startup and handed to the render sink by
//! value. Parsing goes through `rusttype`; on top of that every character the
//! HUD can print must map to a real glyph.

use std::fmt;
use std::path::{Path, PathBuf};

use rusttype::{Font, Scale, point};

/// Characters the HUD labels are built from ("Score: ", "High Score: ", digits)
pub const HUD_CHARS: &str = "ScoreHigh:0123456789";

/// Errors from loading a font asset. All of them are fatal to the host.
#[derive(Debug)]
pub enum FontError {
    Io { path: PathBuf, source: std::io::Error },
    /// Data is not a font `rusttype` can parse
    Parse { len: usize },
    /// Font parses but cannot draw a character the HUD needs
    MissingGlyph(char),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Io { path, source } => {
                write!(f, "failed to read font {}: {}", path.display(), source)
            }
            FontError::Parse { len } => write!(f, "invalid font data ({} bytes)", len),
            FontError::MissingGlyph(c) => write!(f, "font has no glyph for {:?}", c),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A parsed font, owned by whoever draws text
#[derive(Clone)]
pub struct FontSource {
    font: Font<'static>,
}

impl fmt::Debug for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontSource")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl FontSource {
    /// Parse raw font bytes
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FontError> {
        let len = data.len();
        let font = Font::try_from_vec(data).ok_or(FontError::Parse { len })?;

        // Glyph 0 is .notdef: the font would draw boxes instead of text
        if let Some(c) = HUD_CHARS.chars().find(|&c| font.glyph(c).id().0 == 0) {
            return Err(FontError::MissingGlyph(c));
        }

        Ok(Self { font })
    }

    /// Read and parse a font file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Self::from_bytes(data)?;
        log::info!(
            "Loaded font {} ({} glyphs)",
            path.display(),
            font.glyph_count()
        );
        Ok(font)
    }

    pub fn glyph_count(&self) -> usize {
        self.font.glyph_count()
    }

    /// Horizontal advance of a laid-out line at `size` pixels
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let scale = Scale::uniform(size);
        self.font
            .layout(text, scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
pub(crate) const TEST_FONT: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSansMono.ttf"));
