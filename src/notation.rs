//! Notation subsystem: resolves model-element text into rendered extents.
//!
//! Figures never measure text themselves; they ask this module for the
//! extent of a notation string under the current [`NotationSettings`].
//! Measurement is backed by a shared `cosmic-text` font system so fonts
//! are loaded once per process.

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use crate::{geometry::Dimension, settings::NotationSettings};

/// The kind of model-element text a label figure displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotationType {
    /// The element's name.
    Name,
    /// The element's stereotype. Reserved for figure classes that show
    /// one; the base node presentation does not.
    Stereotype,
}

/// Calculate the extent of a notation string in canvas units.
///
/// Returns a zero dimension for empty text. Fractional font metrics are
/// rounded up so a label never reports an extent smaller than its
/// rendered glyphs.
pub fn text_extent(text: &str, settings: &NotationSettings) -> Dimension {
    NOTATION_ENGINE
        .get_or_init(NotationEngine::new)
        .text_extent(text, settings)
}

/// NotationEngine handles text measurement and font operations.
/// It maintains a reusable FontSystem instance to avoid expensive recreation.
struct NotationEngine {
    font_system: Arc<Mutex<FontSystem>>,
}

impl NotationEngine {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Measure text with cosmic-text shaping.
    ///
    /// Shaping accounts for ligatures, kerning, and other typography
    /// features, so the extent matches what a renderer produces. When no
    /// layout runs are available (no usable fonts), falls back to a
    /// per-character estimate.
    fn text_extent(&self, text: &str, settings: &NotationSettings) -> Dimension {
        if text.is_empty() {
            return Dimension::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        // Convert font size from points to pixels (roughly 1.33x multiplier for standard DPI)
        let font_size_px = f32::from(settings.font_size()) * 1.33;
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(settings.font_family()));

        // Unlimited buffer size so text flows naturally
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                // Rightmost glyph position bounds the run width
                if let Some(last) = last {
                    let run_width = last.x + last.w;
                    max_width = max_width.max(run_width);
                }
                total_height += metrics.line_height;
            }
        } else {
            max_width = text.len() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        }

        Dimension::new(max_width.ceil() as i32, total_height.ceil() as i32)
    }
}

// Shared engine instance for the whole process.
static NOTATION_ENGINE: OnceLock<NotationEngine> = OnceLock::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_zero_extent() {
        let settings = NotationSettings::default();
        assert!(text_extent("", &settings).is_zero());
    }

    #[test]
    fn test_nonempty_text_has_positive_extent() {
        let settings = NotationSettings::default();
        let extent = text_extent("Send Invoice", &settings);
        assert!(extent.width() > 0, "width should be positive");
        assert!(extent.height() > 0, "height should be positive");
    }

    #[test]
    fn test_longer_text_is_wider() {
        let settings = NotationSettings::default();
        let short = text_extent("Do", &settings);
        let long = text_extent("Do something considerably more verbose", &settings);
        assert!(long.width() > short.width());
    }

    #[test]
    fn test_multiline_text_is_taller() {
        let settings = NotationSettings::default();
        let single = text_extent("Line 1", &settings);
        let multi = text_extent("Line 1\nLine 2\nLine 3", &settings);
        assert!(multi.height() > single.height());
    }

    #[test]
    fn test_measurement_is_stable() {
        let settings = NotationSettings::default();
        let a = text_extent("Review Order", &settings);
        let b = text_extent("Review Order", &settings);
        assert_eq!(a, b);
    }
}
