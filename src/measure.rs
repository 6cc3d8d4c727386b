mod parley_backend;

use serde::{Deserialize, Serialize};

use crate::error::PosterResult;

pub use parley_backend::{ParleyMeasurer, ParleyTrackList};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Everything a measurement backend needs to lay out one string: the font
/// descriptor plus the text itself. Immutable for the duration of a fit
/// operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeasurementContext {
    pub font_family: String,
    pub font_weight: u16,
    pub font_style: FontStyle,
    pub text: String,
}

impl MeasurementContext {
    pub fn new(font_family: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
            font_weight: 400,
            font_style: FontStyle::Normal,
            text: text.into(),
        }
    }
}

/// Width-measurement oracle behind the font-fit search.
///
/// Implementations must lay the text out afresh on every call: the searches
/// probe one candidate size per call and a stale (cached) width breaks their
/// bracketing invariants. The `&mut` receiver is deliberate: one backend
/// instance is driven by at most one fit operation at a time.
pub trait TextMeasure {
    /// Rendered pixel width of `ctx.text` at `font_px`, unwrapped (single line).
    fn measure_width(&mut self, ctx: &MeasurementContext, font_px: u32) -> PosterResult<f64>;
}

/// One overflow probe of a rendered vertical list.
#[derive(Clone, Copy, Debug)]
pub struct ListMetrics {
    /// Full scrollable content height at the probed font size.
    pub content_height: f64,
    /// Visible height of the containing box.
    pub visible_height: f64,
    /// Columns the layout actually resolved to; the shrink pass only accepts
    /// a size when this is 1.
    pub column_count: u32,
}

impl ListMetrics {
    pub fn overflows(&self) -> bool {
        self.content_height > self.visible_height
    }

    pub fn fits_single_column(&self) -> bool {
        !self.overflows() && self.column_count == 1
    }
}

/// Overflow oracle behind the track-list shrink pass. Same freshness and
/// exclusivity rules as [`TextMeasure`].
pub trait ListMeasure {
    /// Re-lay the list out at `font_px` and report fresh metrics.
    fn metrics_at(&mut self, font_px: f64) -> PosterResult<ListMetrics>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_metrics_overflow_edges() {
        let fits = ListMetrics {
            content_height: 100.0,
            visible_height: 100.0,
            column_count: 1,
        };
        assert!(!fits.overflows());
        assert!(fits.fits_single_column());

        let over = ListMetrics {
            content_height: 100.5,
            visible_height: 100.0,
            column_count: 1,
        };
        assert!(over.overflows());
        assert!(!over.fits_single_column());

        let two_col = ListMetrics {
            content_height: 50.0,
            visible_height: 100.0,
            column_count: 2,
        };
        assert!(!two_col.fits_single_column());
    }

    #[test]
    fn context_defaults_to_regular_upright() {
        let ctx = MeasurementContext::new("Inter", "ALBUM");
        assert_eq!(ctx.font_weight, 400);
        assert_eq!(ctx.font_style, FontStyle::Normal);
    }
}
