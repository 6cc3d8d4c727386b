use crate::error::PosterResult;
use crate::measure::{MeasurementContext, TextMeasure};

/// Default lower bound for fitted text, in pixels.
pub const DEFAULT_MIN_FIT_PX: u32 = 12;

/// Largest integer font size whose rendered width stays within
/// `container_width`, with no externally imposed upper bound.
///
/// Font size and rendered width are not proportional 1:1 (a short string can
/// fit at a size far larger than the container width in pixels), so the
/// search starts from a deliberately huge candidate (10x the width), halves
/// until it finds any feasible size, expands that bracket upward by 1.5x
/// while candidates keep fitting, and finishes with an integer binary search.
/// The returned size is guaranteed to fit; `size + 1` does not (for a
/// monotonic oracle).
///
/// Degenerate input (empty text, non-positive width) is a no-op returning
/// `None`, not an error.
pub fn fit_to_line(
    oracle: &mut dyn TextMeasure,
    ctx: &MeasurementContext,
    container_width: f64,
    min_font_px: u32,
) -> PosterResult<Option<u32>> {
    if ctx.text.is_empty() || !container_width.is_finite() || container_width <= 0.0 {
        return Ok(None);
    }

    let mut min = min_font_px.max(1);
    let mut max = ((container_width * 10.0) as u32).max(min);
    let mut best = min;

    // Halve from the huge starting candidate until something fits.
    let mut width = oracle.measure_width(ctx, max)?;
    while width > container_width && max > min {
        max /= 2;
        width = oracle.measure_width(ctx, max)?;
    }

    if width <= container_width {
        best = max;
        min = max;

        // The bracket may still be conservative; expand while candidates fit.
        let mut candidate = max.saturating_mul(2);
        while candidate > min {
            if oracle.measure_width(ctx, candidate)? <= container_width {
                best = candidate;
                min = candidate;
                candidate = candidate.saturating_add(candidate / 2);
            } else {
                break;
            }
        }
        max = best.saturating_mul(2);
    }

    Ok(Some(binary_search(oracle, ctx, container_width, min, max, best)?))
}

/// Largest integer font size whose rendered width stays within `max_width`,
/// searching below the explicit `2 * max_width` upper bound.
///
/// Same degenerate-input behavior as [`fit_to_line`].
pub fn fit_to_width(
    oracle: &mut dyn TextMeasure,
    ctx: &MeasurementContext,
    max_width: f64,
    min_font_px: u32,
) -> PosterResult<Option<u32>> {
    if ctx.text.is_empty() || !max_width.is_finite() || max_width <= 0.0 {
        return Ok(None);
    }

    let min = min_font_px.max(1);
    let max = ((max_width * 2.0) as u32).max(min);
    Ok(Some(binary_search(oracle, ctx, max_width, min, max, min)?))
}

/// Integer binary search over `[min, max]` to 1-px resolution. A fitting
/// midpoint becomes the new lower bound and the tentative answer; the lower
/// bound is returned because it is the last size observed to fit.
fn binary_search(
    oracle: &mut dyn TextMeasure,
    ctx: &MeasurementContext,
    target_width: f64,
    mut min: u32,
    mut max: u32,
    mut best: u32,
) -> PosterResult<u32> {
    while max.saturating_sub(min) > 1 {
        let mid = min + (max - min) / 2;
        if oracle.measure_width(ctx, mid)? <= target_width {
            best = mid;
            min = mid;
        } else {
            max = mid;
        }
    }
    Ok(best)
}
