use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PosterResult;
use crate::measure::ListMeasure;

/// Hard floor for the shrink pass; overflow below this is tolerated.
pub const MIN_TRACK_FONT_PX: f64 = 6.0;

/// The shrink pass never starts above this, whatever the tier seed says.
pub const MAX_TRACK_FONT_PX: f64 = 18.0;

const SHRINK_STEP_PX: f64 = 0.5;
const MAX_SHRINK_ITERATIONS: u32 = 100;

/// Track-count bucket selecting a base responsive descriptor. Denser lists
/// get smaller width-relative type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackTier {
    UpToFive,
    UpToTen,
    UpToFifteen,
    UpToTwenty,
    TwentyOnePlus,
}

impl TrackTier {
    pub fn for_count(track_count: usize) -> Self {
        match track_count {
            0..=5 => Self::UpToFive,
            6..=10 => Self::UpToTen,
            11..=15 => Self::UpToFifteen,
            16..=20 => Self::UpToTwenty,
            _ => Self::TwentyOnePlus,
        }
    }

    /// Base responsive descriptor for this tier. The top two tiers share
    /// values: past 20 tracks the shrink pass does the remaining work.
    pub fn descriptor(self) -> ResponsiveSize {
        match self {
            Self::UpToFive => ResponsiveSize::new(1.12, 7.0, 15.75),
            Self::UpToTen => ResponsiveSize::new(0.672, 4.2, 9.45),
            Self::UpToFifteen => ResponsiveSize::new(0.42, 2.625, 5.90625),
            Self::UpToTwenty | Self::TwentyOnePlus => ResponsiveSize::new(0.297, 1.855, 4.17375),
        }
    }
}

/// Coarse em-scale seed for the shrink pass: 1em through 10 tracks, then
/// -0.05em per started group of 5, floored at 0.3em.
pub fn base_em(track_count: usize) -> f64 {
    if track_count <= 10 {
        return 1.0;
    }
    let groups_of_five = (track_count - 10).div_ceil(5);
    (1.0 - 0.05 * groups_of_five as f64).max(0.3)
}

/// Three-part responsive size: a fixed rem floor plus width-relative
/// preferred/cap components (container-query width units, not viewport).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveSize {
    pub min_rem: f64,
    pub preferred_cqw: f64,
    pub max_cqw: f64,
}

impl ResponsiveSize {
    pub fn new(min_rem: f64, preferred_cqw: f64, max_cqw: f64) -> Self {
        Self {
            min_rem,
            preferred_cqw,
            max_cqw,
        }
    }

    /// Scale only the width-relative components; the rem floor is a
    /// legibility bound and never scales.
    pub fn scaled(self, scale: UserScale) -> Self {
        Self {
            min_rem: self.min_rem,
            preferred_cqw: self.preferred_cqw * scale.value(),
            max_cqw: self.max_cqw * scale.value(),
        }
    }

    /// CSS `clamp()` expression for style output.
    pub fn to_css(self) -> String {
        format!(
            "clamp({}rem, {}cqw, {}cqw)",
            self.min_rem, self.preferred_cqw, self.max_cqw
        )
    }
}

/// User scale multiplier, clamped to the practical slider range [0.1, 3.0].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserScale(f64);

impl UserScale {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.1, 3.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for UserScale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Container geometry the track list is sized against.
#[derive(Clone, Copy, Debug)]
pub struct TrackListContext {
    pub container_width: f64,
    pub container_height: f64,
    /// Root font size of the container, used to turn the em seed into pixels.
    pub container_font_px: f64,
}

/// Final sizing decision: the concrete pixel size settled by the shrink pass
/// and the user-scaled responsive descriptor. Callers wanting static type
/// apply `fixed_px`; callers wanting size to track container resizing apply
/// `responsive`. The two are recomputed together so they stay consistent.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TrackListSizing {
    pub tier: TrackTier,
    pub fixed_px: f64,
    pub responsive: ResponsiveSize,
    /// False when the shrink pass hit its floor still overflowing.
    pub fits: bool,
}

/// Outcome of one shrink-to-fit pass.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ShrinkOutcome {
    pub(crate) font_px: f64,
    pub(crate) iterations: u32,
    pub(crate) fits: bool,
}

/// Size a track list to occupy exactly one column without vertical overflow.
///
/// Stage A seeds a pixel size from [`base_em`] (capped at
/// [`MAX_TRACK_FONT_PX`]); stage B selects the tier descriptor; stage C walks
/// the size down in 0.5 px steps until the list stops overflowing, with a
/// hard floor of [`MIN_TRACK_FONT_PX`] after which overflow is accepted;
/// stage D applies the user scale to the descriptor's width-relative
/// components only.
///
/// Empty input or an unsized container is a no-op returning `None`.
pub fn scale_track_list(
    list: &mut dyn ListMeasure,
    track_titles: &[String],
    ctx: &TrackListContext,
    user_scale: UserScale,
) -> PosterResult<Option<TrackListSizing>> {
    if track_titles.is_empty()
        || ctx.container_width <= 0.0
        || ctx.container_height <= 0.0
        || ctx.container_font_px <= 0.0
    {
        return Ok(None);
    }

    let track_count = track_titles.len();
    let tier = TrackTier::for_count(track_count);
    let start_px = (base_em(track_count) * ctx.container_font_px).min(MAX_TRACK_FONT_PX);

    let outcome = shrink_to_fit(list, start_px)?;
    debug!(
        track_count,
        start_px,
        settled_px = outcome.font_px,
        iterations = outcome.iterations,
        fits = outcome.fits,
        "track list sized"
    );

    Ok(Some(TrackListSizing {
        tier,
        fixed_px: outcome.font_px,
        responsive: tier.descriptor().scaled(user_scale),
        fits: outcome.fits,
    }))
}

/// Re-apply a changed user scale without re-running the shrink pass. Valid
/// only while content and container are unchanged.
pub fn rescale_track_list(sizing: TrackListSizing, user_scale: UserScale) -> TrackListSizing {
    TrackListSizing {
        responsive: sizing.tier.descriptor().scaled(user_scale),
        ..sizing
    }
}

/// Overflow-driven descent: probe, step down 0.5 px, repeat. Bounded by the
/// iteration cap and the pixel floor; never loops forever on content that
/// cannot fit.
pub(crate) fn shrink_to_fit(
    list: &mut dyn ListMeasure,
    start_px: f64,
) -> PosterResult<ShrinkOutcome> {
    let mut font_px = start_px.max(MIN_TRACK_FONT_PX);
    let mut iterations = 0u32;
    let mut fits = false;

    while iterations < MAX_SHRINK_ITERATIONS && font_px >= MIN_TRACK_FONT_PX {
        let metrics = list.metrics_at(font_px)?;
        if metrics.fits_single_column() {
            fits = true;
            break;
        }
        font_px -= SHRINK_STEP_PX;
        iterations += 1;
    }

    if font_px < MIN_TRACK_FONT_PX {
        font_px = MIN_TRACK_FONT_PX;
        fits = list.metrics_at(font_px)?.fits_single_column();
    }

    if !fits {
        warn!(font_px, iterations, "track list still overflows at the floor");
    }

    Ok(ShrinkOutcome {
        font_px,
        iterations,
        fits,
    })
}
