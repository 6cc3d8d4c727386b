//! Posterkit computes the adaptive typography and color scheme of a
//! data-driven album poster.
//!
//! Three coupled numeric/search passes do the real work:
//!
//! 1. **Palette**: `image -> Vec<Rgb8>`: downsample, sample opaque pixels,
//!    and cluster them with a fixed-iteration k-means ([`extract_palette`]).
//! 2. **Text fit**: largest integer font size keeping a string inside a
//!    measured width, found by bracketing + binary search over an opaque
//!    measurement oracle ([`fit_to_line`], [`fit_to_width`]).
//! 3. **Track sizing**: tier-based base size, overflow-driven shrink-to-fit,
//!    and a user scale applied to the width-relative components only
//!    ([`scale_track_list`]).
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: clustering takes an explicit seed; the
//!   same inputs always produce the same palette.
//! - **Injected measurement**: the searches only talk to the [`TextMeasure`]
//!   and [`ListMeasure`] traits, so they run unchanged against the real
//!   Parley backend or a deterministic test stub. Backends must re-lay text
//!   out on every probe; stale metrics break the searches.
//! - **No IO in the core**: decoding and font loading happen at the edges
//!   (the CLI and the Parley backend constructor).
#![forbid(unsafe_code)]

mod color;
mod compose;
mod error;
mod fit;
mod geometry;
mod measure;
mod palette;
mod poster;
mod refresh;
mod tracks;

pub use color::{BLACK, Rgb8, WHITE, contrast_color, sort_by_lightness};
pub use compose::{PosterGeometry, PosterMetrics, compose, recompute};
pub use error::{PosterError, PosterResult};
pub use fit::{DEFAULT_MIN_FIT_PX, fit_to_line, fit_to_width};
pub use geometry::{Orientation, PaperSize, aspect_ratio, poster_canvas_size};
pub use measure::{
    FontStyle, ListMeasure, ListMetrics, MeasurementContext, ParleyMeasurer, ParleyTrackList,
    TextMeasure,
};
pub use palette::extract_palette;
pub use poster::{
    AlbumData, DEFAULT_GREYS, DISPLAY_SWATCHES, FontChoice, Poster, placeholder_tracks,
};
pub use refresh::{DEFAULT_DEBOUNCE, RecomputePlan, RecomputeTrigger, RefreshCoalescer};
pub use tracks::{
    MAX_TRACK_FONT_PX, MIN_TRACK_FONT_PX, ResponsiveSize, TrackListContext, TrackListSizing,
    TrackTier, UserScale, base_em, rescale_track_list, scale_track_list,
};
