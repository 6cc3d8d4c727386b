use crate::color::Rgb8;
use crate::error::PosterResult;
use crate::fit::{DEFAULT_MIN_FIT_PX, fit_to_line};
use crate::measure::{ListMeasure, MeasurementContext, TextMeasure};
use crate::poster::Poster;
use crate::refresh::RecomputePlan;
use crate::tracks::{TrackListContext, TrackListSizing, rescale_track_list, scale_track_list};

/// Measured geometry the poster is being laid out into.
#[derive(Clone, Copy, Debug)]
pub struct PosterGeometry {
    /// Width available to the single-line title and artist name.
    pub content_width: f64,
    /// Track list box and root font size.
    pub tracks: TrackListContext,
}

/// One full layout decision for the poster, ready for the rendering layer to
/// apply as styles.
#[derive(Clone, Debug)]
pub struct PosterMetrics {
    pub title_px: Option<u32>,
    pub artist_px: Option<u32>,
    pub tracks: Option<TrackListSizing>,
    pub display_palette: Vec<Rgb8>,
    pub accent: Option<Rgb8>,
}

/// Run the full layout pass: fit the title and artist to one line each, size
/// the track list, and resolve the display palette and accent.
///
/// Sequencing glue only; every decision is made by the component functions.
pub fn compose(
    poster: &mut Poster,
    geo: &PosterGeometry,
    text: &mut dyn TextMeasure,
    list: &mut dyn ListMeasure,
) -> PosterResult<PosterMetrics> {
    let family = poster.font.family_name();

    let title_ctx = MeasurementContext::new(family, poster.title.clone());
    let title_px = fit_to_line(text, &title_ctx, geo.content_width, DEFAULT_MIN_FIT_PX)?;

    let artist_ctx = MeasurementContext::new(family, poster.artist.clone());
    let artist_px = fit_to_line(text, &artist_ctx, geo.content_width, DEFAULT_MIN_FIT_PX)?;

    let titles = poster.album.display_tracks();
    let tracks = scale_track_list(list, &titles, &geo.tracks, poster.track_scale)?;

    Ok(PosterMetrics {
        title_px,
        artist_px,
        tracks,
        display_palette: poster.display_palette(),
        accent: poster.resolve_accent(),
    })
}

/// Apply a coalesced recompute plan: a full pass, or, when only the scale
/// slider moved, just re-derive the responsive track descriptor from the
/// previous metrics.
pub fn recompute(
    plan: RecomputePlan,
    poster: &mut Poster,
    geo: &PosterGeometry,
    text: &mut dyn TextMeasure,
    list: &mut dyn ListMeasure,
    previous: &PosterMetrics,
) -> PosterResult<PosterMetrics> {
    match plan {
        RecomputePlan::Full => compose(poster, geo, text, list),
        RecomputePlan::ScaleOnly => Ok(PosterMetrics {
            tracks: previous
                .tracks
                .map(|sizing| rescale_track_list(sizing, poster.track_scale)),
            ..previous.clone()
        }),
    }
}
