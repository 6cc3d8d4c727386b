use posterkit::{
    ListMeasure, ListMetrics, MIN_TRACK_FONT_PX, PosterResult, TrackListContext, TrackTier,
    UserScale, scale_track_list,
};

/// Wrap-aware stub: titles longer than the container at the probed size wrap
/// to two lines, so content height is not purely linear in font size.
struct WrappingList {
    titles: Vec<String>,
    container_width: f64,
    visible_height: f64,
    probes: u32,
}

impl WrappingList {
    fn new(titles: Vec<String>, container_width: f64, visible_height: f64) -> Self {
        Self {
            titles,
            container_width,
            visible_height,
            probes: 0,
        }
    }
}

impl ListMeasure for WrappingList {
    fn metrics_at(&mut self, font_px: f64) -> PosterResult<ListMetrics> {
        self.probes += 1;
        let line_height = font_px * 1.3;
        let content_height: f64 = self
            .titles
            .iter()
            .map(|t| {
                let text_width = t.chars().count() as f64 * font_px * 0.55;
                let lines = (text_width / self.container_width).ceil().max(1.0);
                lines * line_height
            })
            .sum();
        Ok(ListMetrics {
            content_height,
            visible_height: self.visible_height,
            column_count: 1,
        })
    }
}

fn titles(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Track {i} of the Night")).collect()
}

fn ctx(width: f64, height: f64) -> TrackListContext {
    TrackListContext {
        container_width: width,
        container_height: height,
        container_font_px: 16.0,
    }
}

#[test]
fn twenty_three_tracks_pick_the_top_tier() {
    let mut list = WrappingList::new(titles(23), 400.0, 500.0);
    let sizing = scale_track_list(&mut list, &titles(23), &ctx(400.0, 500.0), UserScale::new(1.5))
        .unwrap()
        .unwrap();

    assert_eq!(sizing.tier, TrackTier::TwentyOnePlus);

    // User scale touches only the width-relative descriptor parts.
    let base = TrackTier::TwentyOnePlus.descriptor();
    assert_eq!(sizing.responsive.min_rem, base.min_rem);
    assert!((sizing.responsive.preferred_cqw - base.preferred_cqw * 1.5).abs() < 1e-12);
    assert!((sizing.responsive.max_cqw - base.max_cqw * 1.5).abs() < 1e-12);
}

#[test]
fn settled_size_respects_floor_and_start_cap() {
    // Generous container: first probe fits, size stays at the capped start.
    let mut roomy = WrappingList::new(titles(8), 600.0, 5000.0);
    let sizing = scale_track_list(
        &mut roomy,
        &titles(8),
        &ctx(600.0, 5000.0),
        UserScale::default(),
    )
    .unwrap()
    .unwrap();
    assert_eq!(sizing.fixed_px, 16.0); // base_em(8) = 1.0 * 16 px, under the 18 px cap
    assert!(sizing.fits);

    // Hopeless container: the floor is accepted, overflow tolerated.
    let mut cramped = WrappingList::new(titles(40), 200.0, 60.0);
    let sizing = scale_track_list(
        &mut cramped,
        &titles(40),
        &ctx(200.0, 60.0),
        UserScale::default(),
    )
    .unwrap()
    .unwrap();
    assert_eq!(sizing.fixed_px, MIN_TRACK_FONT_PX);
    assert!(!sizing.fits);
}

#[test]
fn shrink_settles_on_the_first_non_overflowing_probe() {
    let mut list = WrappingList::new(titles(14), 380.0, 260.0);
    let sizing = scale_track_list(
        &mut list,
        &titles(14),
        &ctx(380.0, 260.0),
        UserScale::default(),
    )
    .unwrap()
    .unwrap();

    // The settled size fits; half a pixel more overflows (it was probed and
    // rejected on the way down, unless the start already fit).
    let at = |l: &mut WrappingList, px: f64| l.metrics_at(px).unwrap();
    assert!(!at(&mut list, sizing.fixed_px).overflows());
    if sizing.fixed_px < 15.2 {
        // base_em(14) = 0.95 -> start 15.2 px
        assert!(at(&mut list, sizing.fixed_px + 0.5).overflows());
    }
    assert!(sizing.fixed_px >= MIN_TRACK_FONT_PX);
}

#[test]
fn empty_track_list_is_a_noop() {
    let mut list = WrappingList::new(vec![], 400.0, 300.0);
    assert!(
        scale_track_list(&mut list, &[], &ctx(400.0, 300.0), UserScale::default())
            .unwrap()
            .is_none()
    );
    assert_eq!(list.probes, 0);
}
