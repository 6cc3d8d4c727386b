use posterkit::{MeasurementContext, PosterResult, TextMeasure, fit_to_line, fit_to_width};

/// Monotonic but deliberately non-linear oracle: width grows slightly
/// sublinearly in font size, like real glyph advances with hinting.
struct SublinearOracle {
    calls: u32,
}

impl TextMeasure for SublinearOracle {
    fn measure_width(&mut self, ctx: &MeasurementContext, font_px: u32) -> PosterResult<f64> {
        self.calls += 1;
        let chars = ctx.text.chars().count() as f64;
        Ok(chars * 0.62 * f64::from(font_px).powf(0.97))
    }
}

fn ctx(text: &str) -> MeasurementContext {
    MeasurementContext::new("Inter", text)
}

#[test]
fn album_scenario_terminates_and_is_maximal() {
    let mut oracle = SublinearOracle { calls: 0 };
    let ctx = ctx("ALBUM");
    let width = 300.0;

    let size = fit_to_line(&mut oracle, &ctx, width, 20).unwrap().unwrap();

    assert!(oracle.measure_width(&ctx, size).unwrap() <= width);
    assert!(oracle.measure_width(&ctx, size + 1).unwrap() > width);
    // Bounded exploration: the bracket starts at 10x width and only ever
    // doubles past the best-known fit.
    assert!(size < 6000);
    assert!(oracle.calls < 80, "search should converge in tens of probes");
}

#[test]
fn both_modes_agree_when_the_answer_is_inside_both_brackets() {
    // Long text fits only at small sizes, well inside 2x-width; the two entry
    // modes must then find the same maximum.
    let text = "The Head on the Door and Other Stories".repeat(2);
    let mut a = SublinearOracle { calls: 0 };
    let mut b = SublinearOracle { calls: 0 };
    let line = fit_to_line(&mut a, &ctx(&text), 500.0, 8).unwrap().unwrap();
    let capped = fit_to_width(&mut b, &ctx(&text), 500.0, 8).unwrap().unwrap();
    assert_eq!(line, capped);
}

#[test]
fn min_size_wins_for_impossible_fits() {
    let mut oracle = SublinearOracle { calls: 0 };
    let text = "x".repeat(400);
    let size = fit_to_line(&mut oracle, &ctx(&text), 50.0, 16).unwrap().unwrap();
    assert_eq!(size, 16);
}

#[test]
fn degenerate_width_is_a_noop_in_both_modes() {
    let mut oracle = SublinearOracle { calls: 0 };
    assert!(fit_to_line(&mut oracle, &ctx("A"), 0.0, 12).unwrap().is_none());
    assert!(fit_to_width(&mut oracle, &ctx("A"), -1.0, 12).unwrap().is_none());
    assert_eq!(oracle.calls, 0, "no-op guards must not touch the oracle");
}
