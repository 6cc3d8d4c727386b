use std::collections::HashMap;

use crate::error::{PosterError, PosterResult};
use crate::measure::{FontStyle, ListMeasure, ListMetrics, MeasurementContext, TextMeasure};

/// Text dimensions read back from one Parley layout pass.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TextExtent {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

/// Parley-backed measurement oracle.
///
/// Fonts are registered once from raw bytes and addressed by caller-chosen
/// family aliases; every measurement shapes and lays the text out from
/// scratch, so readings are never stale.
pub struct ParleyMeasurer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    families: HashMap<String, String>,
}

impl Default for ParleyMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl ParleyMeasurer {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    /// Register a font under `alias` from raw font bytes (TTF/OTF).
    pub fn register_font(&mut self, alias: impl Into<String>, font_bytes: &[u8]) -> PosterResult<()> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            PosterError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PosterError::validation("registered font family has no name"))?
            .to_string();

        self.families.insert(alias.into(), family_name);
        Ok(())
    }

    pub(crate) fn extent(
        &mut self,
        ctx: &MeasurementContext,
        font_px: f64,
        max_width: Option<f64>,
    ) -> PosterResult<TextExtent> {
        if !font_px.is_finite() || font_px <= 0.0 {
            return Err(PosterError::measurement("font_px must be finite and > 0"));
        }

        let family_name = self
            .families
            .get(&ctx.font_family)
            .ok_or_else(|| {
                PosterError::measurement(format!(
                    "font family '{}' was not registered",
                    ctx.font_family
                ))
            })?
            .clone();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, &ctx.text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font_px as f32));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(ctx.font_weight)),
        ));
        builder.push_default(parley::style::StyleProperty::FontStyle(match ctx.font_style {
            FontStyle::Normal => parley::style::FontStyle::Normal,
            FontStyle::Italic => parley::style::FontStyle::Italic,
        }));

        let mut layout: parley::Layout<()> = builder.build(&ctx.text);
        layout.break_all_lines(max_width.map(|w| w as f32));

        let mut width = 0.0f64;
        let mut height = 0.0f64;
        for line in layout.lines() {
            let m = line.metrics();
            width = width.max(f64::from(m.advance));
            height += f64::from(m.ascent + m.descent + m.leading);
        }
        Ok(TextExtent { width, height })
    }
}

impl TextMeasure for ParleyMeasurer {
    fn measure_width(&mut self, ctx: &MeasurementContext, font_px: u32) -> PosterResult<f64> {
        Ok(self.extent(ctx, f64::from(font_px), None)?.width)
    }
}

/// Overflow oracle for a track list rendered in a single forced column.
///
/// Content height is the sum of each title's wrapped layout height at the
/// probed size; the column count is always 1 because the renderer never
/// breaks the list into multiple columns.
pub struct ParleyTrackList<'a> {
    engine: &'a mut ParleyMeasurer,
    entries: Vec<MeasurementContext>,
    container_width: f64,
    visible_height: f64,
}

impl<'a> ParleyTrackList<'a> {
    pub fn new(
        engine: &'a mut ParleyMeasurer,
        titles: &[String],
        font_family: &str,
        container_width: f64,
        visible_height: f64,
    ) -> Self {
        let entries = titles
            .iter()
            .map(|t| MeasurementContext::new(font_family, t.clone()))
            .collect();
        Self {
            engine,
            entries,
            container_width,
            visible_height,
        }
    }
}

impl ListMeasure for ParleyTrackList<'_> {
    fn metrics_at(&mut self, font_px: f64) -> PosterResult<ListMetrics> {
        let mut content_height = 0.0f64;
        for entry in &self.entries {
            let extent = self
                .engine
                .extent(entry, font_px, Some(self.container_width))?;
            content_height += extent.height;
        }
        Ok(ListMetrics {
            content_height,
            visible_height: self.visible_height,
            column_count: 1,
        })
    }
}
