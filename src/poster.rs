use serde::{Deserialize, Serialize};

use crate::color::{Rgb8, sort_by_lightness};
use crate::geometry::{Orientation, PaperSize};
use crate::tracks::UserScale;

/// Swatches shown on the poster, and the length palettes are padded to.
pub const DISPLAY_SWATCHES: usize = 5;

/// Grey ramp used when the palette is missing or short, lightest first.
pub const DEFAULT_GREYS: [Rgb8; DISPLAY_SWATCHES] = [
    Rgb8 {
        r: 0xf5,
        g: 0xf5,
        b: 0xf5,
    },
    Rgb8 {
        r: 0xcc,
        g: 0xcc,
        b: 0xcc,
    },
    Rgb8 {
        r: 0x99,
        g: 0x99,
        b: 0x99,
    },
    Rgb8 {
        r: 0x66,
        g: 0x66,
        b: 0x66,
    },
    Rgb8 {
        r: 0x33,
        g: 0x33,
        b: 0x33,
    },
];

/// The poster typefaces offered to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontChoice {
    #[default]
    Roboto,
    PlayfairDisplay,
    Montserrat,
    Oswald,
    Inter,
}

impl FontChoice {
    pub fn family_name(self) -> &'static str {
        match self {
            Self::Roboto => "Roboto",
            Self::PlayfairDisplay => "Playfair Display",
            Self::Montserrat => "Montserrat",
            Self::Oswald => "Oswald",
            Self::Inter => "Inter",
        }
    }
}

/// Album metadata as fetched (or defaulted) by the host.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AlbumData {
    #[serde(default)]
    pub tracks: Vec<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub description: String,
}

impl AlbumData {
    /// Track titles to render: real data, or the numbered placeholders when
    /// no data is available.
    pub fn display_tracks(&self) -> Vec<String> {
        if self.tracks.is_empty() {
            placeholder_tracks()
        } else {
            self.tracks.clone()
        }
    }
}

/// Nine numbered placeholder titles shown before any album is loaded.
pub fn placeholder_tracks() -> Vec<String> {
    (1..=9).map(|i| format!("Track {i}")).collect()
}

/// The complete editable poster document.
///
/// Every piece of state the layout algorithms consume lives here and is
/// passed in explicitly; the components themselves are pure functions of
/// their inputs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Poster {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: AlbumData,
    /// Extracted palette in centroid order; empty until an image is processed.
    #[serde(default)]
    pub palette: Vec<Rgb8>,
    #[serde(default)]
    pub font: FontChoice,
    /// User-chosen accent, once they have overridden the palette default.
    #[serde(default)]
    pub accent: Option<Rgb8>,
    /// Set after the accent has been seeded from the palette; from then on
    /// user edits win.
    #[serde(default)]
    pub accent_initialized: bool,
    #[serde(default)]
    pub track_scale: UserScale,
    #[serde(default)]
    pub paper: PaperSize,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub seed: u64,
}

impl Poster {
    /// Accent color to render, seeding from the palette exactly once.
    ///
    /// On the first call with a non-empty palette the second palette color
    /// (or the first, for a single-color palette) becomes the accent and is
    /// recorded on the document; afterwards the stored value is returned
    /// unchanged so user edits stick.
    pub fn resolve_accent(&mut self) -> Option<Rgb8> {
        if !self.accent_initialized
            && let Some(&seeded) = self.palette.get(1).or_else(|| self.palette.first())
        {
            self.accent = Some(seeded);
            self.accent_initialized = true;
        }
        self.accent
    }

    /// Swatch row for display: palette sorted lightest-first, truncated to
    /// [`DISPLAY_SWATCHES`], padded with the grey ramp. Padding is a
    /// presentation policy; `self.palette` itself is never padded.
    pub fn display_palette(&self) -> Vec<Rgb8> {
        let mut shown = self.palette.clone();
        sort_by_lightness(&mut shown);
        shown.truncate(DISPLAY_SWATCHES);
        let mut greys = DEFAULT_GREYS.iter().copied();
        while shown.len() < DISPLAY_SWATCHES {
            if let Some(grey) = greys.next() {
                shown.push(grey);
            }
        }
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> Rgb8 {
        Rgb8::new(r, g, b)
    }

    #[test]
    fn placeholder_tracks_are_nine_numbered() {
        let tracks = placeholder_tracks();
        assert_eq!(tracks.len(), 9);
        assert_eq!(tracks[0], "Track 1");
        assert_eq!(tracks[8], "Track 9");
    }

    #[test]
    fn display_tracks_prefers_real_data() {
        let album = AlbumData {
            tracks: vec!["Plainsong".into(), "Pictures of You".into()],
            ..AlbumData::default()
        };
        assert_eq!(album.display_tracks().len(), 2);
        assert_eq!(AlbumData::default().display_tracks().len(), 9);
    }

    #[test]
    fn accent_seeds_from_second_palette_color_once() {
        let mut poster = Poster {
            palette: vec![rgb(1, 1, 1), rgb(2, 2, 2), rgb(3, 3, 3)],
            ..Poster::default()
        };
        assert_eq!(poster.resolve_accent(), Some(rgb(2, 2, 2)));
        assert!(poster.accent_initialized);

        // A later user edit is respected, not overwritten by the palette.
        poster.accent = Some(rgb(9, 9, 9));
        assert_eq!(poster.resolve_accent(), Some(rgb(9, 9, 9)));
    }

    #[test]
    fn accent_falls_back_to_first_color() {
        let mut poster = Poster {
            palette: vec![rgb(7, 7, 7)],
            ..Poster::default()
        };
        assert_eq!(poster.resolve_accent(), Some(rgb(7, 7, 7)));
    }

    #[test]
    fn accent_stays_unset_with_empty_palette() {
        let mut poster = Poster::default();
        assert_eq!(poster.resolve_accent(), None);
        assert!(!poster.accent_initialized);
    }

    #[test]
    fn display_palette_pads_with_greys() {
        let poster = Poster {
            palette: vec![rgb(10, 10, 10), rgb(240, 240, 240)],
            ..Poster::default()
        };
        let shown = poster.display_palette();
        assert_eq!(shown.len(), DISPLAY_SWATCHES);
        // Sorted lightest first, then the grey ramp.
        assert_eq!(shown[0], rgb(240, 240, 240));
        assert_eq!(shown[1], rgb(10, 10, 10));
        assert_eq!(&shown[2..], &DEFAULT_GREYS[..3]);
    }

    #[test]
    fn empty_palette_displays_the_full_grey_ramp() {
        assert_eq!(Poster::default().display_palette(), DEFAULT_GREYS.to_vec());
    }

    #[test]
    fn poster_json_roundtrip() {
        let poster = Poster {
            title: "Disintegration".into(),
            artist: "The Cure".into(),
            palette: vec![rgb(18, 20, 28)],
            font: FontChoice::Oswald,
            ..Poster::default()
        };
        let json = serde_json::to_string_pretty(&poster).unwrap();
        let back: Poster = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "Disintegration");
        assert_eq!(back.palette, vec![rgb(18, 20, 28)]);
        assert_eq!(back.font, FontChoice::Oswald);
    }
}
