use serde::{Deserialize, Serialize};

/// Physical poster formats, in inches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    /// US letter, 8.5 x 11.
    Letter,
    /// Tabloid, 11 x 17.
    #[default]
    Tabloid,
}

impl PaperSize {
    /// (short side, long side) in inches.
    fn sides(self) -> (f64, f64) {
        match self {
            Self::Letter => (8.5, 11.0),
            Self::Tabloid => (11.0, 17.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Width / height of the poster canvas.
pub fn aspect_ratio(paper: PaperSize, orientation: Orientation) -> f64 {
    let (short, long) = paper.sides();
    match orientation {
        Orientation::Portrait => short / long,
        Orientation::Landscape => long / short,
    }
}

/// Fit the poster canvas into a preview container, width-first: take the full
/// container width, derive height from the aspect ratio, and fall back to
/// height-first when that height does not fit. Returns `None` for an unsized
/// container.
pub fn poster_canvas_size(
    paper: PaperSize,
    orientation: Orientation,
    container_width: f64,
    container_height: f64,
) -> Option<(f64, f64)> {
    if container_width <= 0.0 || container_height <= 0.0 {
        return None;
    }

    let aspect = aspect_ratio(paper, orientation);
    let mut width = container_width;
    let mut height = width / aspect;
    if height > container_height {
        height = container_height;
        width = height * aspect;
    }
    Some((width, height))
}
