mod kmeans;

use image::DynamicImage;

use crate::color::Rgb8;
use kmeans::cluster_colors;

/// Longer image side after downsampling. Palette quality is insensitive to
/// resolution above this, and clustering cost is not.
const DOWNSAMPLE_MAX_SIDE: u32 = 200;

/// Keep every 10th pixel of the downsampled buffer.
const SAMPLE_STRIDE: usize = 10;

/// Samples below this alpha are treated as transparent background noise.
const MIN_OPAQUE_ALPHA: u8 = 128;

/// Extract `k` representative colors from an image.
///
/// The image is downsampled (longer side <= 200 px, never upscaled), sampled
/// at a fixed pixel stride with transparent pixels discarded, and clustered
/// with a fixed-iteration k-means seeded from `seed`. Returns exactly `k`
/// colors in centroid order when at least one opaque sample exists, otherwise
/// an empty vector. The result is unsorted; see [`crate::sort_by_lightness`]
/// for display ordering.
#[tracing::instrument(skip(image))]
pub fn extract_palette(image: &DynamicImage, k: usize, seed: u64) -> Vec<Rgb8> {
    let (width, height) = downsample_dimensions(image.width(), image.height());
    let rgba = image
        .resize_exact(width, height, image::imageops::FilterType::Triangle)
        .to_rgba8();

    let samples = sample_colors(rgba.as_raw());
    tracing::debug!(
        width,
        height,
        samples = samples.len(),
        "sampled downsampled image"
    );

    cluster_colors(&samples, k, seed)
}

/// Scaled dimensions with the longer side clamped to [`DOWNSAMPLE_MAX_SIDE`],
/// aspect ratio preserved. Images already within the bound keep their size.
fn downsample_dimensions(width: u32, height: u32) -> (u32, u32) {
    let max = DOWNSAMPLE_MAX_SIDE;
    let (w, h) = (f64::from(width), f64::from(height));

    let (out_w, out_h) = if width > height {
        if width > max {
            (f64::from(max), h / w * f64::from(max))
        } else {
            (w, h)
        }
    } else if height > max {
        (w / h * f64::from(max), f64::from(max))
    } else {
        (w, h)
    };

    ((out_w as u32).max(1), (out_h as u32).max(1))
}

/// Walk the RGBA byte buffer at the fixed pixel stride, keeping sufficiently
/// opaque pixels.
fn sample_colors(rgba: &[u8]) -> Vec<Rgb8> {
    rgba.chunks_exact(4)
        .step_by(SAMPLE_STRIDE)
        .filter(|px| px[3] >= MIN_OPAQUE_ALPHA)
        .map(|px| Rgb8::new(px[0], px[1], px[2]))
        .collect()
}
