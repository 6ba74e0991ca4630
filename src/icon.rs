use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, Rgba32FImage, RgbaImage};
use rayon::prelude::*;

use crate::config::IconConfig;
use crate::error::{IconError, Result};
use crate::logger::log_generated;
use crate::models::GeneratedIcon;

/// Decode the source image and normalize it to RGBA8 so every icon carries alpha.
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// Resize in premultiplied alpha so fully transparent pixels don't bleed their
/// (black) colour into the edges of the visible shape.
pub fn resize_icon(img: &RgbaImage, size: u32, filter: FilterType) -> RgbaImage {
    if img.dimensions() == (size, size) {
        return img.clone();
    }
    let resized = imageops::resize(&premultiply(img), size, size, filter);
    unpremultiply(&resized)
}

fn premultiply(img: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let p = img.get_pixel(x, y);
        let a = p[3] as f32 / 255.0;
        Rgba([
            p[0] as f32 / 255.0 * a,
            p[1] as f32 / 255.0 * a,
            p[2] as f32 / 255.0 * a,
            a,
        ])
    })
}

fn unpremultiply(img: &Rgba32FImage) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let p = img.get_pixel(x, y);
        let alpha = to_channel(p[3]);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([
            to_channel(p[0] / p[3]),
            to_channel(p[1] / p[3]),
            to_channel(p[2] / p[3]),
            alpha,
        ])
    })
}

#[inline]
fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Write as PNG, replacing any existing file.
pub fn write_icon(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png).map_err(|e| {
        let source = match e {
            image::ImageError::IoError(err) => err,
            other => io::Error::other(other),
        };
        IconError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| IconError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

fn render_one(
    img: &RgbaImage,
    size: u32,
    out_dir: &Path,
    cfg: &IconConfig,
) -> Result<GeneratedIcon> {
    let resized = resize_icon(img, size, cfg.filter);
    let path: PathBuf = out_dir.join(cfg.file_name(size));
    write_icon(&resized, &path)?;
    log_generated(&path);
    Ok(GeneratedIcon { size, path })
}

/// Source is decoded before the output directory is touched, so a bad input leaves
/// the filesystem unchanged.
fn prepare(input: &Path, out_dir: &Path, cfg: &IconConfig) -> Result<RgbaImage> {
    cfg.validate()?;
    let img = load_source(input)?;
    ensure_output_dir(out_dir)?;
    Ok(img)
}

/// Generate the default PWA icon set (`icon-{s}x{s}.png`) from `input` into `out_dir`.
pub fn generate_icons(
    input: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> Result<Vec<GeneratedIcon>> {
    generate_icons_with(input, out_dir, &IconConfig::default())
}

/// Sequential generation with a caller supplied size list, prefix and filter.
/// Stops at the first failure; icons written before it stay on disk.
pub fn generate_icons_with(
    input: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    cfg: &IconConfig,
) -> Result<Vec<GeneratedIcon>> {
    let out_dir = out_dir.as_ref();
    let img = prepare(input.as_ref(), out_dir, cfg)?;
    cfg.sizes
        .iter()
        .map(|&size| render_one(&img, size, out_dir, cfg))
        .collect()
}

/// Same output as [`generate_icons_with`], sizes rendered on the rayon pool.
/// Progress lines arrive in completion order; the returned list keeps size order.
pub fn generate_icons_parallel(
    input: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    cfg: &IconConfig,
) -> Result<Vec<GeneratedIcon>> {
    let out_dir = out_dir.as_ref();
    let img = prepare(input.as_ref(), out_dir, cfg)?;
    cfg.sizes
        .par_iter()
        .map(|&size| render_one(&img, size, out_dir, cfg))
        .collect()
}
