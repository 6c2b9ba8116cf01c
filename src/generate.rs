//! The two asset pipelines: gradient background, notebook glyph, optional
//! text, flatten to RGB, write PNG.

use std::path::Path;

use anyhow::Context as _;

use crate::{
    canvas::{Canvas, Rgba},
    error::AssetResult,
    font::ResolvedFont,
    gradient, icon,
    theme::Theme,
};

pub const APP_ICON_SIZE: u32 = 512;
pub const APP_ICON_FILE: &str = "app-icon-512.png";

pub const FEATURE_WIDTH: u32 = 1024;
pub const FEATURE_HEIGHT: u32 = 500;
pub const FEATURE_FILE: &str = "feature-graphic-1024x500.png";

const ICON_SCALE: f64 = 0.5;
const FEATURE_ICON_SCALE: f64 = 0.38;
const FEATURE_ICON_CX: i32 = 280;

const TEXT_X: i32 = 500;
const TITLE_SIZE: f32 = 72.0;
const TAGLINE_SIZE: f32 = 28.0;

/// Renders the 512x512 app icon: gradient background with the notebook
/// glyph centered at half scale.
pub fn render_app_icon(theme: &Theme) -> AssetResult<Canvas> {
    theme.validate()?;
    let mut canvas = Canvas::new(APP_ICON_SIZE, APP_ICON_SIZE)?;
    gradient::render_vertical(&mut canvas, theme.tones());
    let center = (APP_ICON_SIZE / 2) as i32;
    icon::draw_notebook_icon(&mut canvas, theme, center, center, ICON_SCALE)?;
    Ok(canvas)
}

/// Renders the 1024x500 feature banner: glyph on the left, title and
/// tagline on the right, each with a small drop shadow behind it.
pub fn render_feature_graphic(theme: &Theme, font: &ResolvedFont) -> AssetResult<Canvas> {
    theme.validate()?;
    let mut canvas = Canvas::new(FEATURE_WIDTH, FEATURE_HEIGHT)?;
    gradient::render_vertical(&mut canvas, theme.tones());

    let cy = (FEATURE_HEIGHT / 2) as i32;
    icon::draw_notebook_icon(&mut canvas, theme, FEATURE_ICON_CX, cy, FEATURE_ICON_SCALE)?;

    let title_y = cy - 50;
    text_layer(
        &mut canvas,
        font,
        TEXT_X + 2,
        title_y + 2,
        TITLE_SIZE,
        &theme.title,
        [0, 0, 0, 60],
    )?;
    text_layer(
        &mut canvas,
        font,
        TEXT_X,
        title_y,
        TITLE_SIZE,
        &theme.title,
        [255, 255, 255, 255],
    )?;

    let tag_y = title_y + 85;
    text_layer(
        &mut canvas,
        font,
        TEXT_X + 2,
        tag_y + 1,
        TAGLINE_SIZE,
        &theme.tagline,
        [0, 0, 0, 40],
    )?;
    text_layer(
        &mut canvas,
        font,
        TEXT_X,
        tag_y,
        TAGLINE_SIZE,
        &theme.tagline,
        [255, 255, 255, 220],
    )?;

    Ok(canvas)
}

fn text_layer(
    canvas: &mut Canvas,
    font: &ResolvedFont,
    x: i32,
    y: i32,
    size: f32,
    text: &str,
    rgba: Rgba,
) -> AssetResult<()> {
    let mut layer = canvas.layer();
    font.draw_text(&mut layer, x, y, size, text, rgba);
    canvas.alpha_composite(&layer)
}

/// Flattens the canvas to RGB and writes it as a PNG, creating parent
/// directories as needed.
pub fn save_rgb_png(canvas: &Canvas, path: &Path) -> AssetResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &canvas.to_rgb8(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    tracing::info!(
        path = %path.display(),
        width = canvas.width(),
        height = canvas.height(),
        "wrote asset"
    );
    Ok(())
}
