#![forbid(unsafe_code)]

pub mod canvas;
pub mod draw;
pub mod error;
pub mod font;
pub mod generate;
pub mod gradient;
pub mod icon;
pub mod theme;

pub use canvas::{Canvas, Rgb, Rgba};
pub use error::{AssetError, AssetResult};
pub use font::{BitmapFont, ResolvedFont, SYSTEM_FONT_CANDIDATES, resolve_font};
pub use generate::{
    APP_ICON_FILE, APP_ICON_SIZE, FEATURE_FILE, FEATURE_HEIGHT, FEATURE_WIDTH, render_app_icon,
    render_feature_graphic, save_rgb_png,
};
pub use gradient::GradientTones;
pub use icon::{
    PageRect, binding_dot_ys, draw_notebook_icon, page_rect, ruled_line_ys, text_block_spans,
};
pub use theme::Theme;
