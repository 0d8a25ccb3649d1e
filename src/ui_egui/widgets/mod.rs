mod countdown_text;
mod countdown_timer;

pub use countdown_text::{render_countdown_text, CountdownTextOptions};
pub use countdown_timer::render_countdown_timer;

use crate::models::style::RgbaColor;

pub(crate) fn rgba_to_color32(color: RgbaColor) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
