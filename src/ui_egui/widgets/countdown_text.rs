use crate::models::style::{merge_styles, RgbaColor, TextStyle};

use super::rgba_to_color32;

pub(crate) const UNIT_WIDTH: f32 = 100.0;
const DEFAULT_NUMBER_SIZE: f32 = 64.0;
const DEFAULT_LABEL_SIZE: f32 = 18.0;
const ZERO_NUMBER_COLOR: RgbaColor = RgbaColor::new(128, 128, 128, 255);

/// Display options for a single unit block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountdownTextOptions {
    /// Margin applied on both sides of the block.
    pub horizontal_margin: f32,
    /// Overrides for the large number.
    pub number_style: Option<TextStyle>,
    /// Overrides for the label under the number.
    pub text_style: Option<TextStyle>,
}

/// One unit block: a large number over its label in a fixed-width column.
/// The number dims to gray when it reaches zero.
pub fn render_countdown_text(
    ui: &mut egui::Ui,
    number: u64,
    label: &str,
    options: &CountdownTextOptions,
) {
    let number_base = TextStyle {
        font_size: Some(DEFAULT_NUMBER_SIZE),
        color: (number == 0).then_some(ZERO_NUMBER_COLOR),
        ..TextStyle::default()
    };
    let number_style = merge_styles(&number_base, options.number_style.as_ref());
    let label_style = merge_styles(
        &TextStyle::sized(DEFAULT_LABEL_SIZE),
        options.text_style.as_ref(),
    );

    ui.add_space(options.horizontal_margin);
    ui.allocate_ui_with_layout(
        egui::vec2(UNIT_WIDTH, 0.0),
        egui::Layout::top_down(egui::Align::Center),
        |ui| {
            ui.label(rich_text(&number.to_string(), &number_style));
            ui.label(rich_text(label, &label_style));
        },
    );
    ui.add_space(options.horizontal_margin);
}

/// Builds a `RichText` from resolved style overrides; unset fields keep the
/// egui defaults.
pub(super) fn rich_text(text: &str, style: &TextStyle) -> egui::RichText {
    let mut rich = egui::RichText::new(text);
    if let Some(size) = style.font_size {
        rich = rich.size(size);
    }
    if let Some(color) = style.color {
        rich = rich.color(rgba_to_color32(color));
    }
    if let Some(height) = style.line_height {
        rich = rich.line_height(Some(height));
    }
    if style.strong == Some(true) {
        rich = rich.strong();
    }
    rich
}
