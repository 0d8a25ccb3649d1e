use chrono::{DateTime, Local};

use crate::models::style::{merge_styles, CountdownStyle, TextStyle};
use crate::models::time_left::TimeLeft;
use crate::utils::date::format_target;

use super::countdown_text::{render_countdown_text, rich_text, CountdownTextOptions};

const COMPLETE_MESSAGE: &str = "Countdown complete!";
const UNIT_LABELS: [&str; 4] = ["days", "hours", "minutes", "seconds"];

/// The full countdown widget: a row of four unit blocks while time remains,
/// the fixed complete message once the target has elapsed. Style overrides
/// are shallow-merged over the widget defaults; `capitalize` uppercases all
/// widget text, and `show_date` renders the formatted target instant
/// beneath the unit row.
pub fn render_countdown_timer(
    ui: &mut egui::Ui,
    time_left: Option<TimeLeft>,
    target: DateTime<Local>,
    style: &CountdownStyle,
) {
    // Default line height is 1.2x the text size, overridable like any
    // other slot.
    let base = TextStyle {
        line_height: Some(style.text_size * 1.2),
        ..TextStyle::sized(style.text_size)
    };
    let base_text = merge_styles(&base, Some(&style.text_style));

    match time_left {
        Some(time_left) => {
            let numbers = [
                time_left.days,
                time_left.hours as u64,
                time_left.minutes as u64,
                time_left.seconds as u64,
            ];
            let options = CountdownTextOptions {
                horizontal_margin: style.horizontal_margin,
                number_style: None,
                text_style: Some(style.text_style),
            };

            ui.horizontal(|ui| {
                for (number, label) in numbers.into_iter().zip(UNIT_LABELS) {
                    render_countdown_text(
                        ui,
                        number,
                        &display_text(label, style.capitalize),
                        &options,
                    );
                }
            });

            if style.show_date {
                ui.add_space(6.0);
                ui.label(rich_text(
                    &display_text(&format_target(target), style.capitalize),
                    &base_text,
                ));
            }
        }
        None => {
            ui.label(rich_text(
                &display_text(COMPLETE_MESSAGE, style.capitalize),
                &base_text,
            ));
        }
    }
}

fn display_text(text: &str, capitalize: bool) -> String {
    if capitalize {
        text.to_uppercase()
    } else {
        text.to_string()
    }
}
