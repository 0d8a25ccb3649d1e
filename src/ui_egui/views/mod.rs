use chrono::{DateTime, Duration, Local};

use crate::models::style::{CountdownStyle, RgbaColor, TextStyle};
use crate::services::settings::CountdownConfig;

/// Pages selectable from the menu bar: the configured countdown plus two
/// demo pages exercising the widget with different targets and styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoPage {
    /// Countdown driven by the user's config file.
    Main,
    /// Countdown to midnight next New Year's Day.
    NewYear,
    /// Short demo countdown with heavy style overrides.
    Launch,
}

impl DemoPage {
    pub const ALL: [DemoPage; 3] = [DemoPage::Main, DemoPage::NewYear, DemoPage::Launch];

    pub fn label(&self) -> &'static str {
        match self {
            DemoPage::Main => "My countdown",
            DemoPage::NewYear => "New Year",
            DemoPage::Launch => "Launch rehearsal",
        }
    }
}

/// Everything a page contributes to the display: a heading, the target
/// instant, and the widget style.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub title: String,
    pub target: DateTime<Local>,
    pub style: CountdownStyle,
}

impl DemoPage {
    pub fn content(&self, config: &CountdownConfig, now: DateTime<Local>) -> PageContent {
        match self {
            DemoPage::Main => {
                let target = config.target_instant(now).unwrap_or_else(|err| {
                    log::warn!("Invalid target in configuration: {}, using default", err);
                    CountdownConfig::default().target_instant(now).unwrap_or(now)
                });
                PageContent {
                    title: config.title.clone(),
                    target,
                    style: config.style.clone(),
                }
            }
            DemoPage::NewYear => PageContent {
                title: "New Year Countdown".to_string(),
                target: CountdownConfig::default().target_instant(now).unwrap_or(now),
                style: CountdownStyle {
                    capitalize: true,
                    show_date: true,
                    ..CountdownStyle::default()
                },
            },
            DemoPage::Launch => PageContent {
                title: "Launch Rehearsal".to_string(),
                target: now + Duration::minutes(90),
                style: CountdownStyle {
                    text_size: 24.0,
                    text_style: TextStyle {
                        color: Some(RgbaColor::new(230, 126, 34, 255)),
                        strong: Some(true),
                        ..TextStyle::default()
                    },
                    horizontal_margin: 16.0,
                    ..CountdownStyle::default()
                },
            },
        }
    }
}
