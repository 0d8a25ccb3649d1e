use std::time::Duration as StdDuration;

use crate::models::style::CountdownStyle;
use crate::services::clock::{Clock, SystemClock};
use crate::services::countdown::CountdownTicker;
use crate::services::settings::{self, CountdownConfig};
use crate::ui_egui::views::{DemoPage, PageContent};
use crate::ui_egui::widgets::render_countdown_timer;

pub struct CountdownApp {
    /// Config loaded at startup; the Main page re-reads it on selection.
    config: CountdownConfig,
    current_page: DemoPage,
    title: String,
    style: CountdownStyle,
    /// Refresh loop for the currently displayed countdown.
    ticker: CountdownTicker<SystemClock>,
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // At most one tick fires per frame; the repaint request below wakes
        // the loop again when the next one is due.
        self.ticker.poll();

        self.render_menu_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading(&self.title);
                ui.add_space(16.0);
                render_countdown_timer(
                    ui,
                    self.ticker.latest(),
                    self.ticker.target(),
                    &self.style,
                );
            });
        });

        let wait = self
            .ticker
            .time_until_due()
            .unwrap_or(StdDuration::from_secs(1));
        ctx.request_repaint_after(wait);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Tear the timer down deterministically with the display.
        self.ticker.stop();
        log::info!("Countdown application exiting");
    }
}

impl CountdownApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = settings::load_or_default();
        let clock = SystemClock;
        let content = DemoPage::Main.content(&config, clock.now());

        log::info!("Starting countdown to {}", content.target);
        let mut ticker = CountdownTicker::new(content.target, clock);
        ticker.start();

        Self {
            config,
            current_page: DemoPage::Main,
            title: content.title,
            style: content.style,
            ticker,
        }
    }

    fn switch_page(&mut self, page: DemoPage) {
        if page == self.current_page {
            return;
        }

        let PageContent {
            title,
            target,
            style,
        } = page.content(&self.config, SystemClock.now());

        // Retargeting cancels the in-flight timer and re-arms it.
        self.ticker.set_target(target);
        self.current_page = page;
        self.title = title;
        self.style = style;
        log::info!("Switched to page {:?}, counting down to {}", page, target);
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Pages", |ui| {
                    for page in DemoPage::ALL {
                        let selected = self.current_page == page;
                        if ui.selectable_label(selected, page.label()).clicked() {
                            self.switch_page(page);
                            ui.close_menu();
                        }
                    }
                });
            });
        });
    }
}
