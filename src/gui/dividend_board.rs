//! Dividends page: search/sort table, full-feed stats and a DPS timeline
//! plot, fed by a background fetch off the GUI thread.

use chrono::{Days, NaiveDate};
use eframe::egui::{self, Color32, RichText};
use egui_plot::{Plot, Points};
use log::debug;
use tokio::sync::mpsc;

use crate::{
    CHANNEL_BUFFER_DEFAULT, api,
    board::{
        BoardState, DividendFeed, FETCH_ERROR_MESSAGE, FeedPhase, FeedState, SortDirection,
        SortField, dps_sum, format_peso, top_dividend,
    },
    error::FolioError,
    gui::{ACCENT, str_to_color},
    utils::datetime::{date_from_str, date_to_str, display_date, display_datetime},
};

static WARNING_COLOR: Color32 = Color32::from_rgb(251, 191, 36);

pub struct DividendBoardView {
    feed_state: FeedState,
    board: BoardState,

    load_event_sender: mpsc::Sender<LoadEvent>,
    load_event_receiver: mpsc::Receiver<LoadEvent>,

    plot_start: Option<NaiveDate>,
    plot_points: Vec<[f64; 2]>,
}

enum LoadEvent {
    Finished(DividendFeed),
    Error(FolioError),
}

impl Default for DividendBoardView {
    fn default() -> Self {
        let (load_event_sender, load_event_receiver) =
            mpsc::channel::<LoadEvent>(CHANNEL_BUFFER_DEFAULT);

        Self {
            feed_state: FeedState::default(),
            board: BoardState::default(),
            load_event_sender,
            load_event_receiver,
            plot_start: None,
            plot_points: vec![],
        }
    }
}

impl DividendBoardView {
    pub fn warning(&self) -> Option<&str> {
        self.feed_state.warning()
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // First visit kicks off the initial fetch
        if *self.feed_state.phase() == FeedPhase::Idle {
            self.request_fetch();
        }

        while let Ok(event) = self.load_event_receiver.try_recv() {
            self.on_load_event(event);
        }

        self.header_ui(ui);
        ui.add_space(12.0);
        self.toolbar_ui(ui);
        ui.add_space(8.0);
        self.stats_ui(ui);
        ui.add_space(12.0);

        let phase = self.feed_state.phase().clone();
        match phase {
            FeedPhase::Idle | FeedPhase::Loading => {
                ui.add_space(48.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.add_space(8.0);
                    ui.label(RichText::new("Fetching dividend data...").color(Color32::GRAY));
                });
                ui.add_space(48.0);
            }
            FeedPhase::Failed(message) => {
                self.error_ui(ui, &message);
            }
            FeedPhase::Ready => {
                self.table_ui(ui);
                ui.add_space(12.0);
                self.plot_ui(ui);
            }
        }
    }

    fn request_fetch(&mut self) {
        if !self.feed_state.begin_fetch() {
            return;
        }

        let load_event_sender = self.load_event_sender.clone();
        tokio::spawn(async move {
            match api::fetch_dividends().await {
                Ok(feed) => {
                    let _ = load_event_sender.send(LoadEvent::Finished(feed)).await;
                }
                Err(err) => {
                    let _ = load_event_sender.send(LoadEvent::Error(err)).await;
                }
            }
        });
    }

    fn on_load_event(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Finished(feed) => {
                self.feed_state.resolve(Ok(feed));
                self.rebuild_plot();
            }
            LoadEvent::Error(err) => {
                debug!("Fetch dividends failed: {err}");
                self.feed_state.resolve(Err(FETCH_ERROR_MESSAGE.to_string()));
            }
        }
    }

    fn rebuild_plot(&mut self) {
        self.plot_start = None;
        self.plot_points.clear();

        if let Some(feed) = self.feed_state.feed() {
            let mut dated: Vec<(NaiveDate, f64)> = feed
                .data
                .iter()
                .filter_map(|record| {
                    date_from_str(&record.ex_dividend_date)
                        .ok()
                        .map(|date| (date, record.dividend_per_share))
                })
                .collect();
            dated.sort_by_key(|(date, _)| *date);

            if let Some(&(start, _)) = dated.first() {
                self.plot_start = Some(start);
                self.plot_points = dated
                    .iter()
                    .map(|(date, dps)| [(*date - start).num_days() as f64, *dps])
                    .collect();
            }
        }
    }

    fn header_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(10.0).color(ACCENT));
                    ui.label(RichText::new("Live Data").size(11.0).color(Color32::GRAY));
                });
                ui.heading(RichText::new("PSE Dividends").size(26.0).strong());
                ui.label(
                    RichText::new(
                        "Real-time dividend declarations from the Philippine Stock Exchange",
                    )
                    .color(Color32::GRAY),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if let Some(feed) = self.feed_state.feed() {
                    if !feed.last_updated.is_empty() {
                        ui.label(
                            RichText::new(format!(
                                "Updated: {}",
                                display_datetime(&feed.last_updated)
                            ))
                            .size(12.0)
                            .color(Color32::DARK_GRAY),
                        );
                    }
                }
            });
        });
    }

    fn toolbar_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.board.query)
                    .hint_text("Search by company or symbol...")
                    .desired_width(280.0),
            );

            let loading = self.feed_state.is_loading();
            if ui
                .add_enabled(!loading, egui::Button::new("↻ Refresh"))
                .clicked()
            {
                self.request_fetch();
            }

            if let Some(warning) = self.feed_state.warning() {
                ui.label(
                    RichText::new(format!("⚠ {warning}"))
                        .size(12.0)
                        .color(WARNING_COLOR),
                );
            }
        });
    }

    fn stats_ui(&mut self, ui: &mut egui::Ui) {
        let (total, sum, top) = match self.feed_state.feed() {
            Some(feed) => (
                feed.count.to_string(),
                format_peso(dps_sum(&feed.data)),
                top_dividend(&feed.data)
                    .map(|record| {
                        format!(
                            "{} · {}",
                            format_peso(record.dividend_per_share),
                            record.stock_symbol
                        )
                    })
                    .unwrap_or_else(|| "—".to_string()),
            ),
            None => ("—".to_string(), "—".to_string(), "—".to_string()),
        };

        ui.columns(3, |columns| {
            stat_card(&mut columns[0], "Total", &total, "Active Declarations");
            stat_card(&mut columns[1], "Sum", &sum, "Combined DPS");
            stat_card(&mut columns[2], "Top", &top, "Highest DPS");
        });
    }

    fn error_ui(&mut self, ui: &mut egui::Ui, message: &str) {
        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Connection Error").size(18.0).strong());
            ui.add_space(4.0);
            ui.label(RichText::new(message).color(Color32::GRAY));
            ui.add_space(12.0);
            if ui.button("Try Again").clicked() {
                self.request_fetch();
            }
        });
        ui.add_space(32.0);
    }

    fn table_ui(&mut self, ui: &mut egui::Ui) {
        let Some(feed) = self.feed_state.feed() else {
            return;
        };

        let view = self.board.select(&feed.data);
        let shown = view.len();
        let count = feed.count;

        let mut clicked_sort: Option<SortField> = None;

        if view.is_empty() {
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No Results Found").size(16.0).strong());
                ui.label(RichText::new("Try adjusting your search query").color(Color32::GRAY));
            });
            ui.add_space(32.0);
        } else {
            egui::Grid::new("dividends_table")
                .striped(true)
                .num_columns(7)
                .spacing([18.0, 6.0])
                .show(ui, |ui| {
                    for (label, field) in [
                        ("Company", Some(SortField::CompanyName)),
                        ("Symbol", Some(SortField::StockSymbol)),
                        ("DPS", Some(SortField::DividendPerShare)),
                        ("Ex-Date", Some(SortField::ExDividendDate)),
                        ("Record", None),
                        ("Payment", Some(SortField::PaymentDate)),
                        ("Type", None),
                    ] {
                        match field {
                            Some(field) => {
                                let indicator = if self.board.sort_field == field {
                                    match self.board.sort_direction {
                                        SortDirection::Ascending => "▲",
                                        SortDirection::Descending => "▼",
                                    }
                                } else {
                                    "⇅"
                                };
                                if ui.button(format!("{label} {indicator}")).clicked() {
                                    clicked_sort = Some(field);
                                }
                            }
                            None => {
                                ui.label(RichText::new(label).color(Color32::DARK_GRAY));
                            }
                        }
                    }
                    ui.end_row();

                    for record in &view {
                        ui.label(&record.company_name);
                        ui.label(
                            RichText::new(&record.stock_symbol)
                                .strong()
                                .color(str_to_color(&record.stock_symbol)),
                        );
                        ui.label(
                            RichText::new(format_peso(record.dividend_per_share)).color(ACCENT),
                        );
                        ui.label(display_date(&record.ex_dividend_date));
                        ui.label(
                            RichText::new(display_date(&record.record_date)).color(Color32::GRAY),
                        );
                        ui.label(
                            RichText::new(display_date(&record.payment_date)).color(Color32::GRAY),
                        );
                        ui.label(RichText::new(&record.dividend_type).size(11.0));
                        ui.end_row();
                    }
                });
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("Showing {shown} of {count} declarations"))
                    .size(12.0)
                    .color(Color32::DARK_GRAY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.label(
                    RichText::new(
                        "Data sourced from Philippine Stock Exchange (PSE) public disclosures",
                    )
                    .size(12.0)
                    .color(Color32::DARK_GRAY),
                );
            });
        });

        if let Some(field) = clicked_sort {
            self.board.toggle_sort(field);
        }
    }

    fn plot_ui(&mut self, ui: &mut egui::Ui) {
        if self.plot_points.is_empty() {
            return;
        }

        egui::CollapsingHeader::new("DPS timeline").show(ui, |ui| {
            Plot::new("dps_plot")
                .height(260.0)
                .label_formatter(|name, point| {
                    if name.is_empty() {
                        "".to_string()
                    } else {
                        if let Some(plot_start_date) = self.plot_start {
                            format!(
                                "[{}] {} ₱{:.2}",
                                date_to_str(&(plot_start_date + Days::new(point.x as u64))),
                                name,
                                point.y
                            )
                        } else {
                            "".to_string()
                        }
                    }
                })
                .show(ui, |plot_ui| {
                    plot_ui.points(
                        Points::new("DPS", self.plot_points.clone())
                            .radius(2.5)
                            .color(ACCENT),
                    );
                });
        });
    }
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: &str, caption: &str) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.vertical(|ui| {
            ui.label(
                RichText::new(title.to_uppercase())
                    .size(10.0)
                    .color(Color32::DARK_GRAY),
            );
            ui.label(RichText::new(value).size(20.0).strong());
            ui.label(RichText::new(caption).size(11.0).color(Color32::GRAY));
        });
    });
}
