use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tr::tr;

use crate::logic::wire::format_changed_at;
use crate::logic::{HttpFetcher, PollCommand, SharedState, poller_task};
use crate::model::{AppState, CheckKind, Endpoint, StatusIcon, icon_for_status};

pub struct EguiHostmon {
    pub(crate) state: SharedState,
    commands: mpsc::UnboundedSender<PollCommand>,
}

/// Icon assets for the status column, embedded at compile time.
fn icon_source(icon: StatusIcon) -> egui::ImageSource<'static> {
    match icon {
        StatusIcon::Clock => egui::include_image!("../assets/images/clock.png"),
        StatusIcon::Online => egui::include_image!("../assets/images/icmp_good.png"),
        StatusIcon::Offline => egui::include_image!("../assets/images/icmp_bad.png"),
        StatusIcon::Pause => egui::include_image!("../assets/images/pause1.png"),
    }
}

impl EguiHostmon {
    pub fn new(cc: &eframe::CreationContext<'_>, server_url: String) -> Self {
        let state = Arc::new(Mutex::new(match cc.storage {
            Some(storage) => {
                if let Some(serialized) = storage.get_string(eframe::APP_KEY) {
                    serde_json::from_str(&serialized).unwrap_or_default()
                } else {
                    AppState::default()
                }
            }
            None => AppState::default(),
        }));

        let (commands, receiver) = mpsc::unbounded_channel();

        let state_clone = state.clone();
        std::thread::spawn(move || {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap()
                .block_on(poller_task(
                    state_clone,
                    Arc::new(HttpFetcher::new(server_url)),
                    receiver,
                ));
        });

        Self { state, commands }
    }

    pub fn from_state(state: SharedState, commands: mpsc::UnboundedSender<PollCommand>) -> Self {
        Self { state, commands }
    }

    pub fn ui_layout(&mut self, ctx: &egui::Context) {
        egui_extras::install_image_loaders(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (label, endpoint) in [
                    (tr!("All hosts"), Endpoint::All),
                    (tr!("Live hosts"), Endpoint::Live),
                    (tr!("Dead hosts"), Endpoint::Dead),
                    (tr!("Pause hosts"), Endpoint::Pause),
                ] {
                    if ui.button(label).clicked() {
                        // Send can only fail when the poller is gone, and
                        // then there is nobody left to poll for anyway.
                        let _ = self.commands.send(PollCommand::Select(endpoint));
                    }
                }

                ui.separator();

                if ui.button(tr!("Check all")).clicked() {
                    let _ = self.commands.send(PollCommand::Check(CheckKind::All));
                }
                if ui.button(tr!("Check dead")).clicked() {
                    let _ = self.commands.send(PollCommand::Check(CheckKind::Dead));
                }
            });

            ui.separator();

            let (records, check_notice) = {
                let state = self.state.lock().unwrap();
                (state.records.clone(), state.check_notice)
            };

            TableBuilder::new(ui)
                .striped(true)
                .column(Column::exact(48.0))
                .column(Column::auto().at_least(140.0))
                .column(Column::auto().at_least(110.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong(tr!("Status"));
                    });
                    header.col(|ui| {
                        ui.strong(tr!("Name"));
                    });
                    header.col(|ui| {
                        ui.strong(tr!("IP"));
                    });
                    header.col(|ui| {
                        ui.strong(tr!("Changed At"));
                    });
                })
                .body(|mut body| {
                    for record in &records {
                        body.row(20.0, |mut row| {
                            row.col(|ui| {
                                if let Some(icon) = icon_for_status(record.status()) {
                                    ui.add(
                                        egui::Image::new(icon_source(icon))
                                            .fit_to_exact_size(egui::vec2(16.0, 16.0)),
                                    );
                                }
                            });
                            row.col(|ui| {
                                ui.label(record.name());
                            });
                            row.col(|ui| {
                                ui.label(record.address());
                            });
                            row.col(|ui| {
                                ui.label(format_changed_at(record.changed_at()));
                            });
                        });
                    }
                });

            // Acknowledgement dialog for a completed check trigger.
            if let Some(kind) = check_notice {
                let message = match kind {
                    CheckKind::All => tr!("Check of all hosts started"),
                    CheckKind::Dead => tr!("Check of dead hosts started"),
                };

                egui::Window::new(tr!("Check started"))
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.label(message);
                        if ui.button(tr!("OK")).clicked() {
                            self.state.lock().unwrap().check_notice = None;
                        }
                    });
            }
        });
    }
}

impl eframe::App for EguiHostmon {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(state) = self.state.lock() {
            let serialized = serde_json::to_string_pretty(&*state).unwrap_or_default();
            storage.set_string(eframe::APP_KEY, serialized);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_layout(ctx);
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
