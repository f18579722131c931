#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use tr::{tr, tr_init};
use tracing_subscriber::EnvFilter;

use egui_hostmon::app::EguiHostmon;

/// Backend base URL: `--server <url>` argument, the `HOSTMON_SERVER`
/// variable, or the backend's default port on localhost.
fn server_url() -> String {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--server" {
            if let Some(url) = args.next() {
                return url;
            }
        }
    }

    std::env::var("HOSTMON_SERVER").unwrap_or_else(|_| "http://127.0.0.1".to_string())
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(tr!("Host monitor"))
            .with_inner_size([680.0, 480.0])
            .with_resizable(true),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    tr_init!("./locales");

    let server = server_url();
    eframe::run_native(
        "egui_hostmon",
        options,
        Box::new(move |cc| Ok(Box::new(EguiHostmon::new(cc, server)))),
    )
}
