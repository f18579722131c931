use eframe::egui;
use egui_hostmon::app::EguiHostmon;
use egui_hostmon::logic::PollCommand;
use egui_hostmon::model::*;
use egui_kittest::Harness;
use egui_kittest::kittest::Queryable;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tr::tr;

// --- Helpers ---

fn make_app() -> (
    Arc<Mutex<AppState>>,
    mpsc::UnboundedReceiver<PollCommand>,
    EguiHostmon,
) {
    let state = Arc::new(Mutex::new(AppState::default()));
    let (commands, receiver) = mpsc::unbounded_channel();
    let app = EguiHostmon::from_state(state.clone(), commands);
    (state, receiver, app)
}

fn seed_records(state: &Arc<Mutex<AppState>>, records: Vec<HostRecord>) {
    state.lock().unwrap().records = records;
}

// === Button wiring ===

#[test]
fn test_endpoint_buttons_send_select() {
    let (_state, mut receiver, mut app) = make_app();
    let mut harness = Harness::new(|ctx| app.ui_layout(ctx));
    harness.set_size(egui::vec2(800.0, 400.0));
    harness.run();

    harness.get_by_label(&tr!("Dead hosts")).click();
    harness.run();
    assert_eq!(receiver.try_recv(), Ok(PollCommand::Select(Endpoint::Dead)));

    harness.get_by_label(&tr!("Pause hosts")).click();
    harness.run();
    assert_eq!(
        receiver.try_recv(),
        Ok(PollCommand::Select(Endpoint::Pause))
    );

    assert!(receiver.try_recv().is_err());
}

#[test]
fn test_check_buttons_send_check() {
    let (_state, mut receiver, mut app) = make_app();
    let mut harness = Harness::new(|ctx| app.ui_layout(ctx));
    harness.set_size(egui::vec2(800.0, 400.0));
    harness.run();

    harness.get_by_label(&tr!("Check all")).click();
    harness.run();
    assert_eq!(receiver.try_recv(), Ok(PollCommand::Check(CheckKind::All)));

    harness.get_by_label(&tr!("Check dead")).click();
    harness.run();
    assert_eq!(receiver.try_recv(), Ok(PollCommand::Check(CheckKind::Dead)));
}

// === Table rendering ===

#[test]
fn test_table_shows_one_row_per_record() {
    let (state, _receiver, mut app) = make_app();
    seed_records(
        &state,
        vec![
            HostRecord::new("10.0.0.1", "gateway", "online", 0),
            HostRecord::new("10.0.0.2", "printer", "offline", 0),
            HostRecord::new("10.0.0.3", "nas", "clock.online", 0),
        ],
    );

    let mut harness = Harness::new(|ctx| app.ui_layout(ctx));
    harness.set_size(egui::vec2(800.0, 600.0));
    harness.run();

    for name in ["gateway", "printer", "nas"] {
        harness.get_by_label(name);
    }
    for address in ["10.0.0.1", "10.0.0.2", "10.0.0.3"] {
        harness.get_by_label(address);
    }
}

#[test]
fn test_empty_record_list_leaves_header_only() {
    let (_state, _receiver, mut app) = make_app();

    let mut harness = Harness::new(|ctx| app.ui_layout(ctx));
    harness.set_size(egui::vec2(800.0, 400.0));
    harness.run();

    harness.get_by_label(&tr!("Status"));
    harness.get_by_label(&tr!("Name"));
    harness.get_by_label(&tr!("IP"));
    harness.get_by_label(&tr!("Changed At"));
}

#[test]
fn test_timestamps_are_rendered_in_table_format() {
    let (state, _receiver, mut app) = make_app();
    // The rendered cell uses local time, so compare against the formatter
    // rather than hard-coded digits.
    seed_records(
        &state,
        vec![HostRecord::new("10.0.0.1", "gateway", "online", 1709802304)],
    );

    let mut harness = Harness::new(|ctx| app.ui_layout(ctx));
    harness.set_size(egui::vec2(800.0, 400.0));
    harness.run();

    let expected = egui_hostmon::logic::wire::format_changed_at(1709802304);
    assert!(expected.contains("/2024  "));
    harness.get_by_label(&expected);
}

// === Check acknowledgement dialog ===

#[test]
fn test_check_notice_dialog_shows_and_dismisses() {
    let (state, _receiver, mut app) = make_app();
    state.lock().unwrap().check_notice = Some(CheckKind::All);

    let mut harness = Harness::new(|ctx| app.ui_layout(ctx));
    harness.set_size(egui::vec2(800.0, 400.0));
    harness.run();

    harness.get_by_label(&tr!("Check of all hosts started"));

    harness.get_by_label(&tr!("OK")).click();
    harness.run();

    assert_eq!(state.lock().unwrap().check_notice, None);

    harness.run();
    assert!(
        harness
            .query_by_label(&tr!("Check of all hosts started"))
            .is_none()
    );
}
