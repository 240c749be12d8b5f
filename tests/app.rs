mod common;

use common::small_config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use predation_lib::app::{run_headless, App};
use predation_lib::model::termination::Termination;
use std::time::Duration;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[tokio::test]
async fn test_app_runs_until_finished() {
    let mut app = App::new(small_config(4)).expect("Failed to create app");

    let mut ticks = 0;
    while !app.is_finished() {
        assert!(app.tick().is_some());
        ticks += 1;
        assert!(ticks <= 21, "run should end within the iteration budget");
    }

    assert!(app.last_outcome.is_terminal());
    assert!(app.frame.message().is_some());
    assert_eq!(app.history.len() as u64, app.tick_number());
    assert_eq!(app.metrics.tick_count(), app.tick_number());
}

#[tokio::test]
async fn test_restart_begins_a_fresh_run() {
    let mut app = App::new(small_config(8)).unwrap();
    for _ in 0..5 {
        app.tick();
    }
    assert!(app.tick_number() > 0);

    press(&mut app, KeyCode::Char('r'));

    assert!(app.running);
    assert_eq!(app.tick_number(), 0);
    assert_eq!(app.iterations_left(), 20);
    assert!(app.history.is_empty());
    assert_eq!(app.last_outcome, Termination::Continue);
    assert!(app.engine.is_running());
}

#[tokio::test]
async fn test_key_bindings() {
    let mut app = App::new(small_config(1)).unwrap();
    let base = app.tick_interval();

    press(&mut app, KeyCode::Char(' '));
    assert!(app.paused);
    press(&mut app, KeyCode::Char(' '));
    assert!(!app.paused);

    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.time_scale, 1.5);
    assert!(app.tick_interval() < base);

    for _ in 0..10 {
        press(&mut app, KeyCode::Char('-'));
    }
    assert_eq!(app.time_scale, 0.5);
    assert_eq!(app.tick_interval(), base * 2);

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[test]
fn test_tick_interval_follows_config() {
    let mut config = small_config(2);
    config.display.tick_interval_ms = 500;
    let app = App::new(config).unwrap();
    assert_eq!(app.tick_interval(), Duration::from_millis(500));
}

#[test]
fn test_app_rejects_overfull_field() {
    let mut config = small_config(2);
    config.simulation.total_count = 200;
    assert!(App::new(config).is_err());
}

#[test]
fn test_headless_report() {
    let report = run_headless(&small_config(6)).expect("headless run failed");

    assert!(report.outcome.is_terminal());
    assert_eq!(report.message.as_deref(), report.outcome.message());
    assert_eq!(report.seed, Some(6));
    assert!(report.ticks <= 20);
    assert_eq!(report.totals.ticks, report.ticks);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["outcome"].is_string());
    assert!(json["totals"]["peak_victims"].as_u64().unwrap() >= report.victims as u64);
}
