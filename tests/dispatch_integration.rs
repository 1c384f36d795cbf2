//! Integration tests: press events → Dispatcher → ports.

use std::io;

use inkypi_buttons::app::events::{AppEvent, DayPeriod};
use inkypi_buttons::app::ports::{Clock, DisplayClient, EventSink, LaunchError, ServiceControl};
use inkypi_buttons::app::service::Dispatcher;
use inkypi_buttons::config::{DispatcherConfig, PluginTarget};
use inkypi_buttons::events::{Line, PressEvent};

// ── Mock implementations ──────────────────────────────────────

struct MockService {
    restarts: u32,
    fail: bool,
}
impl MockService {
    fn new() -> Self {
        Self {
            restarts: 0,
            fail: false,
        }
    }
    fn failing() -> Self {
        Self {
            restarts: 0,
            fail: true,
        }
    }
}
impl ServiceControl for MockService {
    fn restart(&mut self) -> Result<(), LaunchError> {
        if self.fail {
            return Err(LaunchError::Spawn(io::Error::new(
                io::ErrorKind::NotFound,
                "systemctl not found",
            )));
        }
        self.restarts += 1;
        Ok(())
    }
}

struct MockDisplay {
    shown: Vec<PluginTarget>,
    fail: bool,
}
impl MockDisplay {
    fn new() -> Self {
        Self {
            shown: Vec::new(),
            fail: false,
        }
    }
    fn failing() -> Self {
        Self {
            shown: Vec::new(),
            fail: true,
        }
    }
}
impl DisplayClient for MockDisplay {
    fn show(&mut self, target: &PluginTarget) -> Result<(), LaunchError> {
        if self.fail {
            return Err(LaunchError::Http("connection refused".to_string()));
        }
        self.shown.push(target.clone());
        Ok(())
    }
}

struct FixedClock(u8);
impl Clock for FixedClock {
    fn local_hour(&self) -> u8 {
        self.0
    }
}

struct RecordingSink {
    events: Vec<AppEvent>,
}
impl RecordingSink {
    fn new() -> Self {
        Self { events: Vec::new() }
    }
}
impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

fn press(line: Line) -> PressEvent {
    PressEvent {
        line,
        timestamp_ms: 1_000,
    }
}

// ── Scenarios ─────────────────────────────────────────────────

#[test]
fn restart_press_launches_exactly_one_restart_and_no_http() {
    let config = DispatcherConfig::default();
    let mut dispatcher = Dispatcher::new(&config);
    let mut svc = MockService::new();
    let mut display = MockDisplay::new();
    let mut sink = RecordingSink::new();

    dispatcher.handle_press(press(Line::A), &mut svc, &mut display, &FixedClock(9), &mut sink);

    assert_eq!(svc.restarts, 1);
    assert!(display.shown.is_empty());
    assert!(sink.events.contains(&AppEvent::RestartLaunched));
}

#[test]
fn calendar_at_0930_posts_the_am_body() {
    let config = DispatcherConfig::default();
    let mut dispatcher = Dispatcher::new(&config);
    let mut svc = MockService::new();
    let mut display = MockDisplay::new();
    let mut sink = RecordingSink::new();

    dispatcher.handle_press(press(Line::B), &mut svc, &mut display, &FixedClock(9), &mut sink);

    assert_eq!(svc.restarts, 0);
    assert_eq!(display.shown.len(), 1);
    assert_eq!(
        serde_json::to_string(&display.shown[0]).unwrap(),
        r#"{"playlist_name":"AM","plugin_id":"calendar","plugin_instance":"am Meetings"}"#
    );
    assert!(sink.events.contains(&AppEvent::CalendarRequested {
        period: DayPeriod::Am,
        hour: 9
    }));
}

#[test]
fn calendar_at_1400_posts_the_pm_body() {
    let config = DispatcherConfig::default();
    let mut dispatcher = Dispatcher::new(&config);
    let mut svc = MockService::new();
    let mut display = MockDisplay::new();
    let mut sink = RecordingSink::new();

    dispatcher.handle_press(press(Line::B), &mut svc, &mut display, &FixedClock(14), &mut sink);

    assert_eq!(display.shown.len(), 1);
    assert_eq!(
        serde_json::to_string(&display.shown[0]).unwrap(),
        r#"{"playlist_name":"pm","plugin_id":"calendar","plugin_instance":"PM Calander"}"#
    );
}

#[test]
fn noon_boundary_switches_instance() {
    let config = DispatcherConfig::default();
    let mut dispatcher = Dispatcher::new(&config);
    let mut svc = MockService::new();
    let mut display = MockDisplay::new();
    let mut sink = RecordingSink::new();

    dispatcher.handle_press(press(Line::B), &mut svc, &mut display, &FixedClock(11), &mut sink);
    dispatcher.handle_press(press(Line::B), &mut svc, &mut display, &FixedClock(12), &mut sink);

    assert_eq!(display.shown.len(), 2);
    assert_eq!(display.shown[0].playlist_name, "AM");
    assert_eq!(display.shown[1].playlist_name, "pm");
}

#[test]
fn reserved_lines_touch_nothing() {
    let config = DispatcherConfig::default();
    let mut dispatcher = Dispatcher::new(&config);
    let mut svc = MockService::new();
    let mut display = MockDisplay::new();
    let mut sink = RecordingSink::new();

    dispatcher.handle_press(press(Line::C), &mut svc, &mut display, &FixedClock(9), &mut sink);
    dispatcher.handle_press(press(Line::D), &mut svc, &mut display, &FixedClock(9), &mut sink);

    assert_eq!(svc.restarts, 0);
    assert!(display.shown.is_empty());
    assert_eq!(
        sink.events
            .iter()
            .filter(|e| matches!(e, AppEvent::NoActionBound { .. }))
            .count(),
        2
    );
}

#[test]
fn restart_launch_failure_is_swallowed_and_serving_continues() {
    let config = DispatcherConfig::default();
    let mut dispatcher = Dispatcher::new(&config);
    let mut svc = MockService::failing();
    let mut display = MockDisplay::new();
    let mut sink = RecordingSink::new();

    // Failing restart launch must not poison the loop.
    dispatcher.handle_press(press(Line::A), &mut svc, &mut display, &FixedClock(9), &mut sink);
    dispatcher.handle_press(press(Line::B), &mut svc, &mut display, &FixedClock(9), &mut sink);

    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, AppEvent::LaunchFailed { line: Line::A, .. }))
    );
    assert_eq!(display.shown.len(), 1, "later presses still dispatch");
    assert_eq!(dispatcher.press_count(), 2);
}

#[test]
fn display_launch_failure_is_swallowed_and_serving_continues() {
    let config = DispatcherConfig::default();
    let mut dispatcher = Dispatcher::new(&config);
    let mut svc = MockService::new();
    let mut display = MockDisplay::failing();
    let mut sink = RecordingSink::new();

    dispatcher.handle_press(press(Line::B), &mut svc, &mut display, &FixedClock(9), &mut sink);
    dispatcher.handle_press(press(Line::A), &mut svc, &mut display, &FixedClock(9), &mut sink);

    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, AppEvent::LaunchFailed { line: Line::B, .. }))
    );
    assert_eq!(svc.restarts, 1, "later presses still dispatch");
}

#[test]
fn rapid_presses_each_launch_their_own_call() {
    // Two qualifying presses while the previous call is notionally
    // still in flight: both fire, no deduplication.  Expected
    // behavior, not a bug.
    let config = DispatcherConfig::default();
    let mut dispatcher = Dispatcher::new(&config);
    let mut svc = MockService::new();
    let mut display = MockDisplay::new();
    let mut sink = RecordingSink::new();

    dispatcher.handle_press(press(Line::A), &mut svc, &mut display, &FixedClock(9), &mut sink);
    dispatcher.handle_press(press(Line::A), &mut svc, &mut display, &FixedClock(9), &mut sink);
    dispatcher.handle_press(press(Line::B), &mut svc, &mut display, &FixedClock(9), &mut sink);
    dispatcher.handle_press(press(Line::B), &mut svc, &mut display, &FixedClock(9), &mut sink);

    assert_eq!(svc.restarts, 2);
    assert_eq!(display.shown.len(), 2);
}

#[test]
fn restart_always_relaunches_regardless_of_prior_outcome() {
    let config = DispatcherConfig::default();
    let mut dispatcher = Dispatcher::new(&config);
    let mut display = MockDisplay::new();
    let mut sink = RecordingSink::new();

    let mut svc = MockService::failing();
    dispatcher.handle_press(press(Line::A), &mut svc, &mut display, &FixedClock(9), &mut sink);

    let mut svc = MockService::new();
    dispatcher.handle_press(press(Line::A), &mut svc, &mut display, &FixedClock(9), &mut sink);
    assert_eq!(svc.restarts, 1);
}

#[test]
fn custom_bindings_are_honored() {
    use inkypi_buttons::config::Action;

    let config = DispatcherConfig {
        bindings: [
            Action::Reserved,
            Action::Reserved,
            Action::ShowCalendar,
            Action::RestartService,
        ],
        ..Default::default()
    };
    let mut dispatcher = Dispatcher::new(&config);
    let mut svc = MockService::new();
    let mut display = MockDisplay::new();
    let mut sink = RecordingSink::new();

    dispatcher.handle_press(press(Line::D), &mut svc, &mut display, &FixedClock(9), &mut sink);
    dispatcher.handle_press(press(Line::C), &mut svc, &mut display, &FixedClock(15), &mut sink);
    dispatcher.handle_press(press(Line::A), &mut svc, &mut display, &FixedClock(9), &mut sink);

    assert_eq!(svc.restarts, 1);
    assert_eq!(display.shown.len(), 1);
    assert_eq!(display.shown[0].playlist_name, "pm");
}
