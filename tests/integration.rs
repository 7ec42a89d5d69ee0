//! Integration tests for kbdemu host-testable logic: typing drives the
//! shared state while a simulated host polls through a `ReportSink`.

use std::cell::RefCell;
use std::sync::Arc;
use std::thread;

use embassy_futures::block_on;
use embassy_futures::join::join;
use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Timer};
use kbdemu::hid::keycodes::{KEY_A, KEY_B, KEY_C, KEY_H, KEY_I};
use kbdemu::usb::ReportSink;
use kbdemu::{Error, Keyboard, KeyboardReport};

const HOLD: Duration = Duration::from_millis(50);

/// Sink that records every report the keyboard sends.
#[derive(Default)]
struct RecordingSink {
    sent: Vec<Vec<u8>>,
}

impl ReportSink for RecordingSink {
    type Error = ();

    async fn send(&mut self, report: &[u8]) -> Result<(), ()> {
        self.sent.push(report.to_vec());
        Ok(())
    }
}

/// Sink standing in for a disconnected host.
struct DeadSink;

impl ReportSink for DeadSink {
    type Error = &'static str;

    async fn send(&mut self, _report: &[u8]) -> Result<(), &'static str> {
        Err("endpoint disabled")
    }
}

/// Poll every `interval` until `stop` is signalled, decoding each report.
async fn poll_until(
    keyboard: &Keyboard<NoopRawMutex>,
    sink: &RefCell<RecordingSink>,
    interval: Duration,
    stop: &Signal<NoopRawMutex, ()>,
) {
    loop {
        keyboard
            .handle_data_requested(3, &mut *sink.borrow_mut())
            .await
            .unwrap();
        if let Either::Second(()) = select(Timer::after(interval), stop.wait()).await {
            return;
        }
    }
}

/// Collapse a poll trace into the sequence of distinct single-key states,
/// dropping repeats.
fn key_trace(sent: &[Vec<u8>]) -> Vec<u8> {
    let mut trace: Vec<u8> = Vec::new();
    for bytes in sent {
        let report = KeyboardReport::from_bytes(bytes).unwrap();
        let held: Vec<u8> = report.keycodes.iter().copied().filter(|&k| k != 0).collect();
        assert!(held.len() <= 1, "two keys held at once: {held:?}");
        let key = held.first().copied().unwrap_or(0);
        if trace.last() != Some(&key) {
            trace.push(key);
        }
    }
    trace
}

#[test]
fn every_poll_sends_exactly_eight_bytes() {
    let kbd = Keyboard::<NoopRawMutex>::new();
    let mut sink = RecordingSink::default();

    block_on(kbd.handle_data_requested(3, &mut sink)).unwrap();
    for key in 0x04..0x0A {
        kbd.key_down(key).unwrap();
        block_on(kbd.handle_data_requested(3, &mut sink)).unwrap();
    }
    assert_eq!(kbd.key_down(0x0A), Err(Error::CapacityExceeded(0x0A)));
    block_on(kbd.handle_data_requested(3, &mut sink)).unwrap();

    assert_eq!(sink.sent.len(), 8);
    assert!(sink.sent.iter().all(|r| r.len() == 8));
    assert_eq!(sink.sent[0], vec![0u8; 8]);
    assert_eq!(
        sink.sent.last().unwrap(),
        &vec![0x00, 0x00, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09]
    );
}

#[test]
fn endpoint_number_does_not_change_the_report() {
    let kbd = Keyboard::<NoopRawMutex>::new();
    kbd.key_down(KEY_A).unwrap();

    let mut sink = RecordingSink::default();
    block_on(kbd.handle_data_requested(1, &mut sink)).unwrap();
    block_on(kbd.handle_data_requested(3, &mut sink)).unwrap();
    assert_eq!(sink.sent[0], sink.sent[1]);
}

#[test]
fn send_errors_reach_the_caller() {
    let kbd = Keyboard::<NoopRawMutex>::new();
    let result = block_on(kbd.handle_data_requested(3, &mut DeadSink));
    assert_eq!(result, Err("endpoint disabled"));
}

#[test]
fn type_scancode_visible_inside_window_only() {
    let kbd = Keyboard::<NoopRawMutex>::new();
    let mut sink = RecordingSink::default();

    let (typed, ()) = block_on(join(kbd.type_scancode(KEY_C, HOLD), async {
        Timer::after(HOLD / 2).await;
        kbd.handle_data_requested(3, &mut sink).await.unwrap();
    }));
    typed.unwrap();
    block_on(kbd.handle_data_requested(3, &mut sink)).unwrap();

    let during = KeyboardReport::from_bytes(&sink.sent[0]).unwrap();
    let after = KeyboardReport::from_bytes(&sink.sent[1]).unwrap();
    assert!(during.contains(KEY_C));
    assert!(after.is_empty());
}

#[test]
fn type_string_presses_sequentially() {
    let kbd = Keyboard::<NoopRawMutex>::new();
    let sink = RefCell::new(RecordingSink::default());
    let stop = Signal::<NoopRawMutex, ()>::new();

    let start = Instant::now();
    let (typed, ()) = block_on(join(
        async {
            let r = kbd.type_string("hi", HOLD).await;
            stop.signal(());
            r
        },
        poll_until(&kbd, &sink, Duration::from_millis(5), &stop),
    ));
    typed.unwrap();

    assert!(start.elapsed() >= HOLD * 2);
    // Exactly two press/hold/release cycles, 'h' then 'i'.
    let trace = key_trace(&sink.borrow().sent);
    let pressed: Vec<u8> = trace.into_iter().filter(|&k| k != 0).collect();
    assert_eq!(pressed, vec![KEY_H, KEY_I]);
    assert!(kbd.snapshot().is_empty());
}

#[test]
fn type_scancodes_never_overlap() {
    let kbd = Keyboard::<NoopRawMutex>::new();
    let sink = RefCell::new(RecordingSink::default());
    let stop = Signal::<NoopRawMutex, ()>::new();

    let (typed, ()) = block_on(join(
        async {
            let r = kbd.type_scancodes(&[KEY_A, KEY_B, KEY_C], HOLD).await;
            stop.signal(());
            r
        },
        poll_until(&kbd, &sink, Duration::from_millis(5), &stop),
    ));
    typed.unwrap();

    let trace = key_trace(&sink.borrow().sent);
    let pressed: Vec<u8> = trace.into_iter().filter(|&k| k != 0).collect();
    assert_eq!(pressed, vec![KEY_A, KEY_B, KEY_C]);
    assert!(kbd.snapshot().is_empty());
}

#[test]
fn signal_cancels_typing_and_releases_key() {
    let kbd = Keyboard::<NoopRawMutex>::new();
    let cancel = Signal::<NoopRawMutex, ()>::new();

    let (outcome, ()) = block_on(join(
        select(kbd.type_string("abc", HOLD), cancel.wait()),
        async {
            // Somewhere inside the second character.
            Timer::after(HOLD + HOLD / 2).await;
            cancel.signal(());
        },
    ));

    assert!(matches!(outcome, Either::Second(())));
    assert!(kbd.snapshot().is_empty());
    // The third character never went down.
    assert!(!kbd.is_pressed(KEY_C));
}

#[test]
fn concurrent_typers_interleave_without_corruption() {
    let kbd = Keyboard::<NoopRawMutex>::new();
    let (a, b) = block_on(join(
        kbd.type_scancodes(&[KEY_A, KEY_B], HOLD),
        kbd.type_string("hi", HOLD),
    ));
    a.unwrap();
    b.unwrap();
    assert!(kbd.snapshot().is_empty());
}

#[test]
fn same_key_from_two_typers_reports_not_pressed() {
    let kbd = Keyboard::<NoopRawMutex>::new();
    let (first, second) = block_on(join(
        kbd.type_scancode(KEY_A, HOLD),
        kbd.type_scancode(KEY_A, HOLD * 2),
    ));
    first.unwrap();
    assert_eq!(second, Err(Error::NotPressed(KEY_A)));
    assert!(!kbd.is_pressed(KEY_A));
}

#[test]
fn poller_on_another_thread_sees_consistent_reports() {
    let kbd = Arc::new(Keyboard::<CriticalSectionRawMutex>::new());

    let poller = {
        let kbd = Arc::clone(&kbd);
        thread::spawn(move || {
            let mut seen_a = false;
            let deadline = std::time::Instant::now() + std::time::Duration::from_millis(400);
            while std::time::Instant::now() < deadline {
                let bytes = kbd.report().to_bytes();
                assert_eq!(bytes[1], 0);
                let held = bytes[2..].iter().filter(|&&k| k != 0).count();
                assert!(held <= 1);
                seen_a |= bytes[2] == KEY_A;
                thread::sleep(std::time::Duration::from_millis(2));
            }
            seen_a
        })
    };

    block_on(kbd.type_scancodes(&[KEY_A, KEY_B, KEY_A], HOLD)).unwrap();
    assert!(poller.join().unwrap());
    assert!(kbd.snapshot().is_empty());
}
