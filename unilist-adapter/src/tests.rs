use crate::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use unilist::{Align, EdgeSpec, ListModel, ListOptions, SlotMap, ViewportSize, VisibleRange};

#[derive(Clone, Debug, PartialEq)]
enum NativeCall {
    Offset(f64),
    End,
    Item { index: usize, view_position: f64 },
}

#[derive(Debug, Default)]
struct NativeEngine {
    calls: Vec<NativeCall>,
    measured_slots: usize,
}

impl NativeEngine {
    fn with_measured(measured_slots: usize) -> Self {
        Self {
            calls: Vec::new(),
            measured_slots,
        }
    }
}

impl NativeScrollable for NativeEngine {
    fn scroll_to_offset(&mut self, offset: f64) {
        self.calls.push(NativeCall::Offset(offset));
    }

    fn scroll_to_end(&mut self) {
        self.calls.push(NativeCall::End);
    }

    fn scroll_to_item(&mut self, index: usize, view_position: f64) -> Result<(), SlotOutOfBounds> {
        if index >= self.measured_slots {
            return Err(SlotOutOfBounds {
                slot: index,
                measured_slots: self.measured_slots,
            });
        }
        self.calls.push(NativeCall::Item {
            index,
            view_position,
        });
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
enum WindowedCall {
    Offset(f64),
    Slot { slot: usize, align: Align },
    Reset(usize),
}

#[derive(Debug, Default)]
struct WindowedEngine {
    calls: Vec<WindowedCall>,
}

impl WindowedScrollable for WindowedEngine {
    fn scroll_to(&mut self, offset: f64) {
        self.calls.push(WindowedCall::Offset(offset));
    }

    fn scroll_to_slot(&mut self, slot: usize, align: Align) -> Result<(), SlotOutOfBounds> {
        self.calls.push(WindowedCall::Slot { slot, align });
        Ok(())
    }

    fn reset_after_slot(&mut self, slot: usize) {
        self.calls.push(WindowedCall::Reset(slot));
    }
}

#[derive(Debug, Default)]
struct RecordingReporter {
    events: Mutex<Vec<FailureEvent>>,
}

impl ErrorReporter for RecordingReporter {
    fn notify(&self, event: &FailureEvent) {
        self.events.lock().unwrap().push(*event);
    }
}

fn sized_options(sizes: &[f64]) -> ListOptions<f64> {
    ListOptions::new(
        sizes.to_vec(),
        |_, index| index.to_string(),
        |&size, _| size,
    )
}

#[test]
fn native_alignment_maps_to_view_position() {
    let mut surface = NativeSurface::new(NativeEngine::with_measured(10));
    for (align, expected) in [
        (Align::Start, 0.0),
        (Align::Center, 0.5),
        (Align::End, 1.0),
        // No smart primitive on the native engine: degrades to center.
        (Align::Smart, 0.5),
    ] {
        surface.scroll_to_index(3, align).unwrap();
        assert_eq!(
            surface.engine().calls.last(),
            Some(&NativeCall::Item {
                index: 3,
                view_position: expected
            })
        );
    }
}

#[test]
fn native_defaults_unspecified_alignment_to_center() {
    let surface = NativeSurface::new(NativeEngine::with_measured(10));
    let mut controller = ListController::new(surface);
    controller.scroll_to_index(4, None);
    assert_eq!(
        controller.surface().engine().calls,
        [NativeCall::Item {
            index: 4,
            view_position: 0.5
        }]
    );
}

#[test]
fn native_start_and_end_use_engine_primitives() {
    let surface = NativeSurface::new(NativeEngine::with_measured(10));
    let mut controller = ListController::new(surface);
    controller.scroll_to_start();
    controller.scroll_to_end();
    assert_eq!(
        controller.surface().engine().calls,
        [NativeCall::Offset(0.0), NativeCall::End]
    );
}

#[test]
fn scroll_failure_is_reported_and_swallowed() {
    // 5 measured slots, request index 7: one structured event, no panic.
    let reporter = Arc::new(RecordingReporter::default());
    let surface = NativeSurface::new(NativeEngine::with_measured(5));
    let mut controller = ListController::new(surface).with_reporter(reporter.clone());

    controller.scroll_to_index(7, Some(Align::Start));

    assert!(controller.surface().engine().calls.is_empty());
    assert_eq!(
        reporter.events.lock().unwrap().as_slice(),
        [FailureEvent::ScrollToIndexFailed {
            index: 7,
            measured_slots: 5
        }]
    );
}

#[test]
fn windowed_out_of_range_index_reports_slot_bound() {
    let reporter = Arc::new(RecordingReporter::default());
    let surface = WindowedSurface::new(WindowedEngine::default(), SlotMap::new(false, false, 5));
    let mut controller = ListController::new(surface).with_reporter(reporter.clone());

    controller.scroll_to_index(7, None);

    assert!(controller.surface().engine().calls.is_empty());
    assert_eq!(
        reporter.events.lock().unwrap().as_slice(),
        [FailureEvent::ScrollToIndexFailed {
            index: 7,
            measured_slots: 5
        }]
    );
}

#[test]
fn windowed_maps_logical_index_through_inner_header() {
    let slots = SlotMap::new(true, false, 5);
    let surface = WindowedSurface::new(WindowedEngine::default(), slots);
    let mut controller = ListController::new(surface);

    // Default alignment on this surface is Smart, deferred to the engine.
    controller.scroll_to_index(0, None);
    controller.scroll_to_index(2, Some(Align::End));

    assert_eq!(
        controller.surface().engine().calls,
        [
            WindowedCall::Slot {
                slot: 1,
                align: Align::Smart
            },
            WindowedCall::Slot {
                slot: 3,
                align: Align::End
            },
        ]
    );
}

#[test]
fn windowed_scroll_to_end_targets_last_item_slot() {
    // header + 5 items + footer: items occupy slots 1..=5.
    let slots = SlotMap::new(true, true, 5);
    let mut surface = WindowedSurface::new(WindowedEngine::default(), slots);
    surface.scroll_to_end();
    assert_eq!(
        surface.engine().calls,
        [WindowedCall::Slot {
            slot: 5,
            align: Align::Start
        }]
    );
}

#[test]
fn windowed_scroll_ops_on_empty_data() {
    let slots = SlotMap::new(false, false, 0);
    let mut surface = WindowedSurface::new(WindowedEngine::default(), slots);
    surface.scroll_to_end();
    assert!(surface.engine().calls.is_empty());
    surface.scroll_to_start();
    assert_eq!(surface.engine().calls, [WindowedCall::Offset(0.0)]);
}

#[test]
fn windowed_apply_update_resets_engine_cache() {
    let mut model = ListModel::new(sized_options(&[10.0, 20.0, 30.0]));
    let mut surface = WindowedSurface::new(WindowedEngine::default(), model.slots());

    // Identical commit: nothing to reset.
    let update = model.update_options(|_| {});
    surface.apply_update(&update);
    assert!(surface.engine().calls.is_empty());

    // Resizing item 1 invalidates from its slot onward.
    let update = model.update_options(|o| {
        *o = sized_options(&[10.0, 99.0, 30.0]);
    });
    surface.apply_update(&update);
    assert_eq!(surface.engine().calls, [WindowedCall::Reset(1)]);
    assert_eq!(surface.slots(), model.slots());
}

#[test]
fn visibility_dispatch_fires_exactly_once_per_event() {
    let fired = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(Mutex::new(VisibleRange::EMPTY));

    let options = {
        let fired = fired.clone();
        let last = last.clone();
        sized_options(&[10.0, 20.0, 30.0]).with_on_visible_items_changed(Some(
            move |from: isize, to: isize| {
                fired.fetch_add(1, Ordering::SeqCst);
                *last.lock().unwrap() = VisibleRange::new(from, to);
            },
        ))
    };

    let mut surface = NativeSurface::new(NativeEngine::with_measured(3));
    surface.configure(&options);

    surface.on_viewable_items_changed([2, 0, 1]);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert_eq!(*last.lock().unwrap(), VisibleRange::new(0, 2));

    // The empty report also fires exactly once, with the (-1, -1) sentinel.
    surface.on_viewable_items_changed(std::iter::empty());
    assert_eq!(fired.load(Ordering::SeqCst), 2);
    assert_eq!(*last.lock().unwrap(), VisibleRange::EMPTY);
}

#[test]
fn windowed_rendered_range_lands_in_data_space() {
    let fired = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(Mutex::new(VisibleRange::EMPTY));

    let options = {
        let fired = fired.clone();
        let last = last.clone();
        sized_options(&[10.0, 20.0, 30.0])
            .with_header(Some(EdgeSpec::new(40.0)))
            .with_on_visible_items_changed(Some(move |from: isize, to: isize| {
                fired.fetch_add(1, Ordering::SeqCst);
                *last.lock().unwrap() = VisibleRange::new(from, to);
            }))
    };

    let mut surface = WindowedSurface::new(WindowedEngine::default(), options.slot_map());
    surface.configure(&options);

    surface.on_slots_rendered(0, 3);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert_eq!(*last.lock().unwrap(), VisibleRange::new(-1, 2));

    surface.on_slots_rendered(1, 3);
    assert_eq!(*last.lock().unwrap(), VisibleRange::new(0, 2));
}

#[test]
fn native_window_budget_follows_viewport() {
    let options = sized_options(&[10.0; 30])
        .with_estimated_item_size(60.0)
        .with_overscan_count(10);

    let mut surface = NativeSurface::new(NativeEngine::with_measured(30));
    surface.configure(&options);

    assert!(!surface.is_mountable());
    assert_eq!(surface.window_budget(), 1);

    surface.on_viewport_change(ViewportSize::new(320.0, 600.0));
    assert!(surface.is_mountable());
    // 10 estimated items per viewport, overscan 10: one extra viewport.
    assert_eq!(surface.window_budget(), 2);
}

#[test]
fn horizontal_lists_measure_the_cross_axis() {
    let options = sized_options(&[10.0; 30])
        .with_estimated_item_size(60.0)
        .with_overscan_count(10)
        .with_horizontal(true);

    let mut surface = NativeSurface::new(NativeEngine::with_measured(30));
    surface.configure(&options);
    surface.on_viewport_change(ViewportSize::new(0.0, 600.0));
    assert!(!surface.is_mountable());

    surface.on_viewport_change(ViewportSize::new(300.0, 0.0));
    assert!(surface.is_mountable());
    assert_eq!(surface.window_budget(), 3);
}

#[test]
fn windowed_mount_gate_and_overscan_passthrough() {
    let options = sized_options(&[10.0; 4]).with_overscan_count(6);
    let mut surface = WindowedSurface::new(WindowedEngine::default(), options.slot_map());
    surface.configure(&options);

    // This engine does its own render-ahead math; overscan passes through.
    assert_eq!(surface.overscan_count(), 6);

    assert!(!surface.is_mountable());
    surface.on_viewport_change(ViewportSize::new(320.0, 480.0));
    assert!(surface.is_mountable());
}

#[test]
fn native_tuning_defaults() {
    let tuning = NativeTuning::default();
    assert_eq!(tuning.max_render_batch, 2);
    assert_eq!(tuning.batch_period_ms, 0);
    assert_eq!(tuning.scroll_event_throttle_ms, 16);
    assert_eq!(tuning.viewable_percent_threshold, 1.0);
}
