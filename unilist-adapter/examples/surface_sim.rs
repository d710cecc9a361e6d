use unilist::{Align, EdgeSpec, ListModel, ListOptions};
use unilist_adapter::{
    ListController, SlotOutOfBounds, Surface, WindowedScrollable, WindowedSurface,
};

// Example: a windowed-style engine stub driven through the uniform scroll
// contract. A real adapter would forward these calls to an actual windowed
// list; here they just print.
struct PrintingEngine {
    measured_slots: usize,
}

impl WindowedScrollable for PrintingEngine {
    fn scroll_to(&mut self, offset: f64) {
        println!("engine: scroll_to({offset})");
    }

    fn scroll_to_slot(&mut self, slot: usize, align: Align) -> Result<(), SlotOutOfBounds> {
        if slot >= self.measured_slots {
            return Err(SlotOutOfBounds {
                slot,
                measured_slots: self.measured_slots,
            });
        }
        println!("engine: scroll_to_slot({slot}, {align:?})");
        Ok(())
    }

    fn reset_after_slot(&mut self, slot: usize) {
        println!("engine: reset_after_slot({slot})");
    }
}

fn main() {
    let sizes = vec![40.0f64; 12];
    let options = ListOptions::new(
        sizes,
        |_, index| index.to_string(),
        |&size, _| size,
    )
    .with_header(Some(EdgeSpec::new(48.0)))
    .with_on_visible_items_changed(Some(|from: isize, to: isize| {
        println!("visible items: {from}..={to}");
    }));

    let mut model = ListModel::new(options);

    let mut surface = WindowedSurface::new(
        PrintingEngine {
            measured_slots: model.slot_count(),
        },
        model.slots(),
    );
    surface.configure(model.options());

    // The engine reports which slots it rendered; the driver notifies in
    // data-index space.
    surface.on_slots_rendered(0, 6);

    let mut controller = ListController::new(surface);
    controller.scroll_to_index(3, None);
    controller.scroll_to_end();
    controller.scroll_to_start();

    // A size change commits through the model and resets the engine's cache.
    let update = model.update_options(|o| {
        *o = o.clone().with_data(vec![40.0f64; 11]);
    });
    controller.surface_mut().apply_update(&update);
}
