// Example: a list with a header, a separator, and per-item sizes.
use unilist::{EdgeSpec, ListModel, ListOptions, SeparatorSpec};

fn main() {
    let rows: Vec<String> = (0..8).map(|i| format!("row {i}")).collect();

    let options = ListOptions::new(
        rows,
        |row: &String, _| row.clone(),
        |row: &String, _| 20.0 + 4.0 * row.len() as f64,
    )
    .with_header(Some(EdgeSpec::new(48.0)))
    .with_item_separator(Some(SeparatorSpec::new(1.0)))
    .with_estimated_item_size(44.0)
    .with_overscan_count(4);

    let model = ListModel::new(options);

    println!("plan={:?}", model.frame_plan());
    println!("total_size={}", model.total_size());
    println!("window_budget={}", model.window_budget(480.0));
    for slot in 0..model.slot_count() {
        println!(
            "slot {slot}: {:?} key={:?} entry={:?}",
            model.slot_at(slot).unwrap(),
            model.slot_key(slot).unwrap(),
            model.entry(slot).unwrap(),
        );
    }
}
