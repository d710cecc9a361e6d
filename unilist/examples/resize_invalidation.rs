// Example: committing a size change recomputes only the affected suffix.
use unilist::{ListModel, ListOptions};

fn sized(sizes: &[f64]) -> ListOptions<f64> {
    ListOptions::new(
        sizes.to_vec(),
        |_, index| index.to_string(),
        |&size, _| size,
    )
}

fn main() {
    let mut model = ListModel::new(sized(&[40.0, 40.0, 40.0, 40.0, 40.0]));
    println!("initial offsets: {:?}", offsets(&model));

    // Item 2 is measured taller than its estimate.
    let update = model.update_options(|o| {
        *o = sized(&[40.0, 40.0, 120.0, 40.0, 40.0]);
    });
    println!("reset_from={:?}", update.reset_from);
    println!("updated offsets: {:?}", offsets(&model));

    // Committing the same sizes again leaves the layout untouched.
    let update = model.update_options(|_| {});
    println!("reset_from={:?}", update.reset_from);
}

fn offsets(model: &ListModel<f64>) -> Vec<f64> {
    model.layout().iter().map(|e| e.offset).collect()
}
