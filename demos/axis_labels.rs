//! Lays out a crowded score axis and prints which ticks survive.

use intervalseq::axis::{layout_tics, AxisScale, LayoutConfig, Tic};
use intervalseq::IntervalSeq;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scale = AxisScale::new(0.0, 100.0, 320.0)?;

    let mut tics: Vec<Tic> = (0..=100)
        .step_by(5)
        .map(|x| Tic::labeled(x as f64, x.to_string()))
        .collect();
    // Highlight the class median first so it wins any collision.
    tics.insert(0, Tic::labeled(63.0, "median").with_label_space(8.0));

    let layout = layout_tics(&tics, &scale, &LayoutConfig::default());

    println!("marks:  {:?}", layout.marks);
    for label in &layout.labels {
        println!("label:  {:>6} @ {:.1}px", label.text, label.position);
    }

    let mut covered = IntervalSeq::new();
    for label in &layout.labels {
        covered.add(label.position.floor() as i64, label.position.ceil() as i64);
    }
    println!("label anchors: {covered}");

    Ok(())
}
