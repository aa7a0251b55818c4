//! Replays a scripted pinch/rotate gesture through the logger.
//!
//! Run with: `cargo run --example replay`

use touchtrace::{Contact, GestureLogger, RecordFilter, ScriptedSource, StdoutSink};

fn main() {
    let mut logger = GestureLogger::new();
    logger.add_sink(StdoutSink, RecordFilter::All);

    let mut source = ScriptedSource::new("scripted:0");

    // one-finger swipe
    source.touch_start(vec![Contact::new(1, 100.0, 100.0)]);
    source.touch_move(vec![Contact::new(1, 140.0, 90.0)]);
    source.touch_end(vec![Contact::new(1, 180.0, 80.0)]);

    // two-finger pinch with a quarter-turn rotation
    source.touch_start(vec![Contact::new(1, 100.0, 100.0), Contact::new(2, 200.0, 100.0)]);
    source.touch_move(vec![Contact::new(1, 90.0, 100.0), Contact::new(2, 210.0, 100.0)]);
    source.touch_move(vec![Contact::new(1, 150.0, 40.0), Contact::new(2, 150.0, 160.0)]);
    source.touch_end(vec![Contact::new(1, 150.0, 40.0), Contact::new(2, 150.0, 160.0)]);

    // the independent pointer surface
    source.pointer_down(10.0, 10.0);
    source.pointer_move(20.0, 15.0);
    source.pointer_up(30.0, 20.0);

    let processed = logger.pump(&mut source);
    let marker = logger.marker();
    println!(
        "processed {processed} event(s); marker at ({}, {}) in {}",
        marker.x, marker.y, marker.color
    );
}
