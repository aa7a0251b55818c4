//! Feeds raw JSON event payloads through the boundary decoder into the logger.
//!
//! Run with: `cargo run --example decode`

use touchtrace::{decode, GestureLogger, InputEvent, RecordFilter, StdoutSink};

const PAYLOADS: &[&str] = &[
    r#"{"kind":"touchstart","contacts":[{"identifier":1,"x":50.0,"y":50.0}]}"#,
    r#"{"kind":"touchmove","contacts":[{"identifier":1,"x":80.0,"y":65.0}]}"#,
    r#"{"kind":"touchend","contacts":[{"identifier":1,"x":80.0,"y":65.0}]}"#,
    r#"{"kind":"pointerdown","contacts":[{"x":5.0,"y":5.0}]}"#,
    r#"{"kind":"pointerup","contacts":[{"x":6.0,"y":7.0}]}"#,
    // rejected at the boundary, logger never sees it
    r#"{"kind":"wheel","contacts":[]}"#,
];

fn main() {
    let mut logger = GestureLogger::new();
    logger.add_sink(StdoutSink, RecordFilter::All);

    for payload in PAYLOADS {
        match decode(payload) {
            Ok(kind) => {
                logger.dispatch(&InputEvent::now(kind));
            }
            Err(err) => eprintln!("dropped payload: {err}"),
        }
    }
}
