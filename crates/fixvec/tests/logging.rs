//! Degenerate normalization is reported through the `log` facade in debug builds.

use std::sync::{Mutex, OnceLock};

use fixvec::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Default)]
struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

fn capture() -> &'static Capture {
    static LOGGER: OnceLock<Capture> = OnceLock::new();
    let logger = LOGGER.get_or_init(Capture::default);
    if log::set_logger(logger).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
    logger
}

#[test]
fn zero_length_normalize() {
    let logger = capture();

    let n = normalize(Vec3f::ZERO);
    assert!(n.iter().all(|e| !e.is_finite()));

    let records = logger.records.lock().unwrap();
    if cfg!(debug_assertions) {
        assert!(records
            .iter()
            .any(|(level, msg)| *level == Level::Debug && msg.contains("zero-length")));
    } else {
        assert!(records.is_empty());
    }
}
