//! Append-only log output.
//!
//! Every human-readable line the logger produces is a [`LogRecord`] published
//! through a [`SinkBus`] to registered [`LogSink`]s. Sinks are append-only: the
//! bus never clears or rewrites what a sink has collected.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Which surface a log line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Per-contact touch lifecycle lines (start/move/end/cancel).
    Touch,
    /// Derived two-contact metrics (pinch zoom, rotation).
    Gesture,
    /// Single-pointer surface lines.
    Pointer,
}

/// One appended log line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub category: Category,
    pub message: String,
}

impl LogRecord {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// Trait for receiving appended log records.
pub trait LogSink {
    fn append(&mut self, record: &LogRecord);
}

/// A simple sink that prints every record to stdout.
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn append(&mut self, record: &LogRecord) {
        println!("[{:?}] {}", record.category, record.message);
    }
}

/// A sink that collects records in memory, for inspection in tests and demos.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<LogRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records collected so far, in append order.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Just the message text of every collected record.
    pub fn messages(&self) -> Vec<String> {
        self.records.iter().map(|r| r.message.clone()).collect()
    }
}

impl LogSink for MemorySink {
    fn append(&mut self, record: &LogRecord) {
        self.records.push(record.clone());
    }
}

// Lets a sink stay readable by the caller after registration. Event delivery is
// strictly serialized, so the borrow never overlaps a reader.
impl<S: LogSink> LogSink for Rc<RefCell<S>> {
    fn append(&mut self, record: &LogRecord) {
        self.borrow_mut().append(record);
    }
}

/// Determines which records a sink wants to receive.
#[derive(Clone, Copy)]
pub enum RecordFilter {
    All,
    TouchOnly,
    PointerOnly,
    Custom(fn(&LogRecord) -> bool),
}

/// Metadata-wrapped sink with filter and control flag.
struct SinkEntry {
    sink: Box<dyn LogSink>,
    enabled: bool,
    filter: RecordFilter,
}

/// Fan-out registry of log sinks.
#[derive(Default)]
pub struct SinkBus {
    next_id: u64,
    sinks: HashMap<u64, SinkEntry>,
}

impl SinkBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a sink with a record filter, returning its handle.
    pub fn add_sink(&mut self, sink: impl LogSink + 'static, filter: RecordFilter) -> u64 {
        let id = self.next_id;
        self.sinks.insert(
            id,
            SinkEntry {
                sink: Box::new(sink),
                enabled: true,
                filter,
            },
        );
        self.next_id += 1;
        id
    }

    /// Enables a previously registered sink.
    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.sinks.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Disables (mutes) a sink without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.sinks.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a sink entirely.
    pub fn remove_sink(&mut self, id: u64) {
        self.sinks.remove(&id);
    }

    /// Appends one record to all active and matching sinks.
    pub fn publish(&mut self, record: &LogRecord) {
        for entry in self.sinks.values_mut() {
            if !entry.enabled {
                continue;
            }
            let passes = match entry.filter {
                RecordFilter::All => true,
                RecordFilter::TouchOnly => {
                    matches!(record.category, Category::Touch | Category::Gesture)
                }
                RecordFilter::PointerOnly => matches!(record.category, Category::Pointer),
                RecordFilter::Custom(f) => f(record),
            };
            if passes {
                entry.sink.append(record);
            }
        }
    }
}
