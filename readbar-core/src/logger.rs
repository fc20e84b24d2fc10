//! Logging utilities.
//!
//! Keeps the most recent log records in memory, so they can be inspected
//! from a page's developer tools or from tests.

use lazy_static::lazy_static;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Default number of records kept before the oldest ones are dropped.
pub const DEFAULT_CAPACITY: usize = 1_000;

/// Saves all log records in a global bounded deque.
pub struct ReadbarLogger;

static LOGGER: ReadbarLogger = ReadbarLogger;

/// A log record.
#[derive(Clone, Debug)]
pub struct Record {
    /// Log level used for this record
    pub level: log::Level,
    /// Module that emitted this record
    pub target: String,
    /// Time this message was logged
    pub time: time::OffsetDateTime,
    /// Message content
    pub message: String,
}

impl Record {
    /// Formats this record as a single line.
    pub fn line(&self) -> String {
        let format = time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:3]");
        let time = self
            .time
            .format(&format)
            .unwrap_or_else(|_| String::from("??:??:??"));
        format!("{time} {:<5} [{}] {}", self.level, self.target, self.message)
    }
}

struct Logs {
    records: VecDeque<Record>,
    capacity: usize,
}

lazy_static! {
    static ref LOGS: Mutex<Logs> = Mutex::new(Logs {
        records: VecDeque::new(),
        capacity: DEFAULT_CAPACITY,
    });
}

fn logs() -> MutexGuard<'static, Logs> {
    // A panic while holding the lock cannot leave the deque inconsistent.
    LOGS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Log a record in readbar's log queue.
pub fn log(record: &log::Record<'_>) {
    let mut logs = logs();
    while logs.records.len() >= logs.capacity {
        logs.records.pop_front();
    }
    logs.records.push_back(Record {
        level: record.level(),
        target: record.target().to_string(),
        message: format!("{}", record.args()),
        time: time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc()),
    });
}

impl log::Log for ReadbarLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        log(record);
    }

    fn flush(&self) {}
}

/// Initialize the readbar logger.
///
/// Make sure this is the only logger your are using. Returns an error if
/// another logger was already installed.
pub fn init(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    set_capacity(DEFAULT_CAPACITY);

    log::set_logger(&LOGGER)?;
    log::set_max_level(level);

    Ok(())
}

/// Return a logger that stores records in readbar's log queue.
///
/// Useful to combine it with another logger.
pub fn get_logger() -> ReadbarLogger {
    ReadbarLogger
}

/// Sets how many records are kept.
///
/// Older records are dropped if the queue is already longer.
pub fn set_capacity(capacity: usize) {
    let mut logs = logs();
    logs.capacity = capacity.max(1);
    while logs.records.len() > logs.capacity {
        logs.records.pop_front();
    }
}

/// Returns a copy of the stored records, oldest first.
pub fn records() -> Vec<Record> {
    logs().records.iter().cloned().collect()
}

/// Removes and returns the stored records, oldest first.
pub fn drain() -> Vec<Record> {
    logs().records.drain(..).collect()
}
