use std::sync::{Arc, Mutex};

use chrono::Local;

pub const MAX_LOG_LINES: usize = 300;

/// Kind of a log panel entry, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Rejected,
    Outcome,
}

#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: LogLevel,
    pub text: String,
}

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<LogLine>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        self.push_at(LogLevel::Info, msg);
    }

    /// Appends `msg` prefixed with the local wall-clock time.
    pub fn push_at(&self, level: LogLevel, msg: String) {
        let text = format!("{} {}", Local::now().format("%H:%M:%S"), msg);
        let mut buf = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        buf.push(LogLine { level, text });
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn entries(&self) -> Vec<LogLine> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|l| l.text).collect()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation status of the board size input.
#[derive(Debug, PartialEq, Eq)]
pub enum InputStatus {
    Incomplete,
    Invalid(&'static str),
    Valid(usize),
}

/// Which panel receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Board,
    Moves,
    SizeInput,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::SizeInput,
            Focus::SizeInput => Focus::Board,
        }
    }
}
