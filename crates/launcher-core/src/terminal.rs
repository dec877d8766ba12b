//! Terminal Feed
//!
//! The `terminal_log` stream is global; each line is tagged `"<project>: <text>"`.
//! A `TerminalFeed` keeps the lines for one project in a bounded buffer.

use std::collections::VecDeque;

/// Bounded, ordered log buffer
///
/// Appends at the back; once `capacity` is reached the oldest line is
/// evicted for every new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
    evicted: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            evicted: 0,
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
            self.evicted += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines dropped from the front so far
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// Log lines of a single project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalFeed {
    /// `"<project>: "`
    prefix: String,
    buffer: LogBuffer,
}

impl TerminalFeed {
    pub fn new(project: impl Into<String>, capacity: usize) -> Self {
        let prefix = format!("{}: ", project.into());
        Self {
            prefix,
            buffer: LogBuffer::new(capacity),
        }
    }

    /// Message part of `payload` if it belongs to this project
    pub fn strip<'a>(&self, payload: &'a str) -> Option<&'a str> {
        payload.strip_prefix(self.prefix.as_str())
    }

    /// Append the payload if it is tagged for this project
    ///
    /// Returns whether the line was kept. Events carry no id, so a replayed
    /// payload is appended again.
    pub fn accept(&mut self, payload: &str) -> bool {
        match self.strip(payload) {
            Some(message) => {
                self.buffer.push(message);
                true
            }
            None => false,
        }
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }
}
