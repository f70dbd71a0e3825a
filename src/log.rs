//! Diagnostic tracing of preference accesses.
//!
//! Every accessor operation reports what it does as an [`Event`] to the [`Log`] it was built with.
//! The events are purely informational, a logger can never change the outcome of an operation.

use crate::error::Error;
use crate::value::{ValueKind, ValueRef};
use core::fmt;

#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event<'a> {
    Read {
        key: &'a str,
        kind: ValueKind,
    },
    Write {
        key: &'a str,
        kind: ValueKind,
    },
    Compare {
        key: &'a str,
        current: ValueRef<'a>,
        new: ValueRef<'a>,
    },
    Updated {
        key: &'a str,
    },
    UpToDate {
        key: &'a str,
    },
    /// A read failed and the caller's default was returned instead.
    ReadFailed {
        key: &'a str,
        error: &'a Error,
    },
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Read { key, kind } => write!(f, "getting preference {kind} {key}"),
            Event::Write { key, kind } => write!(f, "putting preference {kind} {key}"),
            Event::Compare { key, current, new } => {
                write!(f, "current value for key {key}: {current}, new value: {new}")
            }
            Event::Updated { key } => write!(f, "updated value for key {key} successfully"),
            Event::UpToDate { key } => write!(f, "value for key {key} is already up-to-date"),
            Event::ReadFailed { key, error } => {
                write!(f, "reading preference {key} failed: {error}, using default")
            }
        }
    }
}

pub trait Log {
    fn log(&mut self, event: Event<'_>);
}

impl<L: Log> Log for &mut L {
    fn log(&mut self, event: Event<'_>) {
        (*self).log(event)
    }
}

/// Discards every event.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoLog;

impl Log for NoLog {
    fn log(&mut self, _event: Event<'_>) {}
}

/// Forwards events to `defmt`, failed reads as warnings and everything else as traces.
#[cfg(feature = "defmt")]
#[derive(Debug, Default, Copy, Clone)]
pub struct DefmtLog;

#[cfg(feature = "defmt")]
impl Log for DefmtLog {
    fn log(&mut self, event: Event<'_>) {
        match event {
            Event::ReadFailed { .. } => defmt::warn!("prefs: {}", event),
            _ => defmt::trace!("prefs: {}", event),
        }
    }
}

/// Prints events to stdout, only available on the host.
#[cfg(all(feature = "debug-logs", target_arch = "x86_64"))]
#[derive(Debug, Default, Copy, Clone)]
pub struct PrintLog;

#[cfg(all(feature = "debug-logs", target_arch = "x86_64"))]
impl Log for PrintLog {
    fn log(&mut self, event: Event<'_>) {
        std::println!("prefs: {event}");
    }
}
