//! Severity levels for the `--debug_level` flag, mapped onto `log::Level`.
//!
//! Numbering and default (`4`, `Error`) follow the specification's own
//! scale rather than `y-lang`'s `LogLevel` (which only spans `0..4` and
//! defaults to its strictest level at position `0`).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl TryFrom<u8> for Severity {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, <Self as TryFrom<u8>>::Error> {
        match value {
            0 => Ok(Severity::Trace),
            1 => Ok(Severity::Debug),
            2 => Ok(Severity::Info),
            3 => Ok(Severity::Warn),
            4 => Ok(Severity::Error),
            5 => Ok(Severity::Fatal),
            _ => Err(()),
        }
    }
}

impl From<Severity> for log::Level {
    fn from(value: Severity) -> Self {
        match value {
            Severity::Trace => log::Level::Trace,
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warn => log::Level::Warn,
            // `log` has no Fatal level; a Fatal threshold only lets Error
            // through, since Fatal is a filtering threshold, not a level
            // anything is ever logged at.
            Severity::Error | Severity::Fatal => log::Level::Error,
        }
    }
}
