//! Line header construction
//!
//! The header is everything printed before the message body:
//!
//! ```text
//! [LEVEL] <date> <time[.micros]> <file:line> PID<n>
//! ```
//!
//! The level tag is always present. The other tokens are only written when
//! `DATE` or `TIME` is set; each then appears only when its own flag is set,
//! always in this order, and is followed by exactly one space.

use super::flags::LogFlags;
use super::log_level::LogLevel;
use chrono::{DateTime, TimeZone, Timelike, Utc};
use std::fmt::{self, Write};
use std::panic::Location;

/// Placeholder written when the caller location is unknown
pub const UNKNOWN_FILE: &str = "???";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Append the header for one record to `buf`.
///
/// `now` is rendered in its own time zone unless `LogFlags::UTC` is set.
/// Without `DATE` or `TIME` only the level tag is written, whatever the
/// other flags.
pub fn write_header<Tz>(
    buf: &mut String,
    flags: LogFlags,
    level: LogLevel,
    now: &DateTime<Tz>,
    location: Option<&Location<'_>>,
    pid: u32,
) -> fmt::Result
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    write!(buf, "[{}] ", level.to_str())?;

    if !flags.intersects(LogFlags::DATE | LogFlags::TIME) {
        return Ok(());
    }

    if flags.contains(LogFlags::UTC) {
        write_clock(buf, flags, &now.with_timezone(&Utc))?;
    } else {
        write_clock(buf, flags, now)?;
    }

    if flags.intersects(LogFlags::LONG_FILE | LogFlags::SHORT_FILE) {
        let (file, line) = location
            .map(|loc| (loc.file(), loc.line()))
            .unwrap_or((UNKNOWN_FILE, 0));
        let file = if flags.contains(LogFlags::SHORT_FILE) {
            short_file_name(file)
        } else {
            file
        };
        write!(buf, "{}:{} ", file, line)?;
    }

    if flags.contains(LogFlags::PID) {
        write!(buf, "PID{} ", pid)?;
    }

    Ok(())
}

fn write_clock<Tz>(buf: &mut String, flags: LogFlags, now: &DateTime<Tz>) -> fmt::Result
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if flags.contains(LogFlags::DATE) {
        write!(buf, "{} ", now.format(DATE_FORMAT))?;
    }
    if flags.contains(LogFlags::TIME) {
        if flags.contains(LogFlags::MICROSECONDS) {
            // Microseconds are printed unpadded past two digits: 5µs is ".05".
            let micros = now.nanosecond() % 1_000_000_000 / 1_000;
            write!(buf, "{}.{:02} ", now.format(TIME_FORMAT), micros)?;
        } else {
            write!(buf, "{} ", now.format(TIME_FORMAT))?;
        }
    }
    Ok(())
}

/// Final path element of `file`. Both `/` and `\` count as separators.
pub fn short_file_name(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}
