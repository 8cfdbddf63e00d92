// SPDX-License-Identifier: MPL-2.0
//! Standard input color feed.
//!
//! Lets a native capture helper run as a separate process and pipe its
//! output into the application: every non-empty line is published verbatim
//! on the `color-update` event. Validation is left to the subscriber, which
//! rejects malformed payloads.

use super::event_bus::InProcessBus;
use crate::error::Result;
use std::io::{self, BufRead};
use std::thread;

/// Forwards every non-empty, trimmed line of `reader` to `event` on `bus`.
///
/// Returns the number of lines published. Stops at end of input or on the
/// first read error.
pub fn pump<R: BufRead>(reader: R, bus: &InProcessBus, event: &str) -> usize {
    let mut published = 0;

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("Stopped reading colors from input: {err}");
                break;
            }
        };

        let payload = line.trim();
        if payload.is_empty() {
            continue;
        }

        let delivered = bus.emit(event, payload);
        log::debug!("Published {payload} to {delivered} listener(s)");
        published += 1;
    }

    published
}

/// Spawns a thread that pumps standard input into `bus` until it closes.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the thread cannot be spawned.
pub fn spawn(bus: InProcessBus, event: &'static str) -> Result<thread::JoinHandle<usize>> {
    spawn_reader(io::BufReader::new(io::stdin()), bus, event)
}

/// Spawns a thread that pumps `reader` into `bus` until end of input.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the thread cannot be spawned.
pub fn spawn_reader<R>(
    reader: R,
    bus: InProcessBus,
    event: &'static str,
) -> Result<thread::JoinHandle<usize>>
where
    R: BufRead + Send + 'static,
{
    let handle = thread::Builder::new()
        .name("stdin-color-feed".to_string())
        .spawn(move || {
            let published = pump(reader, &bus, event);
            log::info!("Color input closed after {published} color(s)");
            published
        })?;
    Ok(handle)
}
