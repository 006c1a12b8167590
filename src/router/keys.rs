use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Object keys for uploads, `<prefix><unix millis><extension>`.
///
/// The millisecond value never repeats within the process: when the clock has
/// not moved (or went backwards) since the last key, the last value plus one is
/// used instead.
#[derive(Debug)]
pub struct ImageKeys {
    prefix: &'static str,
    extension: &'static str,
    last: AtomicI64,
}

impl ImageKeys {
    #[must_use]
    pub const fn new(prefix: &'static str, extension: &'static str) -> Self {
        Self {
            prefix,
            extension,
            last: AtomicI64::new(0),
        }
    }

    #[must_use]
    pub fn next(&self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&self, now: i64) -> String {
        let previous = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            }) {
            Ok(previous) | Err(previous) => previous,
        };

        format!("{}{}{}", self.prefix, now.max(previous + 1), self.extension)
    }
}
