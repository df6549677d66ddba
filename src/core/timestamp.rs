use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// C-locale `ctime` layout, e.g. `Wed Jun  9 01:21:11 1993`.
pub const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub fn format_timestamp(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format(CTIME_FORMAT).to_string()
}
