use chrono::{Datelike, Local};

// Years are validated against the server's local calendar.
pub fn current_year() -> i64 {
    Local::now().year() as i64
}
