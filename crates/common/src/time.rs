use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// ISO-8601 stamp used for callback payload timestamps.
pub fn iso_timestamp() -> String {
    now().to_rfc3339()
}
