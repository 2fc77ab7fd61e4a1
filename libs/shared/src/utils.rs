//! Small helpers shared by both services

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Fresh random identifier
pub fn generate_id() -> Uuid {
    Uuid::new_v4()
}

/// Current UTC time
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// RFC 3339 with millisecond precision and a `Z` suffix
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_uuid;

    #[test]
    fn test_generate_id_is_v4() {
        let id = generate_id();
        assert_eq!(id.get_version_num(), 4);
        assert!(is_uuid(&id.to_string()));
        assert_ne!(id, generate_id());
    }

    #[test]
    fn test_format_date() {
        let date = DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(&date), "2025-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_current_timestamp_is_monotonic_enough() {
        let first = current_timestamp();
        let second = current_timestamp();
        assert!(second >= first);
    }
}
