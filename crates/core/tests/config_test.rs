use festsched_core::config::EventConfig;
use festsched_core::errors::DateError;
use pretty_assertions::assert_eq;
use tracing::Level;

fn config(start: &str, end: &str) -> EventConfig {
    EventConfig {
        start_date: start.to_string(),
        end_date: end.to_string(),
        schedule_path: "data/schedule.json".to_string(),
        log_level: Level::INFO,
    }
}

#[test]
fn test_date_headers_cover_the_event() {
    let config = config("27-12-2025", "04-01-2026");

    let headers = config.date_headers().unwrap();

    assert_eq!(headers.len(), 9);
    assert_eq!(headers.first().map(String::as_str), Some("27/12 Saturday"));
    assert_eq!(headers.last().map(String::as_str), Some("04/01 Sunday"));
}

#[test]
fn test_date_headers_reject_malformed_dates() {
    let config = config("27-12-2025", "not-a-date");

    let error = config.date_headers().unwrap_err();

    assert_eq!(error, DateError::InvalidFormat("not-a-date".to_string()));
}
