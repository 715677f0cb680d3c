use chrono::{Duration, SecondsFormat, TimeZone, Utc};
use course_dates::config::RenderTimezone;
use course_dates::datetime::*;

#[test]
fn test_parse_date_utc() {
    let parsed = parse_date(Some("2024-02-21T14:30:00Z")).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 21, 14, 30, 0).unwrap());
}

#[test]
fn test_parse_date_with_offset() {
    // +02:00 means the instant is two hours earlier in UTC
    let parsed = parse_date(Some("2024-02-21T14:30:00+02:00")).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 21, 12, 30, 0).unwrap());
}

#[test]
fn test_parse_date_without_offset_is_utc() {
    let parsed = parse_date(Some("2024-02-21T14:30:00")).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 21, 14, 30, 0).unwrap());
}

#[test]
fn test_parse_date_fractional_seconds_round_trip() {
    let parsed = parse_date(Some("2024-02-21T14:30:00.250Z")).unwrap();
    assert_eq!(
        parsed.to_rfc3339_opts(SecondsFormat::Millis, true),
        "2024-02-21T14:30:00.250Z"
    );
}

#[test]
fn test_parse_date_none_is_none() {
    assert!(parse_date(None).is_none());
}

#[test]
fn test_parse_date_malformed_is_none() {
    assert!(parse_date(Some("not-a-date")).is_none());
    assert!(parse_date(Some("2024-13-41T99:99:99Z")).is_none());
    assert!(parse_date(Some("")).is_none());
}

#[test]
fn test_now_timestamp_is_utc_iso8601() {
    let stamp = now_timestamp();
    assert!(stamp.ends_with('Z'), "expected explicit Z suffix: {stamp}");
    assert!(parse_date(Some(&stamp)).is_some());
}

#[test]
fn test_format_course_not_started_date() {
    let formatted = format_course_not_started_date(Some("2024-02-21T00:00:00Z"), RenderTimezone::Utc);
    assert_eq!(formatted.as_deref(), Some("February 21, 2024"));
}

#[test]
fn test_format_course_not_started_date_sentinels() {
    assert!(format_course_not_started_date(None, RenderTimezone::Utc).is_none());
    assert!(format_course_not_started_date(Some("garbage"), RenderTimezone::Utc).is_none());
}

#[test]
fn test_format_course_date() {
    // 2024-02-21 is a Wednesday
    let formatted = format_course_date(Some("2024-02-21T00:00:00Z"), RenderTimezone::Utc);
    assert_eq!(formatted, "Wed, Feb 21, 2024");
}

#[test]
fn test_format_course_date_sentinels() {
    assert_eq!(format_course_date(None, RenderTimezone::Utc), "");
    assert_eq!(format_course_date(Some("garbage"), RenderTimezone::Utc), "");
}

#[test]
fn test_convert_to_simple_date() {
    let formatted = convert_to_simple_date(Some("2024-02-21T00:00:00Z"), RenderTimezone::Utc);
    assert_eq!(formatted, "2024-02-21");
}

#[test]
fn test_convert_to_simple_date_time() {
    let formatted = convert_to_simple_date_time(Some("2024-02-21T14:30:00Z"), RenderTimezone::Utc);
    assert_eq!(formatted, "21 Feb 2024 14:30:00");
}

#[test]
fn test_simple_formatters_sentinels() {
    assert_eq!(convert_to_simple_date(None, RenderTimezone::Utc), "");
    assert_eq!(convert_to_simple_date(Some("garbage"), RenderTimezone::Utc), "");
    assert_eq!(convert_to_simple_date_time(None, RenderTimezone::Utc), "");
    assert_eq!(convert_to_simple_date_time(Some("garbage"), RenderTimezone::Utc), "");
}

#[test]
fn test_format_date_with_no_year() {
    let millis = Utc
        .with_ymd_and_hms(2024, 2, 21, 0, 0, 0)
        .unwrap()
        .timestamp_millis();
    let formatted = format_date_with_no_year(millis, RenderTimezone::Utc);
    assert_eq!(formatted.as_deref(), Some("February 21"));
}

#[test]
fn test_format_date_with_no_year_single_digit_day() {
    // Day is unpadded: "March 5", not "March 05"
    let millis = Utc
        .with_ymd_and_hms(2024, 3, 5, 12, 0, 0)
        .unwrap()
        .timestamp_millis();
    let formatted = format_date_with_no_year(millis, RenderTimezone::Utc);
    assert_eq!(formatted.as_deref(), Some("March 5"));
}

#[test]
fn test_format_date_with_no_year_out_of_range() {
    assert!(format_date_with_no_year(i64::MAX, RenderTimezone::Utc).is_none());
}

#[test]
fn test_is_date_today_for_now() {
    let stamp = now_timestamp();
    assert!(is_date_today(&stamp, RenderTimezone::Utc).unwrap());
}

#[test]
fn test_is_date_today_for_past_date() {
    assert!(!is_date_today("1999-01-01T00:00:00Z", RenderTimezone::Utc).unwrap());
}

#[test]
fn test_is_date_today_propagates_bad_input() {
    let err = is_date_today("garbage", RenderTimezone::Utc).unwrap_err();
    assert!(matches!(err, DateError::InvalidDate(_)));
}

// The next two tests pin the inherited naming inversion: is_date_past is true
// for FUTURE dates, is_date_due is true for dates already behind us.

#[test]
fn test_is_date_past_true_for_future_date() {
    let future = (Utc::now() + Duration::days(2)).to_rfc3339_opts(SecondsFormat::Millis, true);
    assert!(is_date_past(&future, RenderTimezone::Utc).unwrap());

    let past = (Utc::now() - Duration::days(2)).to_rfc3339_opts(SecondsFormat::Millis, true);
    assert!(!is_date_past(&past, RenderTimezone::Utc).unwrap());
}

#[test]
fn test_is_date_due_true_for_past_date() {
    let past = (Utc::now() - Duration::days(2)).to_rfc3339_opts(SecondsFormat::Millis, true);
    assert!(is_date_due(&past, RenderTimezone::Utc).unwrap());

    let future = (Utc::now() + Duration::days(2)).to_rfc3339_opts(SecondsFormat::Millis, true);
    assert!(!is_date_due(&future, RenderTimezone::Utc).unwrap());
}

#[test]
fn test_predicates_propagate_bad_input() {
    assert!(is_date_past("garbage", RenderTimezone::Utc).is_err());
    assert!(is_date_due("garbage", RenderTimezone::Utc).is_err());
}
