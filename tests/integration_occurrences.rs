use chrono::NaiveDate;
use recurview::{get_filtered_occurrences, Event, OccurrenceQuery, ViewGranularity};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_event(date: &str, repeat: &str) -> Event {
    let json = format!(
        r#"{{
            "id": "e1",
            "title": "Repeat test",
            "date": "{}",
            "startTime": "09:00",
            "endTime": "10:00",
            "description": "",
            "location": "",
            "category": "work",
            "repeat": {},
            "notificationTime": 10
        }}"#,
        date, repeat
    );
    serde_json::from_str(&json).unwrap()
}

fn dates_in(events: &[Event], reference: NaiveDate, view: ViewGranularity) -> Vec<NaiveDate> {
    get_filtered_occurrences(events, "", reference, view)
        .iter()
        .map(|e| e.date)
        .collect()
}

#[test]
fn test_monthly_31st_only_in_long_months() {
    let events = vec![make_event("2025-01-31", r#"{ "type": "monthly" }"#)];

    assert!(dates_in(&events, ymd(2025, 2, 1), ViewGranularity::Month).is_empty());
    assert_eq!(
        dates_in(&events, ymd(2025, 3, 1), ViewGranularity::Month),
        vec![ymd(2025, 3, 31)]
    );
}

#[test]
fn test_yearly_leap_day_only_in_leap_years() {
    let events = vec![make_event("2024-02-29", r#"{ "type": "yearly" }"#)];

    assert!(dates_in(&events, ymd(2025, 2, 1), ViewGranularity::Month).is_empty());
    assert_eq!(
        dates_in(&events, ymd(2028, 2, 1), ViewGranularity::Month),
        vec![ymd(2028, 2, 29)]
    );
}

#[test]
fn test_weekly_shows_in_following_week() {
    let events = vec![make_event("2025-10-01", r#"{ "type": "weekly" }"#)];
    let out = get_filtered_occurrences(&events, "", ymd(2025, 10, 8), ViewGranularity::Week);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].date, ymd(2025, 10, 8));
    assert_eq!(out[0].id, "e1@2025-10-08");
    assert_eq!(out[0].series_id(), "e1");
}

#[test]
fn test_end_date_boundary() {
    let events = vec![make_event(
        "2025-01-31",
        r#"{ "type": "monthly", "endDate": "2025-03-31" }"#,
    )];

    assert_eq!(
        dates_in(&events, ymd(2025, 3, 1), ViewGranularity::Month),
        vec![ymd(2025, 3, 31)]
    );
    assert!(
        get_filtered_occurrences(&events, "", ymd(2025, 4, 1), ViewGranularity::Month).is_empty()
    );
}

#[test]
fn test_one_off_event_passes_through_unchanged() {
    let events = vec![make_event("2025-10-15", r#"{ "type": "none", "interval": 0 }"#)];
    let out = get_filtered_occurrences(&events, "", ymd(2025, 10, 1), ViewGranularity::Month);

    assert_eq!(out, events);
    assert!(
        get_filtered_occurrences(&events, "", ymd(2025, 11, 1), ViewGranularity::Month).is_empty()
    );
}

#[test]
fn test_exceptions_remove_single_instances() {
    let mut event = make_event("2025-10-01", r#"{ "type": "daily", "interval": 1 }"#);
    event.exceptions.insert(ymd(2025, 10, 7));
    let out = get_filtered_occurrences(&[event], "", ymd(2025, 10, 8), ViewGranularity::Week);

    // Sunday-start week Oct 5..11, minus the 7th
    let dates: Vec<_> = out.iter().map(|e| e.date).collect();
    assert_eq!(
        dates,
        vec![
            ymd(2025, 10, 5),
            ymd(2025, 10, 6),
            ymd(2025, 10, 8),
            ymd(2025, 10, 9),
            ymd(2025, 10, 10),
            ymd(2025, 10, 11),
        ]
    );
}

#[test]
fn test_daily_offsets_are_multiples_of_interval() {
    let events = vec![make_event("2024-11-03", r#"{ "type": "daily", "interval": 5 }"#)];
    for month in 1..=12 {
        let reference = ymd(2025, month, 1);
        for occ in get_filtered_occurrences(&events, "", reference, ViewGranularity::Month) {
            let offset = (occ.date - ymd(2024, 11, 3)).num_days();
            assert!(offset >= 0);
            assert_eq!(offset % 5, 0, "unexpected date {}", occ.date);
            assert_eq!(occ.date.format("%m").to_string(), format!("{:02}", month));
        }
    }
}

#[test]
fn test_repeated_calls_are_identical_and_input_untouched() {
    let events = vec![
        make_event("2025-01-31", r#"{ "type": "monthly" }"#),
        make_event("2024-02-29", r#"{ "type": "yearly", "interval": 4 }"#),
    ];
    let before = events.clone();
    let query = OccurrenceQuery::new("", ymd(2028, 3, 1), ViewGranularity::Month);

    assert_eq!(query.run(&events), query.run(&events));
    assert_eq!(events, before);
}

#[test]
fn test_occurrences_serialize_with_camel_case_fields() {
    let events = vec![make_event("2025-10-01", r#"{ "type": "weekly", "interval": 1 }"#)];
    let out = get_filtered_occurrences(&events, "", ymd(2025, 10, 8), ViewGranularity::Week);
    let value = serde_json::to_value(&out[0]).unwrap();

    assert_eq!(value["id"], "e1@2025-10-08");
    assert_eq!(value["date"], "2025-10-08");
    assert_eq!(value["startTime"], "09:00");
    assert_eq!(value["repeat"]["type"], "weekly");
    assert_eq!(value["notificationTime"], 10);
}

#[test]
fn test_null_repeat_and_exceptions_read_as_one_off() {
    let json = r#"[{
        "id": "n1", "title": "Dentist", "date": "2025-10-15",
        "startTime": "09:00", "endTime": "10:00",
        "description": null, "location": null, "category": null,
        "repeat": null, "exceptions": null
    }]"#;
    let events: Vec<Event> = serde_json::from_str(json).unwrap();
    let out = get_filtered_occurrences(&events, "dent", ymd(2025, 10, 1), ViewGranularity::Month);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "n1");
}

#[test]
fn test_null_interval_steps_by_one() {
    let events = vec![make_event(
        "2025-10-01",
        r#"{ "type": "weekly", "interval": null }"#,
    )];

    assert_eq!(
        dates_in(&events, ymd(2025, 10, 8), ViewGranularity::Week),
        vec![ymd(2025, 10, 8)]
    );
}
