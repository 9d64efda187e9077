use super::*;

fn point() -> CoverageRow {
    CoverageRow {
        latitude_min: "52.38".to_string(),
        longitude_min: "13.06".to_string(),
        description: "Potsdam".to_string(),
        date_start: "2020-01-01".to_string(),
        date_end: "2020-12-31".to_string(),
        timezone: "+01:00".to_string(),
        ..Default::default()
    }
}

/// Expect a point coverage with null max coordinates and times
#[test]
fn accepts_point_without_optionals() {
    let coverage = check_coverage(0, &point()).unwrap();

    assert_eq!(coverage.latitude_min, 52.38);
    assert_eq!(coverage.latitude_max, None);
    assert_eq!(coverage.longitude_max, None);
    assert_eq!(coverage.time_start, None);
}

/// Expect both time formats to parse
#[test]
fn parses_short_and_long_times() {
    let mut row = point();
    row.time_start = "08:00".to_string();
    row.time_end = "17:30:15".to_string();

    let coverage = check_coverage(0, &row).unwrap();

    assert_eq!(coverage.time_start, NaiveTime::from_hms_opt(8, 0, 0));
    assert_eq!(coverage.time_end, NaiveTime::from_hms_opt(17, 30, 15));
}

/// Expect rejection of a latitude outside [-90, 90]
#[test]
fn rejects_latitude_out_of_range() {
    let mut row = point();
    row.latitude_min = "90.5".to_string();

    assert!(check_coverage(0, &row).is_err());
}

/// Expect rejection when only one maximum coordinate is given
#[test]
fn rejects_unpaired_maximum() {
    let mut row = point();
    row.latitude_max = "53.0".to_string();

    assert!(check_coverage(0, &row).is_err());
}

/// Expect rejection of a bounding box whose maximum latitude lies below the minimum
#[test]
fn rejects_inverted_box() {
    let mut row = point();
    row.latitude_max = "50.0".to_string();
    row.longitude_max = "14.0".to_string();

    assert!(check_coverage(0, &row).is_err());
}

/// Expect a box crossing the antimeridian to be accepted
#[test]
fn accepts_box_across_antimeridian() {
    let mut row = point();
    row.longitude_min = "170.0".to_string();
    row.latitude_max = "53.0".to_string();
    row.longitude_max = "-170.0".to_string();

    let coverage = check_coverage(0, &row).unwrap();

    assert_eq!(coverage.longitude_min, 170.0);
    assert_eq!(coverage.longitude_max, Some(-170.0));
}

/// Expect rejection when the end date precedes the start date
#[test]
fn rejects_end_before_start() {
    let mut row = point();
    row.date_end = "2019-12-31".to_string();

    let result = check_coverage(2, &row);

    assert!(matches!(
        result,
        Err(ValidationError::Dependency { row: 2, .. })
    ));
}

/// Expect rejection of a missing timezone
#[test]
fn rejects_missing_timezone() {
    let mut row = point();
    row.timezone = String::new();

    assert!(check_coverage(0, &row).is_err());
}
