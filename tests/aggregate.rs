use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use tempfile::TempDir;

use floortrack::{
    parse_target_date, Database, ImageDims, LocationObservation, SectionInput, TrackerService,
};

fn setup() -> (TempDir, TrackerService) {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new().expect("temp dir");
    let db = Database::new(dir.path().join("floortrack.db")).expect("open database");
    (dir, TrackerService::new(db))
}

fn ts(raw: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .expect("valid test timestamp")
        .and_utc()
}

fn observation(x_pos: f64, y_pos: f64, raw_ts: &str) -> LocationObservation {
    LocationObservation {
        person_id: "p1".to_string(),
        x_pos,
        y_pos,
        timestamp: ts(raw_ts),
    }
}

fn section(text: &str, x: f64, y: f64, width: f64, height: f64) -> SectionInput {
    SectionInput {
        text: text.to_string(),
        x,
        y,
        width,
        height,
    }
}

#[tokio::test]
async fn aggregates_tagged_records_into_two_hour_windows() -> Result<()> {
    let (_dir, service) = setup();

    // All three land in section A (left half of a 200x200 image).
    service
        .record_location(observation(50.0, 50.0, "2023-10-27T01:10:00"))
        .await?;
    service
        .record_location(observation(60.0, 60.0, "2023-10-27T03:40:00"))
        .await?;
    service
        .record_location(observation(70.0, 70.0, "2023-10-27T03:50:00"))
        .await?;
    service
        .reclassify_sections(
            vec![section("A", 0.0, 0.0, 50.0, 100.0)],
            ImageDims::new(200, 200),
        )
        .await?;

    let counts = service
        .aggregated_counts(parse_target_date("2023-10-27")?)
        .await?;

    assert_eq!(counts.len(), 1);
    assert_eq!(
        counts.get("A").expect("section A present"),
        &vec![("00:00".to_string(), 1), ("02:00".to_string(), 2)]
    );
    Ok(())
}

#[tokio::test]
async fn unclassified_records_aggregate_under_the_default_section() -> Result<()> {
    let (_dir, service) = setup();

    service
        .record_location(observation(500.0, 500.0, "2023-10-27T10:30:00"))
        .await?;

    let counts = service
        .aggregated_counts(parse_target_date("2023-10-27")?)
        .await?;

    assert_eq!(
        counts.get("Others").expect("default section present"),
        &vec![("10:00".to_string(), 1)]
    );
    Ok(())
}

#[tokio::test]
async fn section_with_records_only_on_other_dates_yields_an_empty_list() -> Result<()> {
    let (_dir, service) = setup();

    service
        .record_location(observation(50.0, 50.0, "2023-10-26T10:30:00"))
        .await?;
    service
        .reclassify_sections(
            vec![section("A", 0.0, 0.0, 50.0, 100.0)],
            ImageDims::new(200, 200),
        )
        .await?;

    let counts = service
        .aggregated_counts(parse_target_date("2023-10-27")?)
        .await?;

    assert_eq!(counts.len(), 1);
    assert!(counts.get("A").expect("section A present").is_empty());
    Ok(())
}

#[tokio::test]
async fn store_with_no_records_yields_an_empty_mapping() -> Result<()> {
    let (_dir, service) = setup();

    let counts = service
        .aggregated_counts(parse_target_date("2023-10-27")?)
        .await?;

    assert!(counts.is_empty());
    Ok(())
}

#[tokio::test]
async fn counts_serialize_to_the_expected_wire_shape() -> Result<()> {
    let (_dir, service) = setup();

    service
        .record_location(observation(50.0, 50.0, "2023-10-27T01:10:00"))
        .await?;
    service
        .reclassify_sections(
            vec![section("A", 0.0, 0.0, 50.0, 100.0)],
            ImageDims::new(200, 200),
        )
        .await?;

    let counts = service
        .aggregated_counts(parse_target_date("2023-10-27")?)
        .await?;

    let json = serde_json::to_value(&counts)?;
    assert_eq!(json, serde_json::json!({ "A": [["00:00", 1]] }));
    Ok(())
}
