use catalog_core::clock::format_timestamp;
use catalog_core::db::open_db_in_memory;
use catalog_core::{
    CatalogRepository, CatalogService, FixedClock, Filter, ListRequest, RaceRepository,
    RecordStatus, RepoError, SportsRepository,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rusqlite::{params, Connection};
use std::sync::Mutex;

#[test]
fn get_returns_the_matching_record() {
    let conn = memory_store();
    let now = fixed_now();
    insert_race(&conn, 7, 3, "Cup", true, now + Duration::hours(2));
    insert_race(&conn, 8, 3, "Plate", true, now - Duration::hours(2));

    let repo = RaceRepository::with_clock(&conn, FixedClock(now));
    let race = repo.get(7).unwrap();

    assert_eq!(race.id, 7);
    assert_eq!(race.category, 3);
    assert_eq!(race.name, "Cup");
    assert_eq!(race.number, 7);
    assert!(race.visible);
    assert_eq!(race.advertised_start_time, now + Duration::hours(2));
    assert_eq!(race.status, RecordStatus::Open);

    assert_eq!(repo.get(8).unwrap().status, RecordStatus::Closed);
}

#[test]
fn get_missing_id_returns_not_found_naming_the_id() {
    let conn = memory_store();
    insert_race(&conn, 1, 1, "Only", true, fixed_now());

    let repo = RaceRepository::with_clock(&conn, FixedClock(fixed_now()));
    let err = repo.get(999).unwrap_err();

    assert!(matches!(
        err,
        RepoError::NotFound {
            catalog: "race",
            id: 999
        }
    ));
    assert!(err.to_string().contains("999"));
}

#[test]
fn get_ignores_visibility() {
    let conn = memory_store();
    conn.lock()
        .unwrap()
        .execute(
            "INSERT INTO events(id, sport, name, number, visible, advertised_start_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                4,
                "Cricket",
                "Hidden Test",
                1,
                0,
                format_timestamp(fixed_now())
            ],
        )
        .unwrap();

    let repo = SportsRepository::with_clock(&conn, FixedClock(fixed_now()));
    let event = repo.get(4).unwrap();

    assert_eq!(event.category, "Cricket");
    assert!(!event.visible);
}

#[test]
fn catalogs_sharing_a_store_do_not_see_each_other() {
    let conn = memory_store();
    insert_race(&conn, 1, 1, "Race only", true, fixed_now());

    let sports = SportsRepository::with_clock(&conn, FixedClock(fixed_now()));
    let err = sports.get(1).unwrap_err();

    assert!(matches!(
        err,
        RepoError::NotFound {
            catalog: "sports event",
            id: 1
        }
    ));
}

#[test]
fn service_wraps_repository_calls() {
    let conn = memory_store();
    let now = fixed_now();
    insert_race(&conn, 1, 1, "A", true, now);
    insert_race(&conn, 2, 2, "B", true, now + Duration::hours(1));

    let service = CatalogService::new(RaceRepository::with_clock(&conn, FixedClock(now)));

    let response = service
        .list_records(&ListRequest::default().with_filter(Filter::categories([2])))
        .unwrap();
    assert_eq!(response.records.len(), 1);
    assert_eq!(response.records[0].id, 2);

    assert_eq!(service.get_record(1).unwrap().name, "A");
    assert!(matches!(
        service.get_record(3),
        Err(RepoError::NotFound { id: 3, .. })
    ));
}

#[test]
fn records_serialize_with_upper_case_status() {
    let conn = memory_store();
    let now = fixed_now();
    insert_race(&conn, 1, 1, "Json", true, now - Duration::hours(1));

    let repo = RaceRepository::with_clock(&conn, FixedClock(now));
    let json = serde_json::to_value(repo.get(1).unwrap()).unwrap();

    assert_eq!(json["status"], "CLOSED");
    assert_eq!(json["category"], 1);
    assert_eq!(json["advertised_start_time"], "2026-10-19T11:00:00Z");
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn memory_store() -> Mutex<Connection> {
    Mutex::new(open_db_in_memory().unwrap())
}

fn insert_race(
    conn: &Mutex<Connection>,
    id: i64,
    meeting_id: i64,
    name: &str,
    visible: bool,
    start: DateTime<Utc>,
) {
    conn.lock()
        .unwrap()
        .execute(
            "INSERT INTO races(id, meeting_id, name, number, visible, advertised_start_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                id,
                meeting_id,
                name,
                id,
                i64::from(visible),
                format_timestamp(start)
            ],
        )
        .unwrap();
}
