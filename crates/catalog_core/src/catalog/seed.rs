//! Demo rows inserted by repository `init`.
//!
//! Rows use fixed ids `1..=SEED_ROW_COUNT` with `INSERT OR IGNORE`, so a
//! re-run against an already seeded file is a no-op.

use crate::clock::format_timestamp;
use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use rusqlite::{params, Connection};

/// Rows inserted per catalog.
pub const SEED_ROW_COUNT: i64 = 100;

const SPORTS: &[&str] = &["Soccer", "Tennis", "Cricket", "Basketball", "Volleyball"];

const RACE_TOWNS: &[&str] = &[
    "Ballarat",
    "Bendigo",
    "Caulfield",
    "Doomben",
    "Flemington",
    "Geelong",
    "Randwick",
    "Rosehill",
    "Sandown",
    "Warrnambool",
];

const TEAM_PREFIXES: &[&str] = &["North", "South", "East", "West", "Central", "United"];
const TEAM_NAMES: &[&str] = &[
    "Falcons", "Rovers", "Comets", "Tigers", "Wanderers", "Sharks", "Lions", "Hawks",
];

pub(super) fn seed_races(conn: &Connection, now: DateTime<Utc>) -> rusqlite::Result<()> {
    let mut rng = rand::rng();
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO races(id, meeting_id, name, number, visible, advertised_start_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        )?;
        for id in 1..=SEED_ROW_COUNT {
            let town = RACE_TOWNS.choose(&mut rng).copied().unwrap_or("Flemington");
            stmt.execute(params![
                id,
                rng.random_range(1..=10_i64),
                format!("{town} Race {}", rng.random_range(1..=12)),
                rng.random_range(1..=12_i64),
                rng.random_range(0..=1_i64),
                random_start(&mut rng, now),
            ])?;
        }
    }
    tx.commit()
}

pub(super) fn seed_events(conn: &Connection, now: DateTime<Utc>) -> rusqlite::Result<()> {
    let mut rng = rand::rng();
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO events(id, sport, name, number, visible, advertised_start_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        )?;
        for id in 1..=SEED_ROW_COUNT {
            let sport = SPORTS.choose(&mut rng).copied().unwrap_or("Soccer");
            let prefix = TEAM_PREFIXES.choose(&mut rng).copied().unwrap_or("North");
            let team = TEAM_NAMES.choose(&mut rng).copied().unwrap_or("Falcons");
            stmt.execute(params![
                id,
                sport,
                format!("{prefix} {team}"),
                rng.random_range(1..=12_i64),
                rng.random_range(0..=1_i64),
                random_start(&mut rng, now),
            ])?;
        }
    }
    tx.commit()
}

/// Start time uniformly between one day ago and two days ahead.
fn random_start(rng: &mut impl Rng, now: DateTime<Utc>) -> String {
    let earliest = now - Duration::days(1);
    let window_secs = Duration::days(3).num_seconds();
    format_timestamp(earliest + Duration::seconds(rng.random_range(0..=window_secs)))
}
