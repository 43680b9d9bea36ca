#![cfg(feature = "server")]
//! Builds the dashboard snapshot from a directory of backup archives. The
//! backup engine names each archive after its creation time
//! (`YYYYMMDDHHMMSS.pkl`), so the directory listing alone yields the history.

use crate::shared::types::{
    BackupEntryDto, DailySizeDto, DashboardDto, DEFAULT_MAX_BYTES, WEEKDAY_LABELS,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Utc};
use std::env;
use std::path::Path;

const STEM_FORMAT: &str = "%Y%m%d%H%M%S";

pub fn backup_dir() -> Option<String> {
    env::var("INCREMENTIFY_BACKUP_DIR").ok()
}

pub fn max_bytes() -> u64 {
    env::var("INCREMENTIFY_MAX_BYTES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_BYTES)
}

fn parse_stem(stem: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(stem, STEM_FORMAT).ok()?;
    Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

/// One archive on disk.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub size_bytes: u64,
}

pub fn scan_archives(dir: &Path) -> Result<Vec<ArchiveEntry>> {
    let mut entries = Vec::new();
    let rd = std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))?;
    for entry in rd {
        let entry = entry?;
        let meta = entry.metadata()?;
        if !meta.is_file() {
            continue;
        }
        let path = entry.path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(created_at) = parse_stem(stem) else {
            continue;
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| stem.to_string());
        entries.push(ArchiveEntry {
            name,
            created_at,
            size_bytes: meta.len(),
        });
    }
    // Newest first, the order the history list renders in.
    entries.sort_by_key(|e| std::cmp::Reverse(e.created_at));
    Ok(entries)
}

/// Per-weekday byte totals over the trailing seven days, Mon..Sun with
/// missing days at zero.
pub fn daily_totals(entries: &[ArchiveEntry], now: DateTime<Utc>) -> Vec<DailySizeDto> {
    let mut totals = [0f64; 7];
    let since = now - Duration::days(7);
    for e in entries {
        if e.created_at > since && e.created_at <= now {
            let idx = e.created_at.weekday().num_days_from_monday() as usize;
            totals[idx] += e.size_bytes as f64;
        }
    }
    WEEKDAY_LABELS
        .iter()
        .zip(totals)
        .map(|(day, size_bytes)| DailySizeDto {
            day: (*day).into(),
            size_bytes,
        })
        .collect()
}

pub fn dashboard_from_entries(
    entries: Vec<ArchiveEntry>,
    max_bytes: u64,
    now: DateTime<Utc>,
) -> DashboardDto {
    let daily_sizes = daily_totals(&entries, now);
    let used_bytes: f64 = entries.iter().map(|e| e.size_bytes as f64).sum();
    let last_backup = entries.first().map(|e| e.created_at.to_rfc3339());
    let backups = entries
        .into_iter()
        .map(|e| BackupEntryDto {
            name: e.name,
            timestamp: e.created_at.to_rfc3339(),
            size_bytes: e.size_bytes,
        })
        .collect();
    DashboardDto {
        last_backup,
        used_bytes,
        max_bytes,
        backups,
        daily_sizes,
    }
}

/// Snapshot for `get_dashboard`. Falls back to the built-in placeholder when
/// no backup directory is configured or the scan fails; scan errors degrade,
/// they never reach the page.
pub fn load_dashboard() -> DashboardDto {
    let Some(dir) = backup_dir() else {
        return DashboardDto::placeholder();
    };
    match scan_archives(Path::new(&dir)) {
        Ok(entries) => dashboard_from_entries(entries, max_bytes(), Utc::now()),
        Err(e) => {
            eprintln!("[store] scan of {} failed: {e}", dir);
            DashboardDto::placeholder()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;

    fn write_archive(dir: &Path, stem: &str, len: usize) {
        fs::write(dir.join(format!("{stem}.pkl")), vec![0u8; len]).unwrap();
    }

    #[test]
    fn scan_keeps_only_timestamp_stems_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        write_archive(tmp.path(), "20240923100000", 100);
        write_archive(tmp.path(), "20240924080000", 200);
        fs::write(tmp.path().join("notes.txt"), b"ignored").unwrap();
        fs::create_dir(tmp.path().join("20240101000000")).unwrap();

        let entries = scan_archives(tmp.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "20240924080000.pkl");
        assert_eq!(entries[0].size_bytes, 200);
        assert_eq!(entries[1].name, "20240923100000.pkl");
    }

    #[test]
    fn daily_totals_cover_the_trailing_week() {
        // 2024-09-24 is a Tuesday.
        let now = Utc.with_ymd_and_hms(2024, 9, 24, 12, 0, 0).unwrap();
        let entries = vec![
            ArchiveEntry {
                name: "a".into(),
                created_at: Utc.with_ymd_and_hms(2024, 9, 24, 8, 0, 0).unwrap(),
                size_bytes: 300,
            },
            ArchiveEntry {
                name: "b".into(),
                created_at: Utc.with_ymd_and_hms(2024, 9, 23, 10, 0, 0).unwrap(),
                size_bytes: 100,
            },
            // Same weekday, but outside the window.
            ArchiveEntry {
                name: "old".into(),
                created_at: Utc.with_ymd_and_hms(2024, 9, 10, 8, 0, 0).unwrap(),
                size_bytes: 999,
            },
        ];
        let totals = daily_totals(&entries, now);
        assert_eq!(totals.len(), 7);
        assert_eq!(totals[0].day, "Mon");
        assert_eq!(totals[0].size_bytes, 100.0);
        assert_eq!(totals[1].day, "Tue");
        assert_eq!(totals[1].size_bytes, 300.0);
        assert!(totals[2..].iter().all(|p| p.size_bytes == 0.0));
    }

    #[test]
    fn dashboard_sums_usage_and_tracks_latest() {
        let now = Utc.with_ymd_and_hms(2024, 9, 24, 12, 0, 0).unwrap();
        let tmp = tempfile::tempdir().unwrap();
        write_archive(tmp.path(), "20240923100000", 100);
        write_archive(tmp.path(), "20240924080000", 200);
        let entries = scan_archives(tmp.path()).unwrap();

        let dash = dashboard_from_entries(entries, 1_000, now);
        assert_eq!(dash.used_bytes, 300.0);
        assert_eq!(dash.max_bytes, 1_000);
        assert_eq!(dash.backups.len(), 2);
        assert_eq!(
            dash.last_backup.as_deref(),
            Some("2024-09-24T08:00:00+00:00")
        );
    }

    #[test]
    fn missing_dir_is_an_error_the_loader_absorbs() {
        let err = scan_archives(Path::new("/nonexistent/backups")).is_err();
        assert!(err);
    }
}
