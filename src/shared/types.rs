use serde::{Deserialize, Serialize};

/// Backend reachability as shown in the "System Status" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Health {
    #[default]
    Unknown,
    Healthy,
    Unhealthy,
}

impl Health {
    pub fn label(&self) -> &'static str {
        match self {
            Health::Unknown => "Checking...",
            Health::Healthy => "Healthy",
            Health::Unhealthy => "Unhealthy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupEntryDto {
    pub name: String,
    /// RFC 3339
    pub timestamp: String,
    #[serde(rename = "sizeBytes")]
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySizeDto {
    /// Weekday label, Mon..Sun
    pub day: String,
    #[serde(rename = "sizeBytes")]
    pub size_bytes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDto {
    #[serde(rename = "lastBackup")]
    pub last_backup: Option<String>,
    #[serde(rename = "usedBytes")]
    pub used_bytes: f64,
    #[serde(rename = "maxBytes")]
    pub max_bytes: u64,
    pub backups: Vec<BackupEntryDto>,
    #[serde(rename = "dailySizes")]
    pub daily_sizes: Vec<DailySizeDto>,
}

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// The placeholder max storage of the original mock (100 MB).
pub const DEFAULT_MAX_BYTES: u64 = 100_000_000;

impl DashboardDto {
    /// The hardcoded snapshot shown until a real backup directory is wired up.
    pub fn placeholder() -> Self {
        DashboardDto {
            last_backup: None,
            used_bytes: 0.0,
            max_bytes: DEFAULT_MAX_BYTES,
            backups: vec![
                BackupEntryDto {
                    name: "Backup-01".into(),
                    timestamp: "2024-09-24T08:00:00Z".into(),
                    size_bytes: 0,
                },
                BackupEntryDto {
                    name: "Backup-02".into(),
                    timestamp: "2024-09-23T10:00:00Z".into(),
                    size_bytes: 0,
                },
            ],
            daily_sizes: WEEKDAY_LABELS
                .iter()
                .map(|d| DailySizeDto {
                    day: (*d).into(),
                    size_bytes: 0.0,
                })
                .collect(),
        }
    }
}

/// Everything the page renders. Treated as a value: transitions return a new
/// snapshot instead of mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub health: Health,
    pub dashboard: DashboardDto,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            health: Health::Unknown,
            dashboard: DashboardDto::placeholder(),
        }
    }

    pub fn with_health(&self, health: Health) -> Self {
        ViewState {
            health,
            ..self.clone()
        }
    }

    pub fn with_dashboard(&self, dashboard: DashboardDto) -> Self {
        ViewState {
            dashboard,
            ..self.clone()
        }
    }

    /// Credits one simulated tick worth of storage.
    pub fn apply_backup_tick(&self) -> Self {
        let mut next = self.clone();
        next.dashboard.used_bytes += crate::shared::sim::BYTES_PER_TICK;
        next
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sim::BYTES_PER_TICK;

    #[test]
    fn fresh_view_state_has_unknown_health() {
        let v = ViewState::new();
        assert_eq!(v.health, Health::Unknown);
        assert_eq!(v.dashboard.used_bytes, 0.0);
    }

    #[test]
    fn failed_refresh_flips_only_health() {
        let v = ViewState::new();
        let after = v.with_health(Health::Unhealthy);
        assert_eq!(after.health, Health::Unhealthy);
        assert_eq!(after.dashboard, v.dashboard);
    }

    #[test]
    fn backup_tick_credits_fixed_amount() {
        let v = ViewState::new();
        let after = v.apply_backup_tick();
        assert!((after.dashboard.used_bytes - BYTES_PER_TICK).abs() < 1e-6);
        // Everything else is untouched.
        assert_eq!(after.health, v.health);
        assert_eq!(after.dashboard.backups, v.dashboard.backups);
    }

    #[test]
    fn placeholder_has_a_full_week_of_zeroes() {
        let d = DashboardDto::placeholder();
        assert_eq!(d.daily_sizes.len(), 7);
        assert!(d.daily_sizes.iter().all(|p| p.size_bytes == 0.0));
        assert_eq!(d.daily_sizes[0].day, "Mon");
        assert_eq!(d.daily_sizes[6].day, "Sun");
    }
}
