//! The simulated backup run: a counter driven from 0 to 100 by a single
//! re-armed timer, crediting a fixed amount of storage per tick.

/// Milliseconds between ticks.
pub const TICK_MS: u32 = 25;

/// Storage credited to `used_bytes` per tick.
pub const BYTES_PER_TICK: f64 = 238_329.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackupProgress {
    /// 0..=100
    pub percent: u8,
    pub running: bool,
}

impl BackupProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a run: resets the counter regardless of where the last run
    /// ended. Rejected while a run is in flight so that nothing can re-enter
    /// the machine, UI guard or not.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.percent = 0;
        self.running = true;
        true
    }

    /// Advances one tick. Returns whether a tick applied; the caller credits
    /// storage exactly when it does. Reaching 100 halts the run.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.percent += 1;
        if self.percent >= 100 {
            self.percent = 100;
            self.running = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_resets_and_runs() {
        let mut p = BackupProgress {
            percent: 100,
            running: false,
        };
        assert!(p.start());
        assert_eq!(p.percent, 0);
        assert!(p.running);
    }

    #[test]
    fn start_is_rejected_while_running() {
        let mut p = BackupProgress::new();
        assert!(p.start());
        for _ in 0..42 {
            p.tick();
        }
        assert!(!p.start());
        // The in-flight run is untouched.
        assert_eq!(p.percent, 42);
        assert!(p.running);
    }

    #[test]
    fn each_tick_advances_by_one() {
        let mut p = BackupProgress::new();
        p.start();
        for n in 1..=99u8 {
            assert!(p.tick());
            assert_eq!(p.percent, n);
            assert!(p.running);
        }
    }

    #[test]
    fn reaching_one_hundred_halts() {
        let mut p = BackupProgress::new();
        p.start();
        for _ in 0..100 {
            assert!(p.tick());
        }
        assert_eq!(p.percent, 100);
        assert!(!p.running);
        // Ticks after completion are rejected.
        assert!(!p.tick());
        assert_eq!(p.percent, 100);
    }

    #[test]
    fn full_run_credits_exactly_one_hundred_ticks() {
        use crate::shared::types::ViewState;

        let mut p = BackupProgress::new();
        let mut view = ViewState::new();
        let before = view.dashboard.used_bytes;
        p.start();
        let mut ticks = 0u32;
        while p.tick() {
            view = view.apply_backup_tick();
            ticks += 1;
        }
        assert_eq!(ticks, 100);
        let expected = before + 100.0 * BYTES_PER_TICK;
        assert!((view.dashboard.used_bytes - expected).abs() < 1e-3);
    }
}
