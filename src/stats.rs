use std::sync::atomic::{AtomicU64, Ordering};

/// Bytes freed by deletions since the process started. Never persisted, never decremented.
#[derive(Debug, Default)]
pub struct StatsTracker {
    total_saved_bytes: AtomicU64,
}

impl StatsTracker {
    /// Adds `bytes` to the running total and returns the new total.
    pub fn add_saved(&self, bytes: u64) -> u64 {
        self.total_saved_bytes
            .fetch_add(bytes, Ordering::AcqRel)
            .wrapping_add(bytes)
    }

    pub fn current_total(&self) -> u64 {
        self.total_saved_bytes.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(StatsTracker::default().current_total(), 0);
    }

    #[test]
    fn test_add_saved_accumulates() {
        let stats = StatsTracker::default();
        assert_eq!(stats.add_saved(100), 100);
        assert_eq!(stats.add_saved(0), 100);
        assert_eq!(stats.add_saved(250), 350);
        assert_eq!(stats.current_total(), 350);
    }

    #[test]
    fn test_add_saved_wraps_like_the_counter() {
        let stats = StatsTracker::default();
        stats.add_saved(u64::MAX);
        assert_eq!(stats.add_saved(2), 1);
        assert_eq!(stats.current_total(), 1);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let stats = Arc::new(StatsTracker::default());
        let threads: Vec<_> = (1..=8u64)
            .map(|n| {
                let stats = stats.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.add_saved(n);
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }

        assert_eq!(stats.current_total(), 1000 * (1..=8).sum::<u64>());
    }
}
