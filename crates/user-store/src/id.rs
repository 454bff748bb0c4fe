//! Record Id Generation
//!
//! Ids are millisecond timestamps, bumped forward so that two creates in the
//! same millisecond (or a clock step backwards) never repeat an id.

use chrono::Utc;

use crate::error::{StoreError, StoreResult};

#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id from the wall clock
    pub fn next_id(&mut self) -> StoreResult<u64> {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    /// Next id given the current time in milliseconds
    ///
    /// Fails once an id of `u64::MAX` has been handed out or observed.
    pub fn next_at(&mut self, now_ms: u64) -> StoreResult<u64> {
        let floor = self.last.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        let id = now_ms.max(floor);
        self.last = id;
        Ok(id)
    }

    /// Never hand out an id at or below `id` from now on
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let mut ids = IdGenerator::new();

        assert_eq!(ids.next_at(1_700_000_000_000).unwrap(), 1_700_000_000_000);
        assert_eq!(ids.next_at(1_700_000_000_000).unwrap(), 1_700_000_000_001);
        assert_eq!(ids.next_at(1_700_000_000_000).unwrap(), 1_700_000_000_002);
    }

    #[test]
    fn test_clock_going_backwards_stays_monotonic() {
        let mut ids = IdGenerator::new();
        ids.next_at(2_000).unwrap();

        assert_eq!(ids.next_at(1_000).unwrap(), 2_001);
    }

    #[test]
    fn test_observe_raises_floor() {
        let mut ids = IdGenerator::new();
        ids.observe(5_000);

        assert_eq!(ids.next_at(10).unwrap(), 5_001);
        assert_eq!(ids.next_at(9_000).unwrap(), 9_000);
    }

    #[test]
    fn test_observing_max_id_exhausts_ids() {
        let mut ids = IdGenerator::new();
        ids.observe(u64::MAX);

        assert!(matches!(ids.next_at(10), Err(StoreError::IdsExhausted)));
        assert!(matches!(ids.next_at(u64::MAX), Err(StoreError::IdsExhausted)));
    }

    #[test]
    fn test_wall_clock_ids_are_unique() {
        let mut ids = IdGenerator::new();
        let generated: Vec<u64> = (0..100).map(|_| ids.next_id().unwrap()).collect();

        assert!(generated.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
