//! Snowflake ID Generator
//!
//! Time-ordered 64-bit ids for every stored row.

use std::sync::Mutex;

use chrono::Utc;

/// Default epoch (2024-01-01T00:00:00.000Z)
pub const DEFAULT_EPOCH: u64 = 1_704_067_200_000;

const MACHINE_BITS: u64 = 10;
const SEQUENCE_BITS: u64 = 12;
const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;

#[derive(Default)]
struct Clock {
    last_timestamp: u64,
    sequence: u64,
}

/// Snowflake ID generator
pub struct SnowflakeGenerator {
    epoch: u64,
    machine_id: u64,
    clock: Mutex<Clock>,
}

impl SnowflakeGenerator {
    /// Create a new generator. `machine_id` is truncated to 10 bits.
    pub fn new(epoch: u64, machine_id: u16) -> Self {
        Self {
            epoch,
            machine_id: u64::from(machine_id) & ((1 << MACHINE_BITS) - 1),
            clock: Mutex::new(Clock::default()),
        }
    }

    /// Generate a new snowflake ID
    pub fn generate(&self) -> i64 {
        let mut clock = self.clock.lock().unwrap_or_else(|e| e.into_inner());
        let mut timestamp = self.current_timestamp().max(clock.last_timestamp);

        if timestamp == clock.last_timestamp {
            clock.sequence = (clock.sequence + 1) & SEQUENCE_MASK;
            if clock.sequence == 0 {
                // Sequence exhausted for this millisecond; borrow the next one.
                timestamp += 1;
            }
        } else {
            clock.sequence = 0;
        }
        clock.last_timestamp = timestamp;

        let id = ((timestamp - self.epoch) << (MACHINE_BITS + SEQUENCE_BITS))
            | (self.machine_id << SEQUENCE_BITS)
            | clock.sequence;

        id as i64
    }

    /// Millisecond timestamp embedded in an id produced by this generator.
    pub fn timestamp_of(&self, id: i64) -> u64 {
        ((id as u64) >> (MACHINE_BITS + SEQUENCE_BITS)) + self.epoch
    }

    fn current_timestamp(&self) -> u64 {
        (Utc::now().timestamp_millis().max(0) as u64).max(self.epoch)
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH, 1)
    }
}
