use soroban_sdk::Env;

use crate::storage_types::SECONDS_PER_DAY;

/// Convert days to seconds
pub fn days_to_seconds(days: u32) -> u64 {
    days as u64 * SECONDS_PER_DAY
}

/// Check if timestamp is in the future
pub fn is_future(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() < timestamp
}
