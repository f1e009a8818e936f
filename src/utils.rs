use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A generator seeded from the wall clock, so consecutive runs differ
pub fn time_seeded_rng() -> StdRng {
    let now = Utc::now();
    let seed = now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp_micros());
    StdRng::seed_from_u64(seed as u64)
}
