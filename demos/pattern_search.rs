//! Hidden Pattern Search.
//!
//! Generates a long random series, hides a random pattern in it, and finds
//! it again with the partitioned SAD search. Then times sequential against
//! parallel searches over several repetitions and prints the mean wall-clock
//! time of each.
//!
//! Knobs (environment variables, all optional):
//! - `SADSCAN_SERIES_LEN` (default 5000000)
//! - `SADSCAN_PATTERN_LEN` (default 625)
//! - `SADSCAN_WORKERS` (default 8)
//! - `SADSCAN_REPETITIONS` (default 5)
//! - `SADSCAN_HIDDEN_AT` (default: series length - pattern length)
//! - `SADSCAN_SEED` (default 42)
//!
//! Run with: cargo run --release --example pattern_search

use std::error::Error;
use std::str::FromStr;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sadscan_rs::{SadEngine, SearchConfig};
use tracing_subscriber::EnvFilter;

/// Harness parameters. Owned by the driver, passed explicitly to the engine.
#[derive(Debug, Clone)]
struct HarnessConfig {
    series_len: usize,
    pattern_len: usize,
    workers: usize,
    repetitions: usize,
    hidden_at: usize,
    seed: u64,
}

fn env_or<T: FromStr>(name: &str, default: T) -> Result<T, Box<dyn Error>>
where
    T::Err: Error + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("{name}={raw:?}: {e}").into()),
        Err(_) => Ok(default),
    }
}

impl HarnessConfig {
    fn from_env() -> Result<Self, Box<dyn Error>> {
        let series_len = env_or("SADSCAN_SERIES_LEN", 5_000_000)?;
        let pattern_len = env_or("SADSCAN_PATTERN_LEN", 625)?;
        let hidden_at = env_or("SADSCAN_HIDDEN_AT", usize::saturating_sub(series_len, pattern_len))?;
        let config = Self {
            series_len,
            pattern_len,
            workers: env_or("SADSCAN_WORKERS", 8)?,
            repetitions: env_or("SADSCAN_REPETITIONS", 5)?,
            hidden_at,
            seed: env_or("SADSCAN_SEED", 42)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Box<dyn Error>> {
        let overruns = self
            .hidden_at
            .checked_add(self.pattern_len)
            .map_or(true, |end| end > self.series_len);
        if self.pattern_len == 0 || overruns {
            return Err(format!(
                "pattern of length {} does not fit at {} in a series of length {}",
                self.pattern_len, self.hidden_at, self.series_len
            )
            .into());
        }
        if self.repetitions == 0 {
            return Err("SADSCAN_REPETITIONS must be >= 1".into());
        }
        Ok(())
    }
}

/// Random series and pattern, with the pattern copied in at `hidden_at`.
fn generate_data(config: &HarnessConfig) -> (Vec<f32>, Vec<f32>) {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut series: Vec<f32> = (0..config.series_len).map(|_| rng.gen::<f32>()).collect();
    let pattern: Vec<f32> = (0..config.pattern_len).map(|_| rng.gen::<f32>()).collect();
    series[config.hidden_at..config.hidden_at + config.pattern_len].copy_from_slice(&pattern);
    (series, pattern)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = HarnessConfig::from_env()?;
    let (series, pattern) = generate_data(&config);

    println!("Hidden Pattern Search");
    println!("=====================");
    println!("Series length: {}", config.series_len);
    println!("Pattern length: {}", config.pattern_len);
    println!("Pattern hidden at: {}\n", config.hidden_at);

    let engine = SadEngine::with_thread_pool(SearchConfig::partitioned(config.workers))?;
    let found = engine.search(&series, &pattern)?;

    println!("Position found: {}", found.offset_or_sentinel());
    println!("Distance: {:.4}", found.distance);

    if let Some(offset) = found.offset {
        let shown = config.pattern_len.min(5);
        println!("\nVisual check (first {shown} samples):");
        println!("  Pattern:  {:?}", &pattern[..shown]);
        println!("  Found:    {:?}", &series[offset..offset + shown]);
    }

    println!(
        "\nTiming {} repetitions with {} workers...",
        config.repetitions, config.workers
    );
    let mut total_seq = 0.0_f64;
    let mut total_par = 0.0_f64;
    for rep in 1..=config.repetitions {
        println!("  repetition {rep} of {}", config.repetitions);

        let start = Instant::now();
        engine.search_sequential(&series, &pattern)?;
        total_seq += start.elapsed().as_secs_f64();

        let start = Instant::now();
        engine.search(&series, &pattern)?;
        total_par += start.elapsed().as_secs_f64();
    }

    let reps = config.repetitions as f64;
    println!("\nResults (arithmetic mean)");
    println!("  Sequential:             {:.4} s", total_seq / reps);
    println!(
        "  Parallel ({} workers):  {:.4} s",
        config.workers,
        total_par / reps
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> HarnessConfig {
        HarnessConfig {
            series_len: 1000,
            pattern_len: 10,
            workers: 4,
            repetitions: 1,
            hidden_at: 500,
            seed: 1,
        }
    }

    #[test]
    fn test_validate_accepts_fitting_pattern() {
        assert!(small_config().validate().is_ok());
        let at_end = HarnessConfig {
            hidden_at: 990,
            ..small_config()
        };
        assert!(at_end.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overrun() {
        let past_end = HarnessConfig {
            hidden_at: 991,
            ..small_config()
        };
        assert!(past_end.validate().is_err());
    }

    #[test]
    fn test_validate_hidden_at_near_usize_max_is_an_error() {
        let huge = HarnessConfig {
            hidden_at: usize::MAX - 3,
            ..small_config()
        };
        let err = huge.validate().unwrap_err();
        assert!(err.to_string().contains("does not fit"), "{err}");
    }

    #[test]
    fn test_generate_data_hides_pattern() {
        let config = small_config();
        let (series, pattern) = generate_data(&config);
        assert_eq!(series.len(), 1000);
        assert_eq!(&series[500..510], &pattern[..]);
        let best = sadscan_rs::search_sequential(&series, &pattern).unwrap();
        assert_eq!(best.offset, Some(500));
    }
}
