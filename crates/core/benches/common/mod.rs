use std::env;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchTier {
    Quick,
    Full,
}

pub fn bench_tier() -> BenchTier {
    match env::var("MARKSCOPE_BENCH_TIER").as_deref() {
        Ok("full") => BenchTier::Full,
        _ => BenchTier::Quick,
    }
}

pub fn bench_seed() -> u64 {
    env::var("MARKSCOPE_BENCH_SEED")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0xC0FFEE)
}

pub fn configure_group<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, tier: BenchTier) {
    let (sample_size, measurement) = match tier {
        BenchTier::Quick => (20, Duration::from_secs(3)),
        BenchTier::Full => (30, Duration::from_secs(5)),
    };
    group.sample_size(sample_size);
    group.measurement_time(measurement);
}

#[derive(Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    pub fn gen_f64(&mut self, min: f64, max: f64) -> f64 {
        let n = self.next_u64() as f64 / u64::MAX as f64;
        min + (max - min) * n
    }

    pub fn gen_below(&mut self, n: u64) -> u64 {
        self.next_u64() % n.max(1)
    }
}

/// Synthetic dump lines: `n` TVP marks spread over `layers` layers.
pub fn gen_lines(seed: u64, n: usize, layers: u64) -> Vec<String> {
    let mut rng = XorShift64::new(seed);
    (0..n)
        .map(|i| {
            let x = rng.gen_f64(0.0, 10_000.0);
            let y = rng.gen_f64(0.0, 10_000.0);
            let w = rng.gen_f64(1.0, 20.0);
            let h = rng.gen_f64(1.0, 20.0);
            let layer = rng.gen_below(layers) + 1;
            format!(
                "MARK M{i}_MC_TVP.TVPAY{layer}_NS r0 {:.3} {:.3} {x:.3} {y:.3}",
                x + w,
                y + h
            )
        })
        .collect()
}
