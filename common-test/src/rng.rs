use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn seeds() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

// A scope keeps the same seed for the whole test binary so failures can be replayed.
fn seed_for(scope: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = seeds().write()?;
    if let Some(&seed) = seeds.get(scope) {
        return Ok(seed);
    }
    let seed = match env::var(scope).map(|value| value.parse::<u64>()) {
        Ok(Ok(seed)) => seed,
        _ => random(),
    };
    println!("Using seed {seed} for {scope} (set {scope}={seed} to replay)");
    seeds.insert(scope, seed);
    Ok(seed)
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(scope: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(seed_for(scope)?))
}
