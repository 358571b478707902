mod rng;
mod transcript;

pub use rng::{get_seeded_rng, get_seeded_rng_from_scope, DEFAULT_TEST_SEED_ENV};
pub use transcript::Transcript;
