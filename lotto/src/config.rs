use std::env;

use judge::RandomPicker;
use rand::rngs::StdRng;

pub const SEED_VAR: &str = "LOTTO_SEED";
pub const EVENTS_VAR: &str = "LOTTO_EVENTS";

/// Runtime settings read from the environment. Unparseable values fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config{
    /// Fixed seed for reproducible ticket draws.
    pub seed: Option<u64>,
    pub emit_events: bool,
}

impl Config{
    pub fn from_env() -> Self{
        Self::from_vars(env::var(SEED_VAR).ok(), env::var(EVENTS_VAR).ok())
    }

    pub fn from_vars(seed: Option<String>, events: Option<String>) -> Self{
        let seed = seed.and_then(|raw| raw.trim().parse::<u64>().ok());
        let emit_events = match events.as_deref().map(str::trim) {
            Some("1") => true,
            Some(value) => value.eq_ignore_ascii_case("true"),
            None => false,
        };

        Self { seed, emit_events }
    }

    pub fn picker(&self) -> RandomPicker<StdRng>{
        match self.seed {
            Some(seed) => RandomPicker::from_seed(seed),
            None => RandomPicker::from_entropy(),
        }
    }
}
