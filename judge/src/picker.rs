use common::constants::{MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::interfaces::picker::NumberPicker;

/// Uniform draw of distinct numbers in range, backed by any `Rng`.
pub struct RandomPicker<R: Rng>{
    rng: R,
}

impl<R: Rng> RandomPicker<R>{
    pub fn new(rng: R) -> Self{
        Self { rng }
    }
}

impl RandomPicker<StdRng>{
    pub fn from_seed(seed: u64) -> Self{
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self{
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> NumberPicker for RandomPicker<R>{
    fn pick(&mut self) -> Vec<i64> {
        let range = (MAX_NUMBER - MIN_NUMBER + 1) as usize;

        return index::sample(&mut self.rng, range, NUMBERS_PER_TICKET)
            .into_iter()
            .map(|idx| idx as i64 + MIN_NUMBER as i64)
            .collect();
    }
}

#[cfg(test)]
mod tests{
    use super::*;
    use crate::numbers::NumberSet;
    use crate::test_utils::generate_random_seed;

    #[test]
    fn test_draws_are_valid_sets(){
        let mut picker = RandomPicker::from_seed(generate_random_seed());
        for _ in 0..1000{
            let drawn = picker.pick();
            assert!(NumberSet::from_numbers(&drawn).is_ok(), "invalid draw {:?}", drawn);
        }
    }

    #[test]
    fn test_same_seed_same_draws(){
        let seed = generate_random_seed();
        let mut first = RandomPicker::from_seed(seed);
        let mut second = RandomPicker::from_seed(seed);

        for _ in 0..20{
            assert_eq!(first.pick(), second.pick());
        }
    }

    #[test]
    fn test_whole_range_is_reachable(){
        let mut picker = RandomPicker::from_seed(7);
        let mut seen = [false; 46];
        for _ in 0..2000{
            for number in picker.pick(){
                seen[number as usize] = true;
            }
        }

        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|hit| *hit));
    }
}
