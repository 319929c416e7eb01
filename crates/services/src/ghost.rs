//! Randomness for the "catch the ghost" game.

use rand::Rng;

use iam_core::runners::authorization::GHOST_MAX_STEP;

/// Uniform offset in `[-GHOST_MAX_STEP, GHOST_MAX_STEP)`.
#[must_use]
pub fn random_offset() -> f64 {
    let unit: f64 = rand::rng().random();
    (unit - 0.5) * 2.0 * GHOST_MAX_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stay_within_one_step() {
        for _ in 0..1_000 {
            let offset = random_offset();
            assert!((-GHOST_MAX_STEP..GHOST_MAX_STEP).contains(&offset));
        }
    }
}
