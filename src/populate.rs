//! Random initial population.

use crate::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Picks `(row, col)` seeds for a `rows x cols` grid, each cell with
/// probability `fill_rate`.
///
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn random_seeds(
    rows: usize,
    cols: usize,
    seed: Option<u64>,
    fill_rate: f64,
) -> Result<Vec<(usize, usize)>> {
    if !(0.0..=1.0).contains(&fill_rate) {
        return Err(Error::InvalidFillRate(fill_rate));
    }
    let mut rng = if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_entropy()
    };
    let mut seeds = vec![];
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(fill_rate) {
                seeds.push((row, col));
            }
        }
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_cells() {
        let a = random_seeds(16, 16, Some(42), 0.3).unwrap();
        let b = random_seeds(16, 16, Some(42), 0.3).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|&(row, col)| row < 16 && col < 16));
    }

    #[test]
    fn test_extreme_fill_rates() {
        assert!(random_seeds(4, 5, None, 0.0).unwrap().is_empty());
        assert_eq!(random_seeds(4, 5, None, 1.0).unwrap().len(), 20);
    }

    #[test]
    fn test_rejects_bad_fill_rate() {
        assert_eq!(
            random_seeds(4, 4, None, 1.5),
            Err(Error::InvalidFillRate(1.5))
        );
        assert!(random_seeds(4, 4, None, f64::NAN).is_err());
    }
}
