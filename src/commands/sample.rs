//! Dealing distribution command
//!
//! Deals many rounds in parallel and counts how often each group comes up.
//! Every group should appear in close to `4 / pool size` of all rounds.

use crate::game::{GROUPS_PER_ROUND, RepositoryError, WordSetRepository};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a sampling run
#[derive(Debug, Clone)]
pub struct SamplingResult {
    pub rounds: usize,
    /// Times each pool group was dealt, by pool index
    pub group_counts: Vec<usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl SamplingResult {
    #[must_use]
    pub fn expected_per_group(&self) -> f64 {
        if self.group_counts.is_empty() {
            return 0.0;
        }
        (self.rounds * GROUPS_PER_ROUND) as f64 / self.group_counts.len() as f64
    }

    /// Largest relative distance of any group's count from the expectation
    #[must_use]
    pub fn max_deviation(&self) -> f64 {
        let expected = self.expected_per_group();
        if expected == 0.0 {
            return 0.0;
        }
        self.group_counts
            .iter()
            .map(|&count| ((count as f64 - expected) / expected).abs())
            .fold(0.0, f64::max)
    }
}

/// Deal `rounds` rounds, round `i` using a generator seeded with `seed + i`
///
/// # Errors
///
/// Returns `RepositoryError::InsufficientGroups` if the pool cannot deal.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_sampling(
    repository: &WordSetRepository,
    rounds: usize,
    seed: u64,
) -> Result<SamplingResult, RepositoryError> {
    let pool_size = repository.len();
    if pool_size < GROUPS_PER_ROUND {
        return Err(RepositoryError::InsufficientGroups {
            available: pool_size,
        });
    }

    let pb = ProgressBar::new(rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("Dealing");

    let start = Instant::now();

    let group_counts = (0..rounds)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let dealt = repository
                .sample_round(&mut rng)
                .map(|round| round.pool_indices().to_vec());
            pb.inc(1);
            dealt
        })
        .try_fold(
            || vec![0_usize; pool_size],
            |mut counts, dealt| {
                for idx in dealt? {
                    counts[idx] += 1;
                }
                Ok(counts)
            },
        )
        .try_reduce(
            || vec![0_usize; pool_size],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                Ok(a)
            },
        )?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(SamplingResult {
        rounds,
        group_counts,
        duration,
        rounds_per_second: rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordGroup;

    fn pool(count: usize) -> WordSetRepository {
        WordSetRepository::new(
            (0..count)
                .map(|g| WordGroup::new((0..4).map(|w| format!("g{g}w{w}"))).unwrap())
                .collect(),
        )
    }

    #[test]
    fn counts_sum_to_four_per_round() {
        let result = run_sampling(&pool(8), 500, 1).unwrap();
        assert_eq!(result.rounds, 500);
        assert_eq!(result.group_counts.len(), 8);
        assert_eq!(result.group_counts.iter().sum::<usize>(), 2000);
    }

    #[test]
    fn distribution_is_roughly_uniform() {
        let result = run_sampling(&pool(8), 4000, 99).unwrap();
        assert!((result.expected_per_group() - 2000.0).abs() < f64::EPSILON);
        assert!(result.max_deviation() < 0.1, "{:?}", result.group_counts);
    }

    #[test]
    fn exact_pool_deals_every_group_every_round() {
        let result = run_sampling(&pool(4), 100, 5).unwrap();
        assert_eq!(result.group_counts, vec![100; 4]);
        assert!(result.max_deviation() < f64::EPSILON);
    }

    #[test]
    fn same_seed_same_counts() {
        let a = run_sampling(&pool(6), 300, 7).unwrap();
        let b = run_sampling(&pool(6), 300, 7).unwrap();
        assert_eq!(a.group_counts, b.group_counts);
    }

    #[test]
    fn small_pool_fails() {
        assert_eq!(
            run_sampling(&pool(3), 10, 0).unwrap_err(),
            RepositoryError::InsufficientGroups { available: 3 }
        );
    }
}
