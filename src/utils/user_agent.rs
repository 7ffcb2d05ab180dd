//! User-Agent selection.

use rand::Rng;
use rand::seq::SliceRandom;

/// Pick one User-Agent uniformly from `pool`.
///
/// Returns `None` when the pool is empty.
pub fn pick_user_agent<'a, R: Rng + ?Sized>(pool: &'a [String], rng: &mut R) -> Option<&'a str> {
    pool.choose(rng).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn pool() -> Vec<String> {
        vec!["ua-a".to_string(), "ua-b".to_string(), "ua-c".to_string()]
    }

    #[test]
    fn empty_pool_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_user_agent(&[], &mut rng), None);
    }

    #[test]
    fn single_entry_pool_always_picks_it() {
        let pool = vec!["only".to_string()];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(pick_user_agent(&pool, &mut rng), Some("only"));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let pool = pool();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(pick_user_agent(&pool, &mut a), pick_user_agent(&pool, &mut b));
        }
    }

    #[test]
    fn every_entry_is_reachable() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<_> = (0..300)
            .filter_map(|_| pick_user_agent(&pool, &mut rng))
            .collect();
        assert_eq!(seen.len(), pool.len());
    }
}
