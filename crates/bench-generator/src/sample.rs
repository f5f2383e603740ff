//! Uniform sampling from non-empty ordered sequences.

use rand::Rng;

/// Error raised when sampling from an empty hierarchy level.
#[derive(Debug, thiserror::Error)]
#[error("cannot pick from empty {level} list")]
pub struct EmptyLevel {
    /// Name of the level that was empty
    pub level: &'static str,
}

/// Pick one entry uniformly at random from a non-empty slice.
///
/// Selection is with replacement across calls; collisions are expected
/// and resolved elsewhere (topic names carry a uniqueness suffix). The
/// RNG is injected so callers can use a seeded generator in tests.
pub fn pick_one<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    entries: &'a [T],
    level: &'static str,
) -> Result<&'a T, EmptyLevel> {
    if entries.is_empty() {
        return Err(EmptyLevel { level });
    }
    Ok(&entries[rng.gen_range(0..entries.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_pick_one_empty_fails() {
        let mut rng = StdRng::seed_from_u64(42);
        let entries: Vec<u32> = Vec::new();
        let err = pick_one(&mut rng, &entries, "tags").unwrap_err();
        assert_eq!(err.level, "tags");
    }

    #[test]
    fn test_pick_one_single_entry() {
        let mut rng = StdRng::seed_from_u64(42);
        let entries = ["only"];
        assert_eq!(*pick_one(&mut rng, &entries, "sites").unwrap(), "only");
    }

    #[test]
    fn test_pick_one_covers_all_entries() {
        let mut rng = StdRng::seed_from_u64(42);
        let entries = [0, 1, 2, 3, 4];

        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.insert(*pick_one(&mut rng, &entries, "areas").unwrap());
        }
        assert_eq!(seen.len(), entries.len());
    }
}
