use rand::seq::SliceRandom;
use rand::Rng;

use crate::search::SearchResult;

/// Pick one of `results` uniformly at random using `rng`.
/// Returns `None` only for an empty slice.
pub fn select<'a, R>(results: &'a [SearchResult], rng: &mut R) -> Option<&'a SearchResult>
where
    R: Rng + ?Sized,
{
    results.choose(rng)
}
