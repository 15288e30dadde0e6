use rand::Rng;
use rand::seq::SliceRandom;

use super::Target;

/// Picks `count` distinct targets uniformly at random.
///
/// `None`, or a count at least as large as the list, yields every target.
/// Entries are shared, not copied: each returned [`Target`] points at the same
/// string as the input.
pub fn select_targets<R>(targets: &[Target], count: Option<usize>, rng: &mut R) -> Vec<Target>
where
    R: Rng + ?Sized,
{
    match count {
        Some(count) if count < targets.len() => {
            targets.choose_multiple(rng, count).cloned().collect()
        }
        Some(_) | None => targets.to_vec(),
    }
}
