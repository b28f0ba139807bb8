//! Random sampling without replacement.

use rand::Rng;
use rand::seq::SliceRandom;

/// Picks `n` distinct positions from `items` in random order.
///
/// Returns `min(n, items.len())` elements; `n == 0` yields an empty vector and
/// an oversized `n` yields the whole list shuffled. `items` itself is left in
/// its original order.
///
/// ```
/// use gameutil_rs::sampling::pick_from_list;
///
/// let fruits = ["Banana", "Orange", "Durian", "Pineapple", "Mango", "Laici", "Watermelon"];
/// let picked = pick_from_list(2, &fruits);
/// assert_eq!(picked.len(), 2);
/// assert!(picked.iter().all(|f| fruits.contains(f)));
/// ```
pub fn pick_from_list<T: Clone>(n: usize, items: &[T]) -> Vec<T> {
    pick_from_list_with_rng(n, items, &mut rand::thread_rng())
}

/// Same as [`pick_from_list`] but draws from the supplied RNG, so a seeded
/// generator gives reproducible picks.
pub fn pick_from_list_with_rng<T, R>(n: usize, items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let amount = n.min(items.len());
    tracing::debug!(requested = n, available = items.len(), amount, "picking from list");

    // choose_multiple does not guarantee a random order of the picked elements
    let mut picked: Vec<T> = items.choose_multiple(rng, amount).cloned().collect();
    picked.shuffle(rng);
    picked
}
