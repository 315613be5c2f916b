use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly picks one element using the thread-local generator.
/// Returns `None` for an empty slice.
pub fn random_from_array<T>(items: &[T]) -> Option<&T> {
    random_from_array_with(items, &mut rand::thread_rng())
}

/// Uniformly picks one element using `rng`
pub fn random_from_array_with<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}
