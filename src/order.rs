use rand::Rng;

/// Shuffle `items` in place with the Fisher-Yates algorithm.
///
/// For `i` from the last index down to 1, swap `items[i]` with `items[j]`
/// where `j` is uniform in `[0, i]`. Every permutation is equally likely.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Random turn order for the given players, leaving the input untouched
pub fn turn_order<T: Clone, R: Rng + ?Sized>(players: &[T], rng: &mut R) -> Vec<T> {
    let mut order = players.to_vec();
    shuffle_in_place(&mut order, rng);
    order
}
