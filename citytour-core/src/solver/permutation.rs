//! Lexicographic permutation stepping.

/// Rearrange `items` into the next lexicographically greater permutation.
///
/// Returns `false` and leaves `items` as the lowest permutation once the
/// sequence was already the greatest, so a sorted slice stepped until `false`
/// visits every permutation exactly once.
pub(super) fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let Some(pivot) = items
        .windows(2)
        .rposition(|pair| matches!(pair, [a, b] if a < b))
    else {
        items.reverse();
        return false;
    };
    let Some(pivot_item) = items.get(pivot) else {
        return false;
    };
    let Some(successor) = items.iter().rposition(|item| item > pivot_item) else {
        return false;
    };
    items.swap(pivot, successor);
    if let Some(suffix) = items.get_mut(pivot + 1..) {
        suffix.reverse();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn all_permutations(mut items: Vec<u8>) -> Vec<Vec<u8>> {
        let mut seen = vec![items.clone()];
        while next_permutation(&mut items) {
            seen.push(items.clone());
        }
        seen
    }

    #[rstest]
    fn visits_permutations_in_lexicographic_order() {
        let seen = all_permutations(vec![1, 2, 3]);
        assert_eq!(
            seen,
            [
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(4, 24)]
    #[case(6, 720)]
    fn yields_factorial_count(#[case] len: u8, #[case] expected: usize) {
        let seen = all_permutations((0..len).collect());
        assert_eq!(seen.len(), expected);
    }

    #[rstest]
    fn wraps_to_lowest_after_last() {
        let mut items = [3, 2, 1];
        assert!(!next_permutation(&mut items));
        assert_eq!(items, [1, 2, 3]);
    }

    #[rstest]
    fn steps_past_repeated_items() {
        let seen = all_permutations(vec![1, 1, 2]);
        assert_eq!(seen, [vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);
    }
}
