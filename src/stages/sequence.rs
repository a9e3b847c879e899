//! Strict sequence stages.
//!
//! Every stage consumes a `Vec` subject and returns a new `Vec`, so results
//! can be compared and stored directly without collecting an iterator.

use pipewise_derive::pipeable;

/// Applies `function` to every item.
///
/// # Examples
///
/// ```rust
/// use pipewise::compose::piped;
/// use pipewise::stages::sequence;
///
/// let squares = piped(vec![1, 2, 3]) >> sequence::map(|x: i32| x * x);
/// assert_eq!(squares.into_inner(), vec![1, 4, 9]);
/// ```
#[pipeable]
pub fn map<T, U, F>(function: F, items: Vec<T>) -> Vec<U>
where
    F: Fn(T) -> U,
{
    items.into_iter().map(&function).collect()
}

/// Keeps the items for which `predicate` holds.
#[pipeable]
pub fn filter<T, P>(predicate: P, items: Vec<T>) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).collect()
}

/// Applies a binary `function` to every pair.
#[pipeable]
pub fn star_map<A, B, R, F>(function: F, pairs: Vec<(A, B)>) -> Vec<R>
where
    F: Fn(A, B) -> R,
{
    pairs
        .into_iter()
        .map(|(first, second)| function(first, second))
        .collect()
}

/// Pairs each item with the item of `other` at the same index, subject
/// first: `(item, other)`. Stops at the shorter sequence.
///
/// # Examples
///
/// ```rust
/// use pipewise::compose::piped;
/// use pipewise::stages::sequence::{zip_onto, zip_with};
///
/// let letters = vec!['a', 'b', 'c'];
/// assert_eq!(
///     (piped(vec![1, 2]) >> zip_with(letters.clone())).into_inner(),
///     vec![(1, 'a'), (2, 'b')]
/// );
/// assert_eq!(
///     (piped(vec![1, 2]) >> zip_onto(letters)).into_inner(),
///     vec![('a', 1), ('b', 2)]
/// );
/// ```
#[pipeable]
pub fn zip_with<T, U>(other: Vec<U>, items: Vec<T>) -> Vec<(T, U)>
where
    U: Clone,
{
    items.into_iter().zip(other.iter().cloned()).collect()
}

/// Pairs each item of `other` with the subject item at the same index,
/// `other` first: `(other, item)`. Stops at the shorter sequence.
#[pipeable]
pub fn zip_onto<T, U>(other: Vec<U>, items: Vec<T>) -> Vec<(U, T)>
where
    U: Clone,
{
    other.iter().cloned().zip(items).collect()
}

/// Keeps the items from index `from` up to, but excluding, `up_to`.
///
/// Negative bounds count back from the end, and bounds past either end
/// are clamped, so the stage never panics. A range that ends before it
/// starts yields an empty `Vec`.
///
/// # Examples
///
/// ```rust
/// use pipewise::compose::piped;
/// use pipewise::stages::sequence::slice;
///
/// let letters = vec!['a', 'b', 'c', 'd', 'e'];
/// assert_eq!((piped(letters.clone()) >> slice(1, 3)).into_inner(), vec!['b', 'c']);
/// assert_eq!((piped(letters.clone()) >> slice(-2, 99)).into_inner(), vec!['d', 'e']);
/// assert_eq!((piped(letters) >> slice(4, 1)).into_inner(), Vec::<char>::new());
/// ```
#[pipeable]
pub fn slice<T>(from: isize, up_to: isize, items: Vec<T>) -> Vec<T> {
    let start = resolve_bound(from, items.len());
    let end = resolve_bound(up_to, items.len());
    items
        .into_iter()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

fn resolve_bound(index: isize, length: usize) -> usize {
    if index < 0 {
        length.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(length)
    }
}

/// Concatenates the parts with `separator` between each pair.
#[pipeable]
pub fn join<P, S>(separator: P, parts: Vec<S>) -> String
where
    P: AsRef<str>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            joined.push_str(separator.as_ref());
        }
        joined.push_str(part.as_ref());
    }
    joined
}

/// Pairs every item with its index.
pub fn enumerate<T>(items: Vec<T>) -> Vec<(usize, T)> {
    items.into_iter().enumerate().collect()
}

/// Sorts the items in ascending order.
pub fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

/// Collects any iterable into a `Vec`.
pub fn to_vec<I: IntoIterator>(items: I) -> Vec<I::Item> {
    items.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::piped;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1, 2, 3], vec![1, 3])]
    #[case(vec![2, 4, 6], vec![])]
    #[case(vec![1, 3, 5], vec![1, 3, 5])]
    fn test_filter_odd(#[case] items: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!((piped(items) >> filter(|x: &i32| x % 2 == 1)).into_inner(), expected);
    }

    #[rstest]
    fn test_map_on_empty() {
        let squares = map(|x: i32| x * x);
        assert_eq!(squares(Vec::new()), Vec::<i32>::new());
        assert_eq!(squares(vec![1, 2, 3]), vec![1, 4, 9]);
    }

    #[rstest]
    fn test_star_map_adds_pairs() {
        let pairs = vec![(0, 2), (1, 3), (2, 4), (3, 5), (4, 6)];
        let sums = piped(pairs) >> star_map(|a: i32, b: i32| a + b);
        assert_eq!(sums.into_inner(), vec![2, 4, 6, 8, 10]);
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4], vec![5, 6, 7], vec![(5, 1), (6, 2), (7, 3)])]
    #[case(vec![1, 2, 3, 4], vec![], vec![])]
    #[case(vec![], vec![5, 6, 7], vec![])]
    fn test_zip_with_puts_subject_first(
        #[case] other: Vec<i32>,
        #[case] items: Vec<i32>,
        #[case] expected: Vec<(i32, i32)>,
    ) {
        assert_eq!((piped(items) >> zip_with(other)).into_inner(), expected);
    }

    #[rstest]
    fn test_zip_onto_puts_other_first() {
        let zipped = piped(vec![5, 6, 7]) >> zip_onto(vec![1, 2, 3, 4]);
        assert_eq!(zipped.into_inner(), vec![(1, 5), (2, 6), (3, 7)]);
    }

    #[rstest]
    #[case(0, 3, vec![10, 20, 30])]
    #[case(1, -1, vec![20, 30])]
    #[case(-2, 5, vec![30, 40])]
    #[case(-10, 2, vec![10, 20])]
    #[case(2, 100, vec![30, 40])]
    #[case(3, 1, vec![])]
    #[case(7, 9, vec![])]
    #[case(isize::MIN, isize::MAX, vec![10, 20, 30, 40])]
    fn test_slice_clamps_bounds(
        #[case] from: isize,
        #[case] up_to: isize,
        #[case] expected: Vec<i32>,
    ) {
        let items = vec![10, 20, 30, 40];
        assert_eq!((piped(items) >> slice(from, up_to)).into_inner(), expected);
    }

    #[rstest]
    fn test_slice_of_empty_sequence() {
        assert_eq!(slice(0, 2)(Vec::<u8>::new()), Vec::<u8>::new());
    }

    #[rstest]
    #[case(vec![], "")]
    #[case(vec!["solo"], "solo")]
    #[case(vec!["a", "b", "c"], "a, b, c")]
    fn test_join(#[case] parts: Vec<&str>, #[case] expected: &str) {
        assert_eq!((piped(parts) >> join(", ")).into_inner(), expected);
    }

    #[rstest]
    fn test_join_owned_parts() {
        let parts = vec![String::from("x"), String::from("y")];
        assert_eq!(join(String::from("/"))(parts), "x/y");
    }

    #[rstest]
    fn test_unary_stages() {
        assert_eq!(
            (piped(vec!['x', 'y']) >> enumerate).into_inner(),
            vec![(0, 'x'), (1, 'y')]
        );
        assert_eq!((piped(vec![3, 2, 1, 5, 4]) >> sorted).into_inner(), vec![1, 2, 3, 4, 5]);
        assert_eq!((piped(1..4) >> to_vec).into_inner(), vec![1, 2, 3]);
    }
}
