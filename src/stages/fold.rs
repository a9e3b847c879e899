//! Folds and unfolds.
//!
//! Folds collapse a sequence into one value; unfolds grow a sequence out of
//! a seed. The `_left` variants put each new component in front of the
//! ones produced before it, the `_right` variants append it.

use std::collections::VecDeque;

use pipewise_derive::pipeable;

/// Folds the items from the left, starting from `init`.
///
/// # Examples
///
/// ```rust
/// use pipewise::compose::piped;
/// use pipewise::stages::fold::fold;
///
/// let total = piped(vec![1, 2, 3, 4]) >> fold(|sum: i32, item: i32| sum + item, 10);
/// assert_eq!(total.into_inner(), 20);
/// ```
#[pipeable]
pub fn fold<T, A, F>(update: F, init: A, items: Vec<T>) -> A
where
    F: Fn(A, T) -> A,
    A: Clone,
{
    items.into_iter().fold(init.clone(), &update)
}

/// Folds the items from the left, seeding the accumulator with the first
/// item. An empty sequence yields `None`.
#[pipeable]
pub fn reduce<T, F>(update: F, items: Vec<T>) -> Option<T>
where
    F: Fn(T, T) -> T,
{
    items.into_iter().reduce(&update)
}

/// Unfolds `state` until `is_empty` holds, prepending every component.
///
/// `step` returns the next component together with the next state.
///
/// # Examples
///
/// ```rust
/// use pipewise::compose::piped;
/// use pipewise::stages::fold::{unfold_left, unfold_right};
///
/// let countdown = |n: u32| (n, n - 1);
/// let left = piped(3_u32) >> unfold_left(|n: &u32| *n == 0, countdown);
/// let right = piped(3_u32) >> unfold_right(|n: &u32| *n == 0, countdown);
///
/// assert_eq!(left.into_inner(), vec![1, 2, 3]);
/// assert_eq!(right.into_inner(), vec![3, 2, 1]);
/// ```
#[pipeable]
pub fn unfold_left<S, T, E, F>(is_empty: E, step: F, mut state: S) -> Vec<T>
where
    E: Fn(&S) -> bool,
    F: Fn(S) -> (T, S),
{
    let mut components = VecDeque::new();
    while !is_empty(&state) {
        let (component, next) = step(state);
        components.push_front(component);
        state = next;
    }
    components.into()
}

/// Unfolds `state` until `is_empty` holds, appending every component.
#[pipeable]
pub fn unfold_right<S, T, E, F>(is_empty: E, step: F, mut state: S) -> Vec<T>
where
    E: Fn(&S) -> bool,
    F: Fn(S) -> (T, S),
{
    let mut components = Vec::new();
    while !is_empty(&state) {
        let (component, next) = step(state);
        components.push(component);
        state = next;
    }
    components
}

/// Threads `state` through the items from last to first, prepending the
/// component `step` produces for each.
///
/// # Examples
///
/// ```rust
/// use pipewise::compose::piped;
/// use pipewise::stages::fold::{unfold_left_iter, unfold_right_iter};
///
/// let running = |sum: i32, item: i32| (sum + item, sum + item);
///
/// let suffix_sums = piped(vec![0, 1, 2, 3, 4]) >> unfold_left_iter(running, 0);
/// assert_eq!(suffix_sums.into_inner(), vec![10, 10, 9, 7, 4]);
///
/// let prefix_sums = piped(vec![0, 1, 2, 3, 4]) >> unfold_right_iter(running, 0);
/// assert_eq!(prefix_sums.into_inner(), vec![0, 1, 3, 6, 10]);
/// ```
#[pipeable]
pub fn unfold_left_iter<T, S, U, F>(step: F, state: S, items: Vec<T>) -> Vec<U>
where
    F: Fn(S, T) -> (U, S),
    S: Clone,
{
    let mut state = state.clone();
    let mut components = VecDeque::with_capacity(items.len());
    for item in items.into_iter().rev() {
        let (component, next) = step(state, item);
        components.push_front(component);
        state = next;
    }
    components.into()
}

/// Threads `state` through the items from first to last, appending the
/// component `step` produces for each.
#[pipeable]
pub fn unfold_right_iter<T, S, U, F>(step: F, state: S, items: Vec<T>) -> Vec<U>
where
    F: Fn(S, T) -> (U, S),
    S: Clone,
{
    let mut state = state.clone();
    let mut components = Vec::with_capacity(items.len());
    for item in items {
        let (component, next) = step(state, item);
        components.push(component);
        state = next;
    }
    components
}
