//! Internal stage adapters for the checked pipeline.
//!
//! Every adapter operates on `Result<T, X>` items: declared failures travel
//! through the engine as `Err` items, fully typed, and each adapter applies
//! its callback only to `Ok` items. An adapter that has yielded an `Err` is
//! exhausted; evaluation never proceeds past the first failure.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;
use std::mem;

#[cfg(feature = "ahash")]
pub(crate) type DistinctHasher = ahash::RandomState;

#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub(crate) type DistinctHasher = rustc_hash::FxBuildHasher;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type DistinctHasher = std::collections::hash_map::RandomState;

/// Unbounded source yielding the supplier's results until one fails.
pub(crate) struct Generate<F> {
    supplier: F,
    done: bool,
}

impl<F> Generate<F> {
    pub(crate) const fn new(supplier: F) -> Self {
        Self {
            supplier,
            done: false,
        }
    }
}

impl<T, X, F> Iterator for Generate<F>
where
    F: FnMut() -> Result<T, X>,
{
    type Item = Result<T, X>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = (self.supplier)();
        self.done = item.is_err();
        Some(item)
    }
}

/// Applies a fallible transformation to each element.
pub(crate) struct Map<I, F> {
    upstream: I,
    mapper: F,
    done: bool,
}

impl<I, F> Map<I, F> {
    pub(crate) const fn new(upstream: I, mapper: F) -> Self {
        Self {
            upstream,
            mapper,
            done: false,
        }
    }
}

impl<T, U, X, I, F> Iterator for Map<I, F>
where
    I: Iterator<Item = Result<T, X>>,
    F: FnMut(T) -> Result<U, X>,
{
    type Item = Result<U, X>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.upstream.next()?.and_then(&mut self.mapper);
        self.done = item.is_err();
        Some(item)
    }
}

/// Keeps the elements accepted by a fallible predicate.
pub(crate) struct Filter<I, P> {
    upstream: I,
    predicate: P,
    done: bool,
}

impl<I, P> Filter<I, P> {
    pub(crate) const fn new(upstream: I, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            done: false,
        }
    }
}

impl<T, X, I, P> Iterator for Filter<I, P>
where
    I: Iterator<Item = Result<T, X>>,
    P: FnMut(&T) -> Result<bool, X>,
{
    type Item = Result<T, X>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.upstream.next() {
                None => return None,
                Some(Err(cause)) => {
                    self.done = true;
                    return Some(Err(cause));
                }
                Some(Ok(value)) => match (self.predicate)(&value) {
                    Ok(true) => return Some(Ok(value)),
                    Ok(false) => {}
                    Err(cause) => {
                        self.done = true;
                        return Some(Err(cause));
                    }
                },
            }
        }
    }
}

/// Expands each element into the elements of a produced collection.
pub(crate) struct FlatMap<I, F, J: IntoIterator> {
    upstream: I,
    mapper: F,
    current: Option<J::IntoIter>,
    done: bool,
}

impl<I, F, J: IntoIterator> FlatMap<I, F, J> {
    pub(crate) const fn new(upstream: I, mapper: F) -> Self {
        Self {
            upstream,
            mapper,
            current: None,
            done: false,
        }
    }
}

impl<T, U, X, I, F, J> Iterator for FlatMap<I, F, J>
where
    I: Iterator<Item = Result<T, X>>,
    F: FnMut(T) -> Result<J, X>,
    J: IntoIterator<Item = U>,
{
    type Item = Result<U, X>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(inner) = &mut self.current {
                if let Some(value) = inner.next() {
                    return Some(Ok(value));
                }
                self.current = None;
            }
            match self.upstream.next() {
                None => return None,
                Some(Err(cause)) => {
                    self.done = true;
                    return Some(Err(cause));
                }
                Some(Ok(value)) => match (self.mapper)(value) {
                    Ok(items) => self.current = Some(items.into_iter()),
                    Err(cause) => {
                        self.done = true;
                        return Some(Err(cause));
                    }
                },
            }
        }
    }
}

/// Yields elements while a fallible predicate accepts them.
pub(crate) struct TakeWhile<I, P> {
    upstream: I,
    predicate: P,
    done: bool,
}

impl<I, P> TakeWhile<I, P> {
    pub(crate) const fn new(upstream: I, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            done: false,
        }
    }
}

impl<T, X, I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator<Item = Result<T, X>>,
    P: FnMut(&T) -> Result<bool, X>,
{
    type Item = Result<T, X>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.upstream.next() {
            None => None,
            Some(Err(cause)) => {
                self.done = true;
                Some(Err(cause))
            }
            Some(Ok(value)) => match (self.predicate)(&value) {
                Ok(true) => Some(Ok(value)),
                Ok(false) => {
                    self.done = true;
                    None
                }
                Err(cause) => {
                    self.done = true;
                    Some(Err(cause))
                }
            },
        }
    }
}

/// Discards elements while a fallible predicate accepts them.
pub(crate) struct DropWhile<I, P> {
    upstream: I,
    predicate: P,
    dropping: bool,
    done: bool,
}

impl<I, P> DropWhile<I, P> {
    pub(crate) const fn new(upstream: I, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            dropping: true,
            done: false,
        }
    }
}

impl<T, X, I, P> Iterator for DropWhile<I, P>
where
    I: Iterator<Item = Result<T, X>>,
    P: FnMut(&T) -> Result<bool, X>,
{
    type Item = Result<T, X>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.upstream.next() {
                None => return None,
                Some(Err(cause)) => {
                    self.done = true;
                    return Some(Err(cause));
                }
                Some(Ok(value)) => {
                    if !self.dropping {
                        return Some(Ok(value));
                    }
                    match (self.predicate)(&value) {
                        Ok(true) => {}
                        Ok(false) => {
                            self.dropping = false;
                            return Some(Ok(value));
                        }
                        Err(cause) => {
                            self.done = true;
                            return Some(Err(cause));
                        }
                    }
                }
            }
        }
    }
}

/// Passes at most `remaining` elements through; failures produced before the
/// bound is reached still surface.
pub(crate) struct Limit<I> {
    upstream: I,
    remaining: usize,
    done: bool,
}

impl<I> Limit<I> {
    pub(crate) const fn new(upstream: I, max_size: usize) -> Self {
        Self {
            upstream,
            remaining: max_size,
            done: false,
        }
    }
}

impl<T, X, I> Iterator for Limit<I>
where
    I: Iterator<Item = Result<T, X>>,
{
    type Item = Result<T, X>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.remaining == 0 {
            return None;
        }
        match self.upstream.next() {
            None => None,
            Some(Err(cause)) => {
                self.done = true;
                Some(Err(cause))
            }
            Some(Ok(value)) => {
                self.remaining -= 1;
                Some(Ok(value))
            }
        }
    }
}

/// Discards the first `count` elements; failures among them still surface.
pub(crate) struct Skip<I> {
    upstream: I,
    remaining: usize,
    done: bool,
}

impl<I> Skip<I> {
    pub(crate) const fn new(upstream: I, count: usize) -> Self {
        Self {
            upstream,
            remaining: count,
            done: false,
        }
    }
}

impl<T, X, I> Iterator for Skip<I>
where
    I: Iterator<Item = Result<T, X>>,
{
    type Item = Result<T, X>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.upstream.next() {
                None => return None,
                Some(Err(cause)) => {
                    self.done = true;
                    return Some(Err(cause));
                }
                Some(Ok(value)) => {
                    if self.remaining == 0 {
                        return Some(Ok(value));
                    }
                    self.remaining -= 1;
                }
            }
        }
    }
}

/// Feeds each element to a fallible observer as it flows past.
pub(crate) struct Peek<I, F> {
    upstream: I,
    action: F,
    done: bool,
}

impl<I, F> Peek<I, F> {
    pub(crate) const fn new(upstream: I, action: F) -> Self {
        Self {
            upstream,
            action,
            done: false,
        }
    }
}

impl<T, X, I, F> Iterator for Peek<I, F>
where
    I: Iterator<Item = Result<T, X>>,
    F: FnMut(&T) -> Result<(), X>,
{
    type Item = Result<T, X>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.upstream.next()?.and_then(|value| {
            (self.action)(&value)?;
            Ok(value)
        });
        self.done = item.is_err();
        Some(item)
    }
}

/// Keeps the first occurrence of each element.
pub(crate) struct Distinct<I, T> {
    upstream: I,
    seen: HashSet<T, DistinctHasher>,
    done: bool,
}

impl<I, T: Eq + Hash> Distinct<I, T> {
    pub(crate) fn new(upstream: I) -> Self {
        Self {
            upstream,
            seen: HashSet::default(),
            done: false,
        }
    }
}

impl<T, X, I> Iterator for Distinct<I, T>
where
    T: Clone + Eq + Hash,
    I: Iterator<Item = Result<T, X>>,
{
    type Item = Result<T, X>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.upstream.next() {
                None => return None,
                Some(Err(cause)) => {
                    self.done = true;
                    return Some(Err(cause));
                }
                Some(Ok(value)) => {
                    if self.seen.insert(value.clone()) {
                        return Some(Ok(value));
                    }
                }
            }
        }
    }
}

enum SortedState<I, F, T, X> {
    Pending { upstream: I, comparator: F },
    Emitting(std::vec::IntoIter<T>),
    Failed(Option<X>),
}

/// Buffers the upstream on first demand, sorts it with a fallible
/// comparator, then emits in order. An upstream failure, or the first
/// comparator failure, is emitted instead of any elements.
pub(crate) struct SortedBy<I, F, T, X> {
    state: SortedState<I, F, T, X>,
}

impl<I, F, T, X> SortedBy<I, F, T, X> {
    pub(crate) const fn new(upstream: I, comparator: F) -> Self {
        Self {
            state: SortedState::Pending {
                upstream,
                comparator,
            },
        }
    }
}

impl<T, X, I, F> SortedBy<I, F, T, X>
where
    I: Iterator<Item = Result<T, X>>,
    F: FnMut(&T, &T) -> Result<Ordering, X>,
{
    fn materialize(&mut self) {
        let SortedState::Pending {
            upstream,
            mut comparator,
        } = mem::replace(&mut self.state, SortedState::Failed(None))
        else {
            return;
        };

        let mut buffer = Vec::new();
        for item in upstream {
            match item {
                Ok(value) => buffer.push(value),
                Err(cause) => {
                    self.state = SortedState::Failed(Some(cause));
                    return;
                }
            }
        }

        self.state = match merge_sort(buffer, &mut comparator) {
            Ok(sorted) => SortedState::Emitting(sorted.into_iter()),
            Err(cause) => SortedState::Failed(Some(cause)),
        };
    }
}

/// Stable merge sort with a fallible comparator.
///
/// The standard library sort cannot express a failing comparison, so the
/// split and merge are spelled out here; the first comparator failure
/// aborts the whole sort.
fn merge_sort<T, X>(
    mut items: Vec<T>,
    comparator: &mut impl FnMut(&T, &T) -> Result<Ordering, X>,
) -> Result<Vec<T>, X> {
    if items.len() <= 1 {
        return Ok(items);
    }

    let upper = items.split_off(items.len() / 2);
    let lower = merge_sort(items, comparator)?;
    let upper = merge_sort(upper, comparator)?;

    let mut merged = Vec::with_capacity(lower.len() + upper.len());
    let mut lower = lower.into_iter().peekable();
    let mut upper = upper.into_iter().peekable();
    while let (Some(lower_head), Some(upper_head)) = (lower.peek(), upper.peek()) {
        // Take from the lower half on ties to keep the sort stable.
        if comparator(upper_head, lower_head)? == Ordering::Less {
            if let Some(value) = upper.next() {
                merged.push(value);
            }
        } else if let Some(value) = lower.next() {
            merged.push(value);
        }
    }
    merged.extend(lower);
    merged.extend(upper);
    Ok(merged)
}

impl<T, X, I, F> Iterator for SortedBy<I, F, T, X>
where
    I: Iterator<Item = Result<T, X>>,
    F: FnMut(&T, &T) -> Result<Ordering, X>,
{
    type Item = Result<T, X>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, SortedState::Pending { .. }) {
            self.materialize();
        }
        match &mut self.state {
            SortedState::Emitting(values) => values.next().map(Ok),
            SortedState::Failed(cause) => cause.take().map(Err),
            SortedState::Pending { .. } => None,
        }
    }
}
