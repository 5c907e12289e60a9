//! The checked lazy pipeline.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::mem;

use super::stages;

/// How many elements a splitting terminal accumulates into one partial
/// result before merging it through the caller's combiner.
const RUN_LENGTH: usize = 1024;

/// A lazy element pipeline whose operations accept callbacks that declare a
/// failure type.
///
/// `Pipeline<'a, T, X>` decorates one underlying element engine, owned
/// exclusively from construction on. Every intermediate operation is lazy:
/// it consumes the pipeline and returns a new one without evaluating any
/// element. Exactly one terminal operation then drives the engine eagerly
/// and returns either a plain value or the first declared failure, typed as
/// `X`. `X` is fixed for the pipeline's lifetime.
///
/// A declared failure raised by any callback travels through the engine as
/// a typed `Err` item and surfaces from the terminal operation; evaluation
/// never proceeds past the first failure. Defects (panics) are not captured
/// and unwind through the terminal operation unchanged.
///
/// # Ordering and finiteness
///
/// The pipeline preserves the engine's encounter order and finiteness.
/// [`generate`](Self::generate) produces an unbounded pipeline: bound it
/// with [`limit`](Self::limit) or consume it with a short-circuiting
/// terminal such as [`find_first`](Self::find_first) or
/// [`any_match`](Self::any_match), or evaluation never completes.
///
/// # Splitting terminals
///
/// [`fold_with`](Self::fold_with) and [`collect_with`](Self::collect_with)
/// may split evaluation into runs whose partial results are merged through
/// the caller's combiner, so combiners must be associative and free of
/// order-dependent side effects, and accumulators must not be assumed to be
/// shared across runs.
///
/// # Examples
///
/// ```rust
/// use tryout::pipeline::Pipeline;
///
/// let selected: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 2, 3])
///     .map(|value| Ok(value * 2))
///     .filter(|value| Ok(*value > 2))
///     .to_list();
/// assert_eq!(selected, Ok(vec![4, 6]));
/// ```
///
/// A failure declared inside a stage surfaces, typed, from the terminal:
///
/// ```rust
/// use tryout::pipeline::Pipeline;
///
/// let failed: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 2, 3])
///     .map(|value| {
///         if value == 2 {
///             Err("two is not welcome".to_string())
///         } else {
///             Ok(value)
///         }
///     })
///     .to_list();
/// assert_eq!(failed, Err("two is not welcome".to_string()));
/// ```
pub struct Pipeline<'a, T, X> {
    engine: Box<dyn Iterator<Item = Result<T, X>> + 'a>,
}

impl<'a, T: 'a, X: 'a> Pipeline<'a, T, X> {
    fn decorate(engine: impl Iterator<Item = Result<T, X>> + 'a) -> Self {
        Self {
            engine: Box::new(engine),
        }
    }

    // =========================================================================
    // Factories
    // =========================================================================

    /// Decorates an existing engine of `Result` items.
    ///
    /// The returned pipeline behaves as the given engine, except that its
    /// operations accept callbacks declaring the failure type `X` and its
    /// terminal operations surface the first `Err` item as their own `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let engine = vec![Ok(1), Err("bad".to_string()), Ok(3)].into_iter();
    /// assert_eq!(Pipeline::wrapping(engine).to_list(), Err("bad".to_string()));
    /// ```
    pub fn wrapping(engine: impl Iterator<Item = Result<T, X>> + 'a) -> Self {
        Self::decorate(engine)
    }

    /// Builds a pipeline over the elements of a collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let values: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 2, 3]).to_list();
    /// assert_eq!(values, Ok(vec![1, 2, 3]));
    /// ```
    pub fn from_values<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::decorate(source.into_iter().map(Ok))
    }

    /// Builds an unbounded pipeline whose elements come from repeatedly
    /// invoking the supplier.
    ///
    /// Suitable for constant or generated sequences. The supplier may
    /// declare a failure, which ends the sequence and surfaces from the
    /// terminal operation. Combine the result with a short-circuiting
    /// terminal or bound it with [`limit`](Self::limit); otherwise
    /// evaluation never completes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let ones: Result<Vec<i32>, String> = Pipeline::generate(|| Ok(1)).limit(3).to_list();
    /// assert_eq!(ones, Ok(vec![1, 1, 1]));
    /// ```
    pub fn generate(supplier: impl FnMut() -> Result<T, X> + 'a) -> Self {
        Self::decorate(stages::Generate::new(supplier))
    }

    // =========================================================================
    // Intermediate Operations
    // =========================================================================

    /// Transforms each element with a fallible mapper. Lazy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let doubled: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 2, 3])
    ///     .map(|value| Ok(value * 2))
    ///     .to_list();
    /// assert_eq!(doubled, Ok(vec![2, 4, 6]));
    /// ```
    pub fn map<U: 'a>(self, mapper: impl FnMut(T) -> Result<U, X> + 'a) -> Pipeline<'a, U, X> {
        Pipeline::decorate(stages::Map::new(self.engine, mapper))
    }

    /// Replaces each element with the elements of the collection the mapper
    /// produces for it. Lazy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let repeated: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 2])
    ///     .flat_map(|value| Ok(vec![value; 2]))
    ///     .to_list();
    /// assert_eq!(repeated, Ok(vec![1, 1, 2, 2]));
    /// ```
    pub fn flat_map<U: 'a, J>(
        self,
        mapper: impl FnMut(T) -> Result<J, X> + 'a,
    ) -> Pipeline<'a, U, X>
    where
        J: IntoIterator<Item = U> + 'a,
        J::IntoIter: 'a,
    {
        Pipeline::decorate(stages::FlatMap::new(self.engine, mapper))
    }

    /// Keeps the elements accepted by a fallible predicate. Lazy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let even: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 2, 3, 4])
    ///     .filter(|value| Ok(value % 2 == 0))
    ///     .to_list();
    /// assert_eq!(even, Ok(vec![2, 4]));
    /// ```
    pub fn filter(self, predicate: impl FnMut(&T) -> Result<bool, X> + 'a) -> Self {
        Self::decorate(stages::Filter::new(self.engine, predicate))
    }

    /// Keeps the first occurrence of each element. Lazy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let unique: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 2, 1, 3, 2])
    ///     .distinct()
    ///     .to_list();
    /// assert_eq!(unique, Ok(vec![1, 2, 3]));
    /// ```
    pub fn distinct(self) -> Self
    where
        T: Clone + Eq + Hash,
    {
        Self::decorate(stages::Distinct::new(self.engine))
    }

    /// Sorts the elements into their natural order. Lazy: the upstream is
    /// buffered when the terminal operation first demands an element. The
    /// sort is stable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let ordered: Result<Vec<i32>, String> =
    ///     Pipeline::from_values(vec![3, 1, 2]).sorted().to_list();
    /// assert_eq!(ordered, Ok(vec![1, 2, 3]));
    /// ```
    pub fn sorted(self) -> Self
    where
        T: Ord,
    {
        self.sorted_by(|left, right| Ok(left.cmp(right)))
    }

    /// Sorts the elements with a fallible comparator. Lazy, buffered and
    /// stable as [`sorted`](Self::sorted); the first comparator failure is
    /// emitted instead of any elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let descending: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 3, 2])
    ///     .sorted_by(|left, right| Ok(right.cmp(left)))
    ///     .to_list();
    /// assert_eq!(descending, Ok(vec![3, 2, 1]));
    /// ```
    pub fn sorted_by(self, comparator: impl FnMut(&T, &T) -> Result<Ordering, X> + 'a) -> Self {
        Self::decorate(stages::SortedBy::new(self.engine, comparator))
    }

    /// Discards elements while the fallible predicate accepts them, then
    /// passes everything from the first rejected element on. Lazy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let tail: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 2, 3, 1])
    ///     .drop_while(|value| Ok(*value < 3))
    ///     .to_list();
    /// assert_eq!(tail, Ok(vec![3, 1]));
    /// ```
    pub fn drop_while(self, predicate: impl FnMut(&T) -> Result<bool, X> + 'a) -> Self {
        Self::decorate(stages::DropWhile::new(self.engine, predicate))
    }

    /// Passes elements while the fallible predicate accepts them, ending the
    /// pipeline at the first rejected element. Lazy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let head: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 2, 3, 1])
    ///     .take_while(|value| Ok(*value < 3))
    ///     .to_list();
    /// assert_eq!(head, Ok(vec![1, 2]));
    /// ```
    pub fn take_while(self, predicate: impl FnMut(&T) -> Result<bool, X> + 'a) -> Self {
        Self::decorate(stages::TakeWhile::new(self.engine, predicate))
    }

    /// Truncates the pipeline to at most `max_size` elements. Lazy; makes an
    /// unbounded pipeline finite.
    pub fn limit(self, max_size: usize) -> Self {
        Self::decorate(stages::Limit::new(self.engine, max_size))
    }

    /// Discards the first `count` elements. Lazy. A failure produced while
    /// evaluating the discarded elements still surfaces.
    pub fn skip(self, count: usize) -> Self {
        Self::decorate(stages::Skip::new(self.engine, count))
    }

    /// Feeds each element to the action as it flows past. Lazy: the action
    /// observes exactly the elements the terminal operation demands.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let mut observed = Vec::new();
    /// let first: Result<Option<i32>, String> = Pipeline::from_values(vec![1, 2, 3])
    ///     .peek(|value| {
    ///         observed.push(*value);
    ///         Ok(())
    ///     })
    ///     .find_first();
    /// assert_eq!(first, Ok(Some(1)));
    /// assert_eq!(observed, vec![1]);
    /// ```
    pub fn peek(self, action: impl FnMut(&T) -> Result<(), X> + 'a) -> Self {
        Self::decorate(stages::Peek::new(self.engine, action))
    }

    // =========================================================================
    // Terminal Operations: Reduction
    // =========================================================================

    /// Reduces the elements pairwise with a fallible accumulator, returning
    /// `None` for an empty pipeline. Eager.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback or by
    /// the accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let sum: Result<Option<i32>, String> = Pipeline::from_values(vec![1, 2, 3])
    ///     .reduce(|left, right| Ok(left + right));
    /// assert_eq!(sum, Ok(Some(6)));
    /// ```
    pub fn reduce(
        self,
        mut accumulator: impl FnMut(T, T) -> Result<T, X>,
    ) -> Result<Option<T>, X> {
        let mut accumulated: Option<T> = None;
        for item in self.engine {
            let value = item?;
            accumulated = Some(match accumulated {
                None => value,
                Some(current) => accumulator(current, value)?,
            });
        }
        Ok(accumulated)
    }

    /// Folds the elements onto an identity value with a fallible
    /// accumulator. Eager.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback or by
    /// the accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let joined: Result<String, String> = Pipeline::from_values(vec!["a", "b"])
    ///     .fold(String::new(), |mut joined, piece| {
    ///         joined.push_str(piece);
    ///         Ok(joined)
    ///     });
    /// assert_eq!(joined, Ok("ab".to_string()));
    /// ```
    pub fn fold<U>(
        self,
        identity: U,
        mut accumulator: impl FnMut(U, T) -> Result<U, X>,
    ) -> Result<U, X> {
        let mut accumulated = identity;
        for item in self.engine {
            accumulated = accumulator(accumulated, item?)?;
        }
        Ok(accumulated)
    }

    /// Folds the elements onto an identity value, merging partial results
    /// through a combiner. Eager.
    ///
    /// Evaluation is split into runs: each run folds up to a fixed number
    /// of elements from a fresh copy of `identity`, and finished runs are
    /// merged into the overall result through `combiner`. The combiner must
    /// therefore be associative, compatible with the accumulator, and treat
    /// `identity` as its neutral element.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback, the
    /// accumulator, or the combiner.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let total: Result<i32, String> = Pipeline::from_values(vec![1, 2, 3]).fold_with(
    ///     0,
    ///     |sum, value| Ok(sum + value),
    ///     |left, right| Ok(left + right),
    /// );
    /// assert_eq!(total, Ok(6));
    /// ```
    pub fn fold_with<U: Clone>(
        self,
        identity: U,
        mut accumulator: impl FnMut(U, T) -> Result<U, X>,
        mut combiner: impl FnMut(U, U) -> Result<U, X>,
    ) -> Result<U, X> {
        let mut accumulated = identity.clone();
        let mut run = identity.clone();
        let mut run_length = 0_usize;
        for item in self.engine {
            run = accumulator(run, item?)?;
            run_length += 1;
            if run_length == RUN_LENGTH {
                accumulated = combiner(accumulated, mem::replace(&mut run, identity.clone()))?;
                run_length = 0;
            }
        }
        if run_length > 0 {
            accumulated = combiner(accumulated, run)?;
        }
        Ok(accumulated)
    }

    // =========================================================================
    // Terminal Operations: Collection
    // =========================================================================

    /// Collects the elements into a mutable accumulator, merging partial
    /// accumulators through a combiner. Eager.
    ///
    /// Evaluation is split into runs: each run accumulates up to a fixed
    /// number of elements into its own accumulator obtained from
    /// `supplier`, and finished runs are merged through `combiner`. No
    /// accumulator is shared between runs, and the combiner must be
    /// associative and free of order-dependent side effects.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback, the
    /// supplier, the accumulator, or the combiner.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let collected: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 2, 3])
    ///     .collect_with(
    ///         || Ok(Vec::new()),
    ///         |buffer, value| {
    ///             buffer.push(value);
    ///             Ok(())
    ///         },
    ///         |buffer, mut run| {
    ///             buffer.append(&mut run);
    ///             Ok(())
    ///         },
    ///     );
    /// assert_eq!(collected, Ok(vec![1, 2, 3]));
    /// ```
    pub fn collect_with<A>(
        self,
        mut supplier: impl FnMut() -> Result<A, X>,
        mut accumulator: impl FnMut(&mut A, T) -> Result<(), X>,
        mut combiner: impl FnMut(&mut A, A) -> Result<(), X>,
    ) -> Result<A, X> {
        let mut collected = supplier()?;
        let mut run = supplier()?;
        let mut run_length = 0_usize;
        for item in self.engine {
            accumulator(&mut run, item?)?;
            run_length += 1;
            if run_length == RUN_LENGTH {
                let finished = mem::replace(&mut run, supplier()?);
                combiner(&mut collected, finished)?;
                run_length = 0;
            }
        }
        if run_length > 0 {
            combiner(&mut collected, run)?;
        }
        Ok(collected)
    }

    /// Collects the elements into any collection buildable from an
    /// iterator. Eager.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use tryout::pipeline::Pipeline;
    ///
    /// let set: Result<BTreeSet<i32>, String> =
    ///     Pipeline::from_values(vec![2, 1, 2]).collect();
    /// assert_eq!(set, Ok(BTreeSet::from([1, 2])));
    /// ```
    pub fn collect<C>(self) -> Result<C, X>
    where
        C: FromIterator<T>,
    {
        self.engine.collect()
    }

    /// Collects the elements into a list in encounter order. Eager.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let selected: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 2, 3])
    ///     .map(|value| Ok(value * 2))
    ///     .filter(|value| Ok(*value > 2))
    ///     .to_list();
    /// assert_eq!(selected, Ok(vec![4, 6]));
    /// ```
    pub fn to_list(self) -> Result<Vec<T>, X> {
        self.collect()
    }

    // =========================================================================
    // Terminal Operations: Search and Iteration
    // =========================================================================

    /// Counts the elements. Eager: every element is evaluated, so upstream
    /// `peek` actions run and upstream failures surface.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback.
    pub fn count(self) -> Result<usize, X> {
        let mut count = 0_usize;
        for item in self.engine {
            item?;
            count += 1;
        }
        Ok(count)
    }

    /// Returns the first element, if any. Eager and short-circuiting: only
    /// the first element is evaluated.
    ///
    /// # Errors
    ///
    /// Returns the failure raised while evaluating the first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let first: Result<Option<i32>, String> = Pipeline::from_values(vec![1, 2, 3])
    ///     .filter(|value| Ok(value % 2 == 0))
    ///     .find_first();
    /// assert_eq!(first, Ok(Some(2)));
    /// ```
    pub fn find_first(mut self) -> Result<Option<T>, X> {
        match self.engine.next() {
            None => Ok(None),
            Some(item) => item.map(Some),
        }
    }

    /// Returns some element, if any, with no ordering promise. Eager and
    /// short-circuiting. This sequential engine takes the first element.
    ///
    /// # Errors
    ///
    /// Returns the failure raised while evaluating the chosen element.
    pub fn find_any(self) -> Result<Option<T>, X> {
        self.find_first()
    }

    /// Feeds every element to the action. Eager.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback or by
    /// the action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let mut seen = Vec::new();
    /// let walked: Result<(), String> =
    ///     Pipeline::from_values(vec![1, 2]).for_each(|value| {
    ///         seen.push(value);
    ///         Ok(())
    ///     });
    /// assert_eq!(walked, Ok(()));
    /// assert_eq!(seen, vec![1, 2]);
    /// ```
    pub fn for_each(self, mut action: impl FnMut(T) -> Result<(), X>) -> Result<(), X> {
        for item in self.engine {
            action(item?)?;
        }
        Ok(())
    }

    /// Feeds every element to the action in encounter order. Eager. This
    /// sequential engine already iterates in encounter order, so this is
    /// [`for_each`](Self::for_each) with the ordering promise made
    /// explicit.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback or by
    /// the action.
    pub fn for_each_ordered(self, action: impl FnMut(T) -> Result<(), X>) -> Result<(), X> {
        self.for_each(action)
    }

    // =========================================================================
    // Terminal Operations: Matching
    // =========================================================================

    /// Tests whether the fallible predicate accepts every element. Eager,
    /// short-circuiting on the first rejection.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback or by
    /// the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let all_even: Result<bool, String> = Pipeline::from_values(vec![2, 4, 5])
    ///     .all_match(|value| Ok(value % 2 == 0));
    /// assert_eq!(all_even, Ok(false));
    /// ```
    pub fn all_match(self, mut predicate: impl FnMut(&T) -> Result<bool, X>) -> Result<bool, X> {
        for item in self.engine {
            let value = item?;
            if !predicate(&value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Tests whether the fallible predicate accepts some element. Eager,
    /// short-circuiting on the first acceptance.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback or by
    /// the predicate.
    pub fn any_match(self, mut predicate: impl FnMut(&T) -> Result<bool, X>) -> Result<bool, X> {
        for item in self.engine {
            let value = item?;
            if predicate(&value)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Tests whether the fallible predicate rejects every element. Eager,
    /// short-circuiting on the first acceptance.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback or by
    /// the predicate.
    pub fn none_match(self, mut predicate: impl FnMut(&T) -> Result<bool, X>) -> Result<bool, X> {
        for item in self.engine {
            let value = item?;
            if predicate(&value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    // =========================================================================
    // Terminal Operations: Extrema
    // =========================================================================

    /// Returns the greatest element according to a fallible comparator, if
    /// any. Eager. Ties keep the earlier element.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback or by
    /// the comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::pipeline::Pipeline;
    ///
    /// let longest: Result<Option<&str>, String> =
    ///     Pipeline::from_values(vec!["ab", "a", "abc"])
    ///         .max_by(|left, right| Ok(left.len().cmp(&right.len())));
    /// assert_eq!(longest, Ok(Some("abc")));
    /// ```
    pub fn max_by(
        self,
        mut comparator: impl FnMut(&T, &T) -> Result<Ordering, X>,
    ) -> Result<Option<T>, X> {
        let mut best: Option<T> = None;
        for item in self.engine {
            let value = item?;
            best = Some(match best {
                None => value,
                Some(current) => {
                    if comparator(&current, &value)? == Ordering::Less {
                        value
                    } else {
                        current
                    }
                }
            });
        }
        Ok(best)
    }

    /// Returns the least element according to a fallible comparator, if
    /// any. Eager. Ties keep the earlier element.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback or by
    /// the comparator.
    pub fn min_by(
        self,
        mut comparator: impl FnMut(&T, &T) -> Result<Ordering, X>,
    ) -> Result<Option<T>, X> {
        let mut best: Option<T> = None;
        for item in self.engine {
            let value = item?;
            best = Some(match best {
                None => value,
                Some(current) => {
                    if comparator(&current, &value)? == Ordering::Greater {
                        value
                    } else {
                        current
                    }
                }
            });
        }
        Ok(best)
    }

    /// Returns the greatest element in natural order, if any. Eager.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback.
    pub fn max(self) -> Result<Option<T>, X>
    where
        T: Ord,
    {
        self.max_by(|left, right| Ok(left.cmp(right)))
    }

    /// Returns the least element in natural order, if any. Eager.
    ///
    /// # Errors
    ///
    /// Returns the first declared failure raised by a stage callback.
    pub fn min(self) -> Result<Option<T>, X>
    where
        T: Ord,
    {
        self.min_by(|left, right| Ok(left.cmp(right)))
    }
}

impl<T, X> fmt::Debug for Pipeline<'_, T, X> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Pipeline").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pipeline_is_lazy_until_a_terminal_runs() {
        let mut invoked = false;
        let stage = Pipeline::<i32, String>::from_values(vec![1]).map(|value| {
            invoked = true;
            Ok(value)
        });
        // Constructing the stage must not evaluate anything.
        drop(stage);
        assert!(!invoked);
    }

    #[rstest]
    fn terminal_surfaces_the_first_failure() {
        let outcome = Pipeline::from_values(vec![1, 2, 3])
            .map(|value| {
                if value == 2 {
                    Err("two".to_string())
                } else {
                    Ok(value)
                }
            })
            .to_list();
        assert_eq!(outcome, Err("two".to_string()));
    }
}
