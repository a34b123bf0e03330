//! Jacobsthal-ordered binary insertion of the pend list into the main chain.
//!
//! [`InsertionPlan`] decides *which* pend element goes next and how much of the
//! chain its search may look at; it never touches elements, so the order can be
//! inspected on its own. [`ChainInserter`] applies a plan to real data.
//!
//! Batches are walked backwards: inside a batch, every pend element is
//! inserted while its partner (and everything above it) is still where the
//! prefix bound expects it.

use crate::chain::Chains;
use crate::jacobsthal::jacobsthal;

/// The part of the main chain a single insertion may search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// The seed element: placed at index 0 without comparing.
    Front,
    /// Inclusive chain range `[0, end]`.
    Prefix { end: usize },
    /// The whole chain as it stands when the insertion happens.
    Whole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    pub pend_index: usize,
    pub window: Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Seed,
    /// Ready to compute the next jump from `resume`.
    Jump { resume: usize },
    /// Walking `current` down towards `start`, exclusive. `top` is where the
    /// next jump resumes from.
    Batch {
        start: usize,
        top: usize,
        current: usize,
    },
    /// Walking `current` down towards `stop`, exclusive.
    Drain { stop: usize, current: usize },
    Done,
}

/// Insertion order for a pend list of a given length.
///
/// Yields the seed (`pend[0]`) first, then batches ending at pend index
/// `i + 2 * J(k)` for `k = 1, 2, ...`, each walked in descending index order,
/// then the remaining tail, also descending.
///
/// ```
/// use mergeinsert::insert::InsertionPlan;
///
/// let order: Vec<usize> = InsertionPlan::new(6).map(|ins| ins.pend_index).collect();
/// assert_eq!(order, vec![0, 2, 1, 4, 3, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct InsertionPlan {
    pend_len: usize,
    state: State,
    jacobsthal_idx: u32,
    inserted: usize,
}

impl InsertionPlan {
    #[must_use]
    pub fn new(pend_len: usize) -> Self {
        Self {
            pend_len,
            state: State::Seed,
            jacobsthal_idx: 1,
            inserted: 0,
        }
    }

    /// Pend elements handed out so far, the seed included.
    #[must_use]
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    fn emit(&mut self, pend_index: usize, window: Window) -> Insertion {
        self.inserted += 1;
        Insertion { pend_index, window }
    }
}

impl Iterator for InsertionPlan {
    type Item = Insertion;

    fn next(&mut self) -> Option<Insertion> {
        loop {
            match self.state {
                State::Seed => {
                    if self.pend_len == 0 {
                        self.state = State::Done;
                        return None;
                    }
                    self.state = State::Jump { resume: 0 };
                    return Some(self.emit(0, Window::Front));
                }
                State::Jump { resume } => {
                    let distance = jacobsthal(self.jacobsthal_idx).saturating_mul(2);
                    let top = resume.saturating_add(distance);
                    if top >= self.pend_len {
                        self.state = State::Drain {
                            stop: resume,
                            current: self.pend_len - 1,
                        };
                    } else {
                        tracing::trace!(
                            start = resume,
                            top,
                            jacobsthal_idx = self.jacobsthal_idx,
                            "insertion batch"
                        );
                        self.state = State::Batch {
                            start: resume,
                            top,
                            current: top,
                        };
                    }
                }
                State::Batch {
                    start,
                    top,
                    current,
                } => {
                    if current == start {
                        self.jacobsthal_idx += 1;
                        self.state = State::Jump { resume: top };
                        continue;
                    }
                    self.state = State::Batch {
                        start,
                        top,
                        current: current - 1,
                    };
                    let end = current + self.inserted - 1;
                    return Some(self.emit(current, Window::Prefix { end }));
                }
                State::Drain { stop, current } => {
                    if current <= stop {
                        self.state = State::Done;
                        return None;
                    }
                    self.state = State::Drain {
                        stop,
                        current: current - 1,
                    };
                    return Some(self.emit(current, Window::Whole));
                }
                State::Done => return None,
            }
        }
    }
}

/// Inserts `value` into the sorted inclusive range `chain[start..=end]` and
/// returns the index it landed at.
///
/// The value goes after any elements equal to it. The search bisects the
/// `end - start + 2` candidate slots, so it costs `ceil(log2(end - start + 2))`
/// comparisons; a one-element range compares once and inserts before or after.
///
/// # Panics
///
/// Panics if `start > end` or `end` is out of bounds.
pub fn binary_insert<T, F>(
    chain: &mut Vec<T>,
    start: usize,
    end: usize,
    value: T,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        start <= end && end < chain.len(),
        "insertion range {start}..={end} outside chain of length {}",
        chain.len()
    );

    let (mut lo, mut hi) = (start, end + 1);
    while lo < hi {
        let mid = usize::midpoint(lo, hi);
        if is_less(&value, &chain[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    chain.insert(lo, value);
    lo
}

/// Outcome of one [`ChainInserter::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inserted {
    pub pend_index: usize,
    /// Last chain index the search could look at, `None` for the seed.
    pub window_end: Option<usize>,
    pub position: usize,
}

/// Merges a pend list into its main chain, one insertion per [`step`].
///
/// [`step`]: ChainInserter::step
#[derive(Debug)]
pub struct ChainInserter<T> {
    main: Vec<T>,
    pend: Vec<Option<T>>,
    plan: InsertionPlan,
}

impl<T> ChainInserter<T> {
    #[must_use]
    pub fn new(chains: Chains<T>) -> Self {
        let Chains { mut main, pend } = chains;
        main.reserve(pend.len());
        let plan = InsertionPlan::new(pend.len());
        Self {
            main,
            pend: pend.into_iter().map(Some).collect(),
            plan,
        }
    }

    /// The chain as built so far. Sorted whenever the input chains came from
    /// [`crate::chain::extract`] on merge-sorted pairs.
    #[must_use]
    pub fn main_chain(&self) -> &[T] {
        &self.main
    }

    /// Pend elements not yet inserted, by pend index.
    pub fn remaining(&self) -> impl Iterator<Item = (usize, &T)> {
        self.pend
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (i, v)))
    }

    /// Inserts the next pend element, or returns `None` once all are placed.
    ///
    /// # Panics
    ///
    /// Cannot panic for chains produced by [`crate::chain::extract`]: the plan
    /// visits each pend index once and every window lies inside the chain.
    pub fn step<F>(&mut self, is_less: &mut F) -> Option<Inserted>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let Insertion { pend_index, window } = self.plan.next()?;
        let value = self.pend[pend_index]
            .take()
            .expect("each pend index is planned exactly once");

        let (window_end, position) = match window {
            Window::Front => {
                self.main.insert(0, value);
                (None, 0)
            }
            Window::Prefix { end } => {
                (Some(end), binary_insert(&mut self.main, 0, end, value, is_less))
            }
            Window::Whole => {
                let end = self.main.len() - 1;
                (Some(end), binary_insert(&mut self.main, 0, end, value, is_less))
            }
        };

        Some(Inserted {
            pend_index,
            window_end,
            position,
        })
    }

    /// Runs every remaining insertion and returns the finished chain.
    #[must_use]
    pub fn finish<F>(mut self, is_less: &mut F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        while self.step(is_less).is_some() {}
        self.main
    }
}
