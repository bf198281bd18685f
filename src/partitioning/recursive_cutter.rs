//! The recursive decomposition shared by all the splitters.
//!
//! # Overview
//!
//! A [`RecursiveCutter`] takes one seed geometry and a set of cutters, and cuts the seed until no
//! cutter applies to any remaining piece. What "applies", "cut" and "degenerate" mean for a given
//! pair of geometry types is defined by a [`CutKernel`]:
//!
//! - the polygon kernel applies polylines crossing the polygon, and cuts along them,
//! - the polyline kernel applies points lying on the polyline, and cuts at them.
//!
//! # Traversal
//!
//! Pieces are processed depth-first with an explicit work stack: after a successful cut, the
//! first piece is fully decomposed before the second one. Every piece is cut by the first
//! cutter, in cutter order, that applies to it and that is still available:
//!
//! - with [`CutterPolicy::ConsumeOnce`], a cutter is used at most once for the whole call, and a
//!   failed attempt uses it up too,
//! - with [`CutterPolicy::ReplayAll`], every cutter stays available to every branch.
//!
//! With both policies, a cutter applied to an ancestor of the piece, or with exactly the same
//! shape as one, is not applied again: the piece boundary already follows it.
//!
//! A cut that does not yield two non-degenerate pieces fails: the cutter id is recorded once in
//! [`PartitionResult::failed`], the cutter is skipped for this piece, and the next applicable
//! cutter is tried. Leaves with a zero length or area are dropped. The pieces are finally
//! deduplicated by exact equality.

use smallvec::SmallVec;

use crate::query::SplitResult;
use crate::utils;

/// The caller-supplied identifier of a cutter.
pub type CutterId = u64;

/// A cutter geometry and its identifier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Cutter<G> {
    /// The identifier reported when a cut with this cutter fails.
    pub id: CutterId,
    /// The cutter geometry.
    pub shape: G,
}

impl<G> Cutter<G> {
    /// Creates a new cutter.
    pub fn new(id: CutterId, shape: G) -> Self {
        Self { id, shape }
    }
}

/// Whether a cutter may be used more than once during one partitioning.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum CutterPolicy {
    /// A cutter is removed from the set the first time a cut with it is attempted.
    ///
    /// A failed cut also removes it: a point lying on a line is reported at most once and never
    /// tried on the other pieces.
    ConsumeOnce,
    /// Every cutter stays available to every branch of the decomposition.
    ReplayAll,
}

/// The result of a partitioning.
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionResult<T> {
    /// The pieces, without duplicates. Their order is not significant.
    pub pieces: Vec<T>,
    /// The ids of the cutters that produced a degenerate cut, each one reported once.
    pub failed: Vec<CutterId>,
}

/// The geometric operations a [`RecursiveCutter`] is parameterized by.
pub trait CutKernel {
    /// The type of the geometry being cut.
    type Piece: Clone + PartialEq;
    /// The type of the cutter geometries.
    type Cutter: PartialEq;

    /// Can `cutter` divide `piece`?
    fn applies(&self, piece: &Self::Piece, cutter: &Self::Cutter) -> bool;

    /// Cuts `piece` with `cutter`.
    fn cut(&self, piece: &Self::Piece, cutter: &Self::Cutter) -> SplitResult<Self::Piece>;

    /// Does `piece` have a zero length or area?
    fn is_degenerate(&self, piece: &Self::Piece) -> bool;
}

/// A piece waiting to be processed, with the cutters applied to its ancestors.
struct WorkItem<T> {
    piece: T,
    applied: SmallVec<[usize; 8]>,
}

/// Decomposes a seed geometry with a set of cutters.
#[derive(Clone, Debug)]
pub struct RecursiveCutter<K> {
    kernel: K,
    policy: CutterPolicy,
}

impl<K: CutKernel> RecursiveCutter<K> {
    /// Creates a recursive cutter with the given kernel and cutter policy.
    pub fn new(kernel: K, policy: CutterPolicy) -> Self {
        Self { kernel, policy }
    }

    /// Partitions `seed` with `cutters`.
    ///
    /// The cutters not applicable to the seed are discarded first, preserving the order of the
    /// others. If none is left, the seed is returned unchanged.
    pub fn partition(
        &self,
        seed: &K::Piece,
        cutters: &[Cutter<K::Cutter>],
    ) -> PartitionResult<K::Piece> {
        let applicable: Vec<&Cutter<K::Cutter>> = cutters
            .iter()
            .filter(|cutter| self.kernel.applies(seed, &cutter.shape))
            .collect();

        self.partition_with(seed, &applicable)
    }

    /// Partitions `seed` with `cutters`, in the given order, without discarding them first.
    pub fn partition_with(
        &self,
        seed: &K::Piece,
        cutters: &[&Cutter<K::Cutter>],
    ) -> PartitionResult<K::Piece> {
        if cutters.is_empty() {
            return PartitionResult {
                pieces: vec![seed.clone()],
                failed: Vec::new(),
            };
        }

        let mut consumed = vec![false; cutters.len()];
        let mut failed = Vec::new();
        let mut pieces = Vec::new();
        let mut stack = vec![WorkItem {
            piece: seed.clone(),
            applied: SmallVec::new(),
        }];

        while let Some(item) = stack.pop() {
            log::trace!(
                "Processing a piece at depth {} ({} pending).",
                item.applied.len(),
                stack.len()
            );

            let mut failed_here: SmallVec<[usize; 4]> = SmallVec::new();
            let mut split = None;

            loop {
                let available = (0..cutters.len()).find(|i| {
                    !consumed[*i]
                        && !failed_here.contains(i)
                        && !item
                            .applied
                            .iter()
                            .any(|j| cutters[*j].shape == cutters[*i].shape)
                        && self.kernel.applies(&item.piece, &cutters[*i].shape)
                });

                let Some(i) = available else {
                    break;
                };

                if self.policy == CutterPolicy::ConsumeOnce {
                    consumed[i] = true;
                }

                match self.kernel.cut(&item.piece, &cutters[i].shape) {
                    SplitResult::Pair(first, second)
                        if !self.kernel.is_degenerate(&first)
                            && !self.kernel.is_degenerate(&second) =>
                    {
                        split = Some((i, first, second));
                        break;
                    }
                    _ => {
                        log::debug!("Cutter {} produced a degenerate cut.", cutters[i].id);

                        if !failed.contains(&cutters[i].id) {
                            failed.push(cutters[i].id);
                        }

                        failed_here.push(i);
                    }
                }
            }

            match split {
                Some((i, first, second)) => {
                    let mut applied = item.applied;
                    applied.push(i);

                    stack.push(WorkItem {
                        piece: second,
                        applied: applied.clone(),
                    });
                    stack.push(WorkItem {
                        piece: first,
                        applied,
                    });
                }
                None => {
                    if self.kernel.is_degenerate(&item.piece) {
                        log::debug!("Dropped a degenerate piece.");
                    } else {
                        pieces.push(item.piece);
                    }
                }
            }
        }

        PartitionResult {
            pieces: utils::dedup_unordered(pieces),
            failed,
        }
    }
}
