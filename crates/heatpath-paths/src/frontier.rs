use std::collections::{BinaryHeap, VecDeque};

/// Order in which pending states are expanded.
///
/// Both disciplines apply the same move rules and find the same cost; they
/// differ only in how much work they do.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Frontier {
    /// Binary heap ordered by label: Dijkstra over the augmented graph. The
    /// first goal state popped is optimal and ends the search.
    #[default]
    Priority,
    /// First-in first-out label-correcting relaxation, run until no label
    /// improves.
    Fifo,
}

/// Reference into the label array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The pending states of one search call.
pub(crate) enum OpenList {
    Heap(BinaryHeap<NodeRef>),
    Queue(VecDeque<NodeRef>),
}

impl OpenList {
    pub(crate) fn new(frontier: Frontier) -> Self {
        match frontier {
            Frontier::Priority => Self::Heap(BinaryHeap::new()),
            Frontier::Fifo => Self::Queue(VecDeque::new()),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, idx: usize, f: u64) {
        let node = NodeRef { idx, f };
        match self {
            Self::Heap(h) => h.push(node),
            Self::Queue(q) => q.push_back(node),
        }
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        match self {
            Self::Heap(h) => h.pop(),
            Self::Queue(q) => q.pop_front(),
        }
    }

    /// Whether the first goal state popped is already optimal.
    #[inline]
    pub(crate) fn settles_on_pop(&self) -> bool {
        matches!(self, Self::Heap(_))
    }
}
