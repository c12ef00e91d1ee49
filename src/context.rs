//! Per-search bookkeeping: the node arena keyed by position, the open/closed partition and the
//! lazily invalidated priority queue.
//!
//! The queue never removes or reorders an entry once pushed. When a cheaper path to an open node
//! is found the node's version is bumped and a fresh entry is pushed; entries carrying an older
//! version are stale and are dropped when they surface in [SearchContext::poll].
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::trace;
use std::cmp::Ordering;

use crate::geometry::{NodeKey, Point};
use crate::heap::MinHeap;
use crate::node::{NodeState, SearchNode};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Snapshot of a node taken when it was pushed. `f` is captured rather than read through the
/// arena so that revising a node never changes the position of entries already in the heap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueueEntry {
    pub index: usize,
    pub version: u32,
    pub f: f64,
}

fn by_estimated_cost(a: &QueueEntry, b: &QueueEntry) -> Ordering {
    a.f.total_cmp(&b.f)
}

type EntryOrder = fn(&QueueEntry, &QueueEntry) -> Ordering;

/// Counters collected while a search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved from the open to the closed set, plus the node whose expansion reached the goal.
    pub expanded: usize,
    /// Nodes created for positions seen for the first time.
    pub discovered: usize,
    /// Open nodes whose cost was lowered after discovery.
    pub relaxed: usize,
    /// Superseded queue entries thrown away while polling.
    pub stale_skipped: usize,
    pub peak_queue_len: usize,
}

pub struct SearchContext {
    nodes: FxIndexMap<NodeKey, SearchNode>,
    queue: MinHeap<QueueEntry, EntryOrder>,
    open_count: usize,
    pub stats: SearchStats,
}

impl Default for SearchContext {
    fn default() -> SearchContext {
        SearchContext::new()
    }
}

impl SearchContext {
    pub fn new() -> SearchContext {
        SearchContext {
            nodes: FxIndexMap::default(),
            queue: MinHeap::new(by_estimated_cost as EntryOrder),
            open_count: 0,
            stats: SearchStats::default(),
        }
    }

    /// Drops every node and queue entry so the next search starts from scratch.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.queue.clear();
        self.open_count = 0;
        self.stats = SearchStats::default();
    }

    pub fn open_len(&self) -> usize {
        self.open_count
    }
    pub fn closed_len(&self) -> usize {
        self.nodes
            .values()
            .filter(|n| n.state == NodeState::Closed)
            .count()
    }
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
    pub fn index_of(&self, key: &NodeKey) -> Option<usize> {
        self.nodes.get_index_of(key)
    }
    pub fn state_of(&self, key: &NodeKey) -> Option<NodeState> {
        self.nodes.get(key).map(|n| n.state)
    }
    pub fn is_closed(&self, key: &NodeKey) -> bool {
        self.state_of(key) == Some(NodeState::Closed)
    }
    pub fn node(&self, index: usize) -> &SearchNode {
        &self.nodes[index]
    }
    pub fn node_mut(&mut self, index: usize) -> &mut SearchNode {
        &mut self.nodes[index]
    }

    /// Adds a newly discovered node to the open set and queues it.
    pub fn insert_open(&mut self, node: SearchNode) -> usize {
        let Vacant(e) = self.nodes.entry(node.key()) else {
            unreachable!("{} discovered twice", node.point);
        };
        let index = e.index();
        e.insert(node);
        self.open_count += 1;
        self.stats.discovered += 1;
        self.push(index);
        index
    }

    /// Queues the node's current version. Earlier entries for the node become stale.
    pub fn push(&mut self, index: usize) {
        let node = &mut self.nodes[index];
        node.mark_queued();
        self.queue.push(QueueEntry {
            index,
            version: node.version,
            f: node.f(),
        });
        self.stats.peak_queue_len = self.stats.peak_queue_len.max(self.queue.len());
    }

    /// Pops entries until one still describes an open node's current cost.
    pub fn poll(&mut self) -> Option<usize> {
        while let Some(entry) = self.queue.pop() {
            let node = &self.nodes[entry.index];
            if node.version == entry.version && node.state == NodeState::Open {
                return Some(entry.index);
            }
            trace!(
                "Dropping queue entry for {} (queued version {}, current {})",
                node.point,
                entry.version,
                node.version
            );
            self.stats.stale_skipped += 1;
        }
        None
    }

    /// Finalizes an open node; it is never reconsidered afterwards.
    pub fn close(&mut self, index: usize) {
        let node = &mut self.nodes[index];
        if node.state == NodeState::Open {
            node.state = NodeState::Closed;
            self.open_count -= 1;
        }
    }

    /// Links `point` to `parent` without queuing it, creating the node if needed. Used for the
    /// final leg of a path, after which the search stops.
    pub fn attach(&mut self, point: Point, parent: usize) -> usize {
        let parent_node = self.nodes[parent].clone();
        let index = match self.nodes.entry(point.key()) {
            Vacant(e) => {
                let index = e.index();
                e.insert(SearchNode::new(point));
                self.open_count += 1;
                index
            }
            Occupied(e) => e.index(),
        };
        let node = &mut self.nodes[index];
        node.parent = Some(parent);
        node.update_g(None, Some(&parent_node));
        index
    }

    /// Follows parent links from `end` back to the root and returns the points root first.
    pub fn reconstruct_path(&self, end: usize) -> Vec<Point> {
        let mut path: Vec<Point> = std::iter::successors(Some(end), |&i| self.nodes[i].parent)
            .map(|i| self.nodes[i].point)
            .collect();
        path.reverse();
        path
    }
}
