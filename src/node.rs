//! Search nodes and the cost model shared by G and H.
use itertools::Itertools;

use crate::geometry::{NodeKey, Point};
use crate::{C, D};

/// Where a node currently lives. Undiscovered positions have no node at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    Open,
    Closed,
}

/// A discovered position together with its cost bookkeeping. Parents are indices into the
/// arena owned by the running search, so the parent links form a tree rooted at the start.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub point: Point,
    pub g: f64,
    pub h: f64,
    pub parent: Option<usize>,
    pub version: u32,
    pub state: NodeState,
    queued: bool,
}

impl SearchNode {
    pub fn new(point: Point) -> SearchNode {
        SearchNode {
            point,
            g: 0.0,
            h: 0.0,
            parent: None,
            version: 0,
            state: NodeState::Open,
            queued: false,
        }
    }
    pub fn key(&self) -> NodeKey {
        self.point.key()
    }
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
    pub fn is_queued(&self) -> bool {
        self.queued
    }
    /// Records that an entry carrying the current version has been pushed to the queue.
    pub fn mark_queued(&mut self) {
        self.queued = true;
    }
    pub fn update_h(&mut self, goal: &Point, step: f64) {
        self.h = calc_h(&self.point, goal, step);
    }
    /// Sets G to `new_g`, or to the cost via `parent` when none is given. Any revision made
    /// after the node has been queued bumps its version, invalidating older queue entries.
    pub fn update_g(&mut self, new_g: Option<f64>, parent: Option<&SearchNode>) {
        let g = match (new_g, parent) {
            (Some(g), _) => g,
            (None, Some(parent)) => calc_g(&self.point, parent),
            (None, None) => 0.0,
        };
        if self.queued {
            self.version = self.version.wrapping_add(1);
        }
        self.g = g;
    }
}

/// Cost of a single move: [C] when the two points share an axis, [D] otherwise.
pub fn move_cost(from: &Point, to: &Point) -> f64 {
    if from.x == to.x || from.y == to.y {
        C
    } else {
        D
    }
}

/// G of `point` when reached through `parent`.
pub fn calc_g(point: &Point, parent: &SearchNode) -> f64 {
    parent.g + move_cost(&parent.point, point)
}

/// Manhattan distance to the goal measured in steps, scaled by [C] so it is commensurate with G.
pub fn calc_h(point: &Point, goal: &Point, step: f64) -> f64 {
    C * point.manhattan_distance(goal) / step
}

/// Total cost of following `path` under the move cost model.
pub fn path_cost(path: &[Point]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| move_cost(a, b))
        .sum()
}

/// Euclidean length of `path`.
pub fn path_length(path: &[Point]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| a.distance(b))
        .sum()
}
