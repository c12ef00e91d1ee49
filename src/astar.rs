//! The A* driver. Nodes are discovered lazily around the expanded node at exact floating
//! coordinates, so there is no grid to allocate up front; the search space is whatever the block
//! and boundary areas leave reachable.
use log::{debug, info, trace, warn};

use crate::context::{SearchContext, SearchStats};
use crate::error::Result;
use crate::geometry::Point;
use crate::node::{calc_g, path_cost, SearchNode};
use crate::options::SearchOptions;

/// Lifecycle of an [AStar] instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// Constructed, [AStar::search] not called yet.
    Idle,
    /// Start or end lies in a block area. Terminal, no search is ever run.
    Blocked,
    Searching,
    /// The last search reached the goal.
    Found,
    /// The last search ran out of open nodes without reaching the goal.
    Exhausted,
    /// The last search hit [SearchOptions::max_expansions].
    LimitReached,
}

/// Point-to-point search over a fixed-step lattice that is generated on the fly.
///
/// Moves cost [C](crate::C) when axis-aligned and [D](crate::D) when diagonal. The heuristic is
/// the Manhattan distance to the goal in steps, scaled by [C](crate::C). As soon as a generated
/// neighbour lies strictly within one step of the goal it is linked to the goal and the search
/// ends, so the last leg of a path may be shorter than a step and point in any direction.
pub struct AStar {
    options: SearchOptions,
    context: SearchContext,
    state: SearchState,
    cost: Option<f64>,
}

impl AStar {
    /// Validates the options and checks the endpoints against the block areas. Endpoints inside
    /// a block put the search in [SearchState::Blocked] rather than failing.
    pub fn new(options: SearchOptions) -> Result<AStar> {
        options.validate()?;
        let blocked = options
            .block_area
            .iter()
            .any(|b| b.contains(&options.start) || b.contains(&options.end));
        let state = if blocked {
            info!(
                "{} or {} lies in a block area, search disabled",
                options.start, options.end
            );
            SearchState::Blocked
        } else {
            SearchState::Idle
        };
        debug!(
            "Search from {} to {}: step {}, {} route, {} block areas, boundary {:?}",
            options.start,
            options.end,
            options.step,
            options.route_type,
            options.block_area.len(),
            options.boundary_area
        );
        Ok(AStar {
            options,
            context: SearchContext::new(),
            state,
            cost: None,
        })
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
    pub fn state(&self) -> SearchState {
        self.state
    }
    pub fn is_blocked(&self) -> bool {
        self.state == SearchState::Blocked
    }
    /// Counters from the last call to [search](Self::search).
    pub fn stats(&self) -> SearchStats {
        self.context.stats
    }
    /// Cost of the last path found, under the same model as G.
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    /// Whether `point` is outside every block area and inside the boundary, if there is one.
    pub fn is_free(&self, point: &Point) -> bool {
        !self.options.block_area.iter().any(|b| b.contains(point))
            && self
                .options
                .boundary_area
                .map_or(true, |boundary| boundary.contains(point))
    }

    /// Whether `point` may still be used by the current search: free and not yet closed.
    pub fn can_reach(&self, point: &Point) -> bool {
        !self.context.is_closed(&point.key()) && self.is_free(point)
    }

    /// Runs the search to completion and returns the waypoints from start to end, or an empty
    /// vector if the search is blocked or no path exists. Every call starts from scratch.
    pub fn search(&mut self) -> Vec<Point> {
        if self.is_blocked() {
            return Vec::new();
        }
        self.context.clear();
        self.cost = None;
        let SearchOptions {
            start, end, step, ..
        } = self.options;

        if start.distance_squared(&end) < step * step && self.accepts_final_leg(&start) {
            let path = if start.key() == end.key() {
                vec![start]
            } else {
                vec![start, end]
            };
            info!("{} is within one step of {}, no search needed", end, start);
            self.cost = Some(path_cost(&path));
            self.state = SearchState::Found;
            return path;
        }

        self.state = SearchState::Searching;
        let mut start_node = SearchNode::new(start);
        start_node.update_h(&end, step);
        self.context.insert_open(start_node);

        while self.context.open_len() > 0 {
            if let Some(limit) = self.options.max_expansions {
                if self.context.stats.expanded >= limit {
                    warn!(
                        "Gave up on path from {} to {} after {} expansions",
                        start, end, limit
                    );
                    self.state = SearchState::LimitReached;
                    return Vec::new();
                }
            }
            let Some(current) = self.context.poll() else {
                warn!(
                    "Queue drained with {} open nodes left",
                    self.context.open_len()
                );
                break;
            };
            self.context.stats.expanded += 1;
            if let Some(last) = self.expand(current) {
                let path = self.context.reconstruct_path(last);
                let cost = self.context.node(last).g;
                info!(
                    "Found path from {} to {}: {} waypoints, cost {}",
                    start,
                    end,
                    path.len(),
                    cost
                );
                debug!("{:?}", self.context.stats);
                self.cost = Some(cost);
                self.state = SearchState::Found;
                return path;
            }
            self.context.close(current);
        }

        warn!("No path from {} to {}, open set exhausted", start, end);
        debug!("{:?}", self.context.stats);
        self.state = SearchState::Exhausted;
        Vec::new()
    }

    /// Generates and relaxes the neighbours of `current`. Returns the index of the final node
    /// if one of them reached the goal.
    fn expand(&mut self, current: usize) -> Option<usize> {
        let SearchOptions { end, step, .. } = self.options;
        let cur_point = self.context.node(current).point;
        trace!(
            "Expanding {} (g {}, f {})",
            cur_point,
            self.context.node(current).g,
            self.context.node(current).f()
        );
        for candidate in self.options.route_type.neighbourhood(&cur_point, step) {
            if !self.can_reach(&candidate) {
                continue;
            }
            if candidate.distance_squared(&end) < step * step && self.accepts_final_leg(&candidate)
            {
                let last = self.context.attach(candidate, current);
                if candidate.key() == end.key() {
                    return Some(last);
                }
                return Some(self.context.attach(end, last));
            }
            match self.context.index_of(&candidate.key()) {
                None => {
                    let mut node = SearchNode::new(candidate);
                    node.parent = Some(current);
                    node.update_g(None, Some(self.context.node(current)));
                    node.update_h(&end, step);
                    self.context.insert_open(node);
                }
                Some(ix) => {
                    let new_g = calc_g(&candidate, self.context.node(current));
                    if new_g < self.context.node(ix).g {
                        let node = self.context.node_mut(ix);
                        node.parent = Some(current);
                        node.update_g(Some(new_g), None);
                        self.context.push(ix);
                        self.context.stats.relaxed += 1;
                    }
                }
            }
        }
        None
    }

    fn accepts_final_leg(&self, from: &Point) -> bool {
        if !self.options.validate_final_leg {
            return true;
        }
        let end = &self.options.end;
        !self
            .options
            .block_area
            .iter()
            .any(|b| b.intersects_segment(from, end))
            && self
                .options
                .boundary_area
                .map_or(true, |boundary| boundary.contains(end))
    }
}
