/// Fuzzes the search by checking for many random obstacle layouts that a path is found exactly
/// when the goal can be reached by flood-filling the step lattice from the start, and that every
/// path found is well formed. All route types are tested.
use itertools::Itertools;
use rand::prelude::*;
use std::collections::{HashSet, VecDeque};
use step_pathfinding::{
    path_cost, AStar, BoundingBox, NodeKey, Point, RouteType, SearchOptions, SearchState,
};

const STEP: f64 = 10.0;
const N: i32 = 12;

fn random_blocks(rng: &mut StdRng, start: &Point, end: &Point) -> Vec<BoundingBox> {
    let extent = N as f64 * STEP;
    let mut blocks = Vec::new();
    while blocks.len() < 6 {
        let min_x = rng.gen_range(-5.0..extent);
        let min_y = rng.gen_range(-5.0..extent);
        let b = BoundingBox::new(
            min_x,
            min_x + rng.gen_range(2.0..30.0),
            min_y,
            min_y + rng.gen_range(2.0..30.0),
        );
        if !b.contains(start) && !b.contains(end) {
            blocks.push(b);
        }
    }
    blocks
}

fn boundary() -> BoundingBox {
    BoundingBox::new(-5.0, N as f64 * STEP + 5.0, -5.0, N as f64 * STEP + 5.0)
}

/// Breadth-first flood over the lattice; the goal counts as reached once any free lattice
/// neighbour comes within one step of it.
fn reachable(options: &SearchOptions, astar: &AStar) -> bool {
    let mut seen: HashSet<NodeKey> = HashSet::new();
    let mut queue = VecDeque::from([options.start]);
    seen.insert(options.start.key());
    while let Some(p) = queue.pop_front() {
        for n in options.route_type.neighbourhood(&p, options.step) {
            if !astar.is_free(&n) || !seen.insert(n.key()) {
                continue;
            }
            if n.distance_squared(&options.end) < options.step * options.step {
                return true;
            }
            queue.push_back(n);
        }
    }
    false
}

fn visualize(options: &SearchOptions, path: &[Point]) {
    let on_path: HashSet<NodeKey> = path.iter().map(|p| p.key()).collect();
    for y in (0..=N).rev() {
        for x in 0..=N {
            let p = Point::new(x as f64 * STEP, y as f64 * STEP);
            if p == options.start {
                print!("S");
            } else if p == options.end {
                print!("G");
            } else if options.block_area.iter().any(|b| b.contains(&p)) {
                print!("#");
            } else if on_path.contains(&p.key()) {
                print!("*");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N_MAPS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    for route_type in [RouteType::All, RouteType::Orthometric, RouteType::Diagonal] {
        for _ in 0..N_MAPS {
            let start = Point::new(0.0, 0.0);
            let end = Point::new(N as f64 * STEP, N as f64 * STEP);
            let options = SearchOptions::new(start, end)
                .with_route_type(route_type)
                .with_block_area(random_blocks(&mut rng, &start, &end))
                .with_boundary_area(boundary());
            let mut astar = AStar::new(options.clone()).unwrap();
            let path = astar.search();
            let expected = reachable(&options, &astar);
            if path.is_empty() == expected {
                visualize(&options, &path);
            }
            assert_eq!(!path.is_empty(), expected);
            if path.is_empty() {
                assert_eq!(astar.state(), SearchState::Exhausted);
                continue;
            }
            assert_eq!(astar.state(), SearchState::Found);
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            for p in &path {
                assert!(astar.is_free(p), "{p} is not free");
            }
            for (a, b) in path.iter().tuple_windows() {
                match route_type {
                    RouteType::Orthometric => assert!(a.x == b.x || a.y == b.y),
                    RouteType::Diagonal => assert!(a.x != b.x && a.y != b.y),
                    RouteType::All => {}
                }
            }
            assert_eq!(astar.cost(), Some(path_cost(&path)));
            let unique: HashSet<NodeKey> = path.iter().map(|p| p.key()).collect();
            assert_eq!(unique.len(), path.len());
            // Searching again must not depend on leftovers from the first run.
            assert_eq!(astar.search(), path);
        }
    }
}

#[test]
fn fuzz_lazy_invalidation_keeps_queue_consistent() {
    const N_MAPS: usize = 300;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_MAPS {
        let start = Point::new(rng.gen_range(0..=N) as f64 * STEP, 0.0);
        let end = Point::new(
            rng.gen_range(0.0..N as f64 * STEP),
            rng.gen_range(0.0..N as f64 * STEP),
        );
        let options = SearchOptions::new(start, end)
            .with_block_area(random_blocks(&mut rng, &start, &end))
            .with_boundary_area(boundary());
        let mut astar = AStar::new(options).unwrap();
        let path = astar.search();
        let stats = astar.stats();
        // Every stale entry was pushed by a relaxation.
        assert!(stats.stale_skipped <= stats.relaxed);
        assert!(stats.expanded <= stats.discovered);
        if !path.is_empty() {
            assert_eq!(path.last(), Some(&end));
        } else {
            assert_eq!(astar.state(), SearchState::Exhausted);
        }
    }
}
