use step_pathfinding::{AStar, BoundingBox, Point, SearchOptions};

// In this example a path is found around two walls inside a bounded area
// ..........G
// ....#......
// .#..#......
// .#..#......
// .#.........
// S#.........
// S marks the start, G marks the goal and # the block areas.
fn main() {
    let options = SearchOptions::new(Point::new(0.0, 0.0), Point::new(100.0, 50.0))
        .with_block(BoundingBox::new(5.0, 15.0, -5.0, 35.0))
        .with_block(BoundingBox::new(35.0, 45.0, 15.0, 45.0))
        .with_boundary_area(BoundingBox::new(0.0, 100.0, 0.0, 50.0))
        .with_validate_final_leg(true);
    let mut astar = AStar::new(options).unwrap();
    let path = astar.search();
    if path.is_empty() {
        println!("No path: {:?}", astar.state());
        return;
    }
    println!("Waypoints:");
    for p in &path {
        println!("{}", p);
    }
    println!("{:?}", astar.stats());
}
