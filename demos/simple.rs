use step_pathfinding::{AStar, Point, RouteType, SearchOptions};

// A path is found between two points on an empty plane using only straight moves.
fn main() {
    let options = SearchOptions::new(Point::new(0.0, 0.0), Point::new(60.0, 40.0))
        .with_route_type(RouteType::Orthometric);
    let mut astar = AStar::new(options).unwrap();
    let path = astar.search();
    println!("A path has been found:");
    for p in path {
        println!("{}", p);
    }
    println!("Cost: {:?}", astar.cost());
}
