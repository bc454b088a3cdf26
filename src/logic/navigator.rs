use log::debug;

use crate::models::{grid::GridMap, Cell};

/// Ordered cells walked from the start; the first element is always the start.
pub type Route = Vec<Cell>;

/// Greedy walk from `start` towards `goal`, one orthogonal step at a time.
///
/// At every step the moves are tried in a fixed order and the first one that
/// heads towards the goal onto a walkable tile is taken:
/// row down, row up, column right, column left.
/// There is no backtracking: when none of them applies the walk stops where it
/// is and the returned route ends short of the goal.
///
/// Start and goal are not bounds-checked. An out-of-map start still walks,
/// entering the map only if its first step lands on a walkable tile.
pub fn find_route(grid: &GridMap, start: Cell, goal: Cell) -> Route {
    let mut route = vec![start];
    let mut current = start;

    // Each step moves strictly closer to the goal, so the loop runs at most
    // `start.distance(&goal)` times. A step along an axis is only taken while
    // the goal lies beyond it, hence the +1/-1 never overflow.
    while current != goal {
        let next = if current.row < goal.row && grid.is_walkable(current.row + 1, current.col) {
            Cell::new(current.row + 1, current.col)
        } else if current.row > goal.row && grid.is_walkable(current.row - 1, current.col) {
            Cell::new(current.row - 1, current.col)
        } else if current.col < goal.col && grid.is_walkable(current.row, current.col + 1) {
            Cell::new(current.row, current.col + 1)
        } else if current.col > goal.col && grid.is_walkable(current.row, current.col - 1) {
            Cell::new(current.row, current.col - 1)
        } else {
            break;
        };
        current = next;
        route.push(current);
    }

    if reaches_goal(&route, goal) {
        debug!("route {start:?} -> {goal:?}: {} cell(s), goal reached", route.len());
    } else {
        debug!(
            "route {start:?} -> {goal:?}: {} cell(s), stuck at {current:?} {} step(s) from goal",
            route.len(),
            current.distance(&goal)
        );
    }
    route
}

/// A route is complete only when it ends on the goal.
pub fn reaches_goal(route: &[Cell], goal: Cell) -> bool {
    route.last() == Some(&goal)
}
