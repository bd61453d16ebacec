//! Connector routing between placed tables.

use crate::layout::LayoutNode;

/// Route from the right-center of `from` to the left-center of `to` with one
/// vertical segment halfway between the two connection points.
///
/// A table referencing itself takes the same route, crossing its own box.
pub fn route_orthogonal(from: &LayoutNode, to: &LayoutNode) -> Vec<(f64, f64)> {
    let from_x = from.x + from.width;
    let from_y = from.y + from.height / 2.0;
    let to_x = to.x;
    let to_y = to.y + to.height / 2.0;
    let mid_x = (from_x + to_x) / 2.0;

    vec![
        (from_x, from_y),
        (mid_x, from_y),
        (mid_x, to_y),
        (to_x, to_y),
    ]
}

/// Midpoint of the vertical segment (second to third waypoint).
pub fn label_anchor(waypoints: &[(f64, f64)]) -> Option<(f64, f64)> {
    match waypoints {
        [_, (x1, y1), (x2, y2), _] => Some(((x1 + x2) / 2.0, (y1 + y2) / 2.0)),
        _ => None,
    }
}

/// SVG path data through the waypoints.
pub fn path_data(waypoints: &[(f64, f64)]) -> String {
    waypoints
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{} {} {}", cmd, x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
