use itertools::Itertools;
use ndarray::Array2;

use crate::board::Board;
use crate::location::Location;

/// Flood-fill outward from `start`, marking every regular tile that joins the start tile's path as active.
///
/// A cell and its neighbor are joined when their facing ports are both open (see [`HexStep::connects`](crate::shape::HexStep::connects)).
/// The end tile is a sink: it is marked as reached but never explored further.
/// Returns whether the end tile was reached.
///
/// Connection states are only ever raised, so callers should [`reset_to_potential`](Board::reset_to_potential) first.
/// Running twice on the same board gives the same result.
pub fn propagate(board: &mut Board, start: Location) -> bool {
    let mut visited = Array2::from_elem(board.cells.raw_dim(), false);
    let mut stack = vec![start];
    let mut reached = false;

    while let Some(location) = stack.pop() {
        let Some(&tile) = board.get(location) else {
            continue;
        };
        if tile.is_end() {
            reached = true;
            continue;
        }
        if visited[location.as_index()] {
            continue;
        }
        visited[location.as_index()] = true;

        let connected = board.neighbors_of(location).into_iter()
            .filter(|(direction, neighbor)| board.get(*neighbor)
                .is_some_and(|other| direction.connects(&tile, other)))
            .map(|(_, neighbor)| neighbor)
            .collect_vec();

        if connected.is_empty() {
            continue;
        }

        if let Some(tile) = board.get_mut(location) {
            tile.mark_active();
        }
        for neighbor in &connected {
            if let Some(other) = board.get_mut(*neighbor) {
                other.mark_active();
                reached |= other.is_end();
            }
        }

        // reversed so neighbors pop in left, right, down-left, down-right, up-left, up-right order
        stack.extend(connected.into_iter().rev());
    }

    log::trace!("propagated from {:?}, end reached: {}", start, reached);
    reached
}
