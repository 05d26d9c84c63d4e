use crate::board::Board;

/// Boards as they were before each accepted swap, most recent last.
#[derive(Clone, Debug, Default)]
pub(crate) struct History {
    snapshots: Vec<Board>,
}

impl History {
    pub(crate) fn push(&mut self, board: Board) {
        self.snapshots.push(board);
    }

    pub(crate) fn pop(&mut self) -> Option<Board> {
        self.snapshots.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
