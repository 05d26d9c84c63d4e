use serde::{Deserialize, Serialize};

use crate::engine::GameState;

/// Level data as stored in level files and as handed back by [`Engine::snapshot`](crate::Engine::snapshot).
///
/// ```json
/// {
///   "rows": 2, "columns": 3, "state": "playing",
///   "numberOfSwaps": 0, "maxNumberOfSwaps": 3,
///   "connectors": ["sc-2", "rc-2-5", "rc-1-4", "rc-1-6", "rc-3-5", "ec-6"]
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelData {
    pub rows: usize,
    pub columns: usize,
    pub state: GameState,
    pub number_of_swaps: usize,
    pub max_number_of_swaps: usize,
    pub connectors: Vec<String>,
}
