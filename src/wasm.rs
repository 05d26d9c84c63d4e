//! Browser bindings. Level data crosses the boundary as JSON strings in the [`LevelData`](crate::LevelData) layout.

use js_sys::Error;
use wasm_bindgen::prelude::*;

use crate::engine::Engine;

/// A game handle for JavaScript callers. Rejected operations throw an `Error` carrying the reason.
#[wasm_bindgen(js_name = Game)]
pub struct WasmGame {
    engine: Engine,
}

fn snapshot_json(engine: &Engine) -> Result<String, Error> {
    serde_json::to_string(&engine.snapshot()).map_err(|err| Error::new(&err.to_string()))
}

#[wasm_bindgen(js_class = Game)]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(level_json: &str) -> Result<WasmGame, Error> {
        Engine::from_json(level_json)
            .map(|engine| Self { engine })
            .map_err(|err| Error::new(&err.to_string()))
    }

    /// Swap two tiles by index and return the new state, `"playing"`, `"won"` or `"lost"`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<String, Error> {
        self.engine.swap(a, b)
            .map(|state| state.to_string())
            .map_err(|err| Error::new(&err.to_string()))
    }

    #[wasm_bindgen(js_name = swapCodes)]
    pub fn swap_codes(&mut self, a: &str, b: &str) -> Result<String, Error> {
        self.engine.swap_codes(a, b)
            .map(|state| state.to_string())
            .map_err(|err| Error::new(&err.to_string()))
    }

    pub fn undo(&mut self) -> Result<String, Error> {
        self.engine.undo()
            .map(|state| state.to_string())
            .map_err(|err| Error::new(&err.to_string()))
    }

    /// The current game as level JSON, for rendering.
    pub fn snapshot(&self) -> Result<String, Error> {
        snapshot_json(&self.engine)
    }

    /// Whether a level JSON document would load.
    #[wasm_bindgen(js_name = validate)]
    pub fn validate(level_json: &str) -> Result<(), Error> {
        Engine::from_json(level_json)
            .map(|_| ())
            .map_err(|err| Error::new(&err.to_string()))
    }
}
