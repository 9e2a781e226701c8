//! Browser bindings.
//!
//! `MemoryGameEngine` is the object the page holds. The page passes
//! `performance.now()` into every call that can change the board and polls
//! [`tick`](MemoryGameEngine::tick) from `requestAnimationFrame` (or a
//! timeout set to [`next_deadline`](MemoryGameEngine::next_deadline)) so
//! delayed resolutions fire on time.
//!
//! ```js
//! import init, { MemoryGameEngine } from "./pkg/picmatch.js";
//!
//! await init();
//! const game = new MemoryGameEngine();
//! const outcome = game.click(3, performance.now());
//! render(game.get_view());
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::core::{GameConfig, Millis};
use crate::session::GameController;
use crate::view::{AssetStatus, BoardView};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Serialize for JavaScript, logging instead of failing.
fn to_js<T: Serialize>(value: &T, what: &str) -> JsValue {
    match serde_wasm_bindgen::to_value(value) {
        Ok(val) => val,
        Err(e) => {
            log::error!("{what} serialization failed: {e:?}");
            JsValue::NULL
        }
    }
}

/// The game engine exposed to the page.
#[wasm_bindgen]
pub struct MemoryGameEngine {
    controller: GameController,
    assets: AssetStatus,
}

#[wasm_bindgen]
impl MemoryGameEngine {
    /// Create a game over the default image set.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Result<MemoryGameEngine, String> {
        let mut config = GameConfig::default();
        config.seed = seed;
        Self::build(config)
    }

    /// Create a game from a JSON config, e.g. `{ images: [...], seed: 7 }`.
    /// Missing fields take their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_js: JsValue) -> Result<MemoryGameEngine, String> {
        let config: GameConfig = serde_wasm_bindgen::from_value(config_js)
            .map_err(|e| format!("Failed to parse config: {e:?}"))?;
        Self::build(config)
    }

    fn build(config: GameConfig) -> Result<MemoryGameEngine, String> {
        let controller = GameController::new(config).map_err(|e| e.to_string())?;
        Ok(Self {
            controller,
            assets: AssetStatus::new(),
        })
    }

    /// Deal a new game. Pending resolutions of the old one are cancelled.
    /// Returns the new session id.
    #[wasm_bindgen]
    pub fn new_game(&mut self) -> u64 {
        self.controller.start_new_game().raw()
    }

    /// Click the card at `index`. Returns the outcome as JSON.
    #[wasm_bindgen]
    pub fn click(&mut self, index: usize, now: f64) -> JsValue {
        let outcome = self
            .controller
            .handle_card_click(index, Millis::from_f64(now));
        to_js(&outcome, "click outcome")
    }

    /// Fire due resolutions and return every event since the last call.
    #[wasm_bindgen]
    pub fn tick(&mut self, now: f64) -> JsValue {
        self.controller.advance(Millis::from_f64(now));
        let events = self.controller.drain_events();
        to_js(&events, "events")
    }

    /// Get the current board as JSON.
    #[wasm_bindgen]
    pub fn get_view(&self) -> JsValue {
        let view = BoardView::from_session(self.controller.session(), &self.assets);
        to_js(&view, "view")
    }

    /// Record that the image of the card at `index` failed to load.
    ///
    /// Every card showing that image renders its fallback face from now on.
    /// Returns false for an unknown index or an already reported image.
    #[wasm_bindgen]
    pub fn report_image_error(&mut self, index: usize) -> bool {
        let Some(card) = self.controller.session().card(index) else {
            return false;
        };
        let image = card.image.clone();
        let fresh = self.assets.report_failure(image.as_str());
        if fresh {
            log::warn!("Image {image} failed to load");
        }
        fresh
    }

    /// Forget every reported image failure, e.g. after the page reloads
    /// its assets.
    #[wasm_bindgen]
    pub fn clear_image_errors(&mut self) {
        self.assets.clear();
    }

    /// Accepted clicks of the current game, oldest first, as JSON.
    #[wasm_bindgen]
    pub fn get_history(&self) -> JsValue {
        let history: Vec<_> = self.controller.session().history().iter().copied().collect();
        to_js(&history, "history")
    }

    /// Host time of the next scheduled resolution, if any.
    #[wasm_bindgen]
    pub fn next_deadline(&self) -> Option<f64> {
        self.controller.next_deadline().map(|at| at.raw() as f64)
    }

    #[wasm_bindgen(getter)]
    pub fn won(&self) -> bool {
        self.controller.session().won()
    }

    #[wasm_bindgen(getter)]
    pub fn moves(&self) -> u32 {
        self.controller.session().move_count()
    }

    /// The board as text, for the console.
    #[wasm_bindgen]
    pub fn render_text(&self) -> String {
        BoardView::from_session(self.controller.session(), &self.assets).to_text(4)
    }
}
