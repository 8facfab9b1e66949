use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::RenderConfig;
use crate::error::ConfigError;
use crate::render::TextRenderer;
use crate::session::GameSession;
use crate::types::Position;

#[wasm_bindgen]
pub struct ReversiGame {
    session: GameSession,
    renderer: Rc<RefCell<TextRenderer>>,
}

#[wasm_bindgen]
impl ReversiGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ReversiGame {
        Self::from_config(RenderConfig::default())
    }

    /// Builds a game whose text renderer uses `config`, a plain object with
    /// any subset of the [`RenderConfig`] fields.
    pub fn with_config(config: JsValue) -> Result<ReversiGame, JsError> {
        let config: RenderConfig = if config.is_undefined() || config.is_null() {
            RenderConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|err| ConfigError::Decode(err.to_string()))?
        };
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Plays the side to move at `(row, col)` and returns the new state.
    pub fn place(&mut self, row: u8, col: u8) -> Result<JsValue, JsError> {
        self.session.on_cell_chosen(Position::new(row, col))?;
        self.state()
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.to_game_state())
    }

    /// `null` until the game is over.
    pub fn result(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.to_game_result())
    }

    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.legal_moves())
    }

    pub fn render_text(&self) -> String {
        self.renderer.borrow().frame().to_string()
    }

    pub fn status_text(&self) -> String {
        self.renderer.borrow().message().to_string()
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }
}

impl ReversiGame {
    fn from_config(config: RenderConfig) -> Self {
        let renderer = Rc::new(RefCell::new(TextRenderer::new(config)));
        let mut session = GameSession::new();
        session.subscribe(Box::new(renderer.clone()));
        Self { session, renderer }
    }
}

impl Default for ReversiGame {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value
        .serialize(&serializer)
        .map_err(|err| JsError::new(&err.to_string()))
}
