#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use reversi_rules::wasm::ReversiGame;
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::*;

fn accepted<T>(result: Result<T, JsError>) -> T {
    match result {
        Ok(value) => value,
        Err(_) => panic!("call was rejected"),
    }
}

fn field(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn opening_move_updates_state() {
    let mut game = ReversiGame::new();

    let state = accepted(game.place(2, 3));

    assert_eq!(field(&state, "black_count").as_f64(), Some(4.0));
    assert_eq!(field(&state, "white_count").as_f64(), Some(1.0));
    assert_eq!(field(&state, "empty_count").as_f64(), Some(59.0));
    assert_eq!(field(&state, "current_player").as_f64(), Some(2.0));
    assert_eq!(
        field(&field(&state, "status"), "kind").as_string().as_deref(),
        Some("in_progress")
    );
    assert_eq!(game.status_text(), "White to move. Black 4, White 1");
}

#[wasm_bindgen_test]
fn illegal_click_raises_and_keeps_state() {
    let mut game = ReversiGame::new();

    assert!(game.place(0, 0).is_err());
    assert!(game.place(9, 9).is_err());

    let state = accepted(game.state());
    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
    assert!(accepted(game.result()).is_null());
}

#[wasm_bindgen_test]
fn partial_config_overrides_glyphs() {
    let config = js_sys::Object::new();
    Reflect::set(&config, &"black".into(), &"X".into()).unwrap();
    Reflect::set(&config, &"white".into(), &"O".into()).unwrap();

    let game = accepted(ReversiGame::with_config(config.into()));

    assert!(game.render_text().contains("4 . . . O X . . ."));
}

#[wasm_bindgen_test]
fn duplicate_glyph_config_is_rejected() {
    let config = js_sys::Object::new();
    Reflect::set(&config, &"black".into(), &".".into()).unwrap();

    assert!(ReversiGame::with_config(config.into()).is_err());
}
