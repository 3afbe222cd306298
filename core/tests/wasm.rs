#![cfg(target_arch = "wasm32")]

use tictactoe_core::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn row_win_in_browser() {
    let mut game = GameState::new();
    for index in [0, 3, 1, 4] {
        assert_eq!(game.play(index), Ok(PlayOutcome::Played));
    }

    assert_eq!(game.play(2), Ok(PlayOutcome::Won));
    assert_eq!(game.status(), Status::Winner(Mark::X));
    assert_eq!(game.winning_line().map(|line| line.cells), Some([0, 1, 2]));
}
