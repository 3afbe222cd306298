use crate::board::BoardView;
use crate::history::{HistoryView, OrderToggle, history_items};
use tictactoe_core as game;
use game::{CellIndex, GameState};
use yew::prelude::*;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::PlayOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::PlayOutcome| outcome.has_update())
    }
}

impl<E> HasUpdate for Result<game::JumpOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::JumpOutcome| outcome.has_update())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Play(CellIndex),
    JumpTo(usize),
    ToggleOrder,
    Restart,
}

/// Applies `msg` to `state`, returning whether anything visible changed.
fn apply(state: &mut GameState, msg: Msg) -> bool {
    use Msg::*;

    match msg {
        Play(index) => {
            log::debug!("play cell: {}", index);
            state
                .play(index)
                .inspect_err(|err| log::debug!("move ignored: {}", err))
                .has_update()
        }
        JumpTo(position) => {
            log::debug!("jump to: {}", position);
            state
                .jump_to(position)
                .inspect_err(|err| log::debug!("jump ignored: {}", err))
                .has_update()
        }
        ToggleOrder => {
            state.toggle_order();
            log::debug!("history order: {:?}", state.order());
            true
        }
        Restart => {
            let changed = *state != GameState::new();
            state.restart();
            log::debug!("restart");
            changed
        }
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    state: GameState,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: GameState::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        apply(&mut self.state, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let state = &self.state;
        let board = *state.current_board();
        let status = state.status();
        let winning_line = state.winning_line();
        let items = history_items(state);

        let on_play = ctx.link().callback(Play);
        let on_jump = ctx.link().callback(JumpTo);
        let on_toggle = ctx.link().callback(|_: ()| ToggleOrder);
        let cb_restart = ctx.link().callback(|_: MouseEvent| Restart);

        html! {
            <div class="game">
                <div class="game-board">
                    <BoardView {board} {status} {winning_line} {on_play}/>
                </div>
                <div class="game-info">
                    <div>{"Moves' History"}</div>
                    <div>
                        <span>{"Sort: "}</span>
                        <OrderToggle order={state.order()} {on_toggle}/>
                    </div>
                    <HistoryView {items} {on_jump}/>
                    <button class="restart" onclick={cb_restart}>{"Restart"}</button>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::{HistoryOrder, Mark, Status};

    fn run(msgs: &[Msg]) -> (GameState, Vec<bool>) {
        let mut state = GameState::new();
        let updates = msgs.iter().map(|&msg| apply(&mut state, msg)).collect();
        (state, updates)
    }

    #[test]
    fn winning_sequence_ignores_later_clicks() {
        use Msg::*;

        let (state, updates) = run(&[Play(0), Play(1), Play(3), Play(4), Play(6), Play(2)]);

        assert_eq!(updates, [true, true, true, true, true, false]);
        assert_eq!(state.status(), Status::Winner(Mark::X));
        assert_eq!(state.len(), 6);
    }

    #[test]
    fn invalid_messages_do_not_rerender() {
        use Msg::*;

        let (state, updates) = run(&[Play(4), Play(4), Play(42), JumpTo(7), JumpTo(1)]);

        assert_eq!(updates, [true, false, false, false, false]);
        assert_eq!(state.len(), 2);
        assert_eq!(state.current_position(), 1);
    }

    #[test]
    fn restart_on_fresh_game_is_not_an_update() {
        let (_, updates) = run(&[Msg::Restart]);

        assert_eq!(updates, [false]);
    }

    #[test]
    fn restart_clears_history_and_order() {
        use Msg::*;

        let (state, updates) = run(&[Play(0), Play(8), ToggleOrder, JumpTo(1), Restart]);

        assert_eq!(updates, [true, true, true, true, true]);
        assert_eq!(state, GameState::new());
        assert_eq!(state.order(), HistoryOrder::Ascending);
        assert_eq!(state.status(), Status::NextPlayer(Mark::X));
    }
}
