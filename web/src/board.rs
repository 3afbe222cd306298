use tictactoe_core as game;
use game::{BOARD_SIZE, Board, Cell, CellIndex, Status, WinningLine};
use yew::prelude::*;

/// A square accepts clicks only while the game is open and it is still empty.
pub(crate) fn is_locked_at(board: &Board, status: Status, index: CellIndex) -> bool {
    status.is_finished() || !board.is_empty_at(index)
}

pub(crate) const fn status_class(status: Status) -> &'static str {
    match status {
        Status::Winner(_) => "winner",
        Status::Draw => "draw",
        Status::NextPlayer(_) => "next",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct SquareProps {
    index: CellIndex,
    cell: Cell,
    #[prop_or_default]
    winner: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<CellIndex>,
}

#[function_component(SquareView)]
fn square_component(props: &SquareProps) -> Html {
    let SquareProps {
        index,
        cell,
        winner,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!("square");
    if winner {
        class.push("winner");
    }
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        if locked {
            log::trace!("square {} is locked", index);
            return;
        }
        callback.emit(index);
    });

    html! {
        <button {class} {onclick}>{ cell.mark().map_or("", |mark| mark.symbol()) }</button>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub board: Board,
    pub status: Status,
    pub winning_line: Option<WinningLine>,
    pub on_play: Callback<CellIndex>,
}

#[function_component(BoardView)]
pub(crate) fn board_component(props: &BoardProps) -> Html {
    let BoardProps {
        board,
        status,
        winning_line,
        on_play,
    } = props;

    html! {
        <>
            <div class={classes!("status", status_class(*status))}>{ status.to_string() }</div>
            {
                for (0..BOARD_SIZE).map(|row| html! {
                    <div class="board-row">
                        {
                            for (0..BOARD_SIZE).map(|col| {
                                let index = row * BOARD_SIZE + col;
                                let cell = board[index];
                                let winner = winning_line.is_some_and(|line| line.contains(index));
                                let locked = is_locked_at(board, *status, index);
                                let callback = on_play.clone();
                                html! {
                                    <SquareView {index} {cell} {winner} {locked} {callback}/>
                                }
                            })
                        }
                    </div>
                })
            }
        </>
    }
}
