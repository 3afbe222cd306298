use core::fmt;
use tictactoe_core as game;
use game::{GameState, HistoryOrder, Location};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum EntryLabel {
    GameStart,
    GoToMove {
        number: usize,
        location: Option<Location>,
    },
    CurrentMove {
        number: usize,
        location: Option<Location>,
    },
}

impl EntryLabel {
    fn new(position: usize, location: Option<Location>, current: usize) -> Self {
        match position {
            0 => Self::GameStart,
            number if number == current => Self::CurrentMove { number, location },
            number => Self::GoToMove { number, location },
        }
    }

    /// Every entry but the one being displayed can be jumped to.
    pub(crate) const fn is_interactive(self) -> bool {
        !matches!(self, Self::CurrentMove { .. })
    }
}

impl fmt::Display for EntryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, number, location) = match *self {
            Self::GameStart => return f.write_str("Go to game start"),
            Self::GoToMove { number, location } => ("Go to move", number, location),
            Self::CurrentMove { number, location } => ("You are at move", number, location),
        };

        write!(f, "{prefix} #{number}")?;
        if let Some(location) = location {
            write!(f, " {location}")?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct HistoryItem {
    pub position: usize,
    pub label: EntryLabel,
}

/// Lists the history in display order, numbering moves chronologically.
pub(crate) fn history_items(state: &GameState) -> Vec<HistoryItem> {
    let current = state.current_position();
    state
        .entries_in_order()
        .map(|(position, entry)| HistoryItem {
            position,
            label: EntryLabel::new(position, entry.location(), current),
        })
        .collect()
}

pub(crate) const fn toggle_label(order: HistoryOrder) -> &'static str {
    match order {
        HistoryOrder::Descending => "Older moves",
        HistoryOrder::Ascending => "Most recent moves",
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct OrderToggleProps {
    pub order: HistoryOrder,
    pub on_toggle: Callback<()>,
}

#[function_component(OrderToggle)]
pub(crate) fn order_toggle_component(props: &OrderToggleProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());

    html! {
        <button {onclick}>{ toggle_label(props.order) }</button>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct HistoryProps {
    pub items: Vec<HistoryItem>,
    pub on_jump: Callback<usize>,
}

#[function_component(HistoryView)]
pub(crate) fn history_component(props: &HistoryProps) -> Html {
    html! {
        <ol>
            {
                for props.items.iter().map(|&HistoryItem { position, label }| {
                    let content = if label.is_interactive() {
                        let onclick = props.on_jump.reform(move |_: MouseEvent| position);
                        html! { <button {onclick}>{ label.to_string() }</button> }
                    } else {
                        html! { <>{ label.to_string() }</> }
                    };
                    html! { <li key={position.to_string()}>{ content }</li> }
                })
            }
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(state: &GameState) -> Vec<String> {
        history_items(state)
            .iter()
            .map(|item| item.label.to_string())
            .collect()
    }

    #[test]
    fn fresh_game_lists_only_start() {
        let state = GameState::new();

        assert_eq!(labels(&state), ["Go to game start"]);
        assert!(history_items(&state)[0].label.is_interactive());
    }

    #[test]
    fn current_move_is_plain_text_with_location() {
        let mut state = GameState::new();
        state.play(0).unwrap();
        state.play(4).unwrap();
        state.play(8).unwrap();

        assert_eq!(
            labels(&state),
            [
                "Go to game start",
                "Go to move #1 (1, 1)",
                "Go to move #2 (2, 2)",
                "You are at move #3 (3, 3)",
            ]
        );
        let items = history_items(&state);
        assert!(!items[3].label.is_interactive());
        assert!(items[..3].iter().all(|item| item.label.is_interactive()));
    }

    #[test]
    fn jumping_moves_the_current_marker() {
        let mut state = GameState::new();
        state.play(2).unwrap();
        state.play(6).unwrap();
        state.jump_to(1).unwrap();

        assert_eq!(
            labels(&state),
            [
                "Go to game start",
                "You are at move #1 (1, 3)",
                "Go to move #2 (3, 1)",
            ]
        );
    }

    #[test]
    fn start_position_stays_interactive_when_current() {
        let mut state = GameState::new();
        state.play(2).unwrap();
        state.jump_to(0).unwrap();

        let items = history_items(&state);
        assert_eq!(items[0].label, EntryLabel::GameStart);
        assert!(items.iter().all(|item| item.label.is_interactive()));
    }

    #[test]
    fn descending_order_keeps_chronological_numbers() {
        let mut state = GameState::new();
        state.play(1).unwrap();
        state.play(5).unwrap();
        state.toggle_order();

        let items = history_items(&state);
        let positions: Vec<usize> = items.iter().map(|item| item.position).collect();
        assert_eq!(positions, [2, 1, 0]);
        assert_eq!(
            labels(&state),
            [
                "You are at move #2 (2, 3)",
                "Go to move #1 (1, 2)",
                "Go to game start",
            ]
        );
    }

    #[test]
    fn toggle_labels() {
        assert_eq!(toggle_label(HistoryOrder::Ascending), "Most recent moves");
        assert_eq!(toggle_label(HistoryOrder::Descending), "Older moves");
    }
}
