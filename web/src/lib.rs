use clap::Parser;
use wasm_bindgen::prelude::*;

mod board;
mod game;
mod history;
mod theme;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a colour scheme instead of following the browser
    #[arg(short, long, value_enum)]
    theme: Option<theme::Theme>,
}

impl Args {
    /// Options come from the URL fragment, e.g. `#-vv&--theme=dark`.
    fn from_location_hash(hash: &str) -> Self {
        Self::try_parse_from(hash.split(['#', '&'])).unwrap_or_else(|_| Self::parse_from([""]))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash);
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("theme: {:?}", args.theme);

    theme::Theme::apply(args.theme);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root(root).render();
}
