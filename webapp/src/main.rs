use gloo_console::error as console_error;
use tracing::Level;

mod dom;
mod flash;
mod form;
mod nav;
mod reveal;
mod site;
mod style;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");

    // the logger may be the thing that is broken, so report straight to the console
    if let Err(err) = site::start() {
        console_error!(format!("failed to start site behaviors: {err}"));
    }
}
