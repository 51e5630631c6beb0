//! Animation Creator sample window
//!
//! Opens a single top-level window with the tool's title card and a close
//! button, then blocks in the GTK main loop until the window is closed.

mod app;
mod config;
mod logging;
mod window;

use gtk4::glib;

use app::App;
use config::Config;

fn main() -> glib::ExitCode {
    logging::init();
    tracing::info!("starting up");

    let config = Config::resolve();
    tracing::info!(
        title = %config.title,
        width = config.window_width,
        height = config.window_height,
        "window configuration resolved"
    );

    App::new(config).run()
}
