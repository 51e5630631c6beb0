//! Application shell
//!
//! Owns the GTK `Application` and runs its blocking main loop. Destroying
//! the last window ends the loop and the process exits with the toolkit's
//! success code.

use gtk4 as gtk;
use gtk4::gio;
use gtk4::glib;
use gtk4::prelude::*;

use crate::config::Config;
use crate::window::MainWindow;

/// GApplication id for the shell window.
const APP_ID: &str = "io.animationcreator.SampleWindow";

pub struct App {
    app: gtk::Application,
}

impl App {
    /// Wire up the application; the window itself is built on activation.
    pub fn new(config: Config) -> Self {
        // Each launch owns its own instance and window.
        let app = gtk::Application::new(Some(APP_ID), gio::ApplicationFlags::NON_UNIQUE);

        app.connect_activate(move |app| {
            let window = MainWindow::build(app, &config);
            window.present();
            tracing::info!("window presented");
        });

        Self { app }
    }

    /// Block in the event loop until the window is closed.
    pub fn run(&self) -> glib::ExitCode {
        // The process consumes no command-line arguments.
        self.app.run_with_args::<String>(&[])
    }
}
