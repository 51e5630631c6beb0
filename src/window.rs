//! Main window construction
//!
//! One top-level window: the title-card label stacked above a close button,
//! centered in both directions by the box layout.

use gtk4 as gtk;
use gtk4::glib::clone;
use gtk4::pango;
use gtk4::prelude::*;

use crate::config::Config;

/// The single top-level window.
pub struct MainWindow {
    window: gtk::ApplicationWindow,
}

impl MainWindow {
    /// Build the window for `app`, laid out per `config`. The window is not
    /// presented yet.
    pub fn build(app: &gtk::Application, config: &Config) -> Self {
        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title(config.title.as_str())
            .default_width(config.window_width as i32)
            .default_height(config.window_height as i32)
            .build();

        let content = gtk::Box::new(gtk::Orientation::Vertical, 0);
        content.set_halign(gtk::Align::Center);
        content.set_valign(gtk::Align::Center);
        window.set_child(Some(&content));

        content.append(&build_label(config));
        content.append(&build_close_button(config, &window));

        Self { window }
    }

    /// Show the window and hand it to the window manager.
    pub fn present(&self) {
        self.window.present();
    }
}

/// Static title-card label.
fn build_label(config: &Config) -> gtk::Label {
    let label = gtk::Label::new(Some(config.label_text.as_str()));

    let font = pango::FontDescription::from_string(&config.font_description());
    let attrs = pango::AttrList::new();
    attrs.insert(pango::AttrFontDesc::new(&font));
    label.set_attributes(Some(&attrs));

    label.set_margin_top(config.label_padding as i32);
    label.set_margin_bottom(config.label_padding as i32);
    label
}

/// Button whose only action is destroying the window.
fn build_close_button(config: &Config, window: &gtk::ApplicationWindow) -> gtk::Button {
    let button = gtk::Button::with_label(&config.button_label);
    button.set_margin_top(config.button_padding as i32);
    button.set_margin_bottom(config.button_padding as i32);

    button.connect_clicked(clone!(
        #[strong]
        window,
        move |_| {
            tracing::debug!("close button activated");
            window.destroy();
        }
    ));

    button
}
