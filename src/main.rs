mod app;
mod auth;
mod bank;
mod chat;
mod error;
mod notify;
mod ui;
mod utils;

use adw::prelude::*;
use adw::Application;

fn main() -> glib::ExitCode {
    env_logger::init();
    log::info!("starting Alltius dashboard");

    let app = Application::builder()
        .application_id("com.alltius.Dashboard")
        .build();
    app.connect_activate(|app| {
        crate::app::build_ui(app);
    });
    app.run()
}
