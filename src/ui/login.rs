use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use std::rc::Rc;

use crate::app::{AppConfig, Route};
use crate::auth::{self, Credential};

fn hero() -> gtk::Box {
    let side = gtk::Box::new(gtk::Orientation::Vertical, 24);
    side.add_css_class("view");
    side.set_hexpand(true);
    side.set_valign(gtk::Align::Fill);

    let art = gtk::Image::from_icon_name("wallet-symbolic");
    art.set_pixel_size(160);
    art.set_vexpand(true);
    art.set_valign(gtk::Align::End);
    side.append(&art);

    let tagline = gtk::Label::new(None);
    tagline.set_markup("Banking, <span foreground=\"#f59e0b\">as easy</span> as ABC.");
    tagline.add_css_class("hero-tagline");
    tagline.set_wrap(true);
    tagline.set_justify(gtk::Justification::Center);
    tagline.set_vexpand(true);
    tagline.set_valign(gtk::Align::Start);
    tagline.set_margin_start(32);
    tagline.set_margin_end(32);
    side.append(&tagline);

    side
}

pub fn show_login_window(app: &Application, config: &AppConfig) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Alltius Bank")
        .default_width(960)
        .default_height(620)
        .build();

    let toast_overlay = adw::ToastOverlay::new();

    let split = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    split.set_homogeneous(true);
    split.append(&hero());

    // Form column
    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_margin_top(48);
    root.set_margin_bottom(48);
    root.set_margin_start(48);
    root.set_margin_end(48);
    root.set_valign(gtk::Align::Center);

    let brand = gtk::Label::new(Some("Alltius"));
    brand.add_css_class("brand");
    brand.set_margin_bottom(24);
    root.append(&brand);

    let title = gtk::Label::new(Some("Welcome back"));
    title.add_css_class("title-2");
    root.append(&title);
    let subtitle = gtk::Label::new(Some("Sign in to your account"));
    subtitle.add_css_class("dim-label");
    subtitle.set_margin_bottom(12);
    root.append(&subtitle);

    let email_label = gtk::Label::new(Some("Email"));
    email_label.set_halign(gtk::Align::Start);
    let email_entry = gtk::Entry::new();
    email_entry.set_placeholder_text(Some("alex@smith.com"));
    email_entry.set_input_purpose(gtk::InputPurpose::Email);
    email_entry.set_hexpand(true);

    let pass_label = gtk::Label::new(Some("Password"));
    pass_label.set_halign(gtk::Align::Start);
    let pass_entry = gtk::PasswordEntry::new();
    pass_entry.set_show_peek_icon(true);
    pass_entry.set_hexpand(true);

    let form = gtk::Box::new(gtk::Orientation::Vertical, 8);
    form.append(&email_label);
    form.append(&email_entry);
    form.append(&pass_label);
    form.append(&pass_entry);
    root.append(&form);

    // Remember me is only a checkbox; nothing is stored.
    let extras = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    let remember = gtk::CheckButton::with_label("Remember me");
    remember.set_hexpand(true);
    extras.append(&remember);
    let forgot_btn = gtk::Button::with_label("Forgot password?");
    forgot_btn.add_css_class("flat");
    extras.append(&forgot_btn);
    root.append(&extras);

    let login_btn = gtk::Button::with_label("Sign in");
    login_btn.add_css_class("suggested-action");
    login_btn.add_css_class("pill");
    login_btn.set_margin_top(12);
    root.append(&login_btn);

    let signup = gtk::Label::new(None);
    signup.set_markup("Don't have an account? <b>Join free today</b>");
    signup.add_css_class("dim-label");
    root.append(&signup);

    split.append(&root);
    toast_overlay.set_child(Some(&split));

    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let header_title = gtk::Label::new(Some("Alltius Bank"));
    header.set_title_widget(Some(&header_title));
    container.append(&header);
    container.append(&toast_overlay);
    window.set_content(Some(&container));

    let toast_timeout = config.toast_timeout_secs;

    let on_sign_in = {
        let app = app.clone();
        let window = window.clone();
        let overlay = toast_overlay.clone();
        let config = config.clone();
        let email_entry = email_entry.clone();
        let pass_entry = pass_entry.clone();
        move || {
            let cred = Credential::new(email_entry.text(), pass_entry.text());
            match auth::login(&cred) {
                Ok(welcome) => {
                    log::info!("signed in");
                    crate::app::navigate(&app, Route::Dashboard, &config, Some(welcome));
                    window.close();
                }
                Err(err) => {
                    log::info!("sign-in rejected: {err}");
                    crate::ui::toast::show(&overlay, &err.notice(), toast_timeout);
                }
            }
        }
    };

    let on_sign_in: Rc<dyn Fn()> = Rc::new(on_sign_in);
    // Button click
    {
        let on_sign_in = on_sign_in.clone();
        login_btn.connect_clicked(move |_| (on_sign_in)());
    }
    // Enter key in either field submits
    {
        let on_sign_in = on_sign_in.clone();
        email_entry.connect_activate(move |_| (on_sign_in)());
    }
    {
        let on_sign_in = on_sign_in.clone();
        pass_entry.connect_activate(move |_| (on_sign_in)());
    }
    {
        let overlay = toast_overlay.clone();
        forgot_btn.connect_clicked(move |_| {
            crate::ui::toast::show(&overlay, &auth::forgot_password(), toast_timeout);
        });
    }

    window.present();
}
