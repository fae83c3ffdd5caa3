use gtk4::prelude::*;
use gtk4 as gtk;

use crate::bank::models::DashboardVariant;

pub struct Sidebar {
    root: gtk::Box,
    nav: Vec<(DashboardVariant, gtk::Button)>,
    messages: gtk::Button,
    logout: gtk::Button,
}

fn menu_button(icon: &str, label: &str) -> gtk::Button {
    let content = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    content.append(&gtk::Image::from_icon_name(icon));
    let lbl = gtk::Label::new(Some(label));
    lbl.set_halign(gtk::Align::Start);
    content.append(&lbl);
    let btn = gtk::Button::builder().child(&content).build();
    btn.add_css_class("flat");
    btn
}

impl Sidebar {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.add_css_class("sidebar");
        root.set_size_request(220, -1);

        let title = gtk::Label::new(Some("Alltius"));
        title.add_css_class("brand");
        title.set_halign(gtk::Align::Start);
        title.set_margin_start(8);
        title.set_margin_bottom(24);
        root.append(&title);

        let nav: Vec<_> = DashboardVariant::ALL
            .into_iter()
            .map(|v| (v, menu_button(v.icon_name(), v.title())))
            .collect();
        for (_, btn) in &nav {
            root.append(btn);
        }
        let messages = menu_button("chat-bubbles-symbolic", "Messages");
        root.append(&messages);

        let spacer = gtk::Box::new(gtk::Orientation::Vertical, 0);
        spacer.set_vexpand(true);
        root.append(&spacer);

        let logout = menu_button("system-log-out-symbolic", "Log Out");
        logout.add_css_class("logout");
        root.append(&logout);

        Self { root, nav, messages, logout }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn set_active(&self, variant: DashboardVariant) {
        for (v, btn) in &self.nav {
            if *v == variant {
                btn.add_css_class("nav-active");
            } else {
                btn.remove_css_class("nav-active");
            }
        }
    }

    pub fn connect_variant_selected<F: Fn(DashboardVariant) + Clone + 'static>(&self, f: F) {
        for (variant, btn) in &self.nav {
            let f = f.clone();
            let variant = *variant;
            btn.connect_clicked(move |_| f(variant));
        }
    }

    pub fn connect_messages<F: Fn() + 'static>(&self, f: F) {
        self.messages.connect_clicked(move |_| f());
    }

    pub fn connect_logout<F: Fn() + 'static>(&self, f: F) {
        self.logout.connect_clicked(move |_| f());
    }
}
