use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use std::rc::Rc;

use crate::app::{AppConfig, Route};
use crate::bank::mock;
use crate::bank::models::{DashboardData, DashboardVariant};
use crate::notify::Notice;
use crate::ui::avatar::AvatarLoader;
use crate::ui::chat_view::ChatView;
use crate::ui::sidebar::Sidebar;
use crate::ui::stat_card::StatCard;
use crate::ui::transaction_list::TransactionList;

/// Main area for one dataset: stat row, then charts beside the card and
/// transaction list.
fn build_layout(data: &DashboardData, avatars: &AvatarLoader) -> gtk::Widget {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 24);

    let stats = gtk::Box::new(gtk::Orientation::Horizontal, 24);
    stats.set_homogeneous(true);
    for stat in &data.stats {
        stats.append(&StatCard::new(stat));
    }
    root.append(&stats);

    let body = gtk::Box::new(gtk::Orientation::Horizontal, 24);
    let charts = gtk::Box::new(gtk::Orientation::Vertical, 24);
    charts.set_hexpand(true);
    for spec in &data.charts {
        charts.append(&crate::ui::chart::chart_card(spec));
    }
    body.append(&charts);

    let side = gtk::Box::new(gtk::Orientation::Vertical, 24);
    side.set_size_request(360, -1);
    if let Some(card) = &data.card {
        side.append(&crate::ui::bank_card::card_widget(card));
    }
    let transactions = TransactionList::new();
    transactions.set_items(&data.transactions, avatars);
    side.append(&transactions.widget());
    body.append(&side);
    root.append(&body);

    root.upcast()
}

pub fn show_dashboard_window(app: &Application, config: &AppConfig, notice: Option<Notice>) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Alltius")
        .default_width(1280)
        .default_height(820)
        .build();

    let overlay = adw::ToastOverlay::new();
    let avatars = AvatarLoader::new(config);

    let split = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    let sidebar = Rc::new(Sidebar::new());
    split.append(&sidebar.widget());

    // Header row stays put while the layout below it is swapped.
    let main = gtk::Box::new(gtk::Orientation::Vertical, 24);
    main.set_margin_top(32);
    main.set_margin_bottom(32);
    main.set_margin_start(32);
    main.set_margin_end(32);

    let header_row = gtk::Box::new(gtk::Orientation::Horizontal, 16);
    let heading = gtk::Label::new(None);
    heading.add_css_class("title-1");
    heading.set_halign(gtk::Align::Start);
    heading.set_hexpand(true);
    header_row.append(&heading);
    let search = gtk::Entry::new();
    search.set_placeholder_text(Some("Search"));
    search.set_primary_icon_name(Some("system-search-symbolic"));
    search.set_width_chars(24);
    header_row.append(&search);
    let chat_btn = gtk::Button::from_icon_name("chat-bubbles-symbolic");
    chat_btn.add_css_class("flat");
    chat_btn.set_tooltip_text(Some("Open assistant"));
    header_row.append(&chat_btn);
    let bell = gtk::Overlay::new();
    let bell_btn = gtk::Button::from_icon_name("preferences-system-notifications-symbolic");
    bell_btn.add_css_class("flat");
    bell.set_child(Some(&bell_btn));
    let dot = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    dot.add_css_class("bell-dot");
    dot.set_halign(gtk::Align::End);
    dot.set_valign(gtk::Align::Start);
    bell.add_overlay(&dot);
    header_row.append(&bell);
    header_row.append(&avatars.avatar("AS", 40));
    main.append(&header_row);

    let content = gtk::Box::new(gtk::Orientation::Vertical, 0);
    main.append(&content);

    let scroller = gtk::ScrolledWindow::builder()
        .vexpand(true)
        .hexpand(true)
        .child(&main)
        .build();
    split.append(&scroller);

    // The assistant floats above everything else in the window.
    let stage = gtk::Overlay::new();
    stage.set_child(Some(&split));
    let chat = ChatView::new(config, &overlay);
    stage.add_overlay(&chat.widget());
    overlay.set_child(Some(&stage));

    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk::Label::new(Some("Alltius"));
    header.set_title_widget(Some(&title));
    container.append(&header);
    container.append(&overlay);
    window.set_content(Some(&container));

    let show_variant = {
        let sidebar = sidebar.clone();
        let avatars = avatars.clone();
        move |variant: DashboardVariant| {
            log::info!("showing {variant:?} dashboard");
            let data = mock::dataset(variant);
            heading.set_label(&data.heading);
            while let Some(child) = content.first_child() {
                content.remove(&child);
            }
            content.append(&build_layout(&data, &avatars));
            sidebar.set_active(variant);
        }
    };
    show_variant(config.default_variant);
    let show_variant = Rc::new(show_variant);
    sidebar.connect_variant_selected(move |v| show_variant(v));
    {
        let chat = chat.clone();
        chat_btn.connect_clicked(move |_| chat.open());
    }
    sidebar.connect_messages(move || chat.open());
    {
        let app = app.clone();
        let window = window.clone();
        let config = config.clone();
        sidebar.connect_logout(move || {
            crate::app::navigate(&app, Route::Login, &config, None);
            window.close();
        });
    }

    window.present();

    if let Some(notice) = notice {
        crate::ui::toast::show(&overlay, &notice, config.toast_timeout_secs);
    }
}
