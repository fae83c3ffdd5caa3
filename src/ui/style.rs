use gtk4 as gtk;

const CSS: &str = r#"
.card-surface {
    background: alpha(@card_bg_color, 0.95);
    border-radius: 12px;
    padding: 20px;
}
.sidebar {
    background: @headerbar_bg_color;
    padding: 20px 12px;
}
.sidebar button.nav-active {
    background: alpha(@accent_bg_color, 0.15);
    color: @accent_color;
}
.brand { font-weight: 800; font-size: 18px; }
.hero-tagline { font-size: 32px; font-weight: 700; color: @accent_color; }
.stat-value { font-size: 22px; font-weight: 600; }
.trend-up { color: #22c55e; }
.trend-down { color: #ef4444; }
.amount { font-family: monospace; font-weight: 500; }
.bank-card {
    background: linear-gradient(135deg, #7f3dff 0%, #3b1a8a 100%);
    color: white;
    border-radius: 16px;
    padding: 20px;
}
.bank-card-number { font-family: monospace; font-size: 18px; letter-spacing: 2px; }
.chat-panel {
    background: @window_bg_color;
    border-radius: 12px;
    box-shadow: 0 4px 24px alpha(black, 0.35);
}
.chat-header {
    background: @accent_bg_color;
    color: @accent_fg_color;
    border-radius: 12px 12px 0 0;
    padding: 12px;
}
.bubble { border-radius: 10px; padding: 10px 12px; }
.bubble-user { background: @accent_bg_color; color: @accent_fg_color; }
.bubble-bot { background: alpha(@view_fg_color, 0.08); }
.security-scrim { background: alpha(@window_bg_color, 0.8); }
.logout { color: #f87171; }
.bell-dot { background: #ef4444; border-radius: 4px; min-width: 8px; min-height: 8px; }
"#;

/// Loads the application stylesheet once for the default display.
pub fn install(prefer_dark: bool) {
    let scheme = if prefer_dark { adw::ColorScheme::PreferDark } else { adw::ColorScheme::Default };
    adw::StyleManager::default().set_color_scheme(scheme);

    let Some(display) = gtk::gdk::Display::default() else {
        log::warn!("no display; stylesheet not installed");
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(CSS);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
