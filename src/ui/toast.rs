use crate::notify::Notice;

fn markup(notice: &Notice) -> String {
    let title = glib::markup_escape_text(notice.title);
    let description = glib::markup_escape_text(notice.description);
    if notice.is_destructive() {
        format!("<span foreground=\"#ef4444\"><b>{title}</b></span>  {description}")
    } else {
        format!("<b>{title}</b>  {description}")
    }
}

pub fn show(overlay: &adw::ToastOverlay, notice: &Notice, timeout_secs: u32) {
    let priority = if notice.is_destructive() {
        adw::ToastPriority::High
    } else {
        adw::ToastPriority::Normal
    };
    let toast = adw::Toast::builder()
        .title(markup(notice))
        .timeout(timeout_secs)
        .priority(priority)
        .build();
    overlay.add_toast(toast);
}
