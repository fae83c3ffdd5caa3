use gtk4::prelude::*;
use gtk4 as gtk;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::app::AppConfig;
use crate::chat::{ChatMessage, ChatSession, DialogState, OptionValue, PendingReply, Selection, Sender};
use crate::notify::Notice;

/// Floating assistant panel. Owns its conversation; closing hides it
/// but keeps the log until the panel itself is dropped.
#[derive(Clone)]
pub struct ChatView {
    inner: Rc<Inner>,
}

struct Inner {
    root: gtk::Overlay,
    messages_box: gtk::Box,
    scroller: gtk::ScrolledWindow,
    entry: gtk::Entry,
    security: gtk::Box,
    target_label: gtk::Label,
    code_entry: gtk::PasswordEntry,
    toasts: adw::ToastOverlay,
    session: RefCell<ChatSession>,
    rendered: Cell<usize>,
    reply_delay: Duration,
    toast_timeout: u32,
}

fn option_icon(label: &str) -> Option<&'static str> {
    match label {
        "Make Transfer" => Some("money-symbolic"),
        "Balance Overview" => Some("view-pie-symbolic"),
        "Fraud Alerts" => Some("security-high-symbolic"),
        _ => None,
    }
}

impl ChatView {
    pub fn new(config: &AppConfig, toasts: &adw::ToastOverlay) -> Self {
        let root = gtk::Overlay::new();
        root.add_css_class("chat-panel");
        root.set_size_request(384, 600);
        root.set_halign(gtk::Align::End);
        root.set_valign(gtk::Align::End);
        root.set_margin_end(16);
        root.set_margin_bottom(16);
        root.set_visible(false);

        let column = gtk::Box::new(gtk::Orientation::Vertical, 0);

        // Header
        let header = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        header.add_css_class("chat-header");
        let icon = gtk::Image::from_icon_name("chat-bubbles-symbolic");
        header.append(&icon);
        let title = gtk::Label::new(Some("Alltius Assistant"));
        title.add_css_class("heading");
        title.set_hexpand(true);
        title.set_halign(gtk::Align::Start);
        header.append(&title);
        let close_btn = gtk::Button::from_icon_name("window-close-symbolic");
        close_btn.add_css_class("flat");
        header.append(&close_btn);
        column.append(&header);

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .build();
        let messages_box = gtk::Box::new(gtk::Orientation::Vertical, 12);
        messages_box.set_margin_top(12);
        messages_box.set_margin_bottom(12);
        messages_box.set_margin_start(12);
        messages_box.set_margin_end(12);
        scroller.set_child(Some(&messages_box));
        column.append(&scroller);

        // Input row
        let input_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        input_row.set_margin_top(12);
        input_row.set_margin_bottom(12);
        input_row.set_margin_start(12);
        input_row.set_margin_end(12);
        let entry = gtk::Entry::new();
        entry.set_hexpand(true);
        entry.set_placeholder_text(Some("Type a message..."));
        let send_btn = gtk::Button::from_icon_name("mail-send-symbolic");
        send_btn.add_css_class("suggested-action");
        input_row.append(&entry);
        input_row.append(&send_btn);
        column.append(&input_row);
        root.set_child(Some(&column));

        // Security code prompt, laid over the conversation
        let security = gtk::Box::new(gtk::Orientation::Vertical, 0);
        security.add_css_class("security-scrim");
        security.set_visible(false);
        let prompt = gtk::Box::new(gtk::Orientation::Vertical, 12);
        prompt.add_css_class("card-surface");
        prompt.set_size_request(288, -1);
        prompt.set_halign(gtk::Align::Center);
        prompt.set_valign(gtk::Align::Center);
        prompt.set_vexpand(true);
        let prompt_title = gtk::Label::new(Some("Enter Security Code"));
        prompt_title.add_css_class("heading");
        prompt_title.set_halign(gtk::Align::Start);
        prompt.append(&prompt_title);
        let target_label = gtk::Label::new(None);
        target_label.add_css_class("dim-label");
        target_label.set_halign(gtk::Align::Start);
        prompt.append(&target_label);
        let code_entry = gtk::PasswordEntry::new();
        code_entry.set_placeholder_text(Some("Enter code 1234"));
        prompt.append(&code_entry);
        let actions = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        let cancel_btn = gtk::Button::with_label("Cancel");
        cancel_btn.add_css_class("flat");
        let submit_btn = gtk::Button::with_label("Submit");
        submit_btn.add_css_class("suggested-action");
        actions.append(&cancel_btn);
        actions.append(&submit_btn);
        prompt.append(&actions);
        security.append(&prompt);
        root.add_overlay(&security);

        let inner = Rc::new(Inner {
            root,
            messages_box,
            scroller,
            entry,
            security,
            target_label,
            code_entry,
            toasts: toasts.clone(),
            session: RefCell::new(ChatSession::default()),
            rendered: Cell::new(0),
            reply_delay: Duration::from_millis(config.reply_delay_ms),
            toast_timeout: config.toast_timeout_secs,
        });

        // Send actions
        {
            let weak = Rc::downgrade(&inner);
            send_btn.connect_clicked(move |_| with_inner(&weak, Inner::send));
        }
        {
            let weak = Rc::downgrade(&inner);
            inner.entry.connect_activate(move |_| with_inner(&weak, Inner::send));
        }
        {
            let weak = Rc::downgrade(&inner);
            close_btn.connect_clicked(move |_| with_inner(&weak, |i| i.close()));
        }
        {
            let weak = Rc::downgrade(&inner);
            submit_btn.connect_clicked(move |_| with_inner(&weak, |i| i.submit_code()));
        }
        {
            let weak = Rc::downgrade(&inner);
            inner.code_entry.connect_activate(move |_| with_inner(&weak, |i| i.submit_code()));
        }
        {
            let weak = Rc::downgrade(&inner);
            cancel_btn.connect_clicked(move |_| with_inner(&weak, |i| i.cancel()));
        }

        Self { inner }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.inner.root.clone().upcast()
    }

    pub fn open(&self) {
        self.inner.open();
    }
}

fn with_inner(weak: &Weak<Inner>, f: impl FnOnce(&Rc<Inner>)) {
    if let Some(inner) = weak.upgrade() {
        f(&inner);
    }
}

impl Inner {
    fn open(self: &Rc<Self>) {
        let seeded = self.session.borrow_mut().open();
        if seeded {
            log::debug!("assistant seeded with welcome menu");
        }
        self.root.set_visible(true);
        self.sync();
        self.entry.grab_focus();
    }

    fn close(&self) {
        self.session.borrow_mut().close();
        self.hide_security();
        self.root.set_visible(false);
    }

    fn send(self: &Rc<Self>) {
        let text = self.entry.text();
        let pending = self.session.borrow_mut().submit_text(&text);
        if let Some(pending) = pending {
            self.entry.set_text("");
            self.sync();
            self.schedule(pending);
        }
    }

    fn choose(self: &Rc<Self>, value: &OptionValue) {
        let selection = self.session.borrow_mut().select_option(value);
        match selection {
            Selection::Confirming => {
                if let DialogState::Confirming(contact) = self.session.borrow().state() {
                    self.target_label.set_label(&format!("Transfer to {}", contact.display_name));
                }
                self.security.set_visible(true);
                self.code_entry.grab_focus();
            }
            Selection::Reply(pending) => {
                self.sync();
                self.schedule(pending);
            }
            Selection::Ignored => {}
        }
    }

    fn submit_code(self: &Rc<Self>) {
        let code = self.code_entry.text();
        let outcome = self.session.borrow_mut().submit_code(&code).map(|(_, notice)| notice);
        match outcome {
            Ok(notice) => {
                self.hide_security();
                self.notify(&notice);
                self.sync();
            }
            Err(e) => {
                log::debug!("{e}");
                if let Some(notice) = e.notice() {
                    self.notify(&notice);
                }
            }
        }
    }

    fn cancel(&self) {
        self.session.borrow_mut().cancel_confirmation();
        self.hide_security();
    }

    fn hide_security(&self) {
        self.security.set_visible(false);
        self.code_entry.set_text("");
    }

    fn notify(&self, notice: &Notice) {
        crate::ui::toast::show(&self.toasts, notice, self.toast_timeout);
    }

    /// Delivers the reply after the typing delay. The session drops it
    /// if the panel was closed in the meantime.
    fn schedule(self: &Rc<Self>, pending: PendingReply) {
        let weak = Rc::downgrade(self);
        glib::timeout_add_local_once(self.reply_delay, move || {
            with_inner(&weak, |inner| {
                let delivered = inner.session.borrow_mut().deliver(pending).is_some();
                if delivered {
                    inner.sync();
                }
            });
        });
    }

    /// Renders messages appended since the last call and scrolls to the end.
    fn sync(self: &Rc<Self>) {
        let start = self.rendered.get();
        let fresh: Vec<ChatMessage> = self.session.borrow().messages()[start..].to_vec();
        if fresh.is_empty() {
            return;
        }
        for message in &fresh {
            self.messages_box.append(&self.bubble(message));
        }
        self.rendered.set(start + fresh.len());

        let adj = self.scroller.vadjustment();
        glib::idle_add_local_once(move || adj.set_value(adj.upper()));
    }

    fn bubble(self: &Rc<Self>, message: &ChatMessage) -> gtk::Widget {
        let is_user = message.sender == Sender::User;
        let bubble = gtk::Box::new(gtk::Orientation::Vertical, 8);
        bubble.set_widget_name(&format!("message-{}", message.id));
        bubble.add_css_class("bubble");
        bubble.add_css_class(if is_user { "bubble-user" } else { "bubble-bot" });
        bubble.set_halign(if is_user { gtk::Align::End } else { gtk::Align::Start });

        let lbl = gtk::Label::new(Some(&message.text));
        lbl.set_wrap(true);
        lbl.set_max_width_chars(32);
        lbl.set_xalign(0.0);
        lbl.set_selectable(true);
        bubble.append(&lbl);

        for option in message.options() {
            let content = gtk::Box::new(gtk::Orientation::Horizontal, 8);
            if let Some(icon) = option_icon(&option.label) {
                content.append(&gtk::Image::from_icon_name(icon));
            }
            content.append(&gtk::Label::new(Some(&option.label)));
            let btn = gtk::Button::builder().child(&content).build();
            let weak = Rc::downgrade(self);
            let value = option.value.clone();
            btn.connect_clicked(move |_| with_inner(&weak, |i| i.choose(&value)));
            bubble.append(&btn);
        }

        bubble.upcast()
    }
}
