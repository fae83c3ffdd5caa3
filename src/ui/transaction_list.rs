use gtk4::prelude::*;
use gtk4 as gtk;

use crate::bank::models::TransactionRecord;
use crate::ui::avatar::AvatarLoader;

pub struct TransactionList {
    root: gtk::Box,
    list: gtk::ListBox,
}

impl TransactionList {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
        root.add_css_class("card-surface");

        let title = gtk::Label::new(Some("Recent Transactions"));
        title.add_css_class("title-4");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let list = gtk::ListBox::new();
        list.set_selection_mode(gtk::SelectionMode::None);
        list.add_css_class("boxed-list");
        root.append(&list);

        Self { root, list }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    /// Replaces the rows. Records are shown in the order given.
    pub fn set_items(&self, items: &[TransactionRecord], avatars: &AvatarLoader) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        for tx in items {
            let row = gtk::Box::new(gtk::Orientation::Horizontal, 12);
            row.set_widget_name(&format!("transaction-{}", tx.id));
            row.set_margin_top(10);
            row.set_margin_bottom(10);
            row.set_margin_start(10);
            row.set_margin_end(10);

            row.append(&avatars.avatar(&tx.icon, 36));

            let text = gtk::Box::new(gtk::Orientation::Vertical, 2);
            text.set_hexpand(true);
            let name = gtk::Label::new(Some(&tx.name));
            name.set_halign(gtk::Align::Start);
            name.add_css_class("heading");
            text.append(&name);
            let subtitle = match &tx.card {
                Some(card) => format!("{} · {card}", tx.date),
                None => tx.date.clone(),
            };
            let date = gtk::Label::new(Some(&subtitle));
            date.set_halign(gtk::Align::Start);
            date.add_css_class("dim-label");
            date.add_css_class("caption");
            text.append(&date);
            row.append(&text);

            let amount = gtk::Label::new(Some(&tx.amount_label()));
            amount.add_css_class("amount");
            row.append(&amount);

            self.list.append(&row);
        }
    }
}
