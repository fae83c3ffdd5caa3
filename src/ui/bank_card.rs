use gtk4::prelude::*;
use gtk4 as gtk;

use crate::bank::models::CardInfo;
use crate::utils::format_usd;

pub fn card_widget(card: &CardInfo) -> gtk::Widget {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 16);
    root.add_css_class("bank-card");
    root.set_size_request(320, 190);

    let top = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    let balance = gtk::Label::new(Some(&format_usd(card.balance)));
    balance.add_css_class("title-2");
    balance.set_halign(gtk::Align::Start);
    balance.set_hexpand(true);
    top.append(&balance);
    let chip = gtk::Image::from_icon_name("credit-card-symbolic");
    chip.set_pixel_size(28);
    top.append(&chip);
    root.append(&top);

    let number = gtk::Label::new(Some(&card.number));
    number.add_css_class("bank-card-number");
    number.set_halign(gtk::Align::Start);
    number.set_vexpand(true);
    number.set_valign(gtk::Align::Center);
    root.append(&number);

    let bottom = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    for (caption, value, expand) in [("Card Holder", &card.holder, true), ("Expires", &card.expires, false)] {
        let col = gtk::Box::new(gtk::Orientation::Vertical, 2);
        col.set_hexpand(expand);
        let c = gtk::Label::new(Some(caption));
        c.add_css_class("caption");
        c.set_halign(gtk::Align::Start);
        c.set_opacity(0.7);
        let v = gtk::Label::new(Some(value));
        v.set_halign(gtk::Align::Start);
        col.append(&c);
        col.append(&v);
        bottom.append(&col);
    }
    root.append(&bottom);

    root.upcast()
}
