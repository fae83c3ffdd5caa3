use gtk4::prelude::*;
use gtk4 as gtk;

use crate::bank::models::StatCardData;

pub struct StatCard;

impl StatCard {
    pub fn new(data: &StatCardData) -> gtk::Widget {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 4);
        root.add_css_class("card-surface");
        root.set_hexpand(true);

        let top = gtk::Box::new(gtk::Orientation::Horizontal, 0);
        let icon = gtk::Image::from_icon_name(data.icon);
        icon.set_pixel_size(20);
        icon.add_css_class("accent");
        icon.set_halign(gtk::Align::Start);
        icon.set_hexpand(true);
        top.append(&icon);
        if let Some(trend) = data.trend {
            let lbl = gtk::Label::new(Some(&trend.label()));
            lbl.add_css_class(if trend.is_positive { "trend-up" } else { "trend-down" });
            top.append(&lbl);
        }
        top.set_margin_bottom(12);
        root.append(&top);

        let title = gtk::Label::new(Some(&data.title));
        title.add_css_class("dim-label");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let value = gtk::Label::new(Some(&data.value));
        value.add_css_class("stat-value");
        value.set_halign(gtk::Align::Start);
        root.append(&value);

        root.upcast()
    }
}
