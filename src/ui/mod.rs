pub mod avatar;
pub mod bank_card;
pub mod chart;
pub mod chat_view;
pub mod dashboard;
pub mod login;
pub mod sidebar;
pub mod stat_card;
pub mod style;
pub mod toast;
pub mod transaction_list;
