//! Canned replies. Rules are checked in order against the lowercased
//! input and the first keyword found wins; nothing matching falls back
//! to the main menu.

use super::message::{ChatOption, Contact, OptionValue, Reply};

pub const WELCOME_TEXT: &str = "Hello! I'm your Alltius Bank assistant. How can I help you today?";
pub const FALLBACK_TEXT: &str = "I'm here to help! Would you like to:";
pub const TRANSFER_TEXT: &str = "Who would you like to transfer money to? Here are your favorites:";
pub const BALANCE_TEXT: &str = "Your current balance overview:\n\nChecking: $3,135.15\nSavings: $12,450.89\n\nLargest transaction this month: Apple Store ($135.00)";
pub const FRAUD_TEXT: &str = "No suspicious activities detected in the last 30 days. Your last login was from New York, USA.";
pub const TRANSFER_DONE_TEXT: &str = "Transfer completed successfully! The new balance has been updated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Transfer,
    Balance,
    Fraud,
    Fallback,
}

struct Rule {
    keyword: &'static str,
    intent: Intent,
    respond: fn(&[Contact]) -> Reply,
}

static RULES: [Rule; 3] = [
    Rule { keyword: "transfer", intent: Intent::Transfer, respond: transfer_targets },
    Rule { keyword: "balance", intent: Intent::Balance, respond: balance_summary },
    Rule { keyword: "fraud", intent: Intent::Fraud, respond: fraud_status },
];

pub fn main_menu() -> Vec<ChatOption> {
    vec![
        ChatOption::keyword("Make Transfer", "transfer"),
        ChatOption::keyword("Balance Overview", "balance"),
        ChatOption::keyword("Fraud Alerts", "fraud"),
    ]
}

pub fn welcome() -> Reply {
    Reply::menu(WELCOME_TEXT, main_menu())
}

fn transfer_targets(contacts: &[Contact]) -> Reply {
    let options = contacts
        .iter()
        .map(|c| ChatOption { label: c.display_name.clone(), value: OptionValue::TransferTo(c.id) })
        .collect();
    Reply::menu(TRANSFER_TEXT, options)
}

fn balance_summary(_: &[Contact]) -> Reply {
    Reply::plain(BALANCE_TEXT)
}

fn fraud_status(_: &[Contact]) -> Reply {
    Reply::plain(FRAUD_TEXT)
}

fn matching_rule(input: &str) -> Option<&'static Rule> {
    let lowered = input.to_lowercase();
    RULES.iter().find(|r| lowered.contains(r.keyword))
}

pub fn classify(input: &str) -> Intent {
    matching_rule(input).map_or(Intent::Fallback, |r| r.intent)
}

pub fn respond(input: &str, contacts: &[Contact]) -> Reply {
    match matching_rule(input) {
        Some(rule) => (rule.respond)(contacts),
        None => Reply::menu(FALLBACK_TEXT, main_menu()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::{favorite_contacts, MessageKind};

    #[test]
    fn precedence_is_transfer_balance_fraud() {
        assert_eq!(classify("fraud on my balance, transfer it"), Intent::Transfer);
        assert_eq!(classify("fraud hit my BALANCE"), Intent::Balance);
        assert_eq!(classify("Report FRAUD"), Intent::Fraud);
        assert_eq!(classify("hello there"), Intent::Fallback);
        assert_eq!(classify(""), Intent::Fallback);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(classify("please TRANSFER money"), Intent::Transfer);
        assert_eq!(classify("Transferring now"), Intent::Transfer);
        assert_eq!(classify("What's my balance?"), Intent::Balance);
    }

    #[test]
    fn transfer_reply_lists_contacts_in_order() {
        let reply = respond("transfer", &favorite_contacts());
        assert_eq!(reply.text, TRANSFER_TEXT);
        let MessageKind::OptionMenu(options) = reply.kind else {
            panic!("transfer reply should be a menu");
        };
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["John Doe", "Jane Smith"]);
        assert_eq!(options[1].value, OptionValue::TransferTo(2));
    }

    #[test]
    fn fallback_offers_main_menu() {
        let reply = respond("what can you do", &favorite_contacts());
        assert_eq!(reply, Reply::menu(FALLBACK_TEXT, main_menu()));
        assert_eq!(welcome().kind, MessageKind::OptionMenu(main_menu()));
    }

    #[test]
    fn balance_summary_has_both_accounts() {
        let reply = respond("balance", &[]);
        assert!(reply.text.contains("Checking: $3,135.15"));
        assert!(reply.text.contains("Savings: $12,450.89"));
        assert_eq!(reply.kind, MessageKind::Plain);
    }
}
