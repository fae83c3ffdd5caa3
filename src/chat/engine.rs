use log::{debug, info};
use thiserror::Error;

use super::message::{ChatMessage, Contact, OptionValue, Reply, Sender};
use super::rules;
use crate::notify::{self, Notice};

const SECURITY_CODE: &str = "1234";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecurityError {
    #[error("security code rejected")]
    InvalidCode,
    #[error("no transfer is awaiting confirmation")]
    NotConfirming,
}

impl SecurityError {
    /// Toast for the user. A stray submit with no transfer pending shows nothing.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SecurityError::InvalidCode => Some(notify::INVALID_SECURITY_CODE),
            SecurityError::NotConfirming => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    Idle,
    Confirming(Contact),
}

/// A bot reply waiting out the typing delay. Only the session that
/// produced it, in the same open period, will accept it back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct PendingReply {
    epoch: u64,
    reply: Reply,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Selection {
    /// The security overlay should be shown.
    Confirming,
    Reply(PendingReply),
    Ignored,
}

/// Conversation state owned by one assistant panel.
#[derive(Debug)]
pub struct ChatSession {
    log: Vec<ChatMessage>,
    next_id: u64,
    state: DialogState,
    open: bool,
    epoch: u64,
    contacts: Vec<Contact>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(super::message::favorite_contacts())
    }
}

impl ChatSession {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            log: Vec::new(),
            next_id: 1,
            state: DialogState::Idle,
            open: false,
            epoch: 0,
            contacts,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.log
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.state, DialogState::Confirming(_))
    }

    /// Opens the panel, seeding the welcome menu when the log is empty.
    /// Returns whether a message was added.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        if self.log.is_empty() {
            self.push(Sender::Bot, rules::welcome());
            return true;
        }
        false
    }

    /// Closes the panel. Replies still in flight are dropped and any
    /// pending confirmation is abandoned.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.epoch += 1;
        if self.is_confirming() {
            info!("transfer confirmation abandoned on close");
        }
        self.state = DialogState::Idle;
    }

    /// Appends the user's text and returns the reply to deliver later.
    /// Blank input is never submitted.
    pub fn submit_text(&mut self, text: &str) -> Option<PendingReply> {
        if !self.open || self.is_confirming() || text.trim().is_empty() {
            return None;
        }
        self.push(Sender::User, Reply::plain(text));
        let reply = rules::respond(text, &self.contacts);
        debug!("queued {:?} reply", rules::classify(text));
        Some(PendingReply { epoch: self.epoch, reply })
    }

    /// Appends a delayed reply unless the panel was closed since it was queued.
    pub fn deliver(&mut self, pending: PendingReply) -> Option<&ChatMessage> {
        if !self.open || pending.epoch != self.epoch {
            debug!("dropping stale reply");
            return None;
        }
        Some(self.push(Sender::Bot, pending.reply))
    }

    pub fn select_option(&mut self, value: &OptionValue) -> Selection {
        if !self.open || self.is_confirming() {
            return Selection::Ignored;
        }
        match value {
            OptionValue::TransferTo(id) => match self.contacts.iter().find(|c| c.id == *id) {
                Some(contact) => {
                    info!("transfer to contact {} awaiting security code", contact.id);
                    self.state = DialogState::Confirming(contact.clone());
                    Selection::Confirming
                }
                None => Selection::Ignored,
            },
            OptionValue::Keyword(keyword) => match self.submit_text(keyword) {
                Some(pending) => Selection::Reply(pending),
                None => Selection::Ignored,
            },
        }
    }

    /// Checks the code for the pending transfer. A wrong code leaves the
    /// confirmation open for another attempt. On success returns the
    /// confirmation message together with the toast to show.
    pub fn submit_code(&mut self, code: &str) -> Result<(&ChatMessage, Notice), SecurityError> {
        let DialogState::Confirming(contact) = &self.state else {
            return Err(SecurityError::NotConfirming);
        };
        if code != SECURITY_CODE {
            return Err(SecurityError::InvalidCode);
        }
        info!("transfer to contact {} confirmed", contact.id);
        self.state = DialogState::Idle;
        let done = self.push(Sender::Bot, Reply::plain(rules::TRANSFER_DONE_TEXT));
        Ok((done, notify::TRANSFER_SUCCESS))
    }

    pub fn cancel_confirmation(&mut self) {
        if self.is_confirming() {
            info!("transfer confirmation cancelled");
            self.state = DialogState::Idle;
        }
    }

    fn push(&mut self, sender: Sender, reply: Reply) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.log.push(ChatMessage { id, text: reply.text, sender, kind: reply.kind });
        &self.log[self.log.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::rules::{BALANCE_TEXT, FALLBACK_TEXT, TRANSFER_DONE_TEXT, WELCOME_TEXT};
    use crate::notify::Severity;

    fn opened() -> ChatSession {
        let mut session = ChatSession::default();
        session.open();
        session
    }

    fn reply_to(session: &mut ChatSession, text: &str) -> ChatMessage {
        let pending = session.submit_text(text).expect("text should be accepted");
        session.deliver(pending).expect("reply should be delivered").clone()
    }

    fn start_transfer(session: &mut ChatSession) {
        let Selection::Reply(pending) = session.select_option(&OptionValue::Keyword("transfer".into()))
        else {
            panic!("keyword option should queue a reply");
        };
        session.deliver(pending);
        assert_eq!(session.select_option(&OptionValue::TransferTo(1)), Selection::Confirming);
    }

    #[test]
    fn opening_seeds_welcome_menu_once() {
        let mut session = ChatSession::default();
        assert!(session.open());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].text, WELCOME_TEXT);
        assert_eq!(session.messages()[0].options().len(), 3);

        reply_to(&mut session, "hi");
        session.close();
        assert!(!session.open());
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages().iter().filter(|m| m.text == WELCOME_TEXT).count(), 1);
    }

    #[test]
    fn each_submission_adds_exactly_one_message_then_one_reply() {
        let mut session = opened();
        let before = session.messages().len();
        let pending = session.submit_text("What's my balance?").unwrap();
        assert_eq!(session.messages().len(), before + 1);
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "What's my balance?");

        let reply = session.deliver(pending).unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert!(reply.text.contains("Checking: $3,135.15"));
        assert!(reply.text.contains("Savings: $12,450.89"));
        assert_eq!(session.messages().len(), before + 2);
    }

    #[test]
    fn blank_input_is_never_submitted() {
        let mut session = opened();
        assert!(session.submit_text("").is_none());
        assert!(session.submit_text("   \n\t").is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut session = opened();
        reply_to(&mut session, "fraud");
        reply_to(&mut session, "balance");
        let ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "{ids:?}");
    }

    #[test]
    fn unknown_text_gets_fallback_menu() {
        let mut session = opened();
        let reply = reply_to(&mut session, "tell me a joke");
        assert_eq!(reply.text, FALLBACK_TEXT);
        assert_eq!(reply.options(), rules::main_menu().as_slice());
    }

    #[test]
    fn keyword_option_behaves_like_typed_text() {
        let mut session = opened();
        let Selection::Reply(pending) = session.select_option(&OptionValue::Keyword("balance".into()))
        else {
            panic!("expected queued reply");
        };
        assert_eq!(session.messages().last().unwrap().sender, Sender::User);
        assert_eq!(session.deliver(pending).unwrap().text, BALANCE_TEXT);
    }

    #[test]
    fn choosing_contact_opens_confirmation_without_message() {
        let mut session = opened();
        let Selection::Reply(pending) = session.select_option(&OptionValue::Keyword("transfer".into()))
        else {
            panic!("expected queued reply");
        };
        session.deliver(pending);
        let before = session.messages().len();

        assert_eq!(session.select_option(&OptionValue::TransferTo(2)), Selection::Confirming);
        assert_eq!(session.messages().len(), before);
        assert_eq!(
            session.state(),
            &DialogState::Confirming(Contact::new(2, "Jane Smith"))
        );
    }

    #[test]
    fn unknown_contact_is_ignored() {
        let mut session = opened();
        assert_eq!(session.select_option(&OptionValue::TransferTo(99)), Selection::Ignored);
        assert!(!session.is_confirming());
    }

    #[test]
    fn wrong_codes_keep_overlay_open() {
        let mut session = opened();
        start_transfer(&mut session);
        let before = session.messages().len();
        for code in ["0000", "", "12345", " 1234", "9999"] {
            assert_eq!(session.submit_code(code), Err(SecurityError::InvalidCode), "{code:?}");
            assert!(session.is_confirming());
        }
        assert_eq!(session.messages().len(), before);
    }

    #[test]
    fn transfer_scenario_completes_once() {
        let mut session = opened();
        start_transfer(&mut session);

        let rejected = session.submit_code("9999").unwrap_err();
        let failure = rejected.notice().expect("wrong code should be announced");
        assert_eq!(failure.title, "Invalid Security Code");
        assert_eq!(failure.description, "Please try again.");
        assert_eq!(failure.severity, Severity::Destructive);
        assert!(session.is_confirming());

        let (done, success) = session.submit_code("1234").unwrap();
        assert_eq!(done.text, TRANSFER_DONE_TEXT);
        assert_eq!(done.sender, Sender::Bot);
        assert_eq!(success.title, "Transfer Successful");
        assert_eq!(success.description, "Your transfer has been processed.");
        assert_eq!(success.severity, Severity::Default);
        assert!(!session.is_confirming());

        let again = session.submit_code("1234").unwrap_err();
        assert_eq!(again, SecurityError::NotConfirming);
        assert_eq!(again.notice(), None);
        assert_eq!(session.messages().iter().filter(|m| m.text == TRANSFER_DONE_TEXT).count(), 1);
    }

    #[test]
    fn cancel_discards_transfer_silently() {
        let mut session = opened();
        start_transfer(&mut session);
        let before = session.messages().len();
        session.cancel_confirmation();
        assert_eq!(session.state(), &DialogState::Idle);
        assert_eq!(session.messages().len(), before);
        assert_eq!(session.submit_code("1234"), Err(SecurityError::NotConfirming));
    }

    #[test]
    fn conversation_is_blocked_while_confirming() {
        let mut session = opened();
        start_transfer(&mut session);
        assert!(session.submit_text("balance").is_none());
        assert_eq!(
            session.select_option(&OptionValue::Keyword("fraud".into())),
            Selection::Ignored
        );
    }

    #[test]
    fn reply_is_dropped_when_panel_closes_first() {
        let mut session = opened();
        let pending = session.submit_text("fraud").unwrap();
        session.close();
        session.open();
        let before = session.messages().len();
        assert!(session.deliver(pending).is_none());
        assert_eq!(session.messages().len(), before);
    }

    #[test]
    fn closing_abandons_confirmation() {
        let mut session = opened();
        start_transfer(&mut session);
        session.close();
        session.open();
        assert!(!session.is_confirming());
    }

    #[test]
    fn closed_panel_accepts_nothing() {
        let mut session = ChatSession::default();
        assert!(session.submit_text("balance").is_none());
        assert_eq!(session.select_option(&OptionValue::TransferTo(1)), Selection::Ignored);
        assert!(session.messages().is_empty());
    }
}
