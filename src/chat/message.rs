#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Plain,
    OptionMenu(Vec<ChatOption>),
}

/// What an option button carries back when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Handled as if the user had typed the keyword.
    Keyword(String),
    TransferTo(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOption {
    pub label: String,
    pub value: OptionValue,
}

impl ChatOption {
    pub fn keyword(label: &str, keyword: &str) -> Self {
        Self { label: label.to_string(), value: OptionValue::Keyword(keyword.to_string()) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub kind: MessageKind,
}

impl ChatMessage {
    pub fn options(&self) -> &[ChatOption] {
        match &self.kind {
            MessageKind::OptionMenu(opts) => opts,
            MessageKind::Plain => &[],
        }
    }
}

/// Body of a bot message before it is given an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub kind: MessageKind,
}

impl Reply {
    pub fn plain(text: &str) -> Self {
        Self { text: text.to_string(), kind: MessageKind::Plain }
    }

    pub fn menu(text: &str, options: Vec<ChatOption>) -> Self {
        Self { text: text.to_string(), kind: MessageKind::OptionMenu(options) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: u32,
    pub display_name: String,
}

impl Contact {
    pub fn new(id: u32, display_name: &str) -> Self {
        Self { id, display_name: display_name.to_string() }
    }
}

pub fn favorite_contacts() -> Vec<Contact> {
    vec![Contact::new(1, "John Doe"), Contact::new(2, "Jane Smith")]
}
