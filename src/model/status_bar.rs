//! One-line notification area

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Notified { label: String, text: String },
    Failed { label: String, text: String },
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub label: String,
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    /// `[label] text`, with newlines flattened and errors prefixed with `ERR:`
    pub fn render(&self) -> String {
        let text = self.text.replace('\n', " ");
        if self.is_error {
            format!("[ERR: {}] {text}", self.label)
        } else {
            format!("[{}] {text}", self.label)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    notice: Option<Notice>,
}

impl StatusBar {
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn text(&self) -> Option<String> {
        self.notice.as_ref().map(Notice::render)
    }

    pub fn update(&mut self, message: Message) {
        self.notice = match message {
            Message::Notified { label, text } => Some(Notice {
                label,
                text,
                is_error: false,
            }),
            Message::Failed { label, text } => Some(Notice {
                label,
                text,
                is_error: true,
            }),
            Message::Cleared => None,
        };
    }
}
