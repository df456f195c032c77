use crate::model::Listing;

pub mod delete;
pub mod follow;
pub mod helpers;
pub mod list;
pub mod profile;
pub mod report;
pub mod status;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Listings created or changed by the command.
    pub affected_listings: Vec<Listing>,
    /// Listings to display, in display order.
    pub listed_listings: Vec<Listing>,
    pub profile: Option<profile::ProfileSummary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_listings(mut self, listings: Vec<Listing>) -> Self {
        self.affected_listings = listings;
        self
    }

    pub fn with_listed_listings(mut self, listings: Vec<Listing>) -> Self {
        self.listed_listings = listings;
        self
    }

    pub fn with_profile(mut self, profile: profile::ProfileSummary) -> Self {
        self.profile = Some(profile);
        self
    }
}
