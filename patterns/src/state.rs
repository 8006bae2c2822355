use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::result::{PatternError, PatternResult};

/// Review workflow of a [`Document`]: `Draft -> Moderation -> Published`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentState {
    #[default]
    Draft,
    Moderation,
    Published,
}

impl DocumentState {
    pub fn name(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Moderation => "Moderation",
            Self::Published => "Published",
        }
    }

    /// State reached by asking for a review, if allowed from here.
    fn on_request_review(self) -> Option<Self> {
        match self {
            Self::Draft => Some(Self::Moderation),
            Self::Moderation | Self::Published => None,
        }
    }

    /// State reached by publishing, if allowed from here.
    fn on_publish(self) -> Option<Self> {
        match self {
            Self::Moderation => Some(Self::Published),
            Self::Draft | Self::Published => None,
        }
    }
}

impl fmt::Display for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A document whose actions depend on its current [`DocumentState`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub content: String,
    state: DocumentState,
}

impl Document {
    /// New documents start as a draft.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            state: DocumentState::Draft,
        }
    }

    pub fn state(&self) -> DocumentState {
        self.state
    }

    /// Send the document to moderation. Only drafts can be reviewed.
    pub fn request_review(&mut self) -> PatternResult<()> {
        let next = self.state.on_request_review();
        self.transition(next, "request review for")
    }

    /// Publish a moderated document.
    pub fn publish(&mut self) -> PatternResult<()> {
        let next = self.state.on_publish();
        self.transition(next, "publish")
    }

    fn transition(
        &mut self,
        next: Option<DocumentState>,
        action: &'static str,
    ) -> PatternResult<()> {
        match next {
            Some(next) => {
                info!(from = %self.state, to = %next, "document changed state");
                self.state = next;
                Ok(())
            }
            None => {
                warn!(state = %self.state, action, "transition rejected");
                Err(PatternError::Transition {
                    state: self.state.name(),
                    action,
                })
            }
        }
    }
}
