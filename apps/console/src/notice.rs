use std::time::{Duration, Instant};

/// Transient warnings (slot conflicts, duplicate identity numbers) dismiss
/// themselves after this long without operator interaction.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

pub struct Notice {
    message: String,
    shown_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= NOTICE_TTL
    }
}
