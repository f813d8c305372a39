//! Token counts reported alongside a completion.

use serde::{Deserialize, Serialize};

/// Prompt and completion token counts for one chat call.
///
/// Compatible servers disagree on which counters they send. Use
/// [`TokenUsage::from_reported`] to build one from whatever arrived.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct TokenUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
    /// As reported, or prompt plus completion when the server omits it
    total_tokens: u64,
}

impl TokenUsage {
    /// Builds usage from optional counters.
    ///
    /// Returns `None` unless both prompt and completion counts are present.
    /// A missing total is derived from the other two.
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_core::TokenUsage;
    ///
    /// let usage = TokenUsage::from_reported(Some(150), Some(50), None).unwrap();
    /// assert_eq!(*usage.total_tokens(), 200);
    /// assert!(TokenUsage::from_reported(None, Some(50), Some(50)).is_none());
    /// ```
    pub fn from_reported(
        prompt_tokens: Option<u64>,
        completion_tokens: Option<u64>,
        total_tokens: Option<u64>,
    ) -> Option<Self> {
        let (prompt_tokens, completion_tokens) = (prompt_tokens?, completion_tokens?);
        Some(Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: total_tokens
                .unwrap_or_else(|| prompt_tokens.saturating_add(completion_tokens)),
        })
    }
}
