//! Port interface for the mail collaborator

use async_trait::async_trait;
use paneboard_domain::{RawEmail, Result};

#[async_trait]
pub trait MailProvider: Send + Sync {
    /// Ids of unread messages, newest first as the provider orders them.
    async fn list_unread_ids(&self, max_results: u32) -> Result<Vec<String>>;

    /// Fetch one message with its decoded text body.
    async fn get_message(&self, id: &str) -> Result<RawEmail>;
}
