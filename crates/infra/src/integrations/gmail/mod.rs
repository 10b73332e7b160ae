//! Gmail v1 adapter
//!
//! [`GmailClient`] implements both [`MailProvider`](paneboard_core::MailProvider)
//! (list and fetch unread messages) and
//! [`CustomerNotifier`](paneboard_core::CustomerNotifier) (send HTML mail).

pub mod client;
pub mod mime;
pub mod types;

pub use client::GmailClient;
