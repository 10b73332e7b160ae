//! Small pure helpers shared by the extractor and the mail adapters

pub mod sender;
pub mod text;
