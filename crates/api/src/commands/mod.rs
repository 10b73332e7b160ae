//! HTTP handlers, one module per dashboard area

mod emails;
mod estimates;
mod health;
mod jobs;
mod records;

use axum::extract::FromRequest;

pub use emails::*;
pub use estimates::*;
pub use health::*;
pub use jobs::*;
pub use records::*;

use crate::error::ApiError;

/// JSON body extractor whose rejections use the API's error shape
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
