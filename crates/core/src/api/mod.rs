//! Remote API contract: request parameters, responses, and their classification.

mod api_model;
mod api_traits;
mod classifier;

pub use api_model::{ApiCall, ServiceResponse, SyncRequest};
pub use api_traits::TranslationApi;
pub use classifier::{classify, Classification};
