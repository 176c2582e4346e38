//! Request extractors.

mod user_payload;
pub use user_payload::UserPayload;
