//! Validated identifier and addressing types.
//!
//! These types enforce their invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod api_url;
mod birthday_id;
mod resource_path;
mod user_id;

pub use api_url::ApiUrl;
pub use birthday_id::BirthdayId;
pub use resource_path::ResourcePath;
pub use user_id::UserId;
