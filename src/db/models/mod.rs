// Sub-modules organized by functional domain
pub mod api;
pub mod change_log;
pub mod epic;
pub mod product_idea;
pub mod task;
pub mod user;

// Re-export all models so call sites can use `crate::db::models::Epic` etc.

// API response structures
pub use api::*;

// Change log models
pub use change_log::*;

// Epic models
pub use epic::*;

// Product idea models
pub use product_idea::*;

// Task models
pub use task::*;

// User models
pub use user::*;
