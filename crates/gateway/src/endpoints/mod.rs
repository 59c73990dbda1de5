//! # Gatewayエンドポイント

pub mod health;
pub mod issue;
pub mod verify;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use health::handle_health;
pub use issue::{handle_issue_pass, handle_issue_pass_query};
pub use verify::handle_verify;
