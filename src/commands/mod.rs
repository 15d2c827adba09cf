pub mod dialects;
pub mod generate;

// Re-export all command functions
pub use dialects::cmd_dialects;
pub use generate::{cmd_generate, cmd_teardown};
