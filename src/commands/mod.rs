//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs against the catalog, writing its output to `out`.

pub mod browse;
pub mod config;
pub mod list;
pub mod show;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use config::execute as config;
pub use list::execute as list;
pub use show::execute as show;
