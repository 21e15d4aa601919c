//! Core services that orchestrate ports into domain operations.

mod user_directory;

pub use user_directory::UserDirectory;
