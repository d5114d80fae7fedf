//! Recording input and report output boundaries.
//!
//! The `loader` submodule turns a CSV file into a [`loader::Recording`];
//! the `report` submodule writes computed metrics back to disk as JSON.
pub mod loader;
pub mod report;
