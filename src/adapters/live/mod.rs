//! Live adapters backed by the real environment.

pub mod filesystem;
