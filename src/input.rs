//! Inputs read from disk.

pub mod resource;
