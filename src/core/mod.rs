//! Core files helpers
//!
//! Directory listing, recursive traversal, bulk renaming, in-file text
//! replacement and tree printing.

pub mod listing;
pub mod rename;
pub mod replace;
pub mod traverse;
pub mod tree;
