//! Abstract interfaces for csvmatrix
//!
//! Traits are pure interfaces; concrete matrices live in the `csvmatrix` crate.

pub mod backend;
pub mod matrix;

pub use backend::ByteRegion;
pub use matrix::{MatrixOperations, StringMatrix};
