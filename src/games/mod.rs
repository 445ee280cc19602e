//! Game implementations.

pub mod grid;
pub mod sliding;
pub mod ultimate;
