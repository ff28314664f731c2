//! Wire and domain types shared by the company admin client surfaces.

pub mod domain;
pub mod error;
pub mod protocol;
