pub mod domain;
pub mod fixtures;
pub mod shared;
