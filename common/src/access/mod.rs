//! Access control

pub mod ownable;
