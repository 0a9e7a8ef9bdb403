// src/core/mod.rs

pub mod dates;
pub mod dom;
pub mod nav;
pub mod sanitize;
