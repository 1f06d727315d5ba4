#![forbid(unsafe_code)]

pub mod guidance;
pub mod records;
pub mod text;
pub mod types;
pub mod validate;
