#![forbid(unsafe_code)]

//! The founderdeck computation engine.
//!
//! Every function here is pure, synchronous, and total over its
//! documented input domain: same input, same output, no I/O, no shared
//! state. Callers validate input first (see `founderdeck_core::validate`)
//! and own all persistence.

pub mod diagnostics;
pub mod failure;
pub mod score;
