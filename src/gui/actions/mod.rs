// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,count,export}.

mod copy;    // src/gui/actions/copy.rs
mod count;   // src/gui/actions/count.rs
mod export;  // src/gui/actions/export.rs

pub use copy::copy;
pub use count::count;
pub use export::export;
