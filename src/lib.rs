pub mod algorithm;
pub mod array;
pub mod builder;
mod cursor;
pub mod engine;
#[doc(hidden)]
pub mod harness;
#[doc(hidden)]
pub mod invariant_ppt;
pub mod metrics;
pub mod sorts;
