//! Bowditch adjustment stages.

pub mod closure;
pub mod coordinates;
pub mod correction;
pub mod decompose;
pub mod engine;
