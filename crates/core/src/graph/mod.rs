//! Owned relationship structures: the friendship graph, the like index,
//! and the popularity ranking derived from it.

pub mod friendship;
pub mod likes;
pub mod ranking;
