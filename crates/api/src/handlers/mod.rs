//! HTTP request handlers, one module per resource.

pub mod films;
pub mod genres;
pub mod health;
pub mod mpa;
pub mod people;
