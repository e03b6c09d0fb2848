//! Service layer: the validation gateway in front of the catalogs and
//! relationship structures.
//!
//! Every mutation passes through one of these services, which confirm
//! that all referenced identities exist before the underlying store is
//! touched and translate missing references into `NotFound` errors that
//! name the identity and its kind.

pub mod films;
pub mod people;

pub use films::FilmsService;
pub use people::PeopleService;
