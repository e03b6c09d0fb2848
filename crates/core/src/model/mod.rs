//! Domain model structs, DTOs, and field validators.
//!
//! Each submodule contains:
//! - The entity struct as exposed to callers
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - `validate_*` functions for the field-shape rules enforced before the
//!   relational core is touched

pub mod film;
pub mod lookup;
pub mod person;
