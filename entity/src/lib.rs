//! SeaORM entity definitions for the parking control schema.
//!
//! Entities mirror the tables created by the `migration` crate. Store-level constraints
//! that SeaORM cannot express on a single column (the composite apartment/block index)
//! only exist in the migration.

pub mod prelude;

pub mod parking_spot;
