//! Doghouse domain logic.
//!
//! Everything in this crate is free of database and HTTP dependencies:
//! dog validation, breed catalog, role resolution, listing filters and the
//! favourites state machine (generic over a storage trait).

pub mod breeds;
pub mod dog;
pub mod dog_query;
pub mod error;
pub mod favourites;
pub mod roles;
pub mod types;
