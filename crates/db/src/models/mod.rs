//! Database row structs.
//!
//! Each submodule holds a `FromRow` + `Serialize` struct matching a table row.
//! Create and update payloads are validated in `doghouse_core::dog` and
//! arrive here as `ValidDog`.

pub mod dog;
pub mod favourite;
