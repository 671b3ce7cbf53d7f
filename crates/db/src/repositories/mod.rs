//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod dog_repo;
pub mod favourite_repo;

pub use dog_repo::DogRepo;
pub use favourite_repo::FavouriteRepo;
