pub mod dogs;
pub mod favourites;
pub mod role;
