//! Repositories: domain models over the SeaORM adapters, generic over `ConnectionTrait`.

pub mod items;
pub mod users;
