//! Service layer: CRUD operations per entity, run inside a caller-provided transaction.

pub mod items;
pub mod users;

pub use items::ItemService;
pub use users::UserService;
