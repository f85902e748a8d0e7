pub mod items;
pub mod users;

pub use items::Entity as Items;
pub use users::Entity as Users;
