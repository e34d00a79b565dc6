pub mod artists;
pub mod clubs;
pub mod collection;
pub mod home;

pub use artists::Artists;
pub use clubs::Clubs;
pub use collection::Collection;
pub use home::Home;
