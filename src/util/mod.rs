pub mod colors;
pub mod hook;
pub mod icons;
pub mod log;
