pub mod chart;
pub mod dropdown;
pub mod header;
pub mod tiles;
