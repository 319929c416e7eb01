pub mod catalog;
pub mod model;
pub mod runners;
pub mod time;
