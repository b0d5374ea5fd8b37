pub mod book;
pub mod commands;
pub mod value_objects;

pub use book::*;
pub use value_objects::*;
