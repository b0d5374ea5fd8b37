pub mod in_memory;
pub mod mongodb;
pub mod postgres;
