pub mod entities;
pub mod table;
