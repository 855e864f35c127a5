pub mod property;
pub mod record;
