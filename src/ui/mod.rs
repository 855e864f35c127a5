pub mod hooks;
pub mod state;
