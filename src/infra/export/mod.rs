pub mod csv;
pub mod flatten;
pub mod fs_sink;
