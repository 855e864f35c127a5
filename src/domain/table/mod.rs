pub mod debounce;
pub mod filter;
pub mod pagination;
pub mod selection;
pub mod sort;
