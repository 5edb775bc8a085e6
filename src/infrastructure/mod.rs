pub mod ai;
pub mod pexels;
