pub mod effects;
pub mod shared;
