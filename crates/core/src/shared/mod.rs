pub mod frame;
pub mod guard;
pub mod parallel;
pub mod pixel;
pub mod region;
