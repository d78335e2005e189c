//! Numerical utilities
mod func;
mod x2;

pub use func::*;
pub use x2::x2_test;
