pub mod indicators;

pub use indicators::moving_average;
