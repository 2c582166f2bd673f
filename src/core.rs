pub mod draw;
pub mod estimator;
pub mod sample;
pub mod session;
