#[macro_use]
pub mod macros;

pub mod emission;
pub mod energy;
pub mod fuel;
