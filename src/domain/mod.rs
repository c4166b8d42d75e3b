pub mod adjustments;
pub mod calculator;
pub mod catalog;
pub mod discount;
pub mod errors;
pub mod invoice;
pub mod kitty;
pub mod ports;
