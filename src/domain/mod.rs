// Domain layer: the copy plan model and the ports it is executed through.

pub mod model;
pub mod ports;
