// Domain layer: ticket model and the ports to the payment and seat booking systems.

pub mod model;
pub mod ports;
