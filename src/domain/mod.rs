// Domain layer: the demo components plus the models and ports the filter tool is built on.

pub mod arithmetic;
pub mod greeter;
pub mod model;
pub mod ports;
pub mod processor;
