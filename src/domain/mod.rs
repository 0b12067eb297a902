// Domain layer: column schema and value model. No I/O here.

pub mod model;
