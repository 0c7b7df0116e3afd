// Domain layer: request/response models and ports (collaborator interfaces).

pub mod model;
pub mod ports;
