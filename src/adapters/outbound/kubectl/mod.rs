mod kubectl_gateway;

pub use kubectl_gateway::{KubectlGateway, DEFAULT_KUBECTL};
