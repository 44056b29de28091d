pub mod domain;
pub mod mapping;
pub mod policies;
pub mod services;
