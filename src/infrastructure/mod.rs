//! Infrastructure layer - concrete implementations of domain ports

pub mod openapi;
