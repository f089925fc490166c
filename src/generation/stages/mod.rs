//! Concrete builder stages
//!
//! Each constructor captures what it needs from the configuration and returns
//! a [`Stage`](crate::generation::Stage) ready to register.

pub mod methods;
pub mod naming;

pub use methods::{add_method_for_each_verb, method_stage};
pub use naming::{add_type_names, naming_stage};
