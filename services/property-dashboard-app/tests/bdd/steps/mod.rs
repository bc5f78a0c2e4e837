//! BDD step definitions for the property dashboard frontend

pub mod doubles;
pub mod loader_steps;
pub mod selection_steps;
