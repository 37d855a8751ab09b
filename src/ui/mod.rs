//! Terminal presentation of the form.

pub mod render;

pub use render::render;
