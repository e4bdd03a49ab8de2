pub mod style;
pub mod viewer;
