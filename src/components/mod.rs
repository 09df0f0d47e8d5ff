pub mod form;
pub mod slideshow;
