//! Minimal XML element tree used to bind data set documents onto the model.

mod element;

pub use element::Element;
