// Adapters layer: concrete rendering backends.

pub mod plotters_backend;
pub mod recording;

#[cfg(feature = "display")]
pub mod window;
