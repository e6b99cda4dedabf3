// Presentation state kept apart from the engine: mutations update explicit
// state, rendering is a separate call.

pub mod state;
pub mod view;

pub use state::ConverterState;
pub use view::*;

#[cfg(test)]
mod tests;
