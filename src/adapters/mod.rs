// Adapters layer: concrete sources and sinks for the local machine.

pub mod local_input;
pub mod local_output;

pub use local_input::LocalInput;
pub use local_output::LocalOutput;
