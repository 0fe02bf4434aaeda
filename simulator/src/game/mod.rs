pub mod script;
pub mod state;

pub use state::TheaterHandle;
