pub mod bridge;
pub mod model;

pub use bridge::GuiBridge;
pub use model::ScenePayload;
