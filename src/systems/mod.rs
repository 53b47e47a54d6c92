pub mod sdk;
pub mod agent;
pub mod collision;
pub mod floor;
pub mod obstacle;
pub mod spawner;

pub use agent::Agent;
pub use floor::Floor;
pub use obstacle::Obstacle;
pub use spawner::Spawner;
