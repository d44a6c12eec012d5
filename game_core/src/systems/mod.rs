pub mod ai;
pub mod ball;
pub mod collision;
pub mod input;
pub mod movement;
pub mod scoring;

pub use ai::*;
pub use ball::*;
pub use collision::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;
