pub mod bee;
pub mod player;

pub use bee::{Bee, BeeKind};
pub use player::Player;
