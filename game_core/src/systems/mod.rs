pub mod collision;
pub mod goals;
pub mod input;
pub mod movement;
pub mod powerups;

pub use collision::*;
pub use goals::*;
pub use input::*;
pub use movement::*;
pub use powerups::*;
