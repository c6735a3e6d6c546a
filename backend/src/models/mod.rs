pub mod averages;
pub mod defense;
pub mod game;
pub mod macros;
pub mod positions;
pub mod usage;

pub use averages::*;
pub use defense::*;
pub use game::*;
pub use positions::*;
pub use usage::*;
