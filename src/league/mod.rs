mod league;
mod player;

pub use league::*;
pub use player::*;
