mod frame;
mod pose;
mod solid;

pub use frame::*;
pub use pose::*;
pub use solid::*;
