pub mod click;
pub mod decay;
pub mod input;
pub mod spawn;

pub use click::*;
pub use decay::*;
pub use input::*;
pub use spawn::*;
