mod camera;
mod icon;
mod keybinds;
mod magnify;
mod pointer;
mod title;

pub use camera::*;
pub use icon::*;
pub use keybinds::*;
pub use magnify::*;
pub use pointer::*;
pub use title::*;
