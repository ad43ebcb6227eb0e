pub mod animate;
pub mod camera;
pub mod config;
pub mod constants;
pub mod css;
pub mod field;
pub mod items;
pub mod palette;

pub use animate::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use field::*;
pub use items::*;
pub use palette::*;
