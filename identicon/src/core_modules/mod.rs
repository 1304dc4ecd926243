pub mod canvas;
pub mod cell;
pub mod color;
pub mod digest;
pub mod error;
pub mod grid;
pub mod identicon;
pub mod rectangle;
pub mod utils;
