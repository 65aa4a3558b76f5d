use super::{meta, Lcdc, Ppu};

pub mod fetch;
pub mod fifo;
pub mod pipe;

pub use self::pipe::Pipeline;
