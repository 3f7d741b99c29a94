mod resize;

pub use resize::resize;
