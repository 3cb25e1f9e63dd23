mod panic;

pub use panic::catch_panic_layer;
