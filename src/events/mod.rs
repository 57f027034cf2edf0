pub mod keyboard;
pub mod touch;
pub mod wheel;

pub use keyboard::wire_global_keydown;
pub use touch::wire_touch_handlers;
pub use wheel::wire_wheel;
