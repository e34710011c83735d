mod keyboard;
mod nav;
mod pointer;
mod scroll;

pub use keyboard::wire_global_keydown;
pub use nav::{current_hash_section, wire_navigation};
pub use pointer::wire_pointer_tracking;
pub use scroll::wire_scroll_tracking;
