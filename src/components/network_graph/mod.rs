mod component;
mod frame_loop;
mod render;
mod state;
mod types;

pub use component::NetworkGraphCanvas;
pub use types::NetworkAgent;
