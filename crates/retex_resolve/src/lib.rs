//! Retex Override Resolution
//!
//! Decides whether presentation resources get the format the application
//! asked for or a configured substitute:
//! - back buffers: one native target format
//! - swap chains: one surface format / color space pair

pub mod back_buffer;
pub mod error;
pub mod overrides;
pub mod swap_chain;

pub use back_buffer::{resolve_back_buffer, validate_back_buffer};
pub use error::OverrideError;
pub use overrides::Overrides;
pub use swap_chain::{resolve_swap_chain, validate_swap_chain};
