//! Vulkan declarations for the GPU backend.
//!
//! Exactly one binding tree backs [`vk`]: `ash::vk` for the engine's own
//! build, `vulkanalia_sys` when the enclosing build supplies its own copy or
//! `external-vulkan-headers` is enabled. The build script makes the choice
//! once; everything here is a re-export.

pub mod platform;

use tracing::info;
pub use vkdecl_build::HeaderSource;

#[cfg(not(any(vk_headers = "internal", vk_headers = "external")))]
compile_error!("no Vulkan header source was selected, vkdecl-vk must be built through its build script");

/// Core Vulkan API declarations from the selected tree.
#[cfg(vk_headers = "internal")]
pub mod vk {
    pub use ash::vk::*;
}

/// Core Vulkan API declarations from the selected tree.
#[cfg(vk_headers = "external")]
pub mod vk {
    pub use vulkanalia_sys::*;
}

#[cfg(vk_headers = "internal")]
pub const HEADER_SOURCE: HeaderSource = HeaderSource::Internal;

#[cfg(vk_headers = "external")]
pub const HEADER_SOURCE: HeaderSource = HeaderSource::External;

/// Names of the platform extension sets compiled into [`platform`].
pub fn extension_sets() -> impl Iterator<Item = &'static str> {
    env!("VKDECL_EXTENSION_SETS").split(',').filter(|name| !name.is_empty())
}

pub fn log_resolution() {
    let sets: Vec<&str> = extension_sets().collect();
    info!(source = %HEADER_SOURCE, ?sets, "Vulkan declarations");
}
