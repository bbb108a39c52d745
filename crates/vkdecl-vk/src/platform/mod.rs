//! Platform extension declarations layered on top of [`crate::vk`].
//!
//! Each module exists only when the build script augmented the target with
//! the matching set, and re-exports from `crate::vk` so it always shares the
//! core tree.

#[cfg(vk_platform_ext = "android_external_memory")]
pub mod android;
