pub use vkdecl_build;
pub use vkdecl_vk;

pub use vkdecl_vk::{platform, vk, HeaderSource, HEADER_SOURCE};

pub mod prelude {
    pub use crate::vkdecl_vk::{extension_sets, log_resolution, vk, HeaderSource, HEADER_SOURCE};
}
