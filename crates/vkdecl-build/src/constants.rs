pub const BUILD_CONTEXT_ENV: &str = "VKDECL_BUILD_CONTEXT";
pub const USE_EXTERNAL_HEADERS_ENV: &str = "VKDECL_USE_EXTERNAL_VULKAN_HEADERS";
pub const LOG_ENV: &str = "VKDECL_LOG";
pub const TARGET_OS_ENV: &str = "CARGO_CFG_TARGET_OS";

pub const EMBEDDED_FEATURE_ENV: &str = "CARGO_FEATURE_EMBEDDED";
pub const EXTERNAL_HEADERS_FEATURE_ENV: &str = "CARGO_FEATURE_EXTERNAL_VULKAN_HEADERS";
pub const INTERNAL_TREE_FEATURE_ENV: &str = "CARGO_FEATURE_INTERNAL_TREE";
pub const EXTERNAL_TREE_FEATURE_ENV: &str = "CARGO_FEATURE_EXTERNAL_TREE";

/// `cfg` key carrying the selected header source.
pub const HEADERS_CFG: &str = "vk_headers";
/// `cfg` key set once per augmented platform extension set.
pub const PLATFORM_EXT_CFG: &str = "vk_platform_ext";

pub const HEADER_SOURCE_RUSTC_ENV: &str = "VKDECL_HEADER_SOURCE";
pub const EXTENSION_SETS_RUSTC_ENV: &str = "VKDECL_EXTENSION_SETS";

/// Every environment variable a resolution may read, for `rerun-if-env-changed`.
pub const WATCHED_ENV: [&str; 3] = [BUILD_CONTEXT_ENV, USE_EXTERNAL_HEADERS_ENV, LOG_ENV];
