//! `VK_ANDROID_external_memory_android_hardware_buffer`.

pub use crate::vk::{
    AHardwareBuffer, AndroidHardwareBufferFormatPropertiesANDROID,
    AndroidHardwareBufferPropertiesANDROID, AndroidHardwareBufferUsageANDROID,
    ExternalFormatANDROID, ImportAndroidHardwareBufferInfoANDROID,
    MemoryGetAndroidHardwareBufferInfoANDROID,
};

#[cfg(vk_headers = "internal")]
pub use ash::android::external_memory_android_hardware_buffer::{Device, NAME};

#[cfg(vk_headers = "external")]
pub const NAME: &std::ffi::CStr = c"VK_ANDROID_external_memory_android_hardware_buffer";
