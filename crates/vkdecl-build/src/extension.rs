use {
    crate::config::TargetPlatform,
    derive_more::Display,
    tracing::debug,
};

/// A platform-specific block of Vulkan declarations layered on top of the
/// core set.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display("{name}")]
pub struct ExtensionSet {
    /// Also the value of the `vk_platform_ext` cfg key.
    pub name: &'static str,
    pub platform: TargetPlatform,
    pub extensions: &'static [&'static str],
}

impl ExtensionSet {
    pub fn applies_to(&self, platform: &TargetPlatform) -> bool { &self.platform == platform }
}

pub const ANDROID_EXTERNAL_MEMORY: ExtensionSet = ExtensionSet {
    name: "android_external_memory",
    platform: TargetPlatform::Android,
    extensions: &["VK_ANDROID_external_memory_android_hardware_buffer"],
};

/// Ordered platform to extension set mappings.
#[derive(Debug, Clone)]
pub struct ExtensionRegistry {
    sets: Vec<ExtensionSet>,
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self {
            sets: vec![ANDROID_EXTERNAL_MEMORY],
        }
    }
}

impl ExtensionRegistry {
    pub fn empty() -> Self { Self { sets: Vec::new() } }

    /// Adds a set, replacing any registered set with the same name in place.
    pub fn register(&mut self, set: ExtensionSet) {
        match self.sets.iter_mut().find(|existing| existing.name == set.name) {
            Some(existing) => *existing = set,
            None => self.sets.push(set),
        }
    }

    pub fn with(mut self, set: ExtensionSet) -> Self {
        self.register(set);
        self
    }

    pub fn sets(&self) -> &[ExtensionSet] { &self.sets }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sets.iter().map(|set| set.name)
    }

    pub fn select(&self, platform: &TargetPlatform) -> Vec<&ExtensionSet> {
        let selected: Vec<&ExtensionSet> =
            self.sets.iter().filter(|set| set.applies_to(platform)).collect();
        debug!(%platform, count = selected.len(), "Selected platform extension sets");
        selected
    }
}
