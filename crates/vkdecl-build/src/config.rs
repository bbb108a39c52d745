use {
    crate::{
        constants::{
            BUILD_CONTEXT_ENV, EMBEDDED_FEATURE_ENV, EXTERNAL_HEADERS_FEATURE_ENV,
            TARGET_OS_ENV, USE_EXTERNAL_HEADERS_ENV,
        },
        source::{BuildContext, HeaderSource},
    },
    anyhow::{bail, Context, Result},
    derive_more::Display,
    std::{borrow::Cow, collections::HashMap, env},
    tracing::debug,
};

#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub enum TargetPlatform {
    #[display("android")]
    Android,
    #[display("{_0}")]
    Other(Cow<'static, str>),
}

impl TargetPlatform {
    pub fn from_target_os(os: &str) -> Self {
        match os {
            "android" => TargetPlatform::Android,
            other => TargetPlatform::Other(Cow::Owned(other.to_string())),
        }
    }
}

impl Default for TargetPlatform {
    fn default() -> Self { TargetPlatform::from_target_os(env::consts::OS) }
}

/// Read access to the build environment.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;

    fn is_set(&self, key: &str) -> bool { self.var(key).is_some() }
}

/// The environment of the running process, as cargo hands it to a build script.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> { env::var(key).ok() }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> { self.get(key).map(|value| value.to_string()) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub context: BuildContext,
    pub force_external: bool,
    pub platform: TargetPlatform,
    /// Header trees present in the dependency graph.
    pub available: Vec<HeaderSource>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            context: BuildContext::Internal,
            force_external: false,
            platform: TargetPlatform::default(),
            available: HeaderSource::ALL.to_vec(),
        }
    }
}

impl BuildConfig {
    pub fn context(mut self, value: BuildContext) -> Self {
        self.context = value;
        self
    }

    pub fn force_external(mut self, value: bool) -> Self {
        self.force_external = value;
        self
    }

    pub fn platform(mut self, value: TargetPlatform) -> Self {
        self.platform = value;
        self
    }

    pub fn available(mut self, value: &[HeaderSource]) -> Self {
        self.available = value.to_vec();
        self
    }

    pub fn is_available(&self, source: HeaderSource) -> bool { self.available.contains(&source) }

    /// Reads the inputs cargo and the enclosing build pass to a build script.
    pub fn from_env(env: &impl EnvSource) -> Result<Self> {
        let context = match env.var(BUILD_CONTEXT_ENV) {
            Some(value) => value
                .parse::<BuildContext>()
                .with_context(|| format!("Invalid {BUILD_CONTEXT_ENV}"))?,
            None if env.is_set(EMBEDDED_FEATURE_ENV) => BuildContext::External,
            None => BuildContext::Internal,
        };
        debug!(%context, "Resolved build context");

        let force_external = env.is_set(EXTERNAL_HEADERS_FEATURE_ENV)
            || match env.var(USE_EXTERNAL_HEADERS_ENV) {
                Some(value) => parse_flag(&value)
                    .with_context(|| format!("Invalid {USE_EXTERNAL_HEADERS_ENV}"))?,
                None => false,
            };
        debug!(force_external, "Resolved header override");

        let target_os = env
            .var(TARGET_OS_ENV)
            .with_context(|| format!("{TARGET_OS_ENV} is not set, not running under cargo?"))?;
        let platform = TargetPlatform::from_target_os(&target_os);
        debug!(%platform, "Resolved target platform");

        let available: Vec<HeaderSource> = HeaderSource::ALL
            .into_iter()
            .filter(|source| env.is_set(source.tree().feature_env))
            .collect();
        debug!(?available, "Resolved reachable header trees");

        Ok(Self {
            context,
            force_external,
            platform,
            available,
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("Expected a boolean flag, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, assay::assay};

    fn cargo_env<'a>(extra: &[(&'a str, &'a str)]) -> HashMap<&'a str, &'a str> {
        let mut env = HashMap::from([
            (TARGET_OS_ENV, "linux"),
            ("CARGO_FEATURE_INTERNAL_TREE", "1"),
        ]);
        env.extend(extra.iter().copied());
        env
    }

    #[assay]
    fn test_defaults_to_internal() {
        let config = BuildConfig::from_env(&cargo_env(&[]))?;

        assert_eq!(config.context, BuildContext::Internal);
        assert!(!config.force_external);
        assert_eq!(config.platform, TargetPlatform::from_target_os("linux"));
        assert_eq!(config.available, vec![HeaderSource::Internal]);
    }

    #[assay]
    fn test_embedded_feature_sets_external_context() {
        let env = cargo_env(&[(EMBEDDED_FEATURE_ENV, "1"), ("CARGO_FEATURE_EXTERNAL_TREE", "1")]);
        let config = BuildConfig::from_env(&env)?;

        assert_eq!(config.context, BuildContext::External);
        assert!(config.is_available(HeaderSource::External));
    }

    #[assay]
    fn test_context_env_wins_over_feature() {
        let env = cargo_env(&[(EMBEDDED_FEATURE_ENV, "1"), (BUILD_CONTEXT_ENV, "internal")]);
        let config = BuildConfig::from_env(&env)?;

        assert_eq!(config.context, BuildContext::Internal);
    }

    #[assay]
    fn test_override_from_feature_or_env() {
        let feature = BuildConfig::from_env(&cargo_env(&[(EXTERNAL_HEADERS_FEATURE_ENV, "1")]))?;
        assert!(feature.force_external);

        for value in ["1", "true", "YES", " on "] {
            let config = BuildConfig::from_env(&cargo_env(&[(USE_EXTERNAL_HEADERS_ENV, value)]))?;
            assert!(config.force_external, "{value:?} should force external headers");
        }

        for value in ["", "0", "false", "off"] {
            let config = BuildConfig::from_env(&cargo_env(&[(USE_EXTERNAL_HEADERS_ENV, value)]))?;
            assert!(!config.force_external, "{value:?} should not force external headers");
        }
    }

    #[assay]
    fn test_android_target() {
        let config = BuildConfig::from_env(&cargo_env(&[(TARGET_OS_ENV, "android")]))?;
        assert_eq!(config.platform, TargetPlatform::Android);
    }

    #[assay]
    fn test_invalid_values_fail() {
        let bad_context = BuildConfig::from_env(&cargo_env(&[(BUILD_CONTEXT_ENV, "google3")]));
        let message = format!("{:#}", bad_context.unwrap_err());
        assert!(message.contains(BUILD_CONTEXT_ENV));
        assert!(message.contains("google3"));

        let bad_flag = BuildConfig::from_env(&cargo_env(&[(USE_EXTERNAL_HEADERS_ENV, "maybe")]));
        assert!(format!("{:#}", bad_flag.unwrap_err()).contains(USE_EXTERNAL_HEADERS_ENV));
    }

    #[assay]
    fn test_missing_target_os_fails() {
        let env: HashMap<&str, &str> = HashMap::new();
        assert!(BuildConfig::from_env(&env).is_err());
    }

    #[assay(env = [
        ("CARGO_CFG_TARGET_OS", "android"),
        ("CARGO_FEATURE_EXTERNAL_TREE", "1"),
        ("VKDECL_BUILD_CONTEXT", "external")
    ])]
    fn test_process_env() {
        let config = BuildConfig::from_env(&ProcessEnv)?;

        assert_eq!(config.context, BuildContext::External);
        assert_eq!(config.platform, TargetPlatform::Android);
        assert!(config.is_available(HeaderSource::External));
    }

    #[assay]
    fn test_builder() {
        let config = BuildConfig::default()
            .context(BuildContext::External)
            .force_external(true)
            .platform(TargetPlatform::Android)
            .available(&[HeaderSource::External]);

        assert_eq!(config.context, BuildContext::External);
        assert!(config.force_external);
        assert!(!config.is_available(HeaderSource::Internal));
    }
}
