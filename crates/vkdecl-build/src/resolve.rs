use {
    crate::{
        config::{BuildConfig, TargetPlatform},
        constants::{
            EXTENSION_SETS_RUSTC_ENV, HEADERS_CFG, HEADER_SOURCE_RUSTC_ENV, PLATFORM_EXT_CFG,
        },
        extension::{ExtensionRegistry, ExtensionSet},
        source::{select_source, HeaderSource, HeaderTree},
    },
    anyhow::{bail, Result},
    std::{
        fmt,
        io::{self, Write},
    },
    tracing::{info, instrument},
};

/// The header selection for one compilation unit.
///
/// Core and platform declarations always share `source`; there is no way to
/// construct a resolution whose extension sets come from another tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    source: HeaderSource,
    tree: &'static HeaderTree,
    platform: TargetPlatform,
    extension_sets: Vec<ExtensionSet>,
    known_sets: Vec<&'static str>,
}

impl Resolution {
    pub fn source(&self) -> HeaderSource { self.source }

    pub fn tree(&self) -> &'static HeaderTree { self.tree }

    pub fn platform(&self) -> &TargetPlatform { &self.platform }

    pub fn extension_sets(&self) -> &[ExtensionSet] { &self.extension_sets }

    /// Source of a given augmented set, if it was selected.
    pub fn extension_source(&self, name: &str) -> Option<HeaderSource> {
        self.extension_sets.iter().any(|set| set.name == name).then_some(self.source)
    }

    pub fn extension_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.extension_sets.iter().map(|set| set.name)
    }

    /// Writes the cargo directives that realize this resolution.
    pub fn emit(&self, out: &mut impl Write) -> io::Result<()> {
        let sources = HeaderSource::ALL
            .iter()
            .map(|source| format!("\"{}\"", source.cfg_value()))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "cargo:rustc-check-cfg=cfg({HEADERS_CFG}, values({sources}))")?;

        let sets = self.known_sets.iter().map(|name| format!("\"{name}\"")).collect::<Vec<_>>();
        if sets.is_empty() {
            writeln!(out, "cargo:rustc-check-cfg=cfg({PLATFORM_EXT_CFG}, values(none()))")?;
        } else {
            writeln!(
                out,
                "cargo:rustc-check-cfg=cfg({PLATFORM_EXT_CFG}, values({}))",
                sets.join(", ")
            )?;
        }

        writeln!(out, "cargo:rustc-cfg={HEADERS_CFG}=\"{}\"", self.source.cfg_value())?;
        for name in self.extension_names() {
            writeln!(out, "cargo:rustc-cfg={PLATFORM_EXT_CFG}=\"{name}\"")?;
        }

        writeln!(out, "cargo:rustc-env={HEADER_SOURCE_RUSTC_ENV}={}", self.source.cfg_value())?;
        writeln!(
            out,
            "cargo:rustc-env={EXTENSION_SETS_RUSTC_ENV}={}",
            self.extension_names().collect::<Vec<_>>().join(",")
        )?;
        Ok(())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} headers from {} on {}, extension sets [{}]",
            self.source,
            self.tree.module_path,
            self.platform,
            self.extension_names().collect::<Vec<_>>().join(", ")
        )
    }
}

/// Resolves the header source, then layers the platform sets on top of it.
#[instrument(skip(registry))]
pub fn resolve(config: &BuildConfig, registry: &ExtensionRegistry) -> Result<Resolution> {
    let source = select_source(config.context, config.force_external);
    let tree = source.tree();

    if !config.is_available(source) {
        bail!(
            "{source} Vulkan headers were selected (context {}, force external {}) but {} is not \
             in the dependency graph; enable the `{}` feature",
            config.context,
            config.force_external,
            tree.crate_name,
            tree.feature,
        );
    }

    let extension_sets = registry.select(&config.platform).into_iter().cloned().collect();
    let resolution = Resolution {
        source,
        tree,
        platform: config.platform.clone(),
        extension_sets,
        known_sets: registry.names().collect(),
    };

    info!(%resolution, "Resolved Vulkan headers");
    Ok(resolution)
}
