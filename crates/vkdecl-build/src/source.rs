use {
    crate::constants::{EXTERNAL_TREE_FEATURE_ENV, INTERNAL_TREE_FEATURE_ENV},
    derive_more::Display,
    std::str::FromStr,
};

/// Whether the backend is compiled as the authoritative owner of its
/// dependencies or embedded in a build that supplies its own copies.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildContext {
    #[default]
    #[display("internal")]
    Internal,
    #[display("external")]
    External,
}

impl FromStr for BuildContext {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" => Ok(Self::Internal),
            "external" => Ok(Self::External),
            other => anyhow::bail!("Unknown build context {other:?}, expected internal or external"),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderSource {
    #[display("internal")]
    Internal,
    #[display("external")]
    External,
}

impl HeaderSource {
    pub const ALL: [HeaderSource; 2] = [HeaderSource::Internal, HeaderSource::External];

    pub fn tree(self) -> &'static HeaderTree {
        match self {
            HeaderSource::Internal => &INTERNAL_TREE,
            HeaderSource::External => &EXTERNAL_TREE,
        }
    }

    /// Value written for the `vk_headers` cfg key.
    pub fn cfg_value(self) -> &'static str {
        match self {
            HeaderSource::Internal => "internal",
            HeaderSource::External => "external",
        }
    }

    pub fn is_internal(self) -> bool { self == HeaderSource::Internal }
}

impl FromStr for HeaderSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeaderSource::ALL
            .into_iter()
            .find(|source| source.cfg_value() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown header source {s:?}"))
    }
}

/// One physical copy of the Vulkan declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderTree {
    pub source: HeaderSource,
    pub crate_name: &'static str,
    pub module_path: &'static str,
    /// Cargo feature of the boundary crate that pulls this tree into the graph.
    pub feature: &'static str,
    pub feature_env: &'static str,
}

pub const INTERNAL_TREE: HeaderTree = HeaderTree {
    source: HeaderSource::Internal,
    crate_name: "ash",
    module_path: "ash::vk",
    feature: "internal-tree",
    feature_env: INTERNAL_TREE_FEATURE_ENV,
};

pub const EXTERNAL_TREE: HeaderTree = HeaderTree {
    source: HeaderSource::External,
    crate_name: "vulkanalia-sys",
    module_path: "vulkanalia_sys",
    feature: "external-tree",
    feature_env: EXTERNAL_TREE_FEATURE_ENV,
};

/// Picks the header source for one compilation unit.
///
/// An explicit override always wins; otherwise the build context decides,
/// and only the authoritative internal build uses the bundled tree.
pub fn select_source(context: BuildContext, force_external: bool) -> HeaderSource {
    match (context, force_external) {
        (BuildContext::Internal, false) => HeaderSource::Internal,
        _ => HeaderSource::External,
    }
}

#[cfg(test)]
mod tests {
    use {super::*, assay::assay};

    #[assay]
    fn test_selection_truth_table() {
        let table = [
            (BuildContext::Internal, false, HeaderSource::Internal),
            (BuildContext::Internal, true, HeaderSource::External),
            (BuildContext::External, false, HeaderSource::External),
            (BuildContext::External, true, HeaderSource::External),
        ];

        for (context, force_external, expected) in table {
            assert_eq!(select_source(context, force_external), expected);
        }
    }

    #[assay]
    fn test_selection_idempotent() {
        for context in [BuildContext::Internal, BuildContext::External] {
            for force_external in [false, true] {
                let first = select_source(context, force_external);
                let again = (0..8).map(|_| select_source(context, force_external));
                assert!(again.into_iter().all(|source| source == first));
            }
        }
    }

    #[assay]
    fn test_trees_match_sources() {
        for source in HeaderSource::ALL {
            assert_eq!(source.tree().source, source);
        }
        assert_ne!(INTERNAL_TREE.crate_name, EXTERNAL_TREE.crate_name);
        assert_eq!(HeaderSource::Internal.tree().module_path, "ash::vk");
    }

    #[assay]
    fn test_parse_build_context() {
        assert_eq!("internal".parse::<BuildContext>()?, BuildContext::Internal);
        assert_eq!(" External ".parse::<BuildContext>()?, BuildContext::External);
        assert!("vendored".parse::<BuildContext>().is_err());
    }

    #[assay]
    fn test_source_cfg_round_trip() {
        for source in HeaderSource::ALL {
            assert_eq!(source.cfg_value().parse::<HeaderSource>()?, source);
            assert_eq!(source.to_string(), source.cfg_value());
        }
        assert!("both".parse::<HeaderSource>().is_err());
    }
}
