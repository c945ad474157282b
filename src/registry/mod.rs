//! # Endpoint Registry
//!
//! Maps logical operation names to a provider host and a path template.
//! The table itself lives in [`operations`]; [`EndpointRegistry`] adds the
//! provider base URLs so a host can be rebased (configuration, mock servers)
//! without touching the table.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::core::error::NasaError;

pub mod operations;

pub use operations::OPERATIONS;

/// Remote hosts the operations are served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// `api.nasa.gov`, the only host gated by the shared API key.
    NasaApi,
    /// NASA Image and Video Library.
    ImageLibrary,
    /// NASA Exoplanet Archive (IPAC).
    ExoplanetArchive,
    /// JSC astromaterials curation (lunar samples, Antarctic meteorites).
    AstromaterialsCurator,
    /// POWER climate data.
    Power,
    /// JPL Solar System Dynamics.
    SolarSystemDynamics,
    /// EPIC image archive, used for image links only.
    EpicArchive,
}

impl Provider {
    pub const ALL: [Provider; 7] = [
        Provider::NasaApi,
        Provider::ImageLibrary,
        Provider::ExoplanetArchive,
        Provider::AstromaterialsCurator,
        Provider::Power,
        Provider::SolarSystemDynamics,
        Provider::EpicArchive,
    ];

    /// Key used for host overrides in configuration.
    pub fn slug(&self) -> &'static str {
        match self {
            Provider::NasaApi => "nasa_api",
            Provider::ImageLibrary => "image_library",
            Provider::ExoplanetArchive => "exoplanet_archive",
            Provider::AstromaterialsCurator => "astromaterials_curator",
            Provider::Power => "power",
            Provider::SolarSystemDynamics => "solar_system_dynamics",
            Provider::EpicArchive => "epic_archive",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Provider> {
        Provider::ALL.into_iter().find(|p| p.slug() == slug)
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::NasaApi => "https://api.nasa.gov",
            Provider::ImageLibrary => "https://images-api.nasa.gov",
            Provider::ExoplanetArchive => "https://exoplanetarchive.ipac.caltech.edu",
            Provider::AstromaterialsCurator => "https://curator.jsc.nasa.gov",
            Provider::Power => "https://power.larc.nasa.gov",
            Provider::SolarSystemDynamics => "https://ssd-api.jpl.nasa.gov",
            Provider::EpicArchive => "https://epic.gsfc.nasa.gov",
        }
    }
}

/// One registered remote read capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Unique logical name.
    pub name: &'static str,
    pub provider: Provider,
    /// Path template; placeholders are written `{name}`.
    pub path: &'static str,
    /// Whether the shared API key is attached as a query parameter.
    pub requires_key: bool,
    /// Query parameters sent unless the caller sets the same key.
    pub defaults: &'static [(&'static str, &'static str)],
}

impl Operation {
    /// An operation on the key-gated `api.nasa.gov` host.
    pub const fn keyed(
        name: &'static str,
        path: &'static str,
        defaults: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            provider: Provider::NasaApi,
            path,
            requires_key: true,
            defaults,
        }
    }

    /// An operation on a host that takes no API key.
    pub const fn open(
        name: &'static str,
        provider: Provider,
        path: &'static str,
        defaults: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            provider,
            path,
            requires_key: false,
            defaults,
        }
    }

    /// Every operation in this system is a retrieval.
    pub fn method(&self) -> Method {
        Method::GET
    }

    /// Placeholder names in template order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        let mut rest = self.path;
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    out.push(&after[..close]);
                    rest = &after[close + 1..];
                }
                None => break,
            }
        }
        out
    }
}

/// Read-only lookup from operation name to [`Operation`] plus provider hosts.
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    operations: HashMap<&'static str, &'static Operation>,
    hosts: HashMap<Provider, String>,
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl EndpointRegistry {
    /// All operations from [`OPERATIONS`] against the public hosts.
    pub fn standard() -> Self {
        let operations = OPERATIONS.iter().map(|op| (op.name, op)).collect();
        let hosts = Provider::ALL
            .into_iter()
            .map(|p| (p, p.default_base_url().to_string()))
            .collect();
        Self { operations, hosts }
    }

    /// Points every operation of `provider` at another base URL.
    pub fn with_host(mut self, provider: Provider, base_url: impl Into<String>) -> Self {
        self.hosts.insert(provider, base_url.into());
        self
    }

    /// Applies `slug -> base_url` overrides as read from configuration.
    pub fn with_host_overrides(mut self, overrides: &BTreeMap<String, String>) -> Result<Self, NasaError> {
        for (slug, url) in overrides {
            let provider = Provider::from_slug(slug)
                .ok_or_else(|| NasaError::ConfigError(format!("Unknown provider in hosts: {}", slug)))?;
            self = self.with_host(provider, url.clone());
        }
        Ok(self)
    }

    pub fn resolve(&self, name: &str) -> Result<&'static Operation, NasaError> {
        self.operations
            .get(name)
            .copied()
            .ok_or_else(|| NasaError::UnknownOperation(name.to_string()))
    }

    pub fn base_url(&self, provider: Provider) -> &str {
        self.hosts
            .get(&provider)
            .map(String::as_str)
            .unwrap_or_else(|| provider.default_base_url())
    }

    pub fn operations(&self) -> impl Iterator<Item = &'static Operation> + '_ {
        self.operations.values().copied()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
