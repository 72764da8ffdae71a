//! Template identities and the resolved template set.
//!
//! Template *sources* live in the adapters crate (built-in strings, plus
//! user overrides read from disk). The core only knows template identities
//! and holds the resolved source text.

use std::collections::BTreeMap;

use crate::application::ApplicationError;
use crate::error::HexgenResult;

/// Identity of every template the generators render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateId {
    PortInterface,
    PortToken,
    PortService,
    PortModule,
    PortIndex,
    AdapterClass,
    AdapterModule,
    AdapterIndex,
    ServiceClass,
    ServiceIndex,
}

impl TemplateId {
    pub const ALL: [TemplateId; 10] = [
        Self::PortInterface,
        Self::PortToken,
        Self::PortService,
        Self::PortModule,
        Self::PortIndex,
        Self::AdapterClass,
        Self::AdapterModule,
        Self::AdapterIndex,
        Self::ServiceClass,
        Self::ServiceIndex,
    ];

    /// Stable key used in config override tables and error messages.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::PortInterface => "port.interface",
            Self::PortToken => "port.token",
            Self::PortService => "port.service",
            Self::PortModule => "port.module",
            Self::PortIndex => "port.index",
            Self::AdapterClass => "adapter.class",
            Self::AdapterModule => "adapter.module",
            Self::AdapterIndex => "adapter.index",
            Self::ServiceClass => "service.class",
            Self::ServiceIndex => "service.index",
        }
    }
}

/// The full set of template sources a generator run renders from.
///
/// Built by the adapters crate: built-in sources overlaid with any
/// configured override files.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    sources: BTreeMap<TemplateId, String>,
}

impl TemplateSet {
    pub fn new(sources: BTreeMap<TemplateId, String>) -> Self {
        Self { sources }
    }

    pub fn insert(&mut self, id: TemplateId, source: impl Into<String>) {
        self.sources.insert(id, source.into());
    }

    /// Fetch a template source, failing with a descriptive error naming the
    /// template when it is absent.
    pub fn source(&self, id: TemplateId) -> HexgenResult<&str> {
        self.sources
            .get(&id)
            .map(String::as_str)
            .ok_or_else(|| {
                ApplicationError::Template {
                    template: id.key().to_string(),
                    reason: "no source registered for this template".into(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for id in TemplateId::ALL {
            assert!(seen.insert(id.key()), "duplicate key: {}", id.key());
        }
    }

    #[test]
    fn missing_source_names_the_template() {
        let set = TemplateSet::default();
        let err = set.source(TemplateId::PortToken).unwrap_err();
        assert!(err.to_string().contains("port.token"));
    }

    #[test]
    fn inserted_source_is_returned() {
        let mut set = TemplateSet::default();
        set.insert(TemplateId::PortIndex, "export * from './x'");
        assert_eq!(
            set.source(TemplateId::PortIndex).unwrap(),
            "export * from './x'"
        );
    }
}
