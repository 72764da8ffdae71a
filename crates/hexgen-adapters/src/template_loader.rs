//! Template set resolution: built-ins overlaid with user overrides.

use std::path::Path;

use hexgen_core::{
    application::{ApplicationError, TemplateId, TemplateSet},
    domain::GeneratorConfig,
    error::HexgenResult,
};
use tracing::{debug, warn};

use crate::builtin_templates;

/// Build the template set for one run: the built-in sources, with any
/// `[templates]` entries from the config replaced by file contents.
///
/// An override path that cannot be read is a template error naming the
/// offending template and path. An override key that matches no known
/// template is ignored with a warning — it is probably a typo, but it must
/// not block generation.
pub fn load_template_set(config: &GeneratorConfig, project_root: &Path) -> HexgenResult<TemplateSet> {
    let mut set = builtin_templates::default_set();

    for (key, path) in &config.templates {
        let Some(id) = TemplateId::ALL.iter().find(|id| id.key() == key) else {
            warn!(key, "unknown template override key, ignoring");
            continue;
        };

        let full_path = if path.is_absolute() {
            path.clone()
        } else {
            project_root.join(path)
        };

        let source = std::fs::read_to_string(&full_path).map_err(|e| ApplicationError::Template {
            template: key.clone(),
            reason: format!("override '{}' could not be read: {e}", full_path.display()),
        })?;

        debug!(key, path = %full_path.display(), "template override loaded");
        set.insert(*id, source);
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn no_overrides_yields_builtins() {
        let tmp = TempDir::new().unwrap();
        let set = load_template_set(&GeneratorConfig::default(), tmp.path()).unwrap();
        assert!(set.source(TemplateId::PortInterface).unwrap().contains("interface"));
    }

    #[test]
    fn override_replaces_builtin_source() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("custom.tera"), "custom {{ pascal }}").unwrap();

        let mut config = GeneratorConfig::default();
        config
            .templates
            .insert("port.interface".into(), PathBuf::from("custom.tera"));

        let set = load_template_set(&config, tmp.path()).unwrap();
        assert_eq!(set.source(TemplateId::PortInterface).unwrap(), "custom {{ pascal }}");
        // Others keep their builtin source.
        assert!(set.source(TemplateId::PortToken).unwrap().contains("Symbol"));
    }

    #[test]
    fn unreadable_override_is_a_template_error() {
        let tmp = TempDir::new().unwrap();
        let mut config = GeneratorConfig::default();
        config
            .templates
            .insert("port.token".into(), PathBuf::from("missing.tera"));

        let err = load_template_set(&config, tmp.path()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("port.token"));
        assert!(msg.contains("missing.tera"));
    }

    #[test]
    fn unknown_override_key_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let mut config = GeneratorConfig::default();
        config
            .templates
            .insert("port.bogus".into(), PathBuf::from("whatever.tera"));

        assert!(load_template_set(&config, tmp.path()).is_ok());
    }
}
