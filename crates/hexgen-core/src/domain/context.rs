//! Template context construction.
//!
//! The context is a flat key→value map handed to template rendering.
//! Templates fail loudly on missing keys, so this builder is the single
//! place new fields are introduced — every key a template may reference is
//! populated here (or passed through from a generator's `extra` map).
//!
//! Precedence when the same key comes from more than one source:
//! `extra` (artifact-specific) > config-derived > built-in defaults.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::config::GeneratorConfig;
use crate::domain::names::NameVariants;

/// Flat key→value structure consumed by template rendering.
///
/// Owned exclusively by the generator call that created it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorContext(BTreeMap<String, Value>);

impl GeneratorContext {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.0
    }

    /// String view of a key, for non-template consumers.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// Per-request options shared by every generator kind.
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    pub include_service: bool,
    pub include_module: bool,
    pub with_example: bool,
}

/// Build the template context for one generation request.
///
/// `extra` carries artifact-specific fields supplied by the calling
/// generator (e.g. the target port's token name for an adapter). Unknown
/// keys are passed through verbatim so templates can opt into new data
/// without a builder change.
pub fn build_context(
    variants: &NameVariants,
    options: &ContextOptions,
    config: &GeneratorConfig,
    extra: BTreeMap<String, Value>,
) -> GeneratorContext {
    let mut ctx = GeneratorContext::default();

    // Name variants, under both short and `name`-prefixed aliases.
    ctx.insert("name", variants.original.clone());
    ctx.insert("kebab", variants.kebab.clone());
    ctx.insert("camel", variants.camel.clone());
    ctx.insert("pascal", variants.pascal.clone());
    ctx.insert("snake", variants.snake.clone());
    ctx.insert("screamingSnake", variants.screaming_snake.clone());
    ctx.insert("nameKebab", variants.kebab.clone());
    ctx.insert("nameCamel", variants.camel.clone());
    ctx.insert("namePascal", variants.pascal.clone());
    ctx.insert("nameSnake", variants.snake.clone());
    ctx.insert("nameScreamingSnake", variants.screaming_snake.clone());

    // Config-derived code style. `q` and `semi` are literal text so
    // templates can write `{{ q }}@nestjs/common{{ q }}{{ semi }}`.
    ctx.insert("indent", config.style.indent.as_str());
    ctx.insert("q", config.style.quotes.as_str());
    ctx.insert("semi", if config.style.semicolons { ";" } else { "" });
    ctx.insert("registration", config.registration.as_str());

    // Config-derived identifier names. Deriving them here (not in
    // templates) keeps the naming suffixes in one place.
    let naming = &config.naming;
    ctx.insert("fileName", config.files.casing.apply(variants));
    ctx.insert(
        "interfaceName",
        format!("{}{}", variants.pascal, naming.port_suffix),
    );
    ctx.insert("tokenName", token_name(variants, &naming.token_suffix));
    ctx.insert(
        "adapterName",
        format!("{}{}", variants.pascal, naming.adapter_suffix),
    );
    ctx.insert(
        "serviceName",
        format!("{}{}", variants.pascal, naming.service_suffix),
    );
    ctx.insert(
        "moduleName",
        format!("{}{}", variants.pascal, naming.module_suffix),
    );

    // Request options.
    ctx.insert("includeService", options.include_service);
    ctx.insert("includeModule", options.include_module);
    ctx.insert("withExample", options.with_example);

    // Artifact-specific extras win over everything above.
    for (key, value) in extra {
        ctx.insert(key, value);
    }

    ctx
}

/// Injection token identifier: `OBJECT_STORAGE_PORT` for name
/// `ObjectStorage` and suffix `Port`.
pub fn token_name(variants: &NameVariants, token_suffix: &str) -> String {
    let suffix = token_suffix.to_uppercase();
    if suffix.is_empty() {
        variants.screaming_snake.clone()
    } else {
        format!("{}_{}", variants.screaming_snake, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::names::derive_name_variants;

    fn ctx_for(name: &str) -> GeneratorContext {
        let variants = derive_name_variants(name).unwrap();
        build_context(
            &variants,
            &ContextOptions::default(),
            &GeneratorConfig::default(),
            BTreeMap::new(),
        )
    }

    #[test]
    fn variants_present_under_both_aliases() {
        let ctx = ctx_for("ObjectStorage");
        assert_eq!(ctx.get_str("pascal"), Some("ObjectStorage"));
        assert_eq!(ctx.get_str("namePascal"), Some("ObjectStorage"));
        assert_eq!(ctx.get_str("kebab"), Some("object-storage"));
        assert_eq!(ctx.get_str("nameKebab"), Some("object-storage"));
    }

    #[test]
    fn derived_identifier_names() {
        let ctx = ctx_for("ObjectStorage");
        assert_eq!(ctx.get_str("interfaceName"), Some("ObjectStoragePort"));
        assert_eq!(ctx.get_str("tokenName"), Some("OBJECT_STORAGE_PORT"));
        assert_eq!(ctx.get_str("adapterName"), Some("ObjectStorageAdapter"));
        assert_eq!(ctx.get_str("serviceName"), Some("ObjectStorageService"));
        assert_eq!(ctx.get_str("moduleName"), Some("ObjectStorageModule"));
    }

    #[test]
    fn style_keys_reflect_config() {
        let variants = derive_name_variants("Cache").unwrap();
        let mut config = GeneratorConfig::default();
        config.style.semicolons = false;
        config.style.quotes = crate::domain::config::QuoteStyle::Double;
        let ctx = build_context(
            &variants,
            &ContextOptions::default(),
            &config,
            BTreeMap::new(),
        );
        assert_eq!(ctx.get_str("q"), Some("\""));
        assert_eq!(ctx.get_str("semi"), Some(""));
    }

    #[test]
    fn extra_overrides_config_derived_keys() {
        let variants = derive_name_variants("Cache").unwrap();
        let mut extra = BTreeMap::new();
        extra.insert("tokenName".to_string(), Value::from("CUSTOM_TOKEN"));
        let ctx = build_context(
            &variants,
            &ContextOptions::default(),
            &GeneratorConfig::default(),
            extra,
        );
        assert_eq!(ctx.get_str("tokenName"), Some("CUSTOM_TOKEN"));
    }

    #[test]
    fn unknown_extra_keys_pass_through() {
        let variants = derive_name_variants("Cache").unwrap();
        let mut extra = BTreeMap::new();
        extra.insert("portImportPath".to_string(), Value::from("../../ports/cache"));
        let ctx = build_context(
            &variants,
            &ContextOptions::default(),
            &GeneratorConfig::default(),
            extra,
        );
        assert_eq!(ctx.get_str("portImportPath"), Some("../../ports/cache"));
    }

    #[test]
    fn option_flags_are_present() {
        let variants = derive_name_variants("Cache").unwrap();
        let opts = ContextOptions {
            include_service: true,
            include_module: false,
            with_example: false,
        };
        let ctx = build_context(&variants, &opts, &GeneratorConfig::default(), BTreeMap::new());
        assert_eq!(ctx.get("includeService"), Some(&Value::Bool(true)));
        assert_eq!(ctx.get("includeModule"), Some(&Value::Bool(false)));
    }

    #[test]
    fn empty_token_suffix_drops_trailing_underscore() {
        let variants = derive_name_variants("Cache").unwrap();
        assert_eq!(token_name(&variants, ""), "CACHE");
        assert_eq!(token_name(&variants, "Port"), "CACHE_PORT");
    }
}
