//! Built-in template sources.
//!
//! Templates are Tera sources rendered against the flat generator context.
//! Code style is context-driven: `{{ q }}` is the configured quote
//! character, `{{ semi }}` the statement terminator (possibly empty), and
//! `{{ indent }}` one indentation level. Users can replace any of these
//! per-template via the `[templates]` table in hexgen.toml.

use std::collections::BTreeMap;

use hexgen_core::application::{TemplateId, TemplateSet};

const PORT_INTERFACE: &str = r#"{% if withExample -%}
/**
 * Example consumer:
 *
 *   constructor(@Inject({{ tokenName }}) private readonly {{ camel }}: {{ interfaceName }}) {}
 */
{% endif -%}
export interface {{ interfaceName }} {
{{ indent }}// Operations this capability exposes to domain logic.
}
"#;

const PORT_TOKEN: &str = r#"import type { {{ interfaceName }} } from {{ q }}./{{ fileName }}.port{{ q }}{{ semi }}

export const {{ tokenName }} = Symbol({{ q }}{{ tokenName }}{{ q }}){{ semi }}

export type { {{ interfaceName }} }{{ semi }}
"#;

const PORT_SERVICE: &str = r#"import { Inject, Injectable } from {{ q }}@nestjs/common{{ q }}{{ semi }}

import type { {{ interfaceName }} } from {{ q }}./{{ fileName }}.port{{ q }}{{ semi }}
import { {{ tokenName }} } from {{ q }}./{{ fileName }}.token{{ q }}{{ semi }}

@Injectable()
export class {{ serviceName }} {
{{ indent }}constructor(
{{ indent }}{{ indent }}@Inject({{ tokenName }}) private readonly {{ camel }}: {{ interfaceName }},
{{ indent }}) {}
}
"#;

const PORT_MODULE: &str = r#"import { Module } from {{ q }}@nestjs/common{{ q }}{{ semi }}
{%- if includeService %}

import { {{ serviceName }} } from {{ q }}./{{ fileName }}.service{{ q }}{{ semi }}
{%- endif %}

@Module({
{%- if includeService %}
{{ indent }}providers: [{{ serviceName }}],
{{ indent }}exports: [{{ serviceName }}],
{%- endif %}
})
export class {{ moduleName }} {}
"#;

const PORT_INDEX: &str = r#"export * from {{ q }}./{{ fileName }}.port{{ q }}{{ semi }}
export * from {{ q }}./{{ fileName }}.token{{ q }}{{ semi }}
{%- if includeService %}
export * from {{ q }}./{{ fileName }}.service{{ q }}{{ semi }}
{%- endif %}
{%- if includeModule %}
export * from {{ q }}./{{ fileName }}.module{{ q }}{{ semi }}
{%- endif %}
"#;

const ADAPTER_CLASS: &str = r#"import { Injectable } from {{ q }}@nestjs/common{{ q }}{{ semi }}
{%- if hasPort %}

import type { {{ portInterface }} } from {{ q }}{{ portInterfaceImport }}{{ q }}{{ semi }}
{%- endif %}

@Injectable()
export class {{ adapterName }}{% if hasPort %} implements {{ portInterface }}{% endif %} {
{{ indent }}// Implement the port operations against the concrete backend.
}
"#;

const ADAPTER_MODULE: &str = r#"import { Module } from {{ q }}@nestjs/common{{ q }}{{ semi }}
import type { DynamicModule } from {{ q }}@nestjs/common{{ q }}{{ semi }}

import { {{ adapterName }} } from {{ q }}./{{ fileName }}.adapter{{ q }}{{ semi }}
{%- if hasPort %}
import { {{ portToken }} } from {{ q }}{{ portTokenImport }}{{ q }}{{ semi }}
{%- endif %}

@Module({
{%- if hasPort %}
{{ indent }}providers: [{ provide: {{ portToken }}, useClass: {{ adapterName }} }],
{{ indent }}exports: [{{ portToken }}],
{%- else %}
{{ indent }}providers: [{{ adapterName }}],
{{ indent }}exports: [{{ adapterName }}],
{%- endif %}
})
export class {{ moduleName }} {
{%- if registration == "async" %}
{{ indent }}static async registerAsync(): Promise<DynamicModule> {
{{ indent }}{{ indent }}return { module: {{ moduleName }} }{{ semi }}
{{ indent }}}
{%- else %}
{{ indent }}static register(): DynamicModule {
{{ indent }}{{ indent }}return { module: {{ moduleName }} }{{ semi }}
{{ indent }}}
{%- endif %}
}
"#;

const ADAPTER_INDEX: &str = r#"export * from {{ q }}./{{ fileName }}.adapter{{ q }}{{ semi }}
export * from {{ q }}./{{ fileName }}.module{{ q }}{{ semi }}
"#;

const SERVICE_CLASS: &str = r#"import { Injectable } from {{ q }}@nestjs/common{{ q }}{{ semi }}

@Injectable()
export class {{ serviceName }} {
{{ indent }}// Domain logic lives here.
}
"#;

const SERVICE_INDEX: &str = r#"export * from {{ q }}./{{ fileName }}.service{{ q }}{{ semi }}
"#;

/// The complete built-in template set.
pub fn default_set() -> TemplateSet {
    let mut sources = BTreeMap::new();
    sources.insert(TemplateId::PortInterface, PORT_INTERFACE.to_string());
    sources.insert(TemplateId::PortToken, PORT_TOKEN.to_string());
    sources.insert(TemplateId::PortService, PORT_SERVICE.to_string());
    sources.insert(TemplateId::PortModule, PORT_MODULE.to_string());
    sources.insert(TemplateId::PortIndex, PORT_INDEX.to_string());
    sources.insert(TemplateId::AdapterClass, ADAPTER_CLASS.to_string());
    sources.insert(TemplateId::AdapterModule, ADAPTER_MODULE.to_string());
    sources.insert(TemplateId::AdapterIndex, ADAPTER_INDEX.to_string());
    sources.insert(TemplateId::ServiceClass, SERVICE_CLASS.to_string());
    sources.insert(TemplateId::ServiceIndex, SERVICE_INDEX.to_string());
    TemplateSet::new(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_id_has_a_builtin_source() {
        let set = default_set();
        for id in TemplateId::ALL {
            assert!(set.source(id).is_ok(), "missing builtin for {}", id.key());
        }
    }
}
