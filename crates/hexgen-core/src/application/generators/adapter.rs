//! Adapter generator: a concrete port implementation plus its wiring
//! module and barrel index.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::instrument;

use crate::application::generators::{
    FileToGenerate, GeneratorEnv, GeneratorResult, commit_files, render_file,
};
use crate::application::templates::TemplateId;
use crate::application::writer::WriteOptions;
use crate::domain::{
    ContextOptions, build_context, derive_name_variants, resolve_import_path,
    resolve_output_path, token_name,
};
use crate::error::HexgenResult;

/// Options for one adapter generation request.
#[derive(Debug, Clone, Default)]
pub struct AdapterOptions {
    pub name: String,
    /// Target port the adapter implements. When supplied, the generated
    /// adapter imports the port's token and interface by computed relative
    /// path; without it, a free-standing adapter class is emitted.
    pub port: Option<String>,
    pub with_example: bool,
    pub force: bool,
    pub dry_run: bool,
}

/// Generates an adapter: the implementation side of a port boundary.
pub struct AdapterGenerator<'a> {
    env: &'a GeneratorEnv<'a>,
}

impl<'a> AdapterGenerator<'a> {
    pub fn new(env: &'a GeneratorEnv<'a>) -> Self {
        Self { env }
    }

    /// Produce the adapter's file set under `<adapters>/<kebab-name>/`.
    #[instrument(skip_all, fields(name = %opts.name, port = opts.port.as_deref().unwrap_or("-")))]
    pub fn generate(&self, opts: &AdapterOptions) -> HexgenResult<GeneratorResult> {
        let variants = derive_name_variants(&opts.name)?;

        let dir = resolve_output_path(&self.env.adapters_root(), &[&variants.kebab]);
        let file_name = self.env.config.files.casing.apply(&variants).to_string();
        let adapter_path = dir.join(format!("{file_name}.adapter.ts"));

        // Enrich the context with the target port, when one was named, so
        // the adapter file imports the correct port without the user typing
        // paths by hand.
        let mut extra: BTreeMap<String, Value> = BTreeMap::new();
        match &opts.port {
            Some(port_name) => {
                let port_variants = derive_name_variants(port_name)?;
                let naming = &self.env.config.naming;
                let port_file = self.env.config.files.casing.apply(&port_variants);
                let token_path = self
                    .env
                    .ports_root()
                    .join(&port_variants.kebab)
                    .join(format!("{port_file}.token.ts"));
                let port_path = self
                    .env
                    .ports_root()
                    .join(&port_variants.kebab)
                    .join(format!("{port_file}.port.ts"));

                extra.insert("hasPort".into(), Value::Bool(true));
                extra.insert("portName".into(), Value::from(port_variants.pascal.clone()));
                extra.insert(
                    "portInterface".into(),
                    Value::from(format!("{}{}", port_variants.pascal, naming.port_suffix)),
                );
                extra.insert(
                    "portToken".into(),
                    Value::from(token_name(&port_variants, &naming.token_suffix)),
                );
                extra.insert(
                    "portTokenImport".into(),
                    Value::from(resolve_import_path(&adapter_path, &token_path)?),
                );
                extra.insert(
                    "portInterfaceImport".into(),
                    Value::from(resolve_import_path(&adapter_path, &port_path)?),
                );
            }
            None => {
                extra.insert("hasPort".into(), Value::Bool(false));
            }
        }

        let ctx_opts = ContextOptions {
            include_service: false,
            include_module: true,
            with_example: opts.with_example,
        };
        let context = build_context(&variants, &ctx_opts, self.env.config, extra);

        let mut files: Vec<FileToGenerate> = Vec::new();
        files.push(render_file(
            self.env,
            TemplateId::AdapterClass,
            adapter_path,
            &context,
        )?);
        files.push(render_file(
            self.env,
            TemplateId::AdapterModule,
            dir.join(format!("{file_name}.module.ts")),
            &context,
        )?);
        files.push(render_file(
            self.env,
            TemplateId::AdapterIndex,
            dir.join("index.ts"),
            &context,
        )?);

        let write_opts = WriteOptions {
            force: opts.force,
            dry_run: opts.dry_run,
        };
        Ok(commit_files(
            self.env,
            files,
            &write_opts,
            &format!("adapter '{}'", variants.pascal),
        ))
    }
}
