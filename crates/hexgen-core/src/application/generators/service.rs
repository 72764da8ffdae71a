//! Service generator: a standalone domain service with its barrel index.

use std::collections::BTreeMap;

use tracing::instrument;

use crate::application::generators::{
    FileToGenerate, GeneratorEnv, GeneratorResult, commit_files, render_file,
};
use crate::application::templates::TemplateId;
use crate::application::writer::WriteOptions;
use crate::domain::{ContextOptions, build_context, derive_name_variants, resolve_output_path};
use crate::error::HexgenResult;

/// Options for one service generation request.
#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
    pub name: String,
    pub with_example: bool,
    pub force: bool,
    pub dry_run: bool,
}

pub struct ServiceGenerator<'a> {
    env: &'a GeneratorEnv<'a>,
}

impl<'a> ServiceGenerator<'a> {
    pub fn new(env: &'a GeneratorEnv<'a>) -> Self {
        Self { env }
    }

    /// Produce the service's file set under `<services>/<kebab-name>/`.
    #[instrument(skip_all, fields(name = %opts.name))]
    pub fn generate(&self, opts: &ServiceOptions) -> HexgenResult<GeneratorResult> {
        let variants = derive_name_variants(&opts.name)?;

        let ctx_opts = ContextOptions {
            include_service: true,
            include_module: false,
            with_example: opts.with_example,
        };
        let context = build_context(&variants, &ctx_opts, self.env.config, BTreeMap::new());

        let dir = resolve_output_path(&self.env.services_root(), &[&variants.kebab]);
        let file_name = self.env.config.files.casing.apply(&variants).to_string();

        let mut files: Vec<FileToGenerate> = Vec::new();
        files.push(render_file(
            self.env,
            TemplateId::ServiceClass,
            dir.join(format!("{file_name}.service.ts")),
            &context,
        )?);
        files.push(render_file(
            self.env,
            TemplateId::ServiceIndex,
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
            &format!("service '{}'", variants.pascal),
        ))
    }
}
