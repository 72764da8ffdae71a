//! Port generator: interface, injection token, optional domain service and
//! feature module, and a barrel index.

use std::collections::BTreeMap;

use tracing::instrument;

use crate::application::generators::{
    FileToGenerate, GeneratorEnv, GeneratorResult, commit_files, render_file,
};
use crate::application::templates::TemplateId;
use crate::application::writer::WriteOptions;
use crate::domain::{ContextOptions, build_context, derive_name_variants, resolve_output_path};
use crate::error::HexgenResult;

/// Options for one port generation request.
#[derive(Debug, Clone)]
pub struct PortOptions {
    pub name: String,
    pub include_service: bool,
    pub include_module: bool,
    pub with_example: bool,
    pub force: bool,
    pub dry_run: bool,
}

impl Default for PortOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            include_service: true,
            include_module: true,
            with_example: false,
            force: false,
            dry_run: false,
        }
    }
}

/// Generates a port: the capability boundary domain logic depends on.
pub struct PortGenerator<'a> {
    env: &'a GeneratorEnv<'a>,
}

impl<'a> PortGenerator<'a> {
    pub fn new(env: &'a GeneratorEnv<'a>) -> Self {
        Self { env }
    }

    /// Produce the port's file set under `<ports>/<kebab-name>/`.
    ///
    /// Write order is fixed: interface, token, service, module, index —
    /// the barrel always last so it re-exports files that already exist.
    #[instrument(skip_all, fields(name = %opts.name))]
    pub fn generate(&self, opts: &PortOptions) -> HexgenResult<GeneratorResult> {
        // Validation precedes all I/O.
        let variants = derive_name_variants(&opts.name)?;

        let ctx_opts = ContextOptions {
            include_service: opts.include_service,
            include_module: opts.include_module,
            with_example: opts.with_example,
        };
        let context = build_context(&variants, &ctx_opts, self.env.config, BTreeMap::new());

        let dir = resolve_output_path(&self.env.ports_root(), &[&variants.kebab]);
        let file_name = self.env.config.files.casing.apply(&variants).to_string();

        // Phase (a): render everything before writing anything.
        let mut files: Vec<FileToGenerate> = Vec::new();
        files.push(render_file(
            self.env,
            TemplateId::PortInterface,
            dir.join(format!("{file_name}.port.ts")),
            &context,
        )?);
        files.push(render_file(
            self.env,
            TemplateId::PortToken,
            dir.join(format!("{file_name}.token.ts")),
            &context,
        )?);
        if opts.include_service {
            files.push(render_file(
                self.env,
                TemplateId::PortService,
                dir.join(format!("{file_name}.service.ts")),
                &context,
            )?);
        }
        if opts.include_module {
            files.push(render_file(
                self.env,
                TemplateId::PortModule,
                dir.join(format!("{file_name}.module.ts")),
                &context,
            )?);
        }
        files.push(render_file(
            self.env,
            TemplateId::PortIndex,
            dir.join("index.ts"),
            &context,
        )?);

        // Phase (b): write, collecting every outcome.
        let write_opts = WriteOptions {
            force: opts.force,
            dry_run: opts.dry_run,
        };
        Ok(commit_files(
            self.env,
            files,
            &write_opts,
            &format!("port '{}'", variants.pascal),
        ))
    }
}
