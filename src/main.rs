mod cli;
mod generator;
mod ignored_keys;
mod loader;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use akbm_xsd::{CompileOptions, IgnoreSet};
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command, GenerateArgs, ParseArgs};
use generator::plantuml::{PlantUml, ProcessFailed};
use tracing_subscriber::EnvFilter;

/// A knowledge base processed by `generate`.
struct KnowledgeBase<'a> {
    label: &'static str,
    root: &'static str,
    schema: &'a Path,
    ignored: &'a Path,
}

struct Artifacts {
    schema: PathBuf,
    puml: PathBuf,
    pdf: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            if error.downcast_ref::<ProcessFailed>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Parse(args) => parse(args),
        Command::Generate(args) => generate(args),
    }
}

fn compile_schema(
    source: &str,
    root: &str,
    ignored: IgnoreSet,
    allow_dtd: bool,
) -> anyhow::Result<String> {
    let text = loader::read_schema(source)?;
    let options = CompileOptions::new(root, source).with_ignored(ignored);
    let parsing = roxmltree::ParsingOptions {
        allow_dtd,
        ..roxmltree::ParsingOptions::default()
    };
    akbm_xsd::compile_str(&text, &options, parsing)
        .with_context(|| format!("failed to compile {source}"))
}

fn parse(args: ParseArgs) -> anyhow::Result<()> {
    let ignored = match &args.ignored_keys {
        Some(path) => ignored_keys::read(path)?,
        None => IgnoreSet::new(),
    };
    let text = compile_schema(&args.schema, &args.root, ignored, args.allow_dtd)?;

    if args.stdout {
        print!("{text}");
    } else {
        let root_name = akbm_xsd::normalize(&args.root);
        let path = generator::write_schema(&args.output_dir, &root_name, &text)?;
        println!("{}", path.display());
    }
    Ok(())
}

fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let args = args.with_absolute_base_dir()?;
    let capec_schema = args.resolve(&args.capec_schema);
    let capec_ignored = args.resolve(&args.capec_ignored);
    let cwe_schema = args.resolve(&args.cwe_schema);
    let cwe_ignored = args.resolve(&args.cwe_ignored);

    let knowledge_bases = [
        KnowledgeBase {
            label: "CAPEC",
            root: "attack_pattern",
            schema: &capec_schema,
            ignored: &capec_ignored,
        },
        KnowledgeBase {
            label: "CWE",
            root: "weakness",
            schema: &cwe_schema,
            ignored: &cwe_ignored,
        },
    ];

    let mut reports = Vec::new();
    for knowledge_base in &knowledge_bases {
        let artifacts = generate_one(&args, knowledge_base)?;
        reports.push((knowledge_base.label, artifacts));
    }

    for (label, artifacts) in reports {
        println!("{label}");
        println!("- schema: {}", artifacts.schema.display());
        println!("- puml:   {}", artifacts.puml.display());
        if let Some(pdf) = artifacts.pdf {
            println!("- pdf:    {}", pdf.display());
        }
    }
    Ok(())
}

fn generate_one(args: &GenerateArgs, knowledge_base: &KnowledgeBase) -> anyhow::Result<Artifacts> {
    tracing::debug!(
        label = knowledge_base.label,
        schema = %knowledge_base.schema.display(),
        "generating"
    );
    let ignored = ignored_keys::read(knowledge_base.ignored)?;
    let source = knowledge_base.schema.to_string_lossy();
    let text = compile_schema(&source, knowledge_base.root, ignored, false)?;

    let root_name = akbm_xsd::normalize(knowledge_base.root);
    let schema = generator::write_schema(&args.resolve(&args.schema_out), &root_name, &text)?;
    let puml = generator::write_mindmap(&args.resolve(&args.puml_out), knowledge_base.root, &text)?;

    let pdf = if args.no_render {
        None
    } else {
        let plantuml = PlantUml::locate(args.plantuml_jar.as_deref())?;
        Some(plantuml.render_pdf(&puml, &args.resolve(&args.pdf_out))?)
    };

    Ok(Artifacts { schema, puml, pdf })
}
