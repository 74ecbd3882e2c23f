use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Log resolution details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile one XSD schema into a pseudo-schema
    Parse(ParseArgs),
    /// Compile the CAPEC and CWE schemas and render them as PlantUML mindmaps
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// The source file or URL
    #[arg(long)]
    pub schema: String,

    /// Logical root name (e.g. attack_pattern), or a declared element or complex type name
    #[arg(long)]
    pub root: String,

    /// Directory receiving <root>.schema.txt
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// File of keys to drop from every object, one per line
    #[arg(long)]
    pub ignored_keys: Option<PathBuf>,

    /// Allow a XML Document Type Definition (DTD) to occur
    #[arg(long)]
    pub allow_dtd: bool,

    /// Print the pseudo-schema instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory every other relative path is resolved against
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    #[arg(long, default_value = "schemas/ap_schema_latest.xsd.xml")]
    pub capec_schema: PathBuf,

    #[arg(long, default_value = "schemas/cwe_schema_latest.xsd.xml")]
    pub cwe_schema: PathBuf,

    #[arg(long, default_value = "capec_ignored_keys.txt")]
    pub capec_ignored: PathBuf,

    #[arg(long, default_value = "cwe_ignored_keys.txt")]
    pub cwe_ignored: PathBuf,

    #[arg(long, default_value = "generated/schemas")]
    pub schema_out: PathBuf,

    #[arg(long, default_value = "generated/puml")]
    pub puml_out: PathBuf,

    #[arg(long, default_value = "generated/pdf")]
    pub pdf_out: PathBuf,

    /// plantuml.jar, run with `java -jar` when no other PlantUML install is found
    #[arg(long, env = "PLANTUML_JAR")]
    pub plantuml_jar: Option<PathBuf>,

    /// Stop after writing the .puml files
    #[arg(long)]
    pub no_render: bool,
}

impl GenerateArgs {
    /// Makes the base directory, and so every resolved path, absolute.
    pub fn with_absolute_base_dir(mut self) -> anyhow::Result<Self> {
        self.base_dir = std::path::absolute(&self.base_dir).with_context(|| {
            format!("failed to resolve base directory {}", self.base_dir.display())
        })?;
        Ok(self)
    }

    /// Resolves `path` against the base directory. Absolute paths are kept.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_defaults() {
        let cli = Cli::try_parse_from(["akbm", "generate", "--base-dir", "/kb"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(
            args.resolve(&args.capec_schema),
            PathBuf::from("/kb/schemas/ap_schema_latest.xsd.xml")
        );
        assert_eq!(args.resolve(&args.pdf_out), PathBuf::from("/kb/generated/pdf"));
        assert!(!args.no_render);
    }

    #[test]
    fn relative_base_dir_becomes_absolute() {
        let cli = Cli::try_parse_from(["akbm", "generate"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let args = args.with_absolute_base_dir().unwrap();
        let pdf_out = args.resolve(&args.pdf_out);
        assert!(pdf_out.is_absolute());
        assert!(pdf_out.ends_with("generated/pdf"));
        assert!(args.resolve(&args.cwe_schema).is_absolute());
    }

    #[test]
    fn parse_requires_schema_and_root() {
        assert!(Cli::try_parse_from(["akbm", "parse", "--root", "weakness"]).is_err());
        let cli =
            Cli::try_parse_from(["akbm", "-v", "parse", "--schema", "cwe.xsd", "--root", "weakness"])
                .unwrap();
        assert!(cli.verbose);
        let Command::Parse(args) = cli.command else {
            panic!("expected parse");
        };
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(args.ignored_keys.is_none());
    }
}
