use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context};
use thiserror::Error;

const BREW_OPT_ROOTS: [&str; 2] = ["/usr/local/opt", "/opt/homebrew/opt"];
const MAIN_CLASS: &str = "net.sourceforge.plantuml.Run";

/// The PlantUML process ran and exited unsuccessfully.
#[derive(Debug, Error)]
#[error("PlantUML command failed ({status}): {command}")]
pub struct ProcessFailed {
    pub command: String,
    pub status: std::process::ExitStatus,
}

/// A way of running PlantUML: a program and the arguments preceding the diagram options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlantUml {
    program: PathBuf,
    args: Vec<OsString>,
}

impl PlantUml {
    /// Finds a PlantUML install. In order: a Homebrew PlantUML jar run with Batik on the
    /// classpath, a `plantuml` executable on PATH, then `jar` run with `java -jar`.
    pub fn locate(jar: Option<&Path>) -> anyhow::Result<Self> {
        let opt_roots = BREW_OPT_ROOTS.map(Path::new);
        Self::discover(
            which::which("java").ok(),
            &opt_roots,
            which::which("plantuml").ok(),
            jar,
        )
    }

    fn discover(
        java: Option<PathBuf>,
        opt_roots: &[&Path],
        plantuml: Option<PathBuf>,
        jar: Option<&Path>,
    ) -> anyhow::Result<Self> {
        if let Some(java) = &java {
            for root in opt_roots {
                let plantuml_jar = root.join("plantuml/libexec/plantuml.jar");
                let batik_lib = root.join("batik/libexec/lib");
                if plantuml_jar.exists() && batik_lib.exists() {
                    let mut classpath = plantuml_jar.into_os_string();
                    classpath.push(":");
                    classpath.push(batik_lib.join("*"));
                    return Ok(Self {
                        program: java.clone(),
                        args: vec!["-cp".into(), classpath, MAIN_CLASS.into()],
                    });
                }
            }
        }

        if let Some(program) = plantuml {
            return Ok(Self {
                program,
                args: Vec::new(),
            });
        }

        if let Some(jar) = jar {
            return Ok(Self {
                program: java.unwrap_or_else(|| PathBuf::from("java")),
                args: vec!["-jar".into(), jar.as_os_str().to_owned()],
            });
        }

        bail!("PlantUML not found: install `plantuml` or set PLANTUML_JAR to plantuml.jar")
    }

    fn command(&self, puml: &Path, out_dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg("-tpdf")
            .arg("-o")
            .arg(out_dir)
            .arg(puml);
        command
    }

    /// Renders `puml` to `<out_dir>/<stem>.pdf` and returns the PDF path.
    pub fn render_pdf(&self, puml: &Path, out_dir: &Path) -> anyhow::Result<PathBuf> {
        let out_dir = &output_dir(out_dir)?;
        let stem = puml
            .file_stem()
            .with_context(|| format!("no file name in {}", puml.display()))?;
        let mut file_name = stem.to_owned();
        file_name.push(".pdf");
        let pdf = out_dir.join(file_name);

        let mut command = self.command(puml, out_dir);
        tracing::debug!(?command, "running PlantUML");
        let status = command
            .status()
            .with_context(|| format!("failed to run {}", self.program.display()))?;
        if !status.success() {
            return Err(ProcessFailed {
                command: format!("{command:?}"),
                status,
            }
            .into());
        }

        let written = std::fs::metadata(&pdf).map(|m| m.len()).unwrap_or(0);
        if written == 0 {
            bail!(
                "PlantUML did not produce a valid PDF for {}; check the PlantUML/JRE install (PDF output needs Batik)",
                puml.display()
            );
        }
        Ok(pdf)
    }
}

/// Creates `out_dir` and makes it absolute. PlantUML resolves a relative `-o` against the
/// directory of the diagram, not the working directory.
fn output_dir(out_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create directory {}", out_dir.display()))?;
    std::path::absolute(out_dir)
        .with_context(|| format!("failed to resolve directory {}", out_dir.display()))
}
