//! External renderer invocation.
//!
//! The production renderer is the openapi-generator CLI jar in html2 mode.
//! Its CLI contract and fixed output file name are the only things this
//! module knows about it; everything else goes through the `HtmlRenderer`
//! trait so hosts and tests can swap the tool.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Name of the fixed output file the renderer writes into the output
/// directory. The caller renames it to the artifact-scheme name; the tool
/// has no knowledge of the naming scheme.
pub const RENDERED_INDEX: &str = "index.html";

/// Exit status plus combined stdout/stderr of one renderer run.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub exit_code: i32,
    pub output: String,
}

impl RenderOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Turns a synthesized OpenAPI JSON document into a browsable HTML page.
pub trait HtmlRenderer: Send + Sync {
    /// Render `input_json` into `output_dir`.
    ///
    /// Returns the exit status and combined output of the tool run; an
    /// `Err` means the process could not be run at all.
    fn render(&self, input_json: &Path, output_dir: &Path) -> io::Result<RenderOutcome>;

    /// Whether the external tool is present. When `false` the orchestrator
    /// skips the run without starting a process.
    fn available(&self) -> bool {
        true
    }
}

/// The openapi-generator CLI jar, invoked as
/// `java -jar <cli.jar> generate -g html2 -i <json> -o <dir>`.
pub struct OpenApiGeneratorCli {
    jar: PathBuf,
}

impl OpenApiGeneratorCli {
    pub fn new(jar: impl Into<PathBuf>) -> Self {
        Self { jar: jar.into() }
    }

    pub fn jar(&self) -> &Path {
        &self.jar
    }

    fn command(&self, input_json: &Path, output_dir: &Path) -> Command {
        let mut cmd = Command::new("java");
        cmd.arg("-jar")
            .arg(&self.jar)
            .arg("generate")
            .args(["-g", "html2"])
            .arg("-i")
            .arg(input_json)
            .arg("-o")
            .arg(output_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl HtmlRenderer for OpenApiGeneratorCli {
    fn render(&self, input_json: &Path, output_dir: &Path) -> io::Result<RenderOutcome> {
        // wait_with_output drains both pipes to EOF before reading the exit
        // status; a heavily buffering tool cannot deadlock the caller.
        let output = self
            .command(input_json, output_dir)
            .spawn()?
            .wait_with_output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(RenderOutcome {
            exit_code: output.status.code().unwrap_or(-1),
            output: combined,
        })
    }

    fn available(&self) -> bool {
        self.jar.exists()
    }
}
