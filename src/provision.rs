//! Runtime check for the document parser and provisioning of a build that has it.
//!
//! Document parsing lives behind the `docx` feature. A binary compiled
//! without it cannot parse anything, so the extractor asks a [`Provisioner`]
//! to install a build that has the feature and tells the user to re-run.

use crate::error::{Error, Result};
use std::process::Command;

/// Name of the parsing capability, as shown to the user.
pub const DOCX_CAPABILITY: &str = "docx";

/// Whether this build can parse Word documents.
pub fn docx_available() -> bool {
    cfg!(feature = "docx")
}

/// A package-manager invocation that installs a missing capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    /// Name of the missing package, used in messages
    pub package: String,
    /// Program to run
    pub program: String,
    /// Arguments passed to `program`
    pub args: Vec<String>,
}

impl ProvisionRequest {
    /// Create a request running `program` with `args`.
    pub fn new<I, S>(package: impl Into<String>, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            package: package.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `cargo install <krate> --features <feature>`, reported as package `feature`.
    pub fn cargo_install(krate: &str, feature: &str) -> Self {
        Self::new(feature, "cargo", ["install", krate, "--features", feature])
    }

    /// The command line as a user would type it.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ProvisionRequest {
    fn default() -> Self {
        Self::cargo_install("paratext-cli", DOCX_CAPABILITY)
    }
}

/// Something that can install a missing capability.
pub trait Provisioner {
    /// Run the installation, blocking until it finishes.
    fn provision(&self, request: &ProvisionRequest) -> Result<()>;
}

/// Runs the request as a child process that inherits stdin, stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProvisioner;

impl Provisioner for CommandProvisioner {
    fn provision(&self, request: &ProvisionRequest) -> Result<()> {
        tracing::info!(command = %request.command_line(), "running provisioning command");

        let status = Command::new(&request.program)
            .args(&request.args)
            .status()
            .map_err(|e| Error::Provision(format!("could not run `{}`: {}", request.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::Provision(format!(
                "`{}` exited with {}",
                request.command_line(),
                status
            )))
        }
    }
}
