//! The extraction run: load the document, then print it, provision the
//! parser, or report the fault.

use crate::error::{Error, Result};
use crate::model::Document;
use crate::provision::{docx_available, ProvisionRequest, Provisioner, DOCX_CAPABILITY};
use crate::render::{write_report, ReportOptions};
use std::io::Write;
use std::path::PathBuf;

/// Document read when no input path is given.
pub const DEFAULT_INPUT: &str = "ReConnect Blogs.docx";

/// First line printed when this build cannot parse documents.
pub const MISSING_MESSAGE: &str = "ERROR: python-docx module is not installed";

/// Configuration for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Path of the Word document, relative to the working directory
    pub input: PathBuf,

    /// Header and banner settings
    pub report: ReportOptions,

    /// How to install the parser when this build lacks it
    pub provisioning: ProvisionRequest,

    /// Run the provisioning command, or only print it
    pub auto_provision: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            report: ReportOptions::default(),
            provisioning: ProvisionRequest::default(),
            auto_provision: true,
        }
    }
}

impl ExtractOptions {
    /// Create options for the default input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input document.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Set the report options.
    pub fn with_report(mut self, report: ReportOptions) -> Self {
        self.report = report;
        self
    }

    /// Set the provisioning command.
    pub fn with_provisioning(mut self, request: ProvisionRequest) -> Self {
        self.provisioning = request;
        self
    }

    /// Enable or disable running the provisioning command.
    pub fn with_auto_provision(mut self, enabled: bool) -> Self {
        self.auto_provision = enabled;
        self
    }
}

/// How a run ended. Every variant is a normal exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The report was printed with this many paragraphs.
    Extracted { paragraphs: usize },
    /// The parser was missing and has been installed.
    Provisioned,
    /// The parser was missing and the install command was only printed.
    ProvisionSkipped,
    /// The document could not be read; the message was printed.
    Failed(String),
}

/// Prints a document's paragraphs, or explains why it could not.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Create an extractor.
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// The run configuration.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Load the configured document and write the result to `out`.
    ///
    /// Document faults are printed and end the run normally. Only a failed
    /// provisioning command or a failed write comes back as `Err`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paratext::extract::{ExtractOptions, Extractor};
    /// use paratext::provision::CommandProvisioner;
    ///
    /// let extractor = Extractor::new(ExtractOptions::default());
    /// let stdout = std::io::stdout();
    /// extractor.run(&mut stdout.lock(), &CommandProvisioner)?;
    /// # Ok::<(), paratext::Error>(())
    /// ```
    pub fn run<W, P>(&self, out: &mut W, provisioner: &P) -> Result<Outcome>
    where
        W: Write,
        P: Provisioner + ?Sized,
    {
        // checked before the input is touched
        if !docx_available() {
            let missing = Err(Error::MissingCapability(DOCX_CAPABILITY.to_string()));
            return self.report_loaded(missing, out, provisioner);
        }

        tracing::debug!(input = %self.options.input.display(), "loading document");
        let loaded = crate::parse_file(&self.options.input);
        self.report_loaded(loaded, out, provisioner)
    }

    /// Write the result of an already attempted load to `out`.
    pub fn report_loaded<W, P>(
        &self,
        loaded: Result<Document>,
        out: &mut W,
        provisioner: &P,
    ) -> Result<Outcome>
    where
        W: Write,
        P: Provisioner + ?Sized,
    {
        match loaded {
            Ok(doc) => {
                let paragraphs = write_report(&doc, &self.options.report, out)?;
                tracing::debug!(
                    total = doc.len(),
                    printed = paragraphs,
                    "printed paragraphs"
                );
                Ok(Outcome::Extracted { paragraphs })
            }
            Err(Error::MissingCapability(capability)) => {
                tracing::debug!(%capability, "document parser missing from this build");
                self.provision(out, provisioner)
            }
            Err(e) => {
                tracing::debug!(error = ?e, "could not load document");
                let message = e.to_string();
                writeln!(out, "Error: {}", message)?;
                out.flush()?;
                Ok(Outcome::Failed(message))
            }
        }
    }

    fn provision<W, P>(&self, out: &mut W, provisioner: &P) -> Result<Outcome>
    where
        W: Write,
        P: Provisioner + ?Sized,
    {
        let request = &self.options.provisioning;
        writeln!(out, "{}", MISSING_MESSAGE)?;

        if !self.options.auto_provision {
            writeln!(out, "Install it with: {}", request.command_line())?;
            out.flush()?;
            return Ok(Outcome::ProvisionSkipped);
        }

        writeln!(out, "Installing {}...", request.package)?;
        // the child process writes to the same terminal
        out.flush()?;
        provisioner.provision(request)?;

        writeln!(out, "\nPlease run this script again.")?;
        out.flush()?;
        Ok(Outcome::Provisioned)
    }
}
