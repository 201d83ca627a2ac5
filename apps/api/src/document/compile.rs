//! PDF export: compiles a LaTeX document with a local `pdflatex` install.
//!
//! Each compile runs in its own temp directory under `work_root`; the
//! directory is removed when the `TempDir` guard drops, success or not.

use std::path::PathBuf;
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

const TEX_FILE: &str = "resume.tex";
const PDF_FILE: &str = "resume.pdf";

/// Filename offered to the browser for the exported PDF.
pub const EXPORT_FILENAME: &str = "enhanced-resume.pdf";

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to prepare LaTeX workspace: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to start `{binary}`: {source}")]
    Spawn {
        binary: String,
        source: std::io::Error,
    },

    #[error("LaTeX compilation failed (exit code {code:?}): {output}")]
    Failed { code: Option<i32>, output: String },
}

#[derive(Debug, Clone)]
pub struct PdfCompiler {
    binary: String,
    work_root: PathBuf,
}

impl PdfCompiler {
    pub fn new(binary: impl Into<String>, work_root: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            work_root: work_root.into(),
        }
    }

    /// Compiles `latex` and returns the resulting PDF bytes.
    pub async fn compile(&self, latex: &str) -> Result<Vec<u8>, CompileError> {
        tokio::fs::create_dir_all(&self.work_root).await?;
        let workdir = tempfile::Builder::new()
            .prefix("resume-")
            .tempdir_in(&self.work_root)?;

        tokio::fs::write(workdir.path().join(TEX_FILE), latex).await?;
        debug!("Compiling LaTeX in {}", workdir.path().display());

        let output = Command::new(&self.binary)
            .arg("-interaction=nonstopmode")
            .arg(TEX_FILE)
            .current_dir(workdir.path())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| CompileError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
            log.push_str(&String::from_utf8_lossy(&output.stderr));
            warn!(
                "LaTeX compilation exited with {:?}",
                output.status.code()
            );
            return Err(CompileError::Failed {
                code: output.status.code(),
                output: log,
            });
        }

        let pdf = tokio::fs::read(workdir.path().join(PDF_FILE)).await?;
        debug!("Compiled PDF: {} bytes", pdf.len());
        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_a_spawn_error() {
        let root = tempfile::tempdir().unwrap();
        let compiler = PdfCompiler::new("definitely-not-a-latex-binary", root.path());

        let err = compiler.compile("\\documentclass{article}").await.unwrap_err();
        assert!(matches!(err, CompileError::Spawn { .. }), "got {err:?}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_reports_output() {
        let root = tempfile::tempdir().unwrap();
        // `false` ignores its arguments and exits 1.
        let compiler = PdfCompiler::new("false", root.path());

        let err = compiler.compile("irrelevant").await.unwrap_err();
        match err {
            CompileError::Failed { code, .. } => assert_eq!(code, Some(1)),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_workdir_is_cleaned_up() {
        let root = tempfile::tempdir().unwrap();
        let compiler = PdfCompiler::new("false", root.path());
        let _ = compiler.compile("irrelevant").await;

        let leftovers = std::fs::read_dir(root.path()).unwrap().count();
        assert_eq!(leftovers, 0);
    }
}
