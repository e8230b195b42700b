//! Analyzer backed by an external program.
//!
//! The program receives the text on standard input and must print CoNLL-U on
//! standard output. Any argument equal to or containing `{locale}` has the
//! placeholder replaced with the requested locale code, so a single wrapper
//! script can serve several languages.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use log::debug;

use super::{MorphologicalAnalyzer, Sentence, conllu};
use crate::error::{BhashaError, Result};

const LOCALE_PLACEHOLDER: &str = "{locale}";

/// Runs a configured program once per analysis request.
#[derive(Debug, Clone)]
pub struct CommandAnalyzer {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandAnalyzer {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        CommandAnalyzer {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn collaborator(&self) -> String {
        format!("analyzer:{}", self.program.display())
    }

    fn unavailable(&self, message: impl Into<String>) -> BhashaError {
        BhashaError::collaborator(self.collaborator(), message)
    }
}

impl MorphologicalAnalyzer for CommandAnalyzer {
    fn analyze(&self, text: &str, locale: &str) -> Result<Vec<Sentence>> {
        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(LOCALE_PLACEHOLDER, locale))
            .collect();
        debug!(
            "Running analyzer {} {:?} for locale {}",
            self.program.display(),
            args,
            locale
        );

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.unavailable(format!("Failed to start: {e}")))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.unavailable("Standard input is not available"))?;

        // Feed stdin from a separate thread so a large output cannot block the
        // child while we are still writing.
        let (output, written) = thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(text.as_bytes()));
            let output = child.wait_with_output();
            (output, writer.join())
        });

        let output = output.map_err(|e| self.unavailable(format!("Failed to wait: {e}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.unavailable(format!(
                "Exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        match written {
            Ok(Ok(())) => {}
            // The child may exit successfully without reading all of its input.
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("Analyzer {} closed stdin early", self.program.display());
            }
            Ok(Err(e)) => return Err(self.unavailable(format!("Failed to write input: {e}"))),
            Err(_) => return Err(self.unavailable("Input writer panicked")),
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| self.unavailable(format!("Output is not valid UTF-8: {e}")))?;
        conllu::parse(&stdout).map_err(|e| match e {
            BhashaError::CollaboratorUnavailable { message, .. } => self.unavailable(message),
            other => other,
        })
    }

    fn name(&self) -> &'static str {
        "command"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program() {
        let analyzer = CommandAnalyzer::new("/nonexistent/bhasha-analyzer");
        let err = analyzer.analyze("text", "hi").unwrap_err();

        assert!(matches!(err, BhashaError::CollaboratorUnavailable { .. }));
        assert!(err.to_string().contains("/nonexistent/bhasha-analyzer"));
    }

    #[cfg(unix)]
    #[test]
    fn test_reads_conllu_from_stdout() {
        let analyzer = CommandAnalyzer::new("sh").with_args([
            "-c",
            "cat >/dev/null; printf '1\\tघर\\tघर\\n2\\tको\\t_\\n\\n'",
        ]);
        let sentences = analyzer.analyze("घर को", "hi").unwrap();

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].words.len(), 2);
        assert_eq!(sentences[0].words[1].lemma, "को");
    }

    #[cfg(unix)]
    #[test]
    fn test_locale_placeholder_and_stdin() {
        // Echo the locale as a form and the input as its lemma.
        let analyzer = CommandAnalyzer::new("sh").with_args([
            "-c",
            "printf '1\\t%s\\t%s\\n' \"$0\" \"$(cat)\"",
            "{locale}",
        ]);
        let sentences = analyzer.analyze("ఇల్లు", "te").unwrap();

        assert_eq!(sentences[0].words[0].text, "te");
        assert_eq!(sentences[0].words[0].lemma, "ఇల్లు");
    }

    #[cfg(unix)]
    #[test]
    fn test_program_ignoring_stdin() {
        let analyzer = CommandAnalyzer::new("sh")
            .with_args(["-c", "exec 0<&-; printf '1\\tघर\\tघर\\n'"]);
        let text = "घर ".repeat(200_000);
        let sentences = analyzer.analyze(&text, "hi").unwrap();

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].words[0].lemma, "घर");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit() {
        let analyzer =
            CommandAnalyzer::new("sh").with_args(["-c", "echo 'model missing' >&2; exit 3"]);
        let err = analyzer.analyze("text", "ta").unwrap_err();

        assert!(matches!(err, BhashaError::CollaboratorUnavailable { .. }));
        assert!(err.to_string().contains("model missing"));
    }

    #[cfg(unix)]
    #[test]
    fn test_malformed_output() {
        let analyzer = CommandAnalyzer::new("sh").with_args(["-c", "cat >/dev/null; echo garbage"]);
        let err = analyzer.analyze("text", "ur").unwrap_err();

        assert!(matches!(err, BhashaError::CollaboratorUnavailable { .. }));
        assert!(err.to_string().contains("analyzer:sh"));
    }
}
