use std::io::{self, Write};

use tracing::debug;

use crate::error::{Diagnostic, ScanError};

/// Receives each diagnostic the moment it is discovered.
pub trait Reporter {
    fn report(&mut self, diagnostic: &Diagnostic);
}

/// Keeps diagnostics to the returned list only.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {
    fn report(&mut self, _diagnostic: &Diagnostic) {}
}

/// Echoes every diagnostic to stderr as `[line N] Error: ...`, source bytes untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stderr;

impl Reporter for Stderr {
    fn report(&mut self, diagnostic: &Diagnostic) {
        let mut stderr = io::stderr().lock();
        // nowhere left to report a failing stderr
        let _ = diagnostic
            .write_to(&mut stderr)
            .and_then(|()| stderr.write_all(b"\n"));
    }
}

impl<F: FnMut(&Diagnostic)> Reporter for F {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

pub struct Diagnostics<R> {
    reporter: R,
    reported: Vec<Diagnostic>,
}

impl<R: Reporter> Diagnostics<R> {
    pub fn new(reporter: R) -> Self {
        Self {
            reporter,
            reported: Vec::new(),
        }
    }

    pub fn error(&mut self, line: usize, error: ScanError) {
        let diagnostic = Diagnostic { line, error };
        debug!(line, %error, "lexical error");
        self.reporter.report(&diagnostic);
        self.reported.push(diagnostic);
    }

    pub fn count(&self) -> usize {
        self.reported.len()
    }

    pub fn finish(self) -> Vec<Diagnostic> {
        self.reported
    }
}
