//! Common test utilities for corpus-level tests
//!
//! Writes prompt files into a temporary directory laid out the way the
//! `tagnet` CLI expects: a flat directory of newline-delimited files.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary prompt corpus, removed on drop
#[derive(Debug)]
pub struct TestCorpus {
    dir: TempDir,
    /// Number of files written
    pub file_count: usize,
}

impl TestCorpus {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            file_count: 0,
        }
    }

    /// Add a file whose lines are `prompts`
    pub fn with_file(mut self, name: &str, prompts: &[&str]) -> Self {
        fs::write(self.dir.path().join(name), prompts.join("\n"))
            .expect("failed to write prompt file");
        self.file_count += 1;
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Small corpus in the shape of real image-generation prompts
pub fn render_corpus() -> TestCorpus {
    TestCorpus::new()
        .with_file(
            "batch-1.txt",
            &[
                ".imagine α-pinene pool ; vray ; PBR ; HDR ; closeup ; DSLR ; hyperrealistic",
                ".imagine omicron ; vray ; hdr illumination ; contest winner",
            ],
        )
        .with_file(
            "batch-2.txt",
            &[
                ".imagine the night ; VRay ; isonoise ; contest winner ; highly sought art",
                ".imagine omicron ; vray ; hdr illumination ; contest winner",
                ".imagine the color clash ; HDR ; hyperrealistic ; Contest Winner",
            ],
        )
}
