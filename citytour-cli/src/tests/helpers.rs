//! Test helpers for writing city and route files to a temporary directory.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

use crate::sources::GraphSources;

/// Three cities where A-B and B-C are short and A-C is long.
pub(super) const TRIANGLE_CITIES: &str = "# name x y\nA 0 0\nB 1 0\nC 1 1\n";
pub(super) const TRIANGLE_ROUTES: &str = "A B 1 10 2\nB C 1 10 2\nA C 5 1 2\n";
/// A path A-B-C with no route closing it.
pub(super) const OPEN_PATH_ROUTES: &str = "A B 1 1 1\nB C 1 1 1\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write fixture file");
}

pub(super) struct GraphFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl GraphFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn with_graph(cities: &str, routes: &str) -> Self {
        let files = Self::new();
        write_utf8(&files.cities(), cities.as_bytes());
        write_utf8(&files.routes(), routes.as_bytes());
        files
    }

    pub(super) fn triangle() -> Self {
        Self::with_graph(TRIANGLE_CITIES, TRIANGLE_ROUTES)
    }

    pub(super) fn cities(&self) -> Utf8PathBuf {
        self.root.join("cities.txt")
    }

    pub(super) fn routes(&self) -> Utf8PathBuf {
        self.root.join("routes.txt")
    }

    pub(super) fn sources(&self) -> GraphSources {
        GraphSources {
            cities: self.cities(),
            routes: self.routes(),
        }
    }
}
