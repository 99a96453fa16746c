//! Input file checks and graph loading shared by the subcommands.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use citytour_core::CityGraph;
use citytour_data::{load_cities, load_routes};
use log::warn;

use crate::{ARG_CITIES, ARG_ROUTES, CliError};

/// City and route files for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GraphSources {
    /// Path to the city file.
    pub(crate) cities: Utf8PathBuf,
    /// Path to the route file.
    pub(crate) routes: Utf8PathBuf,
}

impl GraphSources {
    /// Resolve both paths, naming `env_*` in the error when one is unset.
    pub(crate) fn require(
        cities: Option<Utf8PathBuf>,
        routes: Option<Utf8PathBuf>,
        env_cities: &'static str,
        env_routes: &'static str,
    ) -> Result<Self, CliError> {
        Ok(Self {
            cities: cities.ok_or(CliError::MissingArgument {
                field: ARG_CITIES,
                env: env_cities,
            })?,
            routes: routes.ok_or(CliError::MissingArgument {
                field: ARG_ROUTES,
                env: env_routes,
            })?,
        })
    }

    pub(crate) fn validate(&self) -> Result<(), CliError> {
        require_file(&self.cities, ARG_CITIES)?;
        require_file(&self.routes, ARG_ROUTES)?;
        Ok(())
    }

    /// Build a graph from the city file, then the route file.
    pub(crate) fn load(&self) -> Result<CityGraph, CliError> {
        self.validate()?;
        let mut graph = CityGraph::new();
        let cities = load_cities(&mut graph, &self.cities)?;
        let routes = load_routes(&mut graph, &self.routes)?;
        let skipped = cities.skipped.len() + routes.skipped.len();
        if skipped > 0 {
            warn!("{skipped} records were skipped while loading the graph");
        }
        Ok(graph)
    }
}

fn require_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
