//! Input discovery: NAME=PATH pairs and directory expansion

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{SiftError, SiftResult};
use crate::pipeline::DocumentSource;

/// Return true if the file has a .json extension and exists
pub fn is_json_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "json")
}

/// Find JSON files in a directory. If recursive is true, walk
/// subdirectories too. Results are sorted so document order (and therefore
/// merged ordering) is reproducible across runs.
pub fn find_json_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut json_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if is_json_file(path) {
                json_files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if is_json_file(&path) {
                json_files.push(path);
            }
        }
        json_files.sort();
    }

    Ok(json_files)
}

/// Expand CLI input specs into document sources.
///
/// Each spec is `PATH` or `NAME=PATH`. A file spec becomes one source,
/// named by the file stem unless an explicit name is given; a nonexistent
/// file is kept in the list so the pipeline can report the skip. A
/// directory spec expands into one source per contained JSON file and
/// cannot carry an explicit name.
pub fn expand_inputs(specs: &[String], recursive: bool) -> SiftResult<Vec<DocumentSource>> {
    let mut sources = Vec::new();

    for spec in specs {
        let (name, raw_path) = match spec.split_once('=') {
            Some((name, path)) => (Some(name), path),
            None => (None, spec.as_str()),
        };
        let path = PathBuf::from(raw_path);

        if path.is_dir() {
            if name.is_some() {
                return Err(SiftError::configuration(format!(
                    "directory input {} cannot take a NAME= override",
                    path.display()
                )));
            }
            let files = find_json_files(&path, recursive)
                .map_err(|e| SiftError::io(e.to_string(), Some(path.clone())))?;
            for file in files {
                let source =
                    DocumentSource::from_path(&file).map_err(SiftError::configuration)?;
                sources.push(source);
            }
        } else {
            let source = match name {
                Some(name) => DocumentSource::new(name, path),
                None => DocumentSource::from_path(&path).map_err(SiftError::configuration)?,
            };
            sources.push(source);
        }
    }

    Ok(sources)
}
