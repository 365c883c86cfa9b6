use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use urbanlift_matching::{
    json::types::JsonOptimizationRequest, optimizer::smart_match::OptimizationRequest,
};

pub fn read_folder(folder_path: &PathBuf) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.insert(0, path);
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}

/// The input file itself, or every file below it when it is a folder.
pub fn input_files(input: PathBuf) -> Result<Vec<PathBuf>, std::io::Error> {
    if input.is_dir() {
        read_folder(&input)
    } else {
        Ok(vec![input])
    }
}

pub fn read_request(path: &Path) -> anyhow::Result<OptimizationRequest> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let request: JsonOptimizationRequest = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid optimization request in {}", path.display()))?;

    Ok(request.build_request()?)
}
