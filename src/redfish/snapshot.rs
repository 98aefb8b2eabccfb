use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ScanError, ScanResult};
use crate::redfish::loader::HostDir;

/// A Redfish dump laid out as `<root>/<datacenter>/<hostname>/...`.
#[derive(Debug, Clone)]
pub struct Snapshot {
    root: PathBuf,
}

impl Snapshot {
    pub fn open(root: impl Into<PathBuf>) -> ScanResult<Self> {
        let root = root.into();
        if !root.exists() {
            return Err(ScanError::RootMissing { path: root });
        }
        if !root.is_dir() {
            return Err(ScanError::NotADirectory { path: root });
        }
        Ok(Self { root })
    }

    /// Every host directory. Datacenters keep directory enumeration order;
    /// hosts within a datacenter are sorted by name.
    pub fn hosts(&self) -> ScanResult<Vec<HostDir>> {
        let mut hosts = Vec::new();
        let datacenters = subdirectories(&self.root)?;
        let datacenter_count = datacenters.len();

        for (datacenter, dc_path) in datacenters {
            let mut dc_hosts = subdirectories(&dc_path)?;
            dc_hosts.sort_by(|a, b| a.0.cmp(&b.0));
            hosts.extend(
                dc_hosts
                    .into_iter()
                    .map(|(hostname, path)| HostDir::new(datacenter.clone(), hostname, path)),
            );
        }

        info!(
            root = %self.root.display(),
            datacenters = datacenter_count,
            hosts = hosts.len(),
            "scanned snapshot"
        );
        Ok(hosts)
    }
}

/// Child directories of `path` as `(name, path)`, in enumeration order.
fn subdirectories(path: &Path) -> ScanResult<Vec<(String, PathBuf)>> {
    let read_dir_error = |source| ScanError::ReadDir {
        path: path.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(path).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let child = entry.path();
        if !child.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => dirs.push((name, child)),
            Err(name) => warn!(path = %child.display(), ?name, "skipping directory with non UTF-8 name"),
        }
    }
    Ok(dirs)
}
