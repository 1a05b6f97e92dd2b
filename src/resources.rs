/*!
 * Resource resolution for translation datasets.
 *
 * A dataset is identified by a logical name (for example `sample.json`) and
 * resolved by a `ResourceProvider`. The translator only ever sees the byte
 * stream a provider hands back.
 */

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::errors::LoadError;

/// Resource loaded when no name is given
pub const DEFAULT_RESOURCE: &str = "sample.json";

/// Datasets compiled into the crate, keyed by logical name
static BUNDLED: &[(&str, &str)] = &[("sample.json", include_str!("../data/sample.json"))];

/// Resolves logical resource names to readable streams
pub trait ResourceProvider {
    /// Open the named resource for reading
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, LoadError>;
}

/// Check that a resource name is a single plain file name
///
/// Names with separators, `.` or `..` components, or roots are rejected so a
/// provider never resolves outside of its own resource set.
pub fn is_plain_resource_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// Provider backed by the datasets bundled with the crate
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledResources;

impl BundledResources {
    /// Logical names of all bundled datasets
    pub fn names() -> Vec<&'static str> {
        BUNDLED.iter().map(|(name, _)| *name).collect()
    }
}

impl ResourceProvider for BundledResources {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, LoadError> {
        let (_, contents) = BUNDLED
            .iter()
            .find(|(bundled, _)| *bundled == name)
            .ok_or_else(|| LoadError::NotFound(name.to_string()))?;

        debug!("Opening bundled resource '{}' ({} bytes)", name, contents.len());
        Ok(Box::new(contents.as_bytes()))
    }
}

/// Provider that resolves names inside a single directory
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    /// Create a provider rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory the provider resolves against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path for a resource name, if the name is acceptable
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        is_plain_resource_name(name).then(|| self.root.join(name))
    }
}

impl ResourceProvider for DirectoryResources {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, LoadError> {
        let path = self
            .resolve(name)
            .ok_or_else(|| LoadError::NotFound(name.to_string()))?;

        debug!("Opening resource file: {:?}", path);
        match File::open(&path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(LoadError::NotFound(name.to_string())),
            Err(e) => Err(LoadError::Io(e)),
        }
    }
}
