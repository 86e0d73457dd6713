//! Where icon SVG documents come from.

use std::{collections::HashMap,
          path::PathBuf};

use anyhow::Result;
use kstring::KString;
use log::debug;

use crate::{icon::Variant,
            io_util::read_to_string_if_exists};

/// Read-only access to icon documents keyed by variant and name.
/// Implementations must be usable from several threads at once.
pub trait IconStore: Send + Sync {
    /// `Ok(None)` if there is no such icon; errors are for I/O
    /// failures only. `name` is already lower-cased and checked by
    /// the caller.
    fn load(&self, variant: Variant, name: &str) -> Result<Option<String>>;
}

/// Icons as files, laid out as `<root>/<variant>/<name>.svg`.
#[derive(Debug, Clone)]
pub struct FsIconStore {
    root: PathBuf,
}

impl FsIconStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsIconStore { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn icon_path(&self, variant: Variant, name: &str) -> PathBuf {
        let mut path = self.root.join(variant.as_str());
        path.push(format!("{name}.svg"));
        path
    }
}

impl IconStore for FsIconStore {
    fn load(&self, variant: Variant, name: &str) -> Result<Option<String>> {
        let path = self.icon_path(variant, name);
        debug!("loading icon {path:?}");
        read_to_string_if_exists(&path)
    }
}

/// Icons held in memory, e.g. embedded via `include_str!`.
#[derive(Debug, Clone, Default)]
pub struct MemoryIconStore {
    icons: HashMap<(Variant, KString), String>,
}

impl MemoryIconStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, variant: Variant, name: &str, svg: impl Into<String>) -> &mut Self {
        self.icons.insert((variant, KString::from_ref(name)), svg.into());
        self
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl IconStore for MemoryIconStore {
    fn load(&self, variant: Variant, name: &str) -> Result<Option<String>> {
        Ok(self.icons.get(&(variant, KString::from_ref(name))).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_fs_store() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::create_dir(dir.path().join("filled"))?;
        std::fs::write(dir.path().join("filled/star.svg"), "<svg/>")?;
        let store = FsIconStore::new(dir.path());
        assert_eq!(store.root().as_path(), dir.path());
        assert_eq!(store.icon_path(Variant::Outline, "home"),
                   dir.path().join("outline").join("home.svg"));
        assert_eq!(store.load(Variant::Filled, "star")?.as_deref(), Some("<svg/>"));
        assert_eq!(store.load(Variant::Outline, "star")?, None);
        assert_eq!(store.load(Variant::Filled, "moon")?, None);
        Ok(())
    }

    #[test]
    fn t_fs_store_io_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        // A directory where the file should be: not "not found".
        std::fs::create_dir_all(dir.path().join("outline/home.svg"))?;
        let store = FsIconStore::new(dir.path());
        assert!(store.load(Variant::Outline, "home").is_err());
        Ok(())
    }

    #[test]
    fn t_memory_store() -> Result<()> {
        let mut store = MemoryIconStore::new();
        store.insert(Variant::Outline, "home", "<svg></svg>");
        assert_eq!(store.len(), 1);
        assert_eq!(store.load(Variant::Outline, "home")?.as_deref(), Some("<svg></svg>"));
        assert_eq!(store.load(Variant::Filled, "home")?, None);
        Ok(())
    }
}
