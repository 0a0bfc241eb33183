//! Template repository.
//!
//! Templates are stored one file per record, serialized with `bincode`
//! for compact binary output. The repository is an explicit value
//! callers construct and pass around, never ambient process state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use cortica_mesh::SurfaceMesh;
use cortica_types::{CorticaError, CorticaResult};

/// Built-in template names that can never be deleted.
pub const PROTECTED_TEMPLATES: [&str; 3] = ["B1", "B2", "B3"];

/// File extension for template records.
const TEMPLATE_EXT: &str = "tpl";

/// A named template record: a finalized mesh plus the optional vertex
/// index where the left hemisphere ends and the right begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// The canonical mesh (vertices, faces, normals).
    pub mesh: SurfaceMesh,
    /// Hemisphere split: vertices `<= lr_index` belong to the left
    /// hemisphere, the rest to the right.
    pub lr_index: Option<usize>,
}

/// Repository of named template records.
pub trait TemplateStore {
    /// Loads the record stored under `name`.
    fn get(&self, name: &str) -> CorticaResult<TemplateRecord>;

    /// Stores `record` under `name`, replacing any existing record.
    fn put(&self, name: &str, record: &TemplateRecord) -> CorticaResult<()>;

    /// Deletes the record stored under `name`.
    ///
    /// Protected built-in names are refused; deleting a name with no
    /// record is an error.
    fn delete(&self, name: &str) -> CorticaResult<()>;

    /// Lists the names of all stored records.
    fn names(&self) -> CorticaResult<Vec<String>>;
}

/// Filesystem-backed template store: one `.tpl` file per record under
/// a root directory.
pub struct FsTemplateStore {
    root: PathBuf,
    protected: Vec<String>,
}

impl FsTemplateStore {
    /// Creates a store rooted at `root` with the default protected set.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            protected: PROTECTED_TEMPLATES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Creates a store with a custom protected set.
    pub fn with_protected(root: impl Into<PathBuf>, protected: Vec<String>) -> Self {
        Self {
            root: root.into(),
            protected,
        }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        // Any extension the caller supplied is stripped; records are
        // addressed by stem alone.
        let stem = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name);
        self.root.join(format!("{stem}.{TEMPLATE_EXT}"))
    }
}

impl TemplateStore for FsTemplateStore {
    fn get(&self, name: &str) -> CorticaResult<TemplateRecord> {
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(CorticaError::TemplateNotFound(name.to_string()));
        }
        let bytes = std::fs::read(&path)?;
        bincode::deserialize(&bytes)
            .map_err(|e| CorticaError::Serialization(format!("template '{name}': {e}")))
    }

    fn put(&self, name: &str, record: &TemplateRecord) -> CorticaResult<()> {
        record.mesh.validate()?;
        let bytes = bincode::serialize(record)
            .map_err(|e| CorticaError::Serialization(format!("template '{name}': {e}")))?;
        std::fs::create_dir_all(&self.root)?;
        let path = self.path_for(name);
        std::fs::write(&path, bytes)?;
        info!(
            name,
            vertices = record.mesh.vertex_count(),
            faces = record.mesh.face_count(),
            "template saved"
        );
        Ok(())
    }

    fn delete(&self, name: &str) -> CorticaResult<()> {
        let stem = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name);
        if self.protected.iter().any(|p| p == stem) {
            return Err(CorticaError::ProtectedTemplate(stem.to_string()));
        }
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(CorticaError::TemplateNotFound(name.to_string()));
        }
        std::fs::remove_file(&path)?;
        info!(name, "template removed");
        Ok(())
    }

    fn names(&self) -> CorticaResult<Vec<String>> {
        let mut names = Vec::new();
        if !self.root.is_dir() {
            return Ok(names);
        }
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(TEMPLATE_EXT) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
