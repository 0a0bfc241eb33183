//! CLI command implementations.

use cortica_io::{FsTemplateStore, TemplateRecord, TemplateStore};
use cortica_mesh::{NormalizeOptions, SurfaceMesh};
use cortica_volume::{volume_to_mesh, Level, ScalarVolume, VolumeMeshOptions};

/// Extract a normalized mesh from a scalar volume file.
pub fn extract(
    volume_path: &str,
    out_path: &str,
    level: Option<&str>,
    smooth: usize,
    invert_normals: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(volume_path)?;
    let volume: ScalarVolume = serde_json::from_str(&content)?;

    let options = VolumeMeshOptions {
        smooth_factor: smooth,
        level: level.map(parse_level).transpose()?,
        normalize: NormalizeOptions {
            invert_normals,
            transform: None,
        },
    };

    let mesh = volume_to_mesh(&volume, &options)?;
    if mesh.is_empty() {
        println!("No surface at the requested level (empty mesh written).");
    }

    std::fs::write(out_path, serde_json::to_string(&mesh)?)?;
    println!(
        "Extracted {} vertices, {} faces -> {out_path}",
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(())
}

/// A level argument is an integer label or a float isovalue.
fn parse_level(s: &str) -> Result<Level, Box<dyn std::error::Error>> {
    if let Ok(label) = s.parse::<i64>() {
        return Ok(Level::Label(label));
    }
    let iso = s
        .parse::<f32>()
        .map_err(|_| format!("Level must be an integer label or a float isovalue, got '{s}'"))?;
    Ok(Level::Iso(iso))
}

/// Validate a mesh file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let mesh: SurfaceMesh = serde_json::from_str(&content)?;
    match mesh.validate() {
        Ok(()) => println!(
            "Mesh is valid ({} verts, {} tris).",
            mesh.vertex_count(),
            mesh.face_count()
        ),
        Err(e) => {
            println!("Mesh validation failed: {e}");
            return Err(e.into());
        }
    }
    Ok(())
}

/// List stored templates.
pub fn template_list(dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = FsTemplateStore::new(dir);
    let names = store.names()?;
    if names.is_empty() {
        println!("No templates in {dir}.");
    } else {
        for name in names {
            let record = store.get(&name)?;
            println!(
                "{name}: {} verts, {} tris{}",
                record.mesh.vertex_count(),
                record.mesh.face_count(),
                match record.lr_index {
                    Some(i) => format!(", lr_index {i}"),
                    None => String::new(),
                }
            );
        }
    }
    Ok(())
}

/// Store a mesh file as a named template.
pub fn template_add(
    dir: &str,
    name: &str,
    mesh_path: &str,
    lr_index: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(mesh_path)?;
    let mesh: SurfaceMesh = serde_json::from_str(&content)?;

    let store = FsTemplateStore::new(dir);
    store.put(name, &TemplateRecord { mesh, lr_index })?;
    println!("Template '{name}' saved to {dir}.");
    Ok(())
}

/// Remove a template by name.
pub fn template_remove(dir: &str, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = FsTemplateStore::new(dir);
    store.delete(name)?;
    println!("Template '{name}' removed.");
    Ok(())
}
