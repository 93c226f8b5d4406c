//! Top-level build: parameters in, STL files out.

use std::path::{Path, PathBuf};

use csg_ops::{KernelBundle, OpError};
use kernel_bridge::RenderMesh;
use mesh_io::{write_stl_file, ExportError};

use crate::assembly::{fit_check_assemblies, ComponentLibrary};
use crate::error::{BuildError, ConstructionError};
use crate::params::ParamSet;
use crate::pipeline::{front_panel, rear_panel, shell, SealedSolid};
use crate::placement;

/// Tessellation tolerance for the exported meshes, in millimeters.
const MESH_TOLERANCE: f64 = 0.01;

pub const ENCLOSURE_STL: &str = "enclosure.stl";
pub const FRONT_PANEL_STL: &str = "front_panel.stl";
pub const REAR_PANEL_STL: &str = "rear_panel.stl";

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory the STL files are written to.
    pub out_dir: PathBuf,
    /// Directory holding the component model files. When absent the
    /// fit-check assemblies are skipped entirely.
    pub components_dir: Option<PathBuf>,
    /// Skip the 3D edge rounding passes. Profile corner rounding is
    /// unaffected.
    pub skip_edge_rounding: bool,
}

impl BuildOptions {
    pub fn new(out_dir: &Path) -> Self {
        Self {
            out_dir: out_dir.to_path_buf(),
            components_dir: None,
            skip_edge_rounding: false,
        }
    }
}

/// What a successful build produced.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub enclosure_path: PathBuf,
    pub front_panel_path: PathBuf,
    pub rear_panel_path: PathBuf,
    /// Component instances placed for fit checking; zero when no
    /// component directory was given.
    pub placed_instances: usize,
}

/// Run the whole build: resolve parameters, validate the placement
/// tables, construct the three fabrication solids, verify the fit-check
/// components load, then tessellate and export.
///
/// Everything that can fail does so before the first file is written;
/// a failed build leaves no partial output behind.
pub fn run_build(
    kb: &mut dyn KernelBundle,
    params: &ParamSet,
    options: &BuildOptions,
) -> Result<BuildOutput, BuildError> {
    let resolved = params.resolve()?;
    placement::validate_tables(&resolved)?;

    let round_edges = !options.skip_edge_rounding;

    let span = tracing::info_span!("build", revision = ?resolved.revision);
    let _guard = span.enter();

    tracing::info!(
        width = resolved.width,
        height = resolved.height,
        length = resolved.length,
        "building enclosure"
    );
    let shell = shell::build_shell(kb, &resolved, round_edges)?;
    let front = front_panel::build_front_panel(kb, &resolved)?;
    let rear = rear_panel::build_rear_panel(kb, &resolved)?;

    // Fit-check components are verified before anything is exported, so
    // a missing model file fails the build with no output written.
    let mut placed_instances = 0;
    if let Some(components_dir) = &options.components_dir {
        let assemblies = fit_check_assemblies(&resolved);
        let mut library = ComponentLibrary::new(components_dir);
        library.load_all(&assemblies)?;
        placed_instances = assemblies.iter().map(|a| a.instances.len()).sum();
        tracing::info!(placed_instances, "fit-check components placed");
    }

    let enclosure_mesh = tessellated(kb, &shell, "shell tessellation")?;
    let front_mesh = tessellated(kb, &front, "front panel tessellation")?;
    let rear_mesh = tessellated(kb, &rear, "rear panel tessellation")?;

    std::fs::create_dir_all(&options.out_dir).map_err(|e| {
        BuildError::Export(ExportError::Io {
            path: options.out_dir.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    let enclosure_path = options.out_dir.join(ENCLOSURE_STL);
    let front_panel_path = options.out_dir.join(FRONT_PANEL_STL);
    let rear_panel_path = options.out_dir.join(REAR_PANEL_STL);

    write_stl_file(&enclosure_mesh, &enclosure_path)?;
    write_stl_file(&front_mesh, &front_panel_path)?;
    write_stl_file(&rear_mesh, &rear_panel_path)?;

    Ok(BuildOutput {
        enclosure_path,
        front_panel_path,
        rear_panel_path,
        placed_instances,
    })
}

fn tessellated(
    kb: &mut dyn KernelBundle,
    solid: &SealedSolid,
    step: &'static str,
) -> Result<RenderMesh, BuildError> {
    let mesh = kb
        .tessellate(&solid.handle, MESH_TOLERANCE)
        .map_err(|e| ConstructionError::new(step, OpError::from(e)))?;
    tracing::debug!(
        step,
        triangles = mesh.indices.len() / 3,
        "solid tessellated"
    );
    Ok(mesh)
}
