//! Fit-check assemblies.
//!
//! Externally authored component models (the display board, tubes,
//! socket pins, fasteners and so on) are loaded and placed inside the
//! enclosure so a viewer can confirm clearances. Placement composes two
//! transforms: the instance's own local placement first, then the
//! transform shared by the whole assembly. Nothing placed here is ever
//! exported; the assemblies exist to be looked at.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use case_types::{Axis, Transform, Vec3};
use kernel_bridge::RenderMesh;
use mesh_io::{load_component, ImportError};
use uuid::Uuid;

use crate::params::ResolvedParams;
use crate::placement;

pub const CLOCK_BOARD_FILE: &str = "clock.step";
pub const TUBE_FILE: &str = "IN-12-NixieTube.STEP";
pub const SOCKET_PIN_FILE: &str = "SocketPin.stl";
pub const INDICATOR_FILE: &str = "INS1.STEP";
pub const CONVERTER_FILE: &str = "converter.step";
pub const INSERT_SHORT_FILE: &str = "M3_Short.step";
pub const INSERT_STANDARD_FILE: &str = "M3_Standard.step";
pub const SWITCH_FILE: &str = "KCD11.step";
pub const SPEAKER_FILE: &str = "Speaker.STEP";

/// A loaded component mesh, keyed by its file name.
pub struct ComponentModel {
    pub name: String,
    pub mesh: RenderMesh,
}

/// Loads component files from one directory, caching by file name.
pub struct ComponentLibrary {
    dir: PathBuf,
    models: BTreeMap<String, ComponentModel>,
}

impl ComponentLibrary {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            models: BTreeMap::new(),
        }
    }

    pub fn load(&mut self, file: &str) -> Result<&ComponentModel, ImportError> {
        if !self.models.contains_key(file) {
            let mesh = load_component(&self.dir.join(file))?;
            tracing::debug!(file, vertices = mesh.vertices.len() / 3, "component loaded");
            self.models.insert(
                file.to_string(),
                ComponentModel {
                    name: file.to_string(),
                    mesh,
                },
            );
        }
        Ok(&self.models[file])
    }

    /// Load every component an assembly set references. Any missing or
    /// unreadable file fails the whole pass.
    pub fn load_all(&mut self, assemblies: &[Assembly]) -> Result<(), ImportError> {
        let mut files = BTreeSet::new();
        for assembly in assemblies {
            for instance in &assembly.instances {
                files.insert(instance.component);
            }
        }
        for file in files {
            self.load(file)?;
        }
        Ok(())
    }
}

/// One placed occurrence of a component.
pub struct PlacedInstance {
    pub id: Uuid,
    pub component: &'static str,
    pub local: Transform,
}

impl PlacedInstance {
    fn new(component: &'static str, local: Transform) -> Self {
        Self {
            id: Uuid::new_v4(),
            component,
            local,
        }
    }
}

/// A named group of instances sharing a trailing transform.
pub struct Assembly {
    pub name: &'static str,
    pub shared: Transform,
    pub instances: Vec<PlacedInstance>,
}

impl Assembly {
    /// Full placement of one instance: local first, shared second.
    pub fn effective_transform(&self, instance: &PlacedInstance) -> Transform {
        instance.local.then(&self.shared)
    }
}

/// Every fit-check assembly for the given dimensions.
pub fn fit_check_assemblies(params: &ResolvedParams) -> Vec<Assembly> {
    vec![
        board_assembly(),
        converter_assembly(),
        fastener_assembly(params),
        switch_assembly(params),
        speaker_assembly(params),
    ]
}

/// The display board: clock PCB, tubes, socket pins and indicator
/// lamps, laid out flat in board coordinates and then stood upright
/// behind the window.
fn board_assembly() -> Assembly {
    let mut instances = vec![PlacedInstance::new(CLOCK_BOARD_FILE, Transform::identity())];

    for entry in placement::tube_table().entries {
        instances.push(PlacedInstance::new(
            TUBE_FILE,
            Transform::translation(entry.position),
        ));
    }
    for entry in placement::socket_pin_table().entries {
        instances.push(PlacedInstance::new(
            SOCKET_PIN_FILE,
            Transform::translation(entry.position),
        ));
    }
    for entry in placement::indicator_table().entries {
        let local = entry
            .rotation
            .clone()
            .unwrap_or_else(Transform::identity)
            .translate(entry.position);
        instances.push(PlacedInstance::new(INDICATOR_FILE, local));
    }

    Assembly {
        name: "board",
        shared: Transform::rotation(Axis::X, 90.0).translate(Vec3::new(0.0, -15.0, 0.0)),
        instances,
    }
}

fn converter_assembly() -> Assembly {
    Assembly {
        name: "converter",
        shared: Transform::identity(),
        instances: vec![PlacedInstance::new(
            CONVERTER_FILE,
            Transform::rotation(Axis::Z, 90.0).translate(Vec3::new(-60.0, 14.5, -25.0)),
        )],
    }
}

/// Heat-set inserts shown seated in their bores: short ones behind the
/// front panel, standard ones in the rear lip and the converter risers.
fn fastener_assembly(params: &ResolvedParams) -> Assembly {
    let mut instances = Vec::new();

    for entry in placement::front_insert_table(params).entries {
        let local = Transform::rotation(Axis::X, -90.0)
            .translate(entry.position)
            .translate(Vec3::new(0.0, -3.0, 0.0));
        instances.push(PlacedInstance::new(INSERT_SHORT_FILE, local));
    }
    for entry in placement::converter_riser_table(params).entries {
        let local =
            Transform::translation(entry.position).translate(Vec3::new(0.0, 0.0, -2.0));
        instances.push(PlacedInstance::new(INSERT_STANDARD_FILE, local));
    }
    for entry in placement::rear_insert_table(params).entries {
        let local = Transform::rotation(Axis::X, -90.0)
            .translate(entry.position)
            .translate(Vec3::new(0.0, -5.5, 0.0));
        instances.push(PlacedInstance::new(INSERT_STANDARD_FILE, local));
    }

    Assembly {
        name: "fasteners",
        shared: Transform::identity(),
        instances,
    }
}

fn switch_assembly(params: &ResolvedParams) -> Assembly {
    let c = &params.constants;
    let local = Transform::rotation(Axis::Z, 90.0)
        .rotate(Axis::Y, 90.0)
        .translate(Vec3::new(
            params.inner_width / 2.0 + params.wall_thickness + 1.5,
            params.inner_length / 2.0 - c.switch_rear_setback,
            c.switch_drop,
        ));
    Assembly {
        name: "switch",
        shared: Transform::identity(),
        instances: vec![PlacedInstance::new(SWITCH_FILE, local)],
    }
}

fn speaker_assembly(params: &ResolvedParams) -> Assembly {
    let c = &params.constants;
    // Body depth is 31 mm; the model hangs from the top wall centered
    // over the grille.
    let local = Transform::rotation(Axis::X, 90.0)
        .rotate(Axis::Z, 180.0)
        .translate(Vec3::new(
            14.0,
            31.0 / 2.0 + c.speaker_offset_y,
            params.inner_height / 2.0 - 1.5,
        ));
    Assembly {
        name: "speaker",
        shared: Transform::identity(),
        instances: vec![PlacedInstance::new(SPEAKER_FILE, local)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamSet;

    fn params() -> ResolvedParams {
        ParamSet::default().resolve().unwrap()
    }

    #[test]
    fn board_assembly_counts() {
        let board = board_assembly();
        // 1 PCB + 6 tubes + 72 socket pins + 4 indicators.
        assert_eq!(board.instances.len(), 83);
    }

    #[test]
    fn tube_lands_behind_the_window() {
        let board = board_assembly();
        let tube = board
            .instances
            .iter()
            .find(|i| i.component == TUBE_FILE)
            .unwrap();

        let full = board.effective_transform(tube);
        let seated = full.apply_point(Vec3::ZERO);
        // Board coordinates (10.05, 0, 9.5) stood upright and pushed
        // toward the front wall.
        assert!(seated.approx_eq(Vec3::new(10.05, -24.5, 0.0)));
    }

    #[test]
    fn assemblies_reference_nine_component_files() {
        let assemblies = fit_check_assemblies(&params());
        let mut files = BTreeSet::new();
        for assembly in &assemblies {
            for instance in &assembly.instances {
                files.insert(instance.component);
            }
        }
        assert_eq!(files.len(), 9);
        assert!(files.contains(SOCKET_PIN_FILE));
        assert!(files.contains(SPEAKER_FILE));
    }

    #[test]
    fn missing_component_directory_fails_loading() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = ComponentLibrary::new(dir.path());
        let assemblies = fit_check_assemblies(&params());
        let err = library.load_all(&assemblies).unwrap_err();
        assert!(matches!(err, ImportError::NotFound { .. }));
    }

    #[test]
    fn instance_ids_are_unique() {
        let board = board_assembly();
        let mut seen = BTreeSet::new();
        for instance in &board.instances {
            assert!(seen.insert(instance.id));
        }
    }
}
