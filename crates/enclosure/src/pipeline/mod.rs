//! Staged solid construction.
//!
//! A working solid carries its build stage alongside the kernel handle.
//! The stage only moves forward: placing primitives, applying booleans,
//! rounding edges, then sealing the solid for export. A cut applied
//! after rounding (the viewing window, say) keeps the solid at the
//! rounded stage rather than moving it back, and a sealed solid offers
//! no further modeling operations at all.

use case_types::Transform;
use csg_ops::{
    execute_boolean, execute_extrude, execute_fillet, execute_transform, BooleanKind, EdgeQuery,
    KernelBundle, OpError,
};
use kernel_bridge::{KernelSolidHandle, PlanarFace};

use crate::error::ConstructionError;

pub mod front_panel;
pub mod rear_panel;
pub mod risers;
pub mod shell;

/// Plane frame shared by every front- or rear-facing profile: u maps to
/// +x and v maps to +z, so a mirror-symmetric profile lands mirror
/// symmetric in the shell frame.
pub const LATERAL_NORMAL: [f64; 3] = [0.0, -1.0, 0.0];
pub const LATERAL_X_AXIS: [f64; 3] = [1.0, 0.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BuildStage {
    Empty,
    PrimitivesPlaced,
    BooleansApplied,
    Rounded,
    Sealed,
}

/// A solid mid-construction. Every operation replaces the handle (the
/// kernel never mutates in place) and ratchets the stage forward.
#[derive(Debug, Clone, Copy)]
pub struct WorkingSolid {
    pub handle: KernelSolidHandle,
    pub stage: BuildStage,
}

impl WorkingSolid {
    pub fn primitive(handle: KernelSolidHandle) -> Self {
        Self {
            handle,
            stage: BuildStage::PrimitivesPlaced,
        }
    }

    fn advance(&mut self, handle: KernelSolidHandle, stage: BuildStage) {
        self.handle = handle;
        self.stage = self.stage.max(stage);
    }

    /// Subtract a tool solid.
    pub fn cut(
        &mut self,
        kb: &mut dyn KernelBundle,
        tool: &KernelSolidHandle,
        step: &'static str,
    ) -> Result<(), ConstructionError> {
        let result = execute_boolean(kb, &self.handle, tool, BooleanKind::Subtract)
            .map_err(|e| ConstructionError::new(step, e))?;
        self.advance(result.handle, BuildStage::BooleansApplied);
        Ok(())
    }

    /// Union another solid in.
    pub fn attach(
        &mut self,
        kb: &mut dyn KernelBundle,
        other: &KernelSolidHandle,
        step: &'static str,
    ) -> Result<(), ConstructionError> {
        let result = execute_boolean(kb, &self.handle, other, BooleanKind::Union)
            .map_err(|e| ConstructionError::new(step, e))?;
        self.advance(result.handle, BuildStage::BooleansApplied);
        Ok(())
    }

    /// Extrude a profile into a tool solid and subtract it in one step.
    pub fn cut_profile(
        &mut self,
        kb: &mut dyn KernelBundle,
        face: &PlanarFace,
        direction: [f64; 3],
        depth: f64,
        step: &'static str,
    ) -> Result<(), ConstructionError> {
        let tool = execute_extrude(kb, face, direction, depth)
            .map_err(|e| ConstructionError::new(step, e))?;
        self.cut(kb, &tool.handle, step)
    }

    /// Round the edges selected by the query.
    pub fn round_edges(
        &mut self,
        kb: &mut dyn KernelBundle,
        query: &EdgeQuery,
        radius: f64,
        step: &'static str,
    ) -> Result<(), ConstructionError> {
        let result = execute_fillet(kb, &self.handle, query, radius)
            .map_err(|e| ConstructionError::new(step, e))?;
        self.advance(result.handle, BuildStage::Rounded);
        Ok(())
    }

    /// Seal the solid for export. No route back to a working solid.
    pub fn seal(self) -> SealedSolid {
        SealedSolid {
            handle: self.handle,
        }
    }
}

/// A finished solid ready for tessellation and export.
#[derive(Debug, Clone, Copy)]
pub struct SealedSolid {
    pub handle: KernelSolidHandle,
}

pub fn solid_box(
    kb: &mut dyn KernelBundle,
    width: f64,
    depth: f64,
    height: f64,
    step: &'static str,
) -> Result<KernelSolidHandle, ConstructionError> {
    kb.make_box(width, depth, height)
        .map_err(|e| ConstructionError::new(step, OpError::from(e)))
}

pub fn solid_cylinder(
    kb: &mut dyn KernelBundle,
    radius: f64,
    height: f64,
    step: &'static str,
) -> Result<KernelSolidHandle, ConstructionError> {
    kb.make_cylinder(radius, height)
        .map_err(|e| ConstructionError::new(step, OpError::from(e)))
}

pub fn placed(
    kb: &mut dyn KernelBundle,
    solid: &KernelSolidHandle,
    transform: &Transform,
    step: &'static str,
) -> Result<KernelSolidHandle, ConstructionError> {
    execute_transform(kb, solid, transform)
        .map(|r| r.handle)
        .map_err(|e| ConstructionError::new(step, e))
}

pub fn extruded(
    kb: &mut dyn KernelBundle,
    face: &PlanarFace,
    direction: [f64; 3],
    depth: f64,
    step: &'static str,
) -> Result<KernelSolidHandle, ConstructionError> {
    execute_extrude(kb, face, direction, depth)
        .map(|r| r.handle)
        .map_err(|e| ConstructionError::new(step, e))
}
