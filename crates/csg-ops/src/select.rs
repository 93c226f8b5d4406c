//! Declarative entity selection.
//!
//! Edges and vertices are addressed by a filter (axis alignment, a
//! signature predicate) with an optional ordinal pick among the
//! filtered survivors, and an expected-count assertion. Raw ordinals
//! over the kernel's full entity list are deliberately not exposed:
//! kernel ordering changes after every boolean, so a selection is only
//! trustworthy when the filter pins it down and the count check holds.

use case_types::{Axis, TopoKind, TopoSignature};
use kernel_bridge::{KernelId, KernelIntrospect, KernelSolidHandle};

/// Minimum |dot| between a unit edge direction and a unit axis for the
/// edge to count as aligned.
const AXIS_DOT_MIN: f64 = 0.999;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SelectionError {
    #[error("selection matched no entities")]
    NoMatch,

    #[error("selection matched {actual} entities, expected {expected}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("ordinal {ordinal} out of range, only {available} entities matched")]
    OrdinalOutOfRange { ordinal: usize, available: usize },
}

/// A declarative edge selection against one solid.
///
/// Filters are applied in order: axis alignment, then the predicate,
/// then the ordinal pick. `expect_count` runs last, on the final set.
pub struct EdgeQuery {
    axis: Option<Axis>,
    predicate: Option<Box<dyn Fn(&TopoSignature) -> bool>>,
    ordinals: Option<Vec<usize>>,
    expected: Option<usize>,
}

impl EdgeQuery {
    pub fn new() -> Self {
        Self {
            axis: None,
            predicate: None,
            ordinals: None,
            expected: None,
        }
    }

    /// Keep only edges whose direction is parallel to `axis`.
    pub fn along(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Keep only edges whose signature satisfies `pred`.
    pub fn matching(mut self, pred: impl Fn(&TopoSignature) -> bool + 'static) -> Self {
        self.predicate = Some(Box::new(pred));
        self
    }

    /// Ordinal fallback: pick these positions among the filtered edges,
    /// in the kernel's iteration order. Only for selections where no
    /// unique predicate exists.
    pub fn nth(mut self, ordinals: &[usize]) -> Self {
        self.ordinals = Some(ordinals.to_vec());
        self
    }

    /// Assert the final selection has exactly `n` edges.
    pub fn expect_count(mut self, n: usize) -> Self {
        self.expected = Some(n);
        self
    }

    pub fn resolve(
        &self,
        introspect: &dyn KernelIntrospect,
        solid: &KernelSolidHandle,
    ) -> Result<Vec<KernelId>, SelectionError> {
        let mut matched: Vec<(KernelId, TopoSignature)> = introspect
            .compute_all_signatures(solid, TopoKind::Edge)
            .into_iter()
            .filter(|(_, sig)| self.axis_matches(sig))
            .collect();

        if let Some(pred) = &self.predicate {
            matched.retain(|(_, sig)| pred(sig));
        }

        let mut ids: Vec<KernelId> = matched.into_iter().map(|(id, _)| id).collect();

        if let Some(ordinals) = &self.ordinals {
            let mut picked = Vec::with_capacity(ordinals.len());
            for &ordinal in ordinals {
                let id = ids
                    .get(ordinal)
                    .ok_or(SelectionError::OrdinalOutOfRange {
                        ordinal,
                        available: ids.len(),
                    })?;
                picked.push(*id);
            }
            ids = picked;
        }

        if ids.is_empty() {
            return Err(SelectionError::NoMatch);
        }
        if let Some(expected) = self.expected {
            if ids.len() != expected {
                return Err(SelectionError::CountMismatch {
                    expected,
                    actual: ids.len(),
                });
            }
        }
        Ok(ids)
    }

    fn axis_matches(&self, sig: &TopoSignature) -> bool {
        let Some(axis) = self.axis else {
            return true;
        };
        let Some(dir) = sig.direction else {
            return false;
        };
        let unit = axis.unit();
        let dot = dir[0] * unit.x + dir[1] * unit.y + dir[2] * unit.z;
        dot.abs() >= AXIS_DOT_MIN
    }
}

impl Default for EdgeQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// A declarative vertex selection against one solid. Same shape as
/// EdgeQuery, minus the axis filter (vertices have no direction).
pub struct VertexQuery {
    predicate: Option<Box<dyn Fn(&TopoSignature) -> bool>>,
    ordinals: Option<Vec<usize>>,
    expected: Option<usize>,
}

impl VertexQuery {
    pub fn new() -> Self {
        Self {
            predicate: None,
            ordinals: None,
            expected: None,
        }
    }

    pub fn matching(mut self, pred: impl Fn(&TopoSignature) -> bool + 'static) -> Self {
        self.predicate = Some(Box::new(pred));
        self
    }

    pub fn nth(mut self, ordinals: &[usize]) -> Self {
        self.ordinals = Some(ordinals.to_vec());
        self
    }

    pub fn expect_count(mut self, n: usize) -> Self {
        self.expected = Some(n);
        self
    }

    pub fn resolve(
        &self,
        introspect: &dyn KernelIntrospect,
        solid: &KernelSolidHandle,
    ) -> Result<Vec<KernelId>, SelectionError> {
        let mut matched: Vec<(KernelId, TopoSignature)> =
            introspect.compute_all_signatures(solid, TopoKind::Vertex);

        if let Some(pred) = &self.predicate {
            matched.retain(|(_, sig)| pred(sig));
        }

        let mut ids: Vec<KernelId> = matched.into_iter().map(|(id, _)| id).collect();

        if let Some(ordinals) = &self.ordinals {
            let mut picked = Vec::with_capacity(ordinals.len());
            for &ordinal in ordinals {
                let id = ids
                    .get(ordinal)
                    .ok_or(SelectionError::OrdinalOutOfRange {
                        ordinal,
                        available: ids.len(),
                    })?;
                picked.push(*id);
            }
            ids = picked;
        }

        if ids.is_empty() {
            return Err(SelectionError::NoMatch);
        }
        if let Some(expected) = self.expected {
            if ids.len() != expected {
                return Err(SelectionError::CountMismatch {
                    expected,
                    actual: ids.len(),
                });
            }
        }
        Ok(ids)
    }
}

impl Default for VertexQuery {
    fn default() -> Self {
        Self::new()
    }
}
