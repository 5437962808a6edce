//! The demo clip catalog and its learning-path links.

use indexmap::IndexMap;
use reel_core::FlowError;
use reel_flow::{Flow, FlowTable};

/// Stable key of a demo clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipId {
    PythagoreanTheorem,
    QuadraticFunction,
    UnitCircle,
    SurfacePlot,
    SphereVolume,
    CubeSurfaceArea,
    Derivatives,
    MatrixOperations,
    Eigenvalues,
    ComplexNumbers,
}

/// Authored metadata of one clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClipEntry {
    /// Display title shown over the playing reel.
    pub title: &'static str,
    /// Prompt the clip was generated from.
    pub prompt: &'static str,
    /// File stem of the bundled video asset.
    pub file_stem: &'static str,
    /// Short key used by free-text title resolution.
    pub search_key: &'static str,
}

/// Clip entries in declared catalog order. The order is part of the
/// contract: title resolution breaks ties by it.
const ENTRIES: &[(ClipId, ClipEntry)] = &[
    (
        ClipId::PythagoreanTheorem,
        ClipEntry {
            title: "Pythagorean Theorem",
            prompt: "Demonstrate the Pythagorean theorem with animated triangle and squares",
            file_stem: "pythagoreanTheorem",
            search_key: "Pythagorean Theorem",
        },
    ),
    (
        ClipId::QuadraticFunction,
        ClipEntry {
            title: "Quadratic Functions",
            prompt: "Visualize a quadratic function and its properties with animation",
            file_stem: "quadraticFunction",
            search_key: "Quadratic Functions",
        },
    ),
    (
        ClipId::UnitCircle,
        ClipEntry {
            title: "Unit Circle",
            prompt: "Show how sine and cosine are related on the unit circle with animated angle",
            file_stem: "unitCircle",
            search_key: "Unit Circle",
        },
    ),
    (
        ClipId::SurfacePlot,
        ClipEntry {
            title: "3D Surface Plots",
            prompt: "Create a 3D surface plot showing z = x^2 + y^2",
            file_stem: "surfacePlot",
            search_key: "3D Surface Plots",
        },
    ),
    (
        ClipId::SphereVolume,
        ClipEntry {
            title: "Sphere Volume",
            prompt: "Calculate and visualize the volume of a sphere with radius r",
            file_stem: "sphereVolume",
            search_key: "Sphere Volume",
        },
    ),
    (
        ClipId::CubeSurfaceArea,
        ClipEntry {
            title: "Cube Surface Area",
            prompt: "Show how to find the surface area of a cube with animations",
            file_stem: "cubeSurfaceArea",
            search_key: "Cube Surface Area",
        },
    ),
    (
        ClipId::Derivatives,
        ClipEntry {
            title: "Understanding Derivatives",
            prompt: "Visualize derivatives as the slope of a tangent line",
            file_stem: "derivatives",
            search_key: "Derivatives",
        },
    ),
    (
        ClipId::MatrixOperations,
        ClipEntry {
            title: "Matrix Operations",
            prompt: "Demonstrate matrix operations with animated transformations",
            file_stem: "matrixOperations",
            search_key: "Matrix Operations",
        },
    ),
    (
        ClipId::Eigenvalues,
        ClipEntry {
            title: "Eigenvalues & Eigenvectors",
            prompt: "Visualize eigenvalues and eigenvectors of a 2x2 matrix",
            file_stem: "eigenvalues",
            search_key: "Eigenvalues",
        },
    ),
    (
        ClipId::ComplexNumbers,
        ClipEntry {
            title: "Complex Numbers",
            prompt: "Show how complex numbers multiply using rotation and scaling",
            file_stem: "complexNumbers",
            search_key: "Complex Numbers",
        },
    ),
];

/// The guided learning path through the clips.
const LEARNING_PATH: [ClipId; 10] = [
    ClipId::PythagoreanTheorem,
    ClipId::Derivatives,
    ClipId::QuadraticFunction,
    ClipId::UnitCircle,
    ClipId::SurfacePlot,
    ClipId::SphereVolume,
    ClipId::CubeSurfaceArea,
    ClipId::MatrixOperations,
    ClipId::Eigenvalues,
    ClipId::ComplexNumbers,
];

/// The clip catalog: entries in declared order plus the learning-path link
/// table. Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ClipCatalog {
    entries: IndexMap<ClipId, ClipEntry>,
    links: FlowTable<ClipId>,
}

impl ClipCatalog {
    /// Build the standard authored catalog.
    pub fn standard() -> Self {
        let mut entries = IndexMap::with_capacity(ENTRIES.len());
        for &(id, entry) in ENTRIES {
            entries.insert(id, entry);
        }

        Self {
            entries,
            links: FlowTable::chain(&LEARNING_PATH),
        }
    }

    /// Number of clips.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a clip's entry.
    pub fn entry(&self, id: ClipId) -> Option<&ClipEntry> {
        self.entries.get(&id)
    }

    /// Iterate clips in declared catalog order.
    pub fn clips(&self) -> impl Iterator<Item = (ClipId, &ClipEntry)> {
        self.entries.iter().map(|(&id, entry)| (id, entry))
    }

    /// The learning-path link table.
    pub fn links(&self) -> &FlowTable<ClipId> {
        &self.links
    }

    /// Materialize the learning path containing `start`.
    pub fn learning_path(&self, start: ClipId) -> Result<Flow<ClipId>, FlowError> {
        self.links.flow_from(start)
    }

    /// Resolve a free-text title to a clip via the authored search keys.
    pub fn resolve_title(&self, title: &str) -> Option<ClipId> {
        let candidates: Vec<(&str, ClipId)> = self
            .entries
            .iter()
            .map(|(&id, entry)| (entry.search_key, id))
            .collect();
        reel_flow::resolve_start(&candidates, title)
    }

    /// Fallback clip for titles nothing resolves to.
    pub fn default_clip(&self) -> ClipId {
        ClipId::ComplexNumbers
    }

    /// Audit the authored link table.
    pub fn validate(&self) -> Result<(), FlowError> {
        self.links.validate()?;
        for id in self.links.keys() {
            if !self.entries.contains_key(&id) {
                return Err(FlowError::UnknownNode {
                    node: format!("{id:?}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for ClipCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_consistent() {
        let catalog = ClipCatalog::standard();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_learning_path_covers_all_clips() {
        let catalog = ClipCatalog::standard();
        let flow = catalog.learning_path(ClipId::PythagoreanTheorem).unwrap();
        assert_eq!(flow.len(), catalog.len());
        assert_eq!(flow.start_index(), 0);
        assert_eq!(*flow.nodes().last().unwrap(), ClipId::ComplexNumbers);
    }

    #[test]
    fn test_learning_path_from_middle() {
        let catalog = ClipCatalog::standard();
        let flow = catalog.learning_path(ClipId::SurfacePlot).unwrap();
        assert_eq!(flow.len(), 10);
        assert_eq!(flow.start_index(), 4);
        assert_eq!(flow.start(), ClipId::SurfacePlot);
    }

    #[test]
    fn test_resolve_title_substring() {
        let catalog = ClipCatalog::standard();
        assert_eq!(
            catalog.resolve_title("Understanding Derivatives"),
            Some(ClipId::Derivatives)
        );
        assert_eq!(
            catalog.resolve_title("How do black holes actually work?"),
            None
        );
    }

    #[test]
    fn test_entry_metadata() {
        let catalog = ClipCatalog::standard();
        let entry = catalog.entry(ClipId::UnitCircle).unwrap();
        assert_eq!(entry.title, "Unit Circle");
        assert_eq!(entry.file_stem, "unitCircle");
    }
}
