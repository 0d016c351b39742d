use bevy::prelude::*;

/// Axis-aligned bounds of a vertex set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        Some(points.iter().skip(1).fold(
            Self {
                min: first,
                max: first,
            },
            |bounds, &p| Self {
                min: bounds.min.min(p),
                max: bounds.max.max(p),
            },
        ))
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Deformed vertex attributes of one sub-mesh.
///
/// `colors` and `uv2` are empty for sub-meshes that carry no paint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeformedMesh {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub colors: Vec<[f32; 4]>,
    pub uv2: Vec<Vec2>,
}

impl DeformedMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.positions)
    }

    pub fn is_finite(&self) -> bool {
        self.positions.iter().all(|p| p.is_finite())
            && self.uvs.iter().all(|uv| uv.is_finite())
            && self.uv2.iter().all(|uv| uv.is_finite())
            && self
                .colors
                .iter()
                .all(|c| c.iter().all(|channel| channel.is_finite()))
    }
}

/// Convex collision stand-in for a sub-mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionProxy {
    pub enabled: bool,
    pub hull: Option<Bounds>,
}

impl CollisionProxy {
    pub fn rebuild(mesh: &DeformedMesh) -> Self {
        let hull = mesh.bounds();
        Self {
            enabled: hull.is_some(),
            hull,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubMesh {
    pub mesh: DeformedMesh,
    pub visible: bool,
    pub collision: CollisionProxy,
}

/// Every deformed sub-mesh of a part.
///
/// Wings use `structure` for the internal section and fill both edge lists. Control
/// surfaces use `structure` for the hinge frame and only `trailing_edges`.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct WingMeshes {
    pub structure: SubMesh,
    pub surface: SubMesh,
    pub leading_edges: Vec<SubMesh>,
    pub trailing_edges: Vec<SubMesh>,
    pub active_leading: Option<usize>,
    pub active_trailing: Option<usize>,
}

impl WingMeshes {
    pub fn all(&self) -> impl Iterator<Item = &SubMesh> {
        [&self.structure, &self.surface]
            .into_iter()
            .chain(self.leading_edges.iter())
            .chain(self.trailing_edges.iter())
    }

    /// Bounds over the visible sub-meshes.
    pub fn bounds(&self) -> Option<Bounds> {
        self.all()
            .filter(|sub| sub.visible)
            .filter_map(|sub| sub.mesh.bounds())
            .reduce(|a, b| a.union(&b))
    }

    pub fn active_leading_edge(&self) -> Option<&SubMesh> {
        self.active_leading.and_then(|i| self.leading_edges.get(i))
    }

    pub fn active_trailing_edge(&self) -> Option<&SubMesh> {
        self.active_trailing.and_then(|i| self.trailing_edges.get(i))
    }
}
