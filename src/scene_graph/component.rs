use id_arena::Id;

use crate::material_manager::MaterialId;
use crate::scene_graph::transform::Transform;

pub type ComponentId = Id<Component>;

/// Reference to geometry owned by the host's asset layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshRef {
    pub name: String,
    pub primitive_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        fov_y_degrees: f32,
        aspect: f32,
    },
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLens {
    pub projection: Projection,
    pub near: f32,
    pub far: f32,
}

impl CameraLens {
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            projection: Projection::Perspective {
                fov_y_degrees,
                aspect,
            },
            near,
            far,
        }
    }

    pub fn projection_matrix(&self) -> glam::Mat4 {
        match self.projection {
            Projection::Perspective {
                fov_y_degrees,
                aspect,
            } => {
                glam::Mat4::perspective_rh(fov_y_degrees.to_radians(), aspect, self.near, self.far)
            }
            Projection::Orthographic {
                left,
                right,
                bottom,
                top,
            } => glam::Mat4::orthographic_rh(left, right, bottom, top, self.near, self.far),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComponentKind {
    Transform(Transform),
    Mesh(MeshRef),
    Material(MaterialId),
    CameraLens(CameraLens),
}

/// A typed attachment. Entities reference components by id, so one component can be
/// listed by several entities and survives being removed from all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub kind: ComponentKind,
}

impl Component {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn material(name: impl Into<String>, material: MaterialId) -> Self {
        Self::new(name, ComponentKind::Material(material))
    }

    pub fn is_material(&self) -> bool {
        matches!(self.kind, ComponentKind::Material(_))
    }

    pub fn as_material(&self) -> Option<MaterialId> {
        match self.kind {
            ComponentKind::Material(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_camera_lens(&self) -> Option<&CameraLens> {
        match &self.kind {
            ComponentKind::CameraLens(lens) => Some(lens),
            _ => None,
        }
    }

    pub fn as_transform(&self) -> Option<&Transform> {
        match &self.kind {
            ComponentKind::Transform(transform) => Some(transform),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ComponentKind::Transform(_) => "transform",
            ComponentKind::Mesh(_) => "mesh",
            ComponentKind::Material(_) => "material",
            ComponentKind::CameraLens(_) => "camera lens",
        }
    }
}
