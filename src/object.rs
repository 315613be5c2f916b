use crate::math::{Quaternion, Vector3};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Kind of a scene object, as tagged by the exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ObjectKind {
    /// Renderable geometry
    Mesh,

    /// Skeleton driving skinned meshes
    Armature,

    Camera,

    Light,

    Speaker,

    /// Transform-only placeholder
    Empty,
}

/// Scene object handle as seen by orientation code
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SceneObject {
    /// Unique object name
    pub name: String,

    /// Exporter tag
    pub kind: ObjectKind,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self { name: name.into(), kind }
    }
}

/// A loosely typed value crossing the engine API boundary
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Value {
    Number(f32),
    Bool(bool),
    Text(String),

    /// Packed float buffer
    Vector(Vec<f32>),

    /// Generic list; counts as a vector when every element is a number
    List(Vec<Value>),

    Object(SceneObject),
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<Vector3> for Value {
    fn from(v: Vector3) -> Self {
        Value::Vector(<[f32; 3]>::from(v).to_vec())
    }
}

impl From<Quaternion> for Value {
    fn from(q: Quaternion) -> Self {
        Value::Vector(q.to_array().to_vec())
    }
}

impl From<SceneObject> for Value {
    fn from(o: SceneObject) -> Self {
        Value::Object(o)
    }
}

/// True when `value` is a numeric vector, optionally of exactly
/// `dimension` components
pub fn is_vector(value: &Value, dimension: Option<usize>) -> bool {
    let len = match value {
        Value::Vector(v) => v.len(),
        Value::List(items) if items.iter().all(|i| matches!(i, Value::Number(_))) => items.len(),
        _ => return false,
    };

    dimension.map_or(true, |d| d == len)
}

#[inline]
pub fn is_mesh(obj: &SceneObject) -> bool {
    obj.kind == ObjectKind::Mesh
}

#[inline]
pub fn is_armature(obj: &SceneObject) -> bool {
    obj.kind == ObjectKind::Armature
}
