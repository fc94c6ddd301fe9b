//! Normal computation settings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NormalsError, Result};

/// How each face normal is weighted before it is added to its vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceWeighting {
    /// Raw cross product; larger triangles pull harder.
    #[default]
    Area,
    /// Unit face normals; every face counts the same.
    Uniform,
}

/// Which triangle winding faces the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    /// Right-hand rule: `(p1 - p0) × (p2 - p0)`.
    #[default]
    CounterClockwise,
    /// Left-handed engines: the face normal is negated.
    Clockwise,
}

impl Winding {
    /// Sign applied to the right-handed face normal.
    pub fn sign(self) -> f32 {
        match self {
            Winding::CounterClockwise => 1.0,
            Winding::Clockwise => -1.0,
        }
    }
}

/// Parameters for a normal computation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalSettings {
    /// Face weighting.
    pub weighting: FaceWeighting,
    /// Front-face winding.
    pub winding: Winding,
}

impl NormalSettings {
    /// Uniform weighting with clockwise winding.
    ///
    /// Matches the normals produced by left-handed engines that normalize each
    /// face before accumulating.
    pub fn engine_compatible() -> Self {
        Self {
            weighting: FaceWeighting::Uniform,
            winding: Winding::Clockwise,
        }
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| NormalsError::InvalidArgument(e.to_string()))
    }
}

/// Formats as compact JSON, readable by [`NormalSettings::from_json`].
impl fmt::Display for NormalSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
