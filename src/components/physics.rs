use glam::Vec3;

/// Collision shape attached to a static entity. Centered on the entity's
/// `LocalTransform` except for `Plane`, which is positioned by `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    Sphere { radius: f32 },
    /// Axis-aligned box.
    Box { half_extents: Vec3 },
    /// Infinite plane: points `p` with `p.dot(normal) == offset`.
    Plane { normal: Vec3, offset: f32 },
}

/// Marker: entity is immovable level geometry the probes test against.
pub struct Static;
