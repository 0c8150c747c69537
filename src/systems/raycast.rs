use glam::Vec3;
use hecs::{Entity, World};

use crate::components::{Collider, LocalTransform, Static};
use crate::locomotion::CollisionProbe;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub entity: Entity,
    pub distance: f32,
    pub point: Vec3,
    /// Outward surface normal at `point`.
    pub normal: Vec3,
}

struct StaticEntry {
    entity: Entity,
    center: Vec3,
    collider: Collider,
}

/// Snapshot of all `Static` colliders, taken once per frame so probes can be
/// queried while character components are mutably borrowed.
#[derive(Default)]
pub struct StaticScene {
    entries: Vec<StaticEntry>,
}

impl StaticScene {
    pub fn snapshot(world: &World) -> Self {
        let entries = world
            .query::<(&Static, &Collider, &LocalTransform)>()
            .iter()
            .map(|(entity, (_, collider, local))| StaticEntry {
                entity,
                center: local.position,
                collider: *collider,
            })
            .collect();
        Self { entries }
    }

    /// Cast a ray against every static collider, returning the nearest hit
    /// within `max_distance`.
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RaycastHit> {
        let dir = direction.try_normalize()?;
        let mut best: Option<RaycastHit> = None;

        for entry in &self.entries {
            let hit = match entry.collider {
                Collider::Sphere { radius } => {
                    ray_sphere_intersection(origin, dir, entry.center, radius).map(|t| {
                        let point = origin + dir * t;
                        (t, (point - entry.center).normalize_or_zero())
                    })
                }
                Collider::Box { half_extents } => {
                    ray_aabb_intersection(origin, dir, entry.center, half_extents).map(|t| {
                        let point = origin + dir * t;
                        (t, aabb_face_normal(point, entry.center, half_extents))
                    })
                }
                Collider::Plane { normal, offset } => {
                    ray_plane_intersection(origin, dir, normal, offset).map(|t| (t, normal))
                }
            };

            if let Some((t, normal)) = hit {
                if t > 0.0 && t <= max_distance {
                    let is_closer = best.as_ref().map_or(true, |b| t < b.distance);
                    if is_closer {
                        best = Some(RaycastHit {
                            entity: entry.entity,
                            distance: t,
                            point: origin + dir * t,
                            normal,
                        });
                    }
                }
            }
        }

        best
    }

    /// Probe that tests one frame's travel from `origin`, extended by `reach`
    /// so the character stops before its shape touches the obstacle.
    pub fn sweep(&self, origin: Vec3, dt: f32, reach: f32) -> SweepProbe<'_> {
        SweepProbe {
            scene: self,
            origin,
            dt,
            reach,
        }
    }
}

pub struct SweepProbe<'a> {
    scene: &'a StaticScene,
    origin: Vec3,
    dt: f32,
    reach: f32,
}

impl CollisionProbe for SweepProbe<'_> {
    fn check_collision(&self, velocity: Vec3) -> Option<RaycastHit> {
        let speed = velocity.length();
        if speed <= f32::EPSILON {
            return None;
        }
        self.scene
            .raycast(self.origin, velocity, speed * self.dt + self.reach)
    }
}

fn ray_sphere_intersection(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let a = dir.dot(dir);
    let b = 2.0 * oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / (2.0 * a);
    let t2 = (-b + sqrt_d) / (2.0 * a);

    if t1 > 0.0 {
        Some(t1)
    } else if t2 > 0.0 {
        Some(t2)
    } else {
        None
    }
}

fn ray_aabb_intersection(origin: Vec3, dir: Vec3, center: Vec3, half: Vec3) -> Option<f32> {
    let min = center - half;
    let max = center + half;

    let mut tmin = f32::NEG_INFINITY;
    let mut tmax = f32::INFINITY;
    for axis in 0..3 {
        let (o, d) = (origin[axis], dir[axis]);
        if d.abs() < 1e-8 {
            // Parallel to this slab: must already lie inside it.
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let t1 = (min[axis] - o) * inv;
        let t2 = (max[axis] - o) * inv;
        tmin = tmin.max(t1.min(t2));
        tmax = tmax.min(t1.max(t2));
    }

    if tmax < 0.0 || tmin > tmax {
        return None;
    }
    // Ray starts inside the box; report the exit.
    Some(if tmin < 0.0 { tmax } else { tmin })
}

fn ray_plane_intersection(origin: Vec3, dir: Vec3, normal: Vec3, offset: f32) -> Option<f32> {
    let denom = dir.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (offset - origin.dot(normal)) / denom;
    (t > 0.0).then_some(t)
}

/// Normal of the box face `point` lies on: the axis where the point sits
/// closest to the surface relative to the half extent.
fn aabb_face_normal(point: Vec3, center: Vec3, half: Vec3) -> Vec3 {
    let local = point - center;
    let mut best_axis = 0;
    let mut best = f32::NEG_INFINITY;
    for axis in 0..3 {
        if half[axis] <= 0.0 {
            continue;
        }
        let ratio = local[axis].abs() / half[axis];
        if ratio > best {
            best = ratio;
            best_axis = axis;
        }
    }
    let mut normal = Vec3::ZERO;
    normal[best_axis] = local[best_axis].signum();
    normal
}
