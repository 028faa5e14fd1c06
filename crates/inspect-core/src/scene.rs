//! Scene objects and ray picking.
//!
//! Scene contents are supplied by the frontend through [`ObjectSpec`]; the
//! core only needs identity, a transform, a collider, and for inspectable
//! objects a pivot plus their detail points.

use crate::constants::DETAIL_POINT_RADIUS;
use crate::detail::{DetailPointRegistry, PointId};
use crate::ray::{ray_box, ray_sphere, Ray};
use crate::transform::Transform;
use glam::{Quat, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(pub(crate) u32);

/// Collision shape in the object's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider {
    Sphere { center: Vec3, radius: f32 },
    Box { center: Vec3, half_extents: Vec3 },
}

impl Collider {
    pub fn sphere(radius: f32) -> Self {
        Collider::Sphere {
            center: Vec3::ZERO,
            radius,
        }
    }

    pub fn cuboid(half_extents: Vec3) -> Self {
        Collider::Box {
            center: Vec3::ZERO,
            half_extents,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        match *self {
            Collider::Sphere { center, .. } | Collider::Box { center, .. } => center,
        }
    }

    fn intersect_local(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        match *self {
            Collider::Sphere { center, radius } => ray_sphere(origin, dir, center, radius),
            Collider::Box {
                center,
                half_extents,
            } => ray_box(origin, dir, center, half_extents),
        }
    }
}

/// Read-only description of what a ray landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetIdentity {
    pub name: String,
    pub info_text: String,
    pub inspectable: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Inspectable {
    /// Pivot in the object's local frame. Fixed for the object's lifetime.
    pub pivot_offset: Vec3,
    pub summary: String,
    pub points: SmallVec<[PointId; 8]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    /// Name and info text; occluders without identity block rays but never
    /// resolve as targets.
    pub label: Option<(String, String)>,
    pub transform: Transform,
    pub collider: Collider,
    pub inspectable: Option<Inspectable>,
}

impl SceneObject {
    pub fn identity(&self) -> Option<TargetIdentity> {
        self.label.as_ref().map(|(name, info)| TargetIdentity {
            name: name.clone(),
            info_text: info.clone(),
            inspectable: self.inspectable.is_some(),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.label.as_ref().map(|(n, _)| n.as_str()).unwrap_or("")
    }

    /// World position of the inspection pivot.
    pub fn pivot_world(&self) -> Option<Vec3> {
        self.inspectable
            .as_ref()
            .map(|i| self.transform.transform_point(i.pivot_offset))
    }

    pub fn point_ids(&self) -> &[PointId] {
        self.inspectable
            .as_ref()
            .map(|i| i.points.as_slice())
            .unwrap_or(&[])
    }

    fn raycast(&self, ray: &Ray) -> Option<f32> {
        let origin = self.transform.inverse_transform_point(ray.origin);
        let dir = self.transform.rotation.inverse() * ray.direction;
        self.collider.intersect_local(origin, dir)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneHit {
    pub subject: SubjectId,
    pub distance: f32,
}

#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Option<SceneObject>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object: SceneObject) -> SubjectId {
        let id = SubjectId(self.objects.len() as u32);
        self.objects.push(Some(object));
        id
    }

    pub fn remove(&mut self, id: SubjectId) -> Option<SceneObject> {
        self.objects.get_mut(id.0 as usize).and_then(Option::take)
    }

    #[inline]
    pub fn get(&self, id: SubjectId) -> Option<&SceneObject> {
        self.objects.get(id.0 as usize).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: SubjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SubjectId, &SceneObject)> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.as_ref().map(|o| (SubjectId(i as u32), o)))
    }

    /// Nearest collider hit within `max_distance`.
    pub fn raycast(&self, ray: &Ray, max_distance: f32) -> Option<SceneHit> {
        if ray.direction == Vec3::ZERO {
            return None;
        }
        let mut best: Option<SceneHit> = None;
        for (subject, object) in self.iter() {
            let Some(t) = object.raycast(ray) else {
                continue;
            };
            if t > max_distance {
                continue;
            }
            match best {
                Some(b) if t >= b.distance => {}
                _ => best = Some(SceneHit { subject, distance: t }),
            }
        }
        best
    }

    /// Nearest visible detail point of `subject` under the ray. Hidden points
    /// are never candidates.
    pub fn pick_detail_point(
        &self,
        subject: SubjectId,
        ray: &Ray,
        points: &DetailPointRegistry,
        max_distance: f32,
    ) -> Option<PointId> {
        let object = self.get(subject)?;
        let mut best: Option<(PointId, f32)> = None;
        for &id in object.point_ids() {
            let Some(point) = points.get(id).filter(|p| p.is_visible()) else {
                continue;
            };
            let center = object.transform.transform_point(point.local_offset());
            let Some(t) = ray_sphere(ray.origin, ray.direction, center, DETAIL_POINT_RADIUS) else {
                continue;
            };
            if t > max_distance {
                continue;
            }
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((id, t)),
            }
        }
        best.map(|(id, _)| id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailPointSpec {
    pub number: u32,
    pub description: String,
    pub local_offset: Vec3,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InspectSpec {
    /// Falls back to the collider centre when not given.
    pub pivot_offset: Option<Vec3>,
    pub summary: String,
    pub points: Vec<DetailPointSpec>,
}

impl InspectSpec {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    pub fn pivot(mut self, offset: Vec3) -> Self {
        self.pivot_offset = Some(offset);
        self
    }

    pub fn point(mut self, number: u32, description: impl Into<String>, local_offset: Vec3) -> Self {
        self.points.push(DetailPointSpec {
            number,
            description: description.into(),
            local_offset,
        });
        self
    }
}

/// Builder for scene objects.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectSpec {
    pub label: Option<(String, String)>,
    pub transform: Transform,
    pub collider: Collider,
    pub inspect: Option<InspectSpec>,
}

impl ObjectSpec {
    pub fn new(name: impl Into<String>, info_text: impl Into<String>) -> Self {
        Self {
            label: Some((name.into(), info_text.into())),
            transform: Transform::IDENTITY,
            collider: Collider::sphere(0.5),
            inspect: None,
        }
    }

    /// An unnamed blocker: stops rays, never resolves as a target.
    pub fn occluder(collider: Collider) -> Self {
        Self {
            label: None,
            transform: Transform::IDENTITY,
            collider,
            inspect: None,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn collider(mut self, collider: Collider) -> Self {
        self.collider = collider;
        self
    }

    pub fn inspectable(mut self, inspect: InspectSpec) -> Self {
        self.inspect = Some(inspect);
        self
    }

    /// Insert into `scene`, registering detail points with `points`.
    pub fn spawn(self, scene: &mut Scene, points: &mut DetailPointRegistry) -> SubjectId {
        let collider_center = self.collider.center();
        let id = scene.insert(SceneObject {
            label: self.label,
            transform: self.transform,
            collider: self.collider,
            inspectable: None,
        });
        if let Some(spec) = self.inspect {
            let ids = spec
                .points
                .into_iter()
                .map(|p| points.insert(id, p.number, p.description, p.local_offset))
                .collect();
            if let Some(object) = scene.get_mut(id) {
                object.inspectable = Some(Inspectable {
                    pivot_offset: spec.pivot_offset.unwrap_or(collider_center),
                    summary: spec.summary,
                    points: ids,
                });
            }
        }
        id
    }
}
