//! A small demo room shared by the front-ends.

use crate::scene::{Collider, InspectSpec, ObjectSpec};
use glam::{Quat, Vec3};

/// Named areas of the demo room, in the order the front-ends bind them to
/// keys or buttons.
pub const LOCATIONS: [&str; 3] = ["Entrance hall", "Ceramics gallery", "Bronze room"];

/// Exhibits placed around a viewer standing at the origin and facing +Z.
pub fn exhibits() -> Vec<ObjectSpec> {
    vec![
        ObjectSpec::new("Amphora", "Terracotta storage jar, 4th century BC")
            .at(Vec3::new(0.0, 1.2, 4.0))
            .collider(Collider::cuboid(Vec3::new(0.3, 0.55, 0.3)))
            .inspectable(
                InspectSpec::new("Two-handled jar used to ship wine and oil across the Mediterranean.")
                    .pivot(Vec3::new(0.0, 0.1, 0.0))
                    .point(1, "Painted band showing a chariot race.", Vec3::new(0.0, 0.25, 0.32))
                    .point(2, "Handle, re-attached during restoration.", Vec3::new(0.32, 0.4, 0.0))
                    .point(3, "Stamp of the workshop on the foot.", Vec3::new(0.0, -0.5, 0.2)),
            ),
        ObjectSpec::new("Helmet", "Bronze, Corinthian type")
            .at(Vec3::new(-2.5, 1.5, 3.5))
            .rotated(Quat::from_rotation_y(0.6))
            .collider(Collider::sphere(0.3))
            .inspectable(
                InspectSpec::new("Hammered from a single sheet of bronze.")
                    .point(1, "Nose guard.", Vec3::new(0.0, -0.05, 0.3))
                    .point(2, "Rivet holes for the lining.", Vec3::new(0.0, 0.2, -0.22)),
            ),
        ObjectSpec::new("Oil lamp", "Roman, moulded clay")
            .at(Vec3::new(2.4, 1.1, 3.2))
            .rotated(Quat::from_rotation_y(-0.5))
            .collider(Collider::cuboid(Vec3::new(0.15, 0.06, 0.22)))
            .inspectable(
                InspectSpec::new("Everyday lamp with a relief of a gladiator on the discus.")
                    .point(1, "Nozzle blackened by use.", Vec3::new(0.0, 0.0, 0.22)),
            ),
        ObjectSpec::new("Bench", "Visitors' bench, oak").at(Vec3::new(0.0, 0.4, 7.5)),
        // Partition between the ceramics and bronze cases.
        ObjectSpec::occluder(Collider::cuboid(Vec3::new(0.05, 1.5, 1.0)))
            .at(Vec3::new(-1.3, 1.5, 5.0)),
    ]
}
