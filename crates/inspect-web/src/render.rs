//! Flat 2D canvas view of the scene: projected colliders, detail points and
//! the reticle ring. There is no mesh renderer; this is enough to aim at and
//! inspect the exhibits.

use crate::present::css_rgb;
use glam::{Vec2, Vec3};
use inspect_core::{
    Camera, Collider, ReticleMode, SceneObject, Viewer, Viewport, DETAIL_POINT_RADIUS,
};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

const BACKGROUND: &str = "#15171c";
const OBJECT_STROKE: &str = "#c9c4b8";
const OCCLUDER_STROKE: &str = "#5a5d66";
const LABEL_FILL: &str = "#e8e4da";
const FREE_RETICLE_RADIUS_PX: f64 = 6.0;

// Corners of the unit cube, and the 12 edges joining them.
const BOX_CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    viewer: &Viewer,
    camera: &Camera,
    viewport: Viewport,
) {
    ctx.set_fill_style(&JsValue::from_str(BACKGROUND));
    ctx.fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);

    // Painter's order: farthest first.
    let mut objects: Vec<&SceneObject> = viewer.scene().iter().map(|(_, o)| o).collect();
    objects.sort_by(|a, b| {
        let da = a.transform.position.distance_squared(camera.eye);
        let db = b.transform.position.distance_squared(camera.eye);
        db.total_cmp(&da)
    });

    for object in &objects {
        draw_object(ctx, object, camera, viewport);
    }
    for object in &objects {
        draw_points(ctx, viewer, object, camera, viewport);
    }
    draw_reticle(ctx, viewer, viewport);
}

fn draw_object(
    ctx: &web::CanvasRenderingContext2d,
    object: &SceneObject,
    camera: &Camera,
    viewport: Viewport,
) {
    let stroke = if object.label.is_some() {
        OBJECT_STROKE
    } else {
        OCCLUDER_STROKE
    };
    ctx.set_stroke_style(&JsValue::from_str(stroke));
    ctx.set_line_width(1.5);

    let world_center = object.transform.transform_point(object.collider.center());
    match object.collider {
        Collider::Sphere { center, radius } => {
            let Some(c) = camera.world_to_screen(viewport, world_center) else {
                return;
            };
            let edge = object.transform.transform_point(center) + camera.up() * radius;
            let Some(e) = camera.world_to_screen(viewport, edge) else {
                return;
            };
            circle(ctx, c, c.distance(e) as f64);
            ctx.stroke();
        }
        Collider::Box {
            center,
            half_extents,
        } => {
            let mut corners = [Vec2::ZERO; 8];
            for (slot, unit) in corners.iter_mut().zip(BOX_CORNERS) {
                let world = object.transform.transform_point(center + unit * half_extents);
                match camera.world_to_screen(viewport, world) {
                    Some(p) => *slot = p,
                    None => return,
                }
            }
            ctx.begin_path();
            for (a, b) in BOX_EDGES {
                ctx.move_to(corners[a].x as f64, corners[a].y as f64);
                ctx.line_to(corners[b].x as f64, corners[b].y as f64);
            }
            ctx.stroke();
        }
    }

    if object.label.is_some() {
        if let Some(p) = camera.world_to_screen(viewport, world_center) {
            ctx.set_fill_style(&JsValue::from_str(LABEL_FILL));
            ctx.set_font("14px sans-serif");
            let _ = ctx.fill_text(object.name(), p.x as f64 + 8.0, p.y as f64);
        }
    }
}

fn draw_points(
    ctx: &web::CanvasRenderingContext2d,
    viewer: &Viewer,
    object: &SceneObject,
    camera: &Camera,
    viewport: Viewport,
) {
    for &id in object.point_ids() {
        let Some(point) = viewer.points().get(id) else {
            continue;
        };
        if !point.is_visible() {
            continue;
        }
        let world = object.transform.transform_point(point.local_offset());
        let (Some(c), Some(e)) = (
            camera.world_to_screen(viewport, world),
            camera.world_to_screen(viewport, world + camera.up() * DETAIL_POINT_RADIUS),
        ) else {
            continue;
        };
        ctx.set_fill_style(&JsValue::from_str(&css_rgb(point.selection().color())));
        circle(ctx, c, (c.distance(e) as f64).max(3.0));
        ctx.fill();
        ctx.set_fill_style(&JsValue::from_str(BACKGROUND));
        let _ = ctx.fill_text(&point.number().to_string(), c.x as f64 - 4.0, c.y as f64 + 4.0);
    }
}

fn draw_reticle(ctx: &web::CanvasRenderingContext2d, viewer: &Viewer, viewport: Viewport) {
    let config = viewer.gate().config();
    let radius = match config.mode {
        ReticleMode::Gated => config.radius as f64,
        ReticleMode::Free => FREE_RETICLE_RADIUS_PX,
    };
    ctx.set_stroke_style(&JsValue::from_str(&css_rgb(
        viewer.resolver().indicator().color(),
    )));
    ctx.set_line_width(2.0);
    circle(ctx, viewport.center(), radius);
    ctx.stroke();
}

fn circle(ctx: &web::CanvasRenderingContext2d, center: Vec2, radius: f64) {
    ctx.begin_path();
    let _ = ctx.arc(center.x as f64, center.y as f64, radius, 0.0, TAU);
}
