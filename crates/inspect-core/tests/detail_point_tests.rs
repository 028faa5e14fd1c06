use glam::Vec3;
use inspect_core::{
    DetailPointRegistry, DisplayUpdate, InspectSpec, InteractionError, ObjectSpec, PointId,
    PointSelection, Scene, POINT_HOVER_COLOR, POINT_NORMAL_COLOR, POINT_SELECTED_COLOR,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn two_objects(scene: &mut Scene, points: &mut DetailPointRegistry) -> Vec<PointId> {
    let mut ids = Vec::new();
    for (i, name) in ["Amphora", "Helmet"].iter().enumerate() {
        let mut spec = InspectSpec::new(format!("{} summary", name));
        for n in 1..=4 {
            spec = spec.point(n, format!("{} part {}", name, n), Vec3::new(0.1 * n as f32, 0.0, 0.3));
        }
        let id = ObjectSpec::new(*name, "")
            .at(Vec3::new(i as f32 * 3.0, 1.0, 4.0))
            .inspectable(spec)
            .spawn(scene, points);
        ids.extend_from_slice(scene.get(id).unwrap().point_ids());
    }
    ids
}

fn show_all(points: &mut DetailPointRegistry, ids: &[PointId], out: &mut Vec<DisplayUpdate>) {
    for id in ids {
        points.show(*id, true, out).unwrap();
    }
}

#[test]
fn points_start_hidden_and_unselected() {
    let mut scene = Scene::new();
    let mut points = DetailPointRegistry::new();
    let ids = two_objects(&mut scene, &mut points);
    assert_eq!(points.len(), 8);
    for id in ids {
        let p = points.get(id).unwrap();
        assert!(!p.is_visible());
        assert_eq!(p.selection(), PointSelection::Unselected);
    }
    assert_eq!(points.selected(), None);
}

#[test]
fn selecting_hidden_point_is_rejected() {
    let mut scene = Scene::new();
    let mut points = DetailPointRegistry::new();
    let ids = two_objects(&mut scene, &mut points);
    let mut out = Vec::new();

    let err = points.select(ids[2], &mut out).unwrap_err();
    assert_eq!(err, InteractionError::PointHidden { number: 3 });
    assert_eq!(points.selected(), None);
    assert!(out.is_empty());
}

#[test]
fn selection_is_global_across_objects() {
    let mut scene = Scene::new();
    let mut points = DetailPointRegistry::new();
    let ids = two_objects(&mut scene, &mut points);
    let mut out = Vec::new();
    show_all(&mut points, &ids, &mut out);

    let first = points.select(ids[0], &mut out).unwrap();
    assert_eq!(first.number, 1);
    out.clear();

    // A point on the other object takes the selection away.
    let second = points.select(ids[5], &mut out).unwrap();
    assert_ne!(first.owner, second.owner);
    assert_eq!(points.selected(), Some(ids[5]));
    assert_eq!(points.get(ids[0]).unwrap().selection(), PointSelection::Unselected);
    assert_eq!(
        out,
        vec![
            DisplayUpdate::PointColor {
                point: ids[0],
                color: POINT_NORMAL_COLOR
            },
            DisplayUpdate::PointColor {
                point: ids[5],
                color: POINT_SELECTED_COLOR
            },
        ]
    );
}

#[test]
fn reselecting_same_point_keeps_it_selected() {
    let mut scene = Scene::new();
    let mut points = DetailPointRegistry::new();
    let ids = two_objects(&mut scene, &mut points);
    let mut out = Vec::new();
    show_all(&mut points, &ids, &mut out);

    points.select(ids[1], &mut out).unwrap();
    points.select(ids[1], &mut out).unwrap();
    assert_eq!(points.selected_count(), 1);
    assert_eq!(points.selected(), Some(ids[1]));
}

#[test]
fn hiding_selected_point_deselects_it() {
    let mut scene = Scene::new();
    let mut points = DetailPointRegistry::new();
    let ids = two_objects(&mut scene, &mut points);
    let mut out = Vec::new();
    show_all(&mut points, &ids, &mut out);

    points.select(ids[3], &mut out).unwrap();
    points.show(ids[3], false, &mut out).unwrap();
    assert_eq!(points.selected(), None);
    assert_eq!(points.selected_count(), 0);

    // Shown again it comes back in the normal colour.
    out.clear();
    points.show(ids[3], true, &mut out).unwrap();
    assert!(out.contains(&DisplayUpdate::PointColor {
        point: ids[3],
        color: POINT_NORMAL_COLOR
    }));
}

#[test]
fn hover_only_touches_visible_unselected_points() {
    let mut scene = Scene::new();
    let mut points = DetailPointRegistry::new();
    let ids = two_objects(&mut scene, &mut points);
    let mut out = Vec::new();

    assert!(!points.hover(ids[0], &mut out), "hidden point must not hover");

    show_all(&mut points, &ids, &mut out);
    out.clear();
    assert!(points.hover(ids[0], &mut out));
    assert_eq!(
        out,
        vec![DisplayUpdate::PointColor {
            point: ids[0],
            color: POINT_HOVER_COLOR
        }]
    );
    assert!(points.unhover(ids[0], &mut out));
    assert_eq!(points.get(ids[0]).unwrap().selection(), PointSelection::Unselected);

    points.select(ids[1], &mut out).unwrap();
    assert!(!points.hover(ids[1], &mut out), "selected point keeps its colour");
    assert!(!points.unhover(ids[1], &mut out));
    assert_eq!(points.get(ids[1]).unwrap().selection(), PointSelection::Selected);
}

#[test]
fn selecting_hovered_point_replaces_hover() {
    let mut scene = Scene::new();
    let mut points = DetailPointRegistry::new();
    let ids = two_objects(&mut scene, &mut points);
    let mut out = Vec::new();
    show_all(&mut points, &ids, &mut out);

    points.hover(ids[2], &mut out);
    points.select(ids[2], &mut out).unwrap();
    assert_eq!(points.get(ids[2]).unwrap().selection(), PointSelection::Selected);
    points.clear_selection(&mut out);
    assert_eq!(points.get(ids[2]).unwrap().selection(), PointSelection::Unselected);
}

#[test]
fn at_most_one_selected_under_random_sequences() {
    let mut rng = StdRng::seed_from_u64(0x5e1ec7);
    let mut scene = Scene::new();
    let mut points = DetailPointRegistry::new();
    let ids = two_objects(&mut scene, &mut points);
    let mut out = Vec::new();

    for _ in 0..2_000 {
        let id = ids[rng.gen_range(0..ids.len())];
        match rng.gen_range(0..6) {
            0 | 1 => {
                let visible = points.get(id).unwrap().is_visible();
                let result = points.select(id, &mut out);
                assert_eq!(result.is_ok(), visible);
                if visible {
                    assert_eq!(points.selected(), Some(id));
                    assert_eq!(points.selected_count(), 1);
                }
            }
            2 => {
                let visible = rng.gen_bool(0.6);
                points.show(id, visible, &mut out).unwrap();
                if !visible {
                    assert_ne!(points.selected(), Some(id));
                }
            }
            3 => {
                points.hover(id, &mut out);
            }
            4 => {
                points.unhover(id, &mut out);
            }
            _ => {
                points.deselect(id, &mut out);
            }
        }
        assert!(points.selected_count() <= 1);
        assert_eq!(points.selected_count() == 1, points.selected().is_some());
        if let Some(sel) = points.selected() {
            let p = points.get(sel).unwrap();
            assert!(p.is_visible());
            assert_eq!(p.selection(), PointSelection::Selected);
        }
        out.clear();
    }
}

#[test]
fn removing_owner_drops_its_points_and_selection() {
    let mut scene = Scene::new();
    let mut points = DetailPointRegistry::new();
    let ids = two_objects(&mut scene, &mut points);
    let mut out = Vec::new();
    show_all(&mut points, &ids, &mut out);

    let selected = points.select(ids[6], &mut out).unwrap();
    points.remove_owner(selected.owner);
    assert_eq!(points.len(), 4);
    assert_eq!(points.selected(), None);
    assert!(points.get(ids[6]).is_none());
    assert!(points.get(ids[0]).is_some());
}

#[test]
fn unknown_point_is_an_error() {
    let mut scene = Scene::new();
    let mut points = DetailPointRegistry::new();
    let ids = two_objects(&mut scene, &mut points);
    let mut out = Vec::new();
    let gone = ids[0];
    let owner = points.get(gone).unwrap().owner();
    points.remove_owner(owner);

    assert_eq!(
        points.show(gone, true, &mut out),
        Err(InteractionError::UnknownPoint(gone))
    );
}
