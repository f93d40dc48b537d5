//! Integration tests for drape-mesh.

use drape_math::{face_normal, Vec3};
use drape_mesh::{ClothGrid, PinPolicy, Topology};
use drape_types::ParticleId;

// ─── Grid Tests ───────────────────────────────────────────────

#[test]
fn grid_4x3_counts() {
    let grid = ClothGrid::new(4, 3, 10.0);
    assert_eq!(grid.particle_count(), 12);
    assert_eq!(grid.constraint_count(), 3 * 3 + 4 * 2); // 17
    assert_eq!(grid.triangle_count(), 12);
}

#[test]
fn grid_positions() {
    let grid = ClothGrid::new(3, 3, 10.0).with_origin(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(grid.rest_position(0, 0), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(grid.rest_position(2, 1), Vec3::new(11.0, 22.0, 3.0));
    assert_eq!(grid.index(2, 1), ParticleId(7));
}

#[test]
fn default_origin() {
    let grid = ClothGrid::new(2, 2, 1.0);
    assert_eq!(grid.origin, Vec3::new(200.0, 50.0, 0.0));
}

#[test]
fn validate_ok() {
    assert!(ClothGrid::new(25, 25, 12.0).validate().is_ok());
    assert!(ClothGrid::new(1, 8, 12.0).validate().is_ok()); // rope
}

#[test]
fn validate_rejects_empty_grid() {
    assert!(ClothGrid::new(0, 4, 1.0).validate().is_err());
    assert!(ClothGrid::new(4, 0, 1.0).validate().is_err());
}

#[test]
fn validate_rejects_bad_spacing() {
    assert!(ClothGrid::new(4, 4, 0.0).validate().is_err());
    assert!(ClothGrid::new(4, 4, -1.0).validate().is_err());
    assert!(ClothGrid::new(4, 4, f32::NAN).validate().is_err());
}

// ─── Pin Policy Tests ─────────────────────────────────────────

#[test]
fn top_anchors_pins_three_points() {
    let grid = ClothGrid::new(25, 25, 12.0);
    let mask = PinPolicy::TopAnchors.pinned_mask(&grid);
    assert_eq!(mask.len(), 625);
    let pinned: Vec<usize> = mask
        .iter()
        .enumerate()
        .filter(|(_, p)| **p)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(pinned, vec![0, 12, 24]);
}

#[test]
fn top_anchors_on_narrow_grid_collapse() {
    // Width 2: columns 0, 1 and 1 → two anchors.
    let grid = ClothGrid::new(2, 3, 1.0);
    let mask = PinPolicy::TopAnchors.pinned_mask(&grid);
    assert_eq!(mask.iter().filter(|&&p| p).count(), 2);
}

#[test]
fn other_policies() {
    let grid = ClothGrid::new(5, 4, 1.0);
    let count = |p: PinPolicy| p.pinned_mask(&grid).iter().filter(|&&x| x).count();
    assert_eq!(count(PinPolicy::TopRow), 5);
    assert_eq!(count(PinPolicy::TopCorners), 2);
    assert_eq!(count(PinPolicy::None), 0);
    assert_eq!(count(PinPolicy::Indices { indices: vec![0, 7, 999] }), 2);
}

#[test]
fn pin_policy_from_toml() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        pins: PinPolicy,
    }
    let w: Wrapper = toml::from_str("[pins]\nkind = \"indices\"\nindices = [0, 4]\n").unwrap();
    assert_eq!(w.pins, PinPolicy::Indices { indices: vec![0, 4] });
    let w: Wrapper = toml::from_str("[pins]\nkind = \"top_anchors\"\n").unwrap();
    assert_eq!(w.pins, PinPolicy::TopAnchors);
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn topology_4x3() {
    let grid = ClothGrid::new(4, 3, 10.0);
    let topo = Topology::build(&grid);
    assert_eq!(topo.constraint_count(), 17);
    assert_eq!(topo.triangle_count(), 12);
}

#[test]
fn constraint_order_is_row_major_interleaved() {
    let grid = ClothGrid::new(3, 2, 5.0);
    let topo = Topology::build(&grid);
    let pairs: Vec<(u32, u32)> = topo.constraints.iter().map(|c| (c.a.0, c.b.0)).collect();
    assert_eq!(
        pairs,
        vec![(0, 1), (0, 3), (1, 2), (1, 4), (2, 5), (3, 4), (4, 5)]
    );
    assert!(topo.constraints.iter().all(|c| c.rest_length == 5.0));
}

#[test]
fn constraint_endpoints_in_range() {
    let grid = ClothGrid::new(7, 5, 1.0);
    let topo = Topology::build(&grid);
    let n = grid.particle_count();
    for c in &topo.constraints {
        assert!(c.a.index() < n && c.b.index() < n);
        assert_ne!(c.a, c.b);
    }
}

#[test]
fn rope_has_no_triangles() {
    let grid = ClothGrid::new(1, 6, 1.0);
    let topo = Topology::build(&grid);
    assert_eq!(topo.constraint_count(), 5);
    assert_eq!(topo.triangle_count(), 0);
}

#[test]
fn single_particle() {
    let grid = ClothGrid::new(1, 1, 1.0);
    let topo = Topology::build(&grid);
    assert_eq!(topo.constraint_count(), 0);
    assert_eq!(topo.triangle_count(), 0);
}

#[test]
fn quad_split_winding() {
    let grid = ClothGrid::new(2, 2, 1.0);
    let topo = Topology::build(&grid);
    // 0 1
    // 2 3
    assert_eq!(topo.triangles, vec![[0, 2, 1], [1, 2, 3]]);
}

#[test]
fn flat_grid_faces_point_to_negative_z() {
    let grid = ClothGrid::new(4, 4, 2.0);
    let topo = Topology::build(&grid);
    let pos = |i: u32| {
        let row = i / grid.width;
        let col = i % grid.width;
        grid.rest_position(row, col)
    };
    for &[a, b, c] in &topo.triangles {
        let n = face_normal(pos(a), pos(b), pos(c));
        assert!(n.x.abs() < 1e-6 && n.y.abs() < 1e-6);
        assert!(n.z < 0.0, "triangle [{a}, {b}, {c}] normal {n:?}");
    }
}
