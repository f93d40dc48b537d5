//! Integration tests for drape-debug.

use drape_debug::snapshot::StateSnapshot;
use drape_math::Vec3;
use drape_mesh::{ClothGrid, PinPolicy};
use drape_solver::state::ClothState;
use drape_types::DrapeError;

fn moving_state() -> ClothState {
    let grid = ClothGrid::new(3, 2, 10.0).with_origin(Vec3::ZERO);
    let mut state = ClothState::from_grid(&grid, &PinPolicy::TopCorners).unwrap();
    for p in state.particles.iter_mut().filter(|p| !p.pinned) {
        p.previous = p.position - Vec3::new(0.0, 2.0, 0.0);
    }
    state.time = 1.2;
    state
}

#[test]
fn capture_and_restore() {
    let state = moving_state();
    let snap = StateSnapshot::capture(20, &state);
    assert_eq!(snap.frame, 20);
    assert_eq!(snap.particle_count(), 6);

    let restored = snap.restore().unwrap();
    assert_eq!(restored.particles.len(), state.particles.len());
    assert!((restored.time - 1.2).abs() < 1e-6);
    for (a, b) in restored.particles.iter().zip(&state.particles) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.previous, b.previous);
        assert_eq!(a.pinned, b.pinned);
    }
}

#[test]
fn binary_round_trip() {
    let snap = StateSnapshot::capture(3, &moving_state());
    let bytes = snap.to_bytes().unwrap();
    let recovered = StateSnapshot::from_bytes(&bytes).unwrap();
    assert_eq!(recovered, snap);
}

#[test]
fn truncated_bytes_are_rejected() {
    let bytes = StateSnapshot::capture(3, &moving_state()).to_bytes().unwrap();
    let err = StateSnapshot::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, DrapeError::Serialization(_)));
}

#[test]
fn mismatched_arrays_are_rejected() {
    let mut snap = StateSnapshot::capture(0, &moving_state());
    snap.pinned.pop();
    assert!(snap.restore().is_err());
    let bytes = snap.to_bytes().unwrap();
    assert!(StateSnapshot::from_bytes(&bytes).is_err());
}

#[test]
fn summary_reports_bounds_and_energy() {
    let snap = StateSnapshot::capture(0, &moving_state());
    let s = snap.summary();
    assert_eq!(s.particle_count, 6);
    assert_eq!(s.pinned_count, 2);
    assert_eq!(s.bounds_min, Vec3::ZERO);
    assert_eq!(s.bounds_max, Vec3::new(20.0, 10.0, 0.0));
    assert!((s.max_speed - 2.0).abs() < 1e-6);
    // Four free particles moving 2 units per step.
    assert!((s.kinetic_energy - 8.0).abs() < 1e-9);
}

#[test]
fn save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.bin");
    let snap = StateSnapshot::capture(7, &moving_state());
    snap.save(&path).unwrap();
    assert_eq!(StateSnapshot::load(&path).unwrap(), snap);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StateSnapshot::load(&dir.path().join("nope.bin")).unwrap_err();
    assert!(matches!(err, DrapeError::Io(_)));
}
