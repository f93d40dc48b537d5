//! Integration tests for drape-render.

use drape_math::Vec3;
use drape_mesh::{ClothGrid, PinPolicy, Topology};
use drape_render::{
    frame_path, render_frame, DepthBuffer, FrameRenderer, FrameSink, HeadlessSink, ImageSurface,
    JsonFrameExporter, PixelSurface, PngSequenceWriter, RenderFrame,
};
use drape_solver::state::{ClothState, Particle};
use drape_types::DrapeError;
use image::Rgba;

const BACKGROUND: Rgba<u8> = Rgba([30, 30, 30, 255]);
const TOWARD_SCREEN: Vec3 = Vec3::new(0.0, 0.0, -1.0);

fn particles(points: &[[f32; 3]]) -> Vec<Particle> {
    points
        .iter()
        .map(|&p| Particle::new(Vec3::from_array(p), false))
        .collect()
}

fn gray(v: u8) -> Rgba<u8> {
    Rgba([v, v, v, 255])
}

// ─── Surface & Depth ──────────────────────────────────────────

#[test]
fn image_surface_dimensions_and_pixels() {
    let mut s = ImageSurface::new(4, 3);
    assert_eq!(s.width(), 4);
    assert_eq!(s.height(), 3);
    s.set_pixel(3, 2, gray(7));
    assert_eq!(s.pixel(3, 2), gray(7));
    s.fill(gray(1));
    assert_eq!(s.pixel(3, 2), gray(1));
    assert_eq!(s.pixel(0, 0), gray(1));
}

#[test]
fn depth_buffer_starts_empty() {
    let d = DepthBuffer::new(2, 2);
    assert_eq!(d.get(1, 1), f32::NEG_INFINITY);
}

#[test]
fn depth_buffer_keeps_nearest() {
    let mut d = DepthBuffer::new(2, 2);
    assert!(d.test_and_set(0, 1, -100.0));
    assert!(d.test_and_set(0, 1, 5.0));
    assert!(!d.test_and_set(0, 1, 5.0));
    assert!(!d.test_and_set(0, 1, 1.0));
    assert_eq!(d.get(0, 1), 5.0);

    d.clear();
    assert_eq!(d.get(0, 1), f32::NEG_INFINITY);
}

// ─── Rasterization ────────────────────────────────────────────

#[test]
fn empty_frame_is_background() {
    let mut s = ImageSurface::new(8, 6);
    let stats = render_frame(&mut s, &[], &[], TOWARD_SCREEN);
    assert_eq!(stats.triangles_drawn, 0);
    assert_eq!(stats.pixels_written, 0);
    for px in s.image().pixels() {
        assert_eq!(*px, BACKGROUND);
    }
}

#[test]
fn facing_triangle_is_fully_lit() {
    // Normal points at -Z, same direction the light travels.
    let ps = particles(&[[1.0, 1.0, 0.0], [1.0, 8.0, 0.0], [8.0, 1.0, 0.0]]);
    let mut s = ImageSurface::new(10, 10);
    let stats = render_frame(&mut s, &[[0, 1, 2]], &ps, TOWARD_SCREEN);

    assert_eq!(stats.triangles_drawn, 1);
    assert!(stats.pixels_written > 0);
    assert_eq!(s.pixel(2, 2), gray(255));
    assert_eq!(s.pixel(1, 1), gray(255), "vertex pixel is covered");
    assert_eq!(s.pixel(7, 7), BACKGROUND, "beyond the hypotenuse");
    assert_eq!(s.pixel(9, 9), BACKGROUND);
}

#[test]
fn back_facing_triangle_gets_minimum_shade() {
    let ps = particles(&[[1.0, 1.0, 0.0], [8.0, 1.0, 0.0], [1.0, 8.0, 0.0]]);
    let mut s = ImageSurface::new(10, 10);
    render_frame(&mut s, &[[0, 1, 2]], &ps, TOWARD_SCREEN);
    assert_eq!(s.pixel(2, 2), gray(20));
}

#[test]
fn zero_light_shades_minimum() {
    let ps = particles(&[[1.0, 1.0, 0.0], [1.0, 8.0, 0.0], [8.0, 1.0, 0.0]]);
    let mut s = ImageSurface::new(10, 10);
    render_frame(&mut s, &[[0, 1, 2]], &ps, Vec3::ZERO);
    assert_eq!(s.pixel(2, 2), gray(20));
}

#[test]
fn depth_test_is_order_independent() {
    // Near face (z = 10) lit, far face (z = 0) wound the other way.
    let ps = particles(&[
        [1.0, 1.0, 10.0],
        [1.0, 8.0, 10.0],
        [8.0, 1.0, 10.0],
        [1.0, 1.0, 0.0],
        [1.0, 8.0, 0.0],
        [8.0, 1.0, 0.0],
    ]);
    let near = [0, 1, 2];
    let far = [3, 5, 4];

    let mut a = ImageSurface::new(10, 10);
    render_frame(&mut a, &[near, far], &ps, TOWARD_SCREEN);
    let mut b = ImageSurface::new(10, 10);
    render_frame(&mut b, &[far, near], &ps, TOWARD_SCREEN);

    assert_eq!(a.pixel(3, 3), gray(255));
    assert_eq!(b.pixel(3, 3), gray(255));
    assert_eq!(a.image().as_raw(), b.image().as_raw());
}

#[test]
fn degenerate_triangle_is_skipped() {
    let ps = particles(&[[1.0, 1.0, 0.0], [4.0, 4.0, 0.0], [8.0, 8.0, 0.0]]);
    let mut s = ImageSurface::new(10, 10);
    let stats = render_frame(&mut s, &[[0, 1, 2]], &ps, TOWARD_SCREEN);

    assert_eq!(stats.triangles_degenerate, 1);
    assert_eq!(stats.triangles_drawn, 0);
    assert_eq!(s.pixel(4, 4), BACKGROUND);
}

#[test]
fn offscreen_vertices_are_clipped() {
    let ps = particles(&[[-50.0, -50.0, 0.0], [-50.0, 50.0, 0.0], [50.0, -50.0, 0.0]]);
    let mut s = ImageSurface::new(10, 10);
    let stats = render_frame(&mut s, &[[0, 1, 2]], &ps, TOWARD_SCREEN);

    assert_eq!(stats.triangles_drawn, 1);
    assert_eq!(s.pixel(0, 0), gray(255));
    assert_eq!(s.pixel(9, 9), BACKGROUND);
}

#[test]
fn fully_offscreen_triangle_writes_nothing() {
    let ps = particles(&[[100.0, 100.0, 0.0], [100.0, 120.0, 0.0], [120.0, 100.0, 0.0]]);
    let mut s = ImageSurface::new(10, 10);
    let stats = render_frame(&mut s, &[[0, 1, 2]], &ps, TOWARD_SCREEN);
    assert_eq!(stats.pixels_written, 0);
}

#[test]
fn flat_grid_renders_under_default_light() {
    let grid = ClothGrid::new(3, 3, 10.0).with_origin(Vec3::new(2.0, 2.0, 0.0));
    let topo = Topology::build(&grid);
    let state = ClothState::from_grid(&grid, &PinPolicy::None).unwrap();

    let mut s = ImageSurface::new(30, 30);
    let mut renderer = FrameRenderer::default();
    let stats = renderer.render(&mut s, &topo.triangles, &state.particles);

    assert_eq!(stats.triangles_drawn, 8);
    assert_eq!(stats.triangles_degenerate, 0);
    // unit(-Z) · unit(0, -0.5, -1) = 1 / sqrt(1.25)
    assert_eq!(s.pixel(10, 10), gray(228));
    assert_eq!(s.pixel(25, 25), BACKGROUND);
    assert_eq!(renderer.depth().get(10, 10), 0.0);
}

#[test]
fn renderer_clears_between_frames() {
    let ps = particles(&[[1.0, 1.0, 0.0], [1.0, 8.0, 0.0], [8.0, 1.0, 0.0]]);
    let mut s = ImageSurface::new(10, 10);
    let mut renderer = FrameRenderer::new(TOWARD_SCREEN);

    renderer.render(&mut s, &[[0, 1, 2]], &ps);
    let stats = renderer.render(&mut s, &[], &ps);
    assert_eq!(stats.pixels_written, 0);
    assert_eq!(s.pixel(2, 2), BACKGROUND);
    assert_eq!(renderer.depth().get(2, 2), f32::NEG_INFINITY);
}

// ─── Sinks ────────────────────────────────────────────────────

#[test]
fn headless_counts_frames() {
    let s = ImageSurface::new(2, 2);
    let mut sink = HeadlessSink::new();
    sink.init(&[], 0).unwrap();
    assert_eq!(sink.name(), "headless");

    for index in 0..3 {
        let frame = RenderFrame {
            index,
            time: 0.0,
            particles: &[],
            surface: &s,
        };
        sink.submit_frame(&frame).unwrap();
    }
    sink.finalize().unwrap();
    assert_eq!(sink.frame_count(), 3);
}

#[test]
fn frame_path_pads_to_three_digits() {
    assert_eq!(
        frame_path("outputs/frame_{frame}.png", 7),
        std::path::PathBuf::from("outputs/frame_007.png")
    );
    assert_eq!(
        frame_path("f{frame}.png", 1234),
        std::path::PathBuf::from("f1234.png")
    );
}

#[test]
fn png_writer_requires_placeholder() {
    let err = PngSequenceWriter::new("out.png").unwrap_err();
    assert!(matches!(err, DrapeError::InvalidConfig(_)));
}

#[test]
fn png_writer_creates_directory_and_files() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = dir.path().join("frames/frame_{frame}.png");
    let mut writer = PngSequenceWriter::new(pattern.to_string_lossy()).unwrap();
    writer.init(&[], 0).unwrap();

    let mut s = ImageSurface::new(4, 4);
    s.fill(gray(99));
    for index in 0..2 {
        let frame = RenderFrame {
            index,
            time: 0.0,
            particles: &[],
            surface: &s,
        };
        writer.submit_frame(&frame).unwrap();
    }
    writer.finalize().unwrap();

    assert_eq!(writer.frame_count(), 2);
    let second = dir.path().join("frames/frame_001.png");
    assert_eq!(writer.last_path(), Some(second.as_path()));
    assert!(dir.path().join("frames/frame_000.png").exists());

    let back = image::open(&second).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (4, 4));
    assert_eq!(*back.get_pixel(3, 3), gray(99));
}

#[test]
fn save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let s = ImageSurface::new(2, 2);
    let err = s.save(&dir.path().join("missing/frame.png")).unwrap_err();
    assert!(matches!(err, DrapeError::Image(_)));
}

#[test]
fn json_exporter_writes_all_frames() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("anim.json");
    let ps = particles(&[[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
    let s = ImageSurface::new(2, 2);

    let mut exporter = JsonFrameExporter::new(&path);
    exporter.init(&[[0, 1, 2]], ps.len()).unwrap();
    for index in 0..2 {
        let frame = RenderFrame {
            index,
            time: index as f32 * 0.06,
            particles: &ps,
            surface: &s,
        };
        exporter.submit_frame(&frame).unwrap();
    }
    exporter.finalize().unwrap();
    assert_eq!(exporter.frame_count(), 2);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["particle_count"], 3);
    assert_eq!(json["triangle_count"], 1);
    assert_eq!(json["frames"].as_array().unwrap().len(), 2);
    assert_eq!(json["frames"][1]["positions"].as_array().unwrap().len(), 9);
}
