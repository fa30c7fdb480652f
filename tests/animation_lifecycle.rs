use glam::Vec2;
use neural_field::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

const SIZE: SurfaceSize = SurfaceSize::new(800, 600);

fn node(x: f32, y: f32, vx: f32) -> NodeSeed {
    NodeSeed {
        position: Vec2::new(x, y),
        radius: 2.0,
        velocity: Vec2::new(vx, 0.0),
    }
}

fn animation_with(nodes: Vec<NodeSeed>) -> Animation<RecordingSurface> {
    let config = FieldConfig::default();
    let simulator = Simulator::builder().build(InitField::from_nodes(SIZE, nodes, 150.0));
    Animation::new(simulator, Renderer::new(&config), RecordingSurface::new())
}

fn seeded_animation(seed: u64) -> Animation<RecordingSurface> {
    Animation::seeded(
        &FieldConfig::default(),
        SIZE,
        RecordingSurface::new(),
        &mut StdRng::seed_from_u64(seed),
    )
}

#[test]
fn frames_before_start_do_nothing() {
    let mut animation = seeded_animation(1);
    let before = animation.simulator().nodes();

    assert_eq!(animation.frame(), FrameStatus::Idle);
    assert_eq!(animation.surface().frames, 0);
    assert!(animation.surface().commands.is_empty());
    assert_eq!(animation.simulator().nodes(), before);
}

#[test]
fn start_only_once() {
    let mut animation = seeded_animation(1);
    assert!(!animation.is_started());
    assert!(animation.start());
    assert!(!animation.start());
    assert!(animation.is_started());
}

#[test]
fn running_frames_redraw_everything() {
    let mut animation = seeded_animation(2);
    animation.start();

    for frame in 1..=3 {
        assert_eq!(animation.frame(), FrameStatus::Drawn);
        let surface = animation.surface();
        assert_eq!(surface.frames, frame);
        assert_eq!(surface.commands[0], DrawCommand::Clear);
        assert_eq!(surface.circles().count(), 24);
    }
}

#[test]
fn draws_edges_then_moved_nodes() {
    let mut animation = animation_with(vec![node(100.0, 100.0, 0.25), node(200.0, 100.0, 0.0)]);
    animation.start();
    assert_eq!(animation.frame(), FrameStatus::Drawn);

    let commands = &animation.surface().commands;
    assert_eq!(commands.len(), 4);
    assert_eq!(commands[0], DrawCommand::Clear);

    match &commands[1] {
        DrawCommand::Line {
            from,
            to,
            color,
            width,
        } => {
            // Edges use the positions from before this frame's movement.
            assert_eq!(*from, Vec2::new(100.0, 100.0));
            assert_eq!(*to, Vec2::new(200.0, 100.0));
            assert_eq!((color.r, color.g, color.b), (0, 255, 204));
            assert!((color.a - (1.0 - 100.0 / 150.0) * 0.2).abs() < 1e-6);
            assert_eq!(*width, 0.5);
        }
        other => panic!("expected a line, got {other:?}"),
    }

    match &commands[2] {
        DrawCommand::Circle {
            center,
            radius,
            color,
        } => {
            assert_eq!(*center, Vec2::new(100.25, 100.0));
            assert_eq!(*radius, 2.0);
            assert_eq!(*color, Rgba::new(0, 255, 204, 0.7));
        }
        other => panic!("expected a circle, got {other:?}"),
    }
}

#[test]
fn drifting_apart_hides_but_keeps_the_edge() {
    // 140 apart, separating by 0.5 per frame.
    let mut animation = animation_with(vec![node(300.0, 300.0, -0.25), node(440.0, 300.0, 0.25)]);
    animation.start();

    animation.frame();
    assert_eq!(animation.surface().lines().count(), 1);

    for _ in 0..30 {
        animation.frame();
    }
    assert_eq!(animation.surface().lines().count(), 0);
    assert_eq!(animation.simulator().edge_count(), 1);
    assert_eq!(animation.simulator().edges().len(), 1);
}

#[test]
fn drifting_closer_never_connects() {
    let mut animation = animation_with(vec![node(300.0, 300.0, 0.25), node(500.0, 300.0, -0.25)]);
    animation.start();

    for _ in 0..200 {
        animation.frame();
        assert_eq!(animation.surface().lines().count(), 0);
    }
    assert_eq!(animation.simulator().edge_count(), 0);
}

#[test]
fn pause_freezes_and_resume_continues() {
    let mut animation = seeded_animation(3);
    animation.start();
    animation.frame();

    animation.pause();
    let frozen = animation.simulator().nodes();
    assert_eq!(animation.frame(), FrameStatus::Paused);
    assert_eq!(animation.frame(), FrameStatus::Paused);
    assert_eq!(animation.surface().frames, 1);
    assert_eq!(animation.simulator().nodes(), frozen);

    animation.resume();
    assert_eq!(animation.frame(), FrameStatus::Drawn);
    assert_eq!(animation.surface().frames, 2);
    assert_ne!(animation.simulator().nodes(), frozen);
}

#[test]
fn stop_is_terminal() {
    let mut animation = seeded_animation(4);
    animation.start();
    animation.frame();

    animation.stop();
    assert_eq!(animation.frame(), FrameStatus::Stopped);

    animation.resume();
    assert_eq!(animation.frame(), FrameStatus::Stopped);
    assert!(!animation.start());
    assert_eq!(animation.surface().frames, 1);
}

#[test]
fn stop_through_a_detached_handle() {
    let mut animation = seeded_animation(5);
    let handle = animation.handle();
    animation.start();

    handle.send(SimulatorEvent::Stopped);
    assert_eq!(animation.frame(), FrameStatus::Stopped);
    assert_eq!(animation.simulator().run_state(), RunState::Stopped);
}

#[test]
fn stopped_before_start_never_starts() {
    let mut animation = seeded_animation(6);
    animation.stop();
    assert!(!animation.start());
    assert_eq!(animation.frame(), FrameStatus::Idle);
}

#[test]
fn resize_mid_session_keeps_the_field() {
    let mut animation = seeded_animation(7);
    animation.start();
    animation.frame();
    let edges = animation.simulator().edges();

    animation.resize(1600, 600);
    assert_eq!(animation.frame(), FrameStatus::Drawn);

    assert_eq!(
        animation.simulator().surface_size(),
        SurfaceSize::new(1600, 600)
    );
    assert_eq!(animation.simulator().node_count(), 24);
    assert_eq!(animation.simulator().edges(), edges);
    assert_eq!(animation.surface().circles().count(), 24);
}

#[test]
fn custom_style_reaches_the_surface() {
    let config = FieldConfig {
        color: [255, 0, 0],
        node_alpha: 1.0,
        edge_alpha_scale: 1.0,
        edge_width: 2.0,
        ..FieldConfig::default()
    };
    let simulator = Simulator::builder().build(InitField::from_nodes(
        SIZE,
        vec![node(10.0, 10.0, 0.0), node(10.0, 40.0, 0.0)],
        150.0,
    ));
    let mut animation = Animation::new(simulator, Renderer::new(&config), RecordingSurface::new());
    animation.start();
    animation.frame();

    match animation.surface().lines().next() {
        Some(DrawCommand::Line { color, width, .. }) => {
            assert_eq!((color.r, color.g, color.b), (255, 0, 0));
            assert!((color.a - 0.8).abs() < 1e-6);
            assert_eq!(*width, 2.0);
        }
        other => panic!("expected a line, got {other:?}"),
    }
    assert!(animation
        .surface()
        .circles()
        .all(|c| matches!(c, DrawCommand::Circle { color, .. } if *color == Rgba::new(255, 0, 0, 1.0))));
}
