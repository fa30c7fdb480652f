use crate::simulator::{
    components::nodes::{Position, Velocity},
    ressources::simulator_vars::{RunState, SurfaceSize},
};
use glam::Vec2;
use specs::{Join, Read, System, WriteStorage};

/// Moves every node by its velocity and reflects it off the surface bounds.
pub struct UpdateNodePosition;

impl<'a> System<'a> for UpdateNodePosition {
    type SystemData = (
        WriteStorage<'a, Position>,
        WriteStorage<'a, Velocity>,
        Read<'a, SurfaceSize>,
        Read<'a, RunState>,
    );

    fn run(&mut self, (mut positions, mut velocities, surface, run_state): Self::SystemData) {
        if *run_state != RunState::Running {
            return;
        }

        let bounds = Vec2::new(surface.width as f32, surface.height as f32);
        for (pos, velocity) in (&mut positions, &mut velocities).join() {
            pos.0 += velocity.0;
            velocity.0 = bounce(pos.0, velocity.0, bounds);
        }
    }
}

/// Axis-aligned elastic reflection.
///
/// A component only flips while the node is outside the bounds *and* still
/// heading away from them, so a node that overshot turns exactly once and
/// drifts back in. Positions are never corrected.
pub fn bounce(position: Vec2, velocity: Vec2, bounds: Vec2) -> Vec2 {
    let mut velocity = velocity;
    if (position.x < 0.0 && velocity.x < 0.0) || (position.x > bounds.x && velocity.x > 0.0) {
        velocity.x = -velocity.x;
    }
    if (position.y < 0.0 && velocity.y < 0.0) || (position.y > bounds.y && velocity.y > 0.0) {
        velocity.y = -velocity.y;
    }
    velocity
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn inside_bounds_keeps_velocity() {
        let v = Vec2::new(0.2, -0.1);
        assert_eq!(bounce(Vec2::new(400.0, 300.0), v, BOUNDS), v);
    }

    #[test]
    fn flips_each_axis_independently() {
        let v = bounce(Vec2::new(-0.1, 300.0), Vec2::new(-0.2, 0.1), BOUNDS);
        assert_eq!(v, Vec2::new(0.2, 0.1));

        let v = bounce(Vec2::new(400.0, 600.5), Vec2::new(0.2, 0.1), BOUNDS);
        assert_eq!(v, Vec2::new(0.2, -0.1));
    }

    #[test]
    fn heading_back_inside_is_left_alone() {
        let v = Vec2::new(-0.2, 0.0);
        assert_eq!(bounce(Vec2::new(800.3, 300.0), v, BOUNDS), v);
    }

    #[test]
    fn exactly_on_the_edge_does_not_flip() {
        let v = Vec2::new(0.25, 0.25);
        assert_eq!(bounce(BOUNDS, v, BOUNDS), v);
    }
}
