pub mod color;
pub mod surface;

use crate::{
    config::FieldConfig,
    simulator::{
        components::{
            edges::{Connects, Proximity},
            nodes::{Position, Radius},
        },
        ressources::simulator_vars::ProximityThreshold,
    },
};
use color::Rgba;
use specs::{Join, World, WorldExt};
use surface::Surface;

/// Paints the nodes and edges of a simulator world.
pub struct Renderer {
    /// Shared RGB, carrying the node alpha.
    color: Rgba,
    edge_alpha_scale: f32,
    edge_width: f32,
}

impl Renderer {
    pub fn new(config: &FieldConfig) -> Self {
        Self {
            color: Rgba::from_rgb(config.color, config.node_alpha),
            edge_alpha_scale: config.edge_alpha_scale,
            edge_width: config.edge_width,
        }
    }

    /// Strokes every edge whose endpoints are *currently* within the proximity
    /// threshold. Edges further apart are skipped but stay in the edge set.
    pub fn draw_edges<S: Surface + ?Sized>(&self, world: &World, surface: &mut S) {
        let threshold = world.read_resource::<ProximityThreshold>().0;
        let positions = world.read_storage::<Position>();
        let connections = world.read_storage::<Connects>();
        let proximities = world.read_storage::<Proximity>();

        for (connects, proximity) in (&connections, &proximities).join() {
            let (Some(from), Some(to)) = (
                positions.get(connects.src),
                positions.get(connects.target),
            ) else {
                continue;
            };
            if from.0.distance(to.0) < threshold {
                let color = self.color.with_alpha(proximity.opacity * self.edge_alpha_scale);
                surface.stroke_line(from.0, to.0, color, self.edge_width);
            }
        }
    }

    pub fn draw_nodes<S: Surface + ?Sized>(&self, world: &World, surface: &mut S) {
        let positions = world.read_storage::<Position>();
        let radii = world.read_storage::<Radius>();

        for (position, radius) in (&positions, &radii).join() {
            surface.fill_circle(position.0, radius.0, self.color);
        }
    }
}
