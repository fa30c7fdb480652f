//! The starting state of a particle field.

use crate::{config::FieldConfig, simulator::ressources::simulator_vars::SurfaceSize};
use glam::Vec2;
use log::{debug, warn};
use petgraph::graph::{NodeIndex, UnGraph};
use rand::Rng;

/// Initial values of a single node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeSeed {
    pub position: Vec2,
    pub radius: f32,
    pub velocity: Vec2,
}

/// An edge between two nodes that started close to each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityEdge {
    pub distance: f32,
    /// `1 - distance / threshold`.
    pub opacity: f32,
}

/// Nodes plus their proximity graph, as decided at startup.
///
/// Graph node indices are the node indices used by the simulator.
pub struct InitField {
    pub size: SurfaceSize,
    pub graph: UnGraph<NodeSeed, ProximityEdge>,
}

impl InitField {
    /// Draws `node_count(..)` random nodes on a surface of `size` and connects them.
    ///
    /// Panics on ranges rejected by [`FieldConfig::validate`]; run it first.
    pub fn random<R: Rng + ?Sized>(size: SurfaceSize, config: &FieldConfig, rng: &mut R) -> Self {
        let count = node_count(size, config.density_divisor);
        let width = size.width as f32;
        let height = size.height as f32;
        let speed = config.max_speed;

        let nodes = (0..count)
            .map(|_| NodeSeed {
                position: Vec2::new(rng.gen_range(0.0..=width), rng.gen_range(0.0..=height)),
                radius: rng.gen_range(config.radius_min..=config.radius_max),
                velocity: Vec2::new(rng.gen_range(-speed..=speed), rng.gen_range(-speed..=speed)),
            })
            .collect();

        Self::from_nodes(size, nodes, config.proximity_threshold)
    }

    /// Connects every pair of `nodes` closer than `threshold`.
    ///
    /// Pairs are visited as `(i, j)` with `i < j`, which fixes the edge order.
    pub fn from_nodes(size: SurfaceSize, nodes: Vec<NodeSeed>, threshold: f32) -> Self {
        let mut graph = UnGraph::with_capacity(nodes.len(), 0);
        for node in &nodes {
            graph.add_node(*node);
        }

        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let distance = nodes[i].position.distance(nodes[j].position);
                if distance < threshold {
                    graph.add_edge(
                        NodeIndex::new(i),
                        NodeIndex::new(j),
                        ProximityEdge {
                            distance,
                            opacity: proximity_opacity(distance, threshold),
                        },
                    );
                }
            }
        }

        debug!(
            "Seeded field {}x{}: {} nodes, {} edges",
            size.width,
            size.height,
            graph.node_count(),
            graph.edge_count()
        );

        Self { size, graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Upper bound on the nodes of a single field.
pub const MAX_NODES: usize = 10_000;

/// Number of nodes for a surface: one per `density_divisor` square pixels,
/// rounded down and capped at [`MAX_NODES`].
pub fn node_count(size: SurfaceSize, density_divisor: f32) -> usize {
    let count = (size.area() / density_divisor as f64).floor();
    if count.is_nan() || count <= 0.0 {
        return 0;
    }
    if count >= MAX_NODES as f64 {
        warn!("{count} nodes requested for {}x{}, capped at {MAX_NODES}", size.width, size.height);
        return MAX_NODES;
    }
    count as usize
}

/// Linear falloff from `1` at distance `0` to `0` at `threshold`.
pub fn proximity_opacity(distance: f32, threshold: f32) -> f32 {
    1.0 - distance / threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_RADIUS, MAX_SPEED};
    use petgraph::visit::EdgeRef;
    use rand::{rngs::StdRng, SeedableRng};

    fn seed_at(x: f32, y: f32) -> NodeSeed {
        NodeSeed {
            position: Vec2::new(x, y),
            radius: 1.0,
            velocity: Vec2::ZERO,
        }
    }

    #[test]
    fn node_count_follows_area() {
        assert_eq!(node_count(SurfaceSize::new(800, 600), 20000.0), 24);
        assert_eq!(node_count(SurfaceSize::new(1920, 1080), 20000.0), 103);
        assert_eq!(node_count(SurfaceSize::new(100, 100), 20000.0), 0);
        assert_eq!(node_count(SurfaceSize::new(0, 600), 20000.0), 0);
    }

    #[test]
    fn node_count_is_capped() {
        let huge = SurfaceSize::new(100_000, 100_000);
        assert_eq!(node_count(huge, 1.0), MAX_NODES);
        assert_eq!(node_count(SurfaceSize::new(800, 600), 1e-30), MAX_NODES);
        assert_eq!(node_count(SurfaceSize::new(800, 600), f32::INFINITY), 0);
    }

    #[test]
    fn validated_extremes_seed_without_panicking() {
        let config = FieldConfig {
            density_divisor: 200.0,
            radius_min: 0.0,
            radius_max: MAX_RADIUS,
            max_speed: MAX_SPEED,
            ..FieldConfig::default()
        };
        config.validate().unwrap();
        let field = InitField::random(
            SurfaceSize::new(800, 600),
            &config,
            &mut StdRng::seed_from_u64(3),
        );
        assert_eq!(field.node_count(), 2400);
    }

    #[test]
    fn opacity_falls_off_linearly() {
        assert_eq!(proximity_opacity(0.0, 150.0), 1.0);
        assert!((proximity_opacity(75.0, 150.0) - 0.5).abs() < 1e-6);
        let near_threshold = proximity_opacity(149.999, 150.0);
        assert!(near_threshold > 0.0);
        assert!((near_threshold - 0.0000067).abs() < 1e-6);
    }

    #[test]
    fn connects_only_close_pairs_in_pair_order() {
        let nodes = vec![
            seed_at(0.0, 0.0),
            seed_at(100.0, 0.0),
            seed_at(400.0, 0.0),
            seed_at(0.0, 149.0),
        ];
        let field = InitField::from_nodes(SurfaceSize::new(800, 600), nodes, 150.0);

        let edges: Vec<(usize, usize)> = field
            .graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        // (1, 3) is ~179 apart.
        assert_eq!(edges, vec![(0, 1), (0, 3)]);

        let first = field.graph.edge_references().next().unwrap();
        assert_eq!(first.weight().distance, 100.0);
        assert!((first.weight().opacity - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn exactly_at_threshold_is_not_connected() {
        let nodes = vec![seed_at(0.0, 0.0), seed_at(150.0, 0.0)];
        let field = InitField::from_nodes(SurfaceSize::new(800, 600), nodes, 150.0);
        assert_eq!(field.edge_count(), 0);
    }

    #[test]
    fn random_nodes_respect_config_ranges() {
        let config = FieldConfig::default();
        let size = SurfaceSize::new(800, 600);
        let field = InitField::random(size, &config, &mut StdRng::seed_from_u64(42));

        assert_eq!(field.node_count(), 24);
        for node in field.graph.node_weights() {
            assert!((0.0..=800.0).contains(&node.position.x));
            assert!((0.0..=600.0).contains(&node.position.y));
            assert!((1.0..=3.0).contains(&node.radius));
            assert!(node.velocity.x.abs() <= 0.25);
            assert!(node.velocity.y.abs() <= 0.25);
        }
    }
}
