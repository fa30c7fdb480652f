//! Components which make up an edge

use specs::{Component, Entity, VecStorage};

/// An edge connects exactly two nodes.
#[derive(Component, Clone, Copy, Debug)]
#[storage(VecStorage)]
pub struct Connects {
    pub src: Entity,
    pub target: Entity,
}

/// Distance and opacity of an edge, cached from the initial node positions.
///
/// Never recomputed, even when the endpoints drift apart.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
#[storage(VecStorage)]
pub struct Proximity {
    pub distance: f32,
    pub opacity: f32,
}
