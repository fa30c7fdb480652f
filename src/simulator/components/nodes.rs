//! Components which make up a node

use glam::Vec2;
use specs::{Component, VecStorage};

/// The position of a node, in surface coordinates.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
#[storage(VecStorage)]
pub struct Position(pub Vec2);

/// How far a node moves per frame.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
#[storage(VecStorage)]
pub struct Velocity(pub Vec2);

/// The drawn radius of a node.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
#[storage(VecStorage)]
pub struct Radius(pub f32);

impl Default for Radius {
    fn default() -> Self {
        Self(1.0)
    }
}
