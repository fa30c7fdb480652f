pub mod components;
pub mod ressources;
pub mod systems;

use crate::{
    event_dispatcher::EventDispatcher,
    init_field::InitField,
    simulator::{
        components::{
            edges::{Connects, Proximity},
            nodes::{Position, Radius, Velocity},
        },
        ressources::{
            events::SimulatorEvent,
            simulator_vars::{ProximityThreshold, RunState, SurfaceSize},
        },
        systems::position_update::UpdateNodePosition,
    },
};
use glam::Vec2;
use log::{debug, info};
use petgraph::visit::EdgeRef;
use specs::shrev::ReaderId;
use specs::{
    Builder, Dispatcher, DispatcherBuilder, Entity, Join, System, World, WorldExt, Write,
};

/// Applies pending [`SimulatorEvent`]s to the simulator ressources.
struct EventManager {
    events: EventDispatcher,
    reader: ReaderId<SimulatorEvent>,
}

impl<'a> System<'a> for EventManager {
    type SystemData = (Write<'a, SurfaceSize>, Write<'a, RunState>);

    fn run(&mut self, (mut surface, mut run_state): Self::SystemData) {
        for event in self.events.read(&mut self.reader) {
            if *run_state == RunState::Stopped {
                break;
            }
            match event {
                SimulatorEvent::Resized { width, height } => {
                    debug!(
                        "Surface resized {}x{} -> {width}x{height}",
                        surface.width, surface.height
                    );
                    *surface = SurfaceSize::new(width, height);
                }
                SimulatorEvent::Paused => *run_state = RunState::Paused,
                SimulatorEvent::Resumed => *run_state = RunState::Running,
                SimulatorEvent::Stopped => {
                    info!("Particle field stopped");
                    *run_state = RunState::Stopped;
                }
            }
        }
    }
}

/// Read-only copy of a node, as returned by [`Simulator::nodes`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

/// Read-only copy of an edge, as returned by [`Simulator::edges`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeState {
    pub from: usize,
    pub to: usize,
    pub distance: f32,
    pub opacity: f32,
}

pub struct Simulator<'a, 'b> {
    pub world: World,
    events: Dispatcher<'a, 'b>,
    dispatcher: Dispatcher<'a, 'b>,
    event_dispatcher: EventDispatcher,
    node_count: usize,
    edge_count: usize,
}

impl<'a, 'b> Simulator<'a, 'b> {
    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::default()
    }

    /// Applies every event sent since the last call.
    pub fn sync_events(&mut self) {
        self.events.dispatch(&self.world);
        self.world.maintain();
    }

    /// Advances every node by one frame.
    ///
    /// Does nothing unless the simulator is [`RunState::Running`].
    pub fn step(&mut self) {
        self.dispatcher.dispatch(&self.world);
        self.world.maintain();
    }

    /// Handle for sending events to this simulator.
    pub fn events(&self) -> &EventDispatcher {
        &self.event_dispatcher
    }

    pub fn run_state(&self) -> RunState {
        *self.world.read_resource::<RunState>()
    }

    pub fn surface_size(&self) -> SurfaceSize {
        *self.world.read_resource::<SurfaceSize>()
    }

    pub fn proximity_threshold(&self) -> f32 {
        self.world.read_resource::<ProximityThreshold>().0
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Current node states, in node index order.
    pub fn nodes(&self) -> Vec<NodeState> {
        let positions = self.world.read_storage::<Position>();
        let velocities = self.world.read_storage::<Velocity>();
        let radii = self.world.read_storage::<Radius>();

        (&positions, &velocities, &radii)
            .join()
            .map(|(position, velocity, radius)| NodeState {
                position: position.0,
                velocity: velocity.0,
                radius: radius.0,
            })
            .collect()
    }

    /// The edge set, in construction order.
    pub fn edges(&self) -> Vec<EdgeState> {
        let connections = self.world.read_storage::<Connects>();
        let proximities = self.world.read_storage::<Proximity>();

        (&connections, &proximities)
            .join()
            .map(|(connects, proximity)| EdgeState {
                from: connects.src.id() as usize,
                to: connects.target.id() as usize,
                distance: proximity.distance,
                opacity: proximity.opacity,
            })
            .collect()
    }
}

/// Builder for `Simulator`
pub struct SimulatorBuilder {
    proximity_threshold: f32,
    events: Option<EventDispatcher>,
}

impl SimulatorBuilder {
    /// Get a Instance of `SimulatorBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Edges are only drawn while their endpoints are closer than this.
    ///
    /// Default: `150.0`
    pub fn proximity_threshold(mut self, threshold: f32) -> Self {
        self.proximity_threshold = threshold;
        self
    }

    /// Listen on an existing event channel instead of a fresh one.
    pub fn events(mut self, events: EventDispatcher) -> Self {
        self.events = Some(events);
        self
    }

    /// Constructs a instance of `Simulator`
    pub fn build<'a, 'b>(self, field: InitField) -> Simulator<'a, 'b> {
        let event_dispatcher = self.events.unwrap_or_default();

        let mut world = World::new();
        let mut events = DispatcherBuilder::new()
            .with(
                EventManager {
                    events: event_dispatcher.clone(),
                    reader: event_dispatcher.register_reader(),
                },
                "event_manager",
                &[],
            )
            .build();
        let mut dispatcher = DispatcherBuilder::new()
            .with(UpdateNodePosition, "update_node_position", &[])
            .build();

        events.setup(&mut world);
        dispatcher.setup(&mut world);
        world.register::<Radius>();
        world.register::<Connects>();
        world.register::<Proximity>();

        world.insert(field.size);
        world.insert(ProximityThreshold(self.proximity_threshold));
        world.insert(RunState::Running);

        let node_count = field.node_count();
        let edge_count = field.edge_count();
        Self::create_entities(&mut world, field);

        Simulator {
            world,
            events,
            dispatcher,
            event_dispatcher,
            node_count,
            edge_count,
        }
    }

    fn create_entities(world: &mut World, field: InitField) {
        // Nodes first, so a node's entity id equals its graph index.
        let node_entities: Vec<Entity> = field
            .graph
            .node_weights()
            .map(|seed| {
                world
                    .create_entity()
                    .with(Position(seed.position))
                    .with(Velocity(seed.velocity))
                    .with(Radius(seed.radius))
                    .build()
            })
            .collect();

        for edge in field.graph.edge_references() {
            world
                .create_entity()
                .with(Connects {
                    src: node_entities[edge.source().index()],
                    target: node_entities[edge.target().index()],
                })
                .with(Proximity {
                    distance: edge.weight().distance,
                    opacity: edge.weight().opacity,
                })
                .build();
        }
    }
}

impl Default for SimulatorBuilder {
    /// Get a Instance of `SimulatorBuilder` with default values
    fn default() -> Self {
        Self {
            proximity_threshold: 150.0,
            events: None,
        }
    }
}
