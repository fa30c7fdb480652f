pub mod events;
pub mod simulator_vars;
