pub mod position_update;
