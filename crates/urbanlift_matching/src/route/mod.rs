pub mod route_sequencer;
pub mod sequenced_route;
