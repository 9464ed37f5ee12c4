//! Ports the domain layer calls out through

mod reaction_handler;

pub use reaction_handler::ReactionHandler;
