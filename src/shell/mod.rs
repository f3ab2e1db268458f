// Composition root for the scheduling service.
//
// Responsibilities
// - Read config from the environment.
// - Pick the calendar adapter and wire it into the engine and guard.
// - Expose the use cases over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
