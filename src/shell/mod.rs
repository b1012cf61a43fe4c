// Composition root for the attendance service.
//
// - Read config from the environment and the attendance config file.
// - Pick the ledger implementation.
// - Wire the clock handler into the HTTP and GraphQL inbound adapters.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
