// Composition root for the attendance service.
//
// Responsibilities
// - Hold the injected ports in a cloneable application state.
// - Assemble the HTTP router and the GraphQL schema from the use case adapters.
// - Map application errors onto HTTP responses.

pub mod graphql;
pub mod http;
pub mod responses;
pub mod state;
