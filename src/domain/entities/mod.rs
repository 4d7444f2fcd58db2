//! Domain Entities
//!
//! The immutable records that make up a built app. Records are created only
//! by the builder; after `build()` they expose read-only accessors.

mod app;
mod policy;
mod project;
mod scene;

pub use app::{App, RouteEntry};
pub use policy::Policy;
pub use project::{Project, ROOT_ROUTE};
pub use scene::Scene;
