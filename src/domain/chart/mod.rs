//! Chart aggregate: the drag-to-zoom engine and its axis bound service.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
