pub mod encoder;
mod record;
mod schema_builder;

pub use record::{RawValue, Record};
pub use schema_builder::SchemaBuilder;
