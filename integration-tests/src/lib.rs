/// Pantheon documents and an in-memory entity store built from them.
pub mod fixtures;
