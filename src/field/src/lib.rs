pub mod config;
pub mod particle;
pub mod pfield;

pub use config::FieldConfig;
pub use pfield::{link_alpha, particle_count, PField};

pub type V2 = protocol::V2;
