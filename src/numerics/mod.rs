// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod codec;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod error;
    pub mod point;
    pub mod tolerance;
    pub mod traits;
    pub mod vector;

    pub(crate) mod components;
}
