//! Common, shared types.

pub mod body;
pub mod kind;
pub mod lanes;
pub mod layers;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;
