//! Infrastructure implementations.
//!
//! Contains the catalogue port and its PokeAPI adapter.

pub mod endpoints;
pub mod pokeapi;
pub mod ports;
pub mod settings;
