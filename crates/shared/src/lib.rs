//! PokeExplorer Shared - Wire schemas for the remote catalogue API
//!
//! One explicit type per endpoint response. Payloads are type-narrowed here
//! before anything reaches the domain layer.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain crate
//! 2. **No business logic** - Shapes and their narrowing into domain entities
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod responses;

pub use responses::{
    AbilityName, AbilitySlot, CategoryEntrySlot, CategoryResponse, EntryLink, EntryResponse,
    NamedResource, NamedResourceList, SpritesPayload, TypeName, TypeSlot,
};
