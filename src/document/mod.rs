//! Document Module - Element registry and parallel presentation arrays.
//!
//! The document manages the page's structural data:
//! - Registry: Index allocation, ID mapping, roles, parents, hit testing
//! - Arrays: Parallel SlotArrays for presentation state
//!
//! # Architecture
//!
//! Elements are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: Hero      (rect=(0,0,80,12), flags=NONE,     transform=None)
//! Index 1: HeroLayer (rect=(4,2,20,6),  flags=NONE,     transform=Shifted)
//! Index 2: Reveal    (rect=(0,14,80,8), flags=REVEALED, transform=None)
//! ```
//!
//! The host registers its laid-out page once, behaviors look elements up
//! by role, and a renderer reads the arrays reactively. Each cell is a
//! stable Slot, so deriveds only re-run when the indices they read change.

pub mod arrays;
mod registry;

pub use registry::*;
