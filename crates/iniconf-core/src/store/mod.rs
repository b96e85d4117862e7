//! The configuration store: an ordered section/key/value map with typed
//! accessors, plus lightweight views bound to a single section.
//!
//! See [`map::Store`] for the main type.

pub mod map;
pub mod view;

pub use map::Store;
pub use view::{SectionView, SectionViewMut};
