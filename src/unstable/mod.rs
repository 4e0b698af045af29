//! Sorts that may reorder equal elements.

pub mod bubble;
pub mod comb;
pub mod gnome;
pub mod heap;
pub mod insertion;
pub mod intro;
pub mod quick;
pub mod selection;
pub mod shell;

// Intentionally slower than the quadratic sorts, only useful as a recursion exercise.
pub mod stooge;
