//! Sorts that keep equal elements in their original order.

pub mod merge;
