//! Named collections of acres: the result type of every traversal, plus
//! the universal set.

pub mod acre_set;
pub mod all_acres;

pub use acre_set::{AcreSet, InMemoryAcreSet};
pub use all_acres::AllAcresSet;
