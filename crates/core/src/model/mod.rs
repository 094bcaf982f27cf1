pub mod graph;
pub mod strings;

pub use graph::{DeclarationNode, DeclarationTree};
pub use strings::{StringTable, StringTableBuilder};
