pub mod demo;
pub mod error;
pub mod linkedlist;
pub mod logger;
pub mod parse;

pub use error::{ListError, Result};
pub use linkedlist::{destroy, has_cycle, render, reverse, try_reverse, Node, NodeFactory};
