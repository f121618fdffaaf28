//! 图算法模块
//!
//! 包含图遍历和最短路径算法

mod shortest_path;
mod traversal;

pub use shortest_path::{PathFinder, PathResult};
pub use traversal::Traverser;
