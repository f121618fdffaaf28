//! MeshGraph - 轻量级内存无向图库
//!
//! 面向小规模关系建模场景的内存无向图，支持：
//! - 顶点/边的动态增删
//! - 深度优先遍历（递归与迭代两种实现）
//! - 广度优先遍历
//! - 无权最短路径查找（基于 BFS）

pub mod algorithm;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{PathFinder, PathResult, Traverser};
pub use error::{Error, Result};
pub use graph::{Graph, Node, NodeId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
