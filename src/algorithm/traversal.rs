//! 图遍历算法
//!
//! 深度优先（递归与迭代）和广度优先遍历

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use std::collections::{HashSet, VecDeque};
use tracing::trace;

/// 遍历器
///
/// 借用图执行遍历，返回按访问顺序排列的节点值序列。
/// 遍历范围由连通性决定：从起点可达的节点都会被访问，
/// 访问过的节点通过 visited 集合去重，环不会导致重复访问。
pub struct Traverser<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V> Traverser<'a, V> {
    /// 创建遍历器
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self { graph }
    }

    /// 校验起始顶点已注册
    ///
    /// 四个遍历入口共用同一校验，未注册的句柄统一返回类型化错误。
    fn check_start(&self, start: NodeId) -> Result<()> {
        if self.graph.contains(start) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(format!(
                "起始顶点 {:?} 不在图中",
                start
            )))
        }
    }

    /// 深度优先遍历（递归）
    ///
    /// 访问节点时标记并记录其值，再按邻接插入顺序递归访问未访问的邻居。
    pub fn depth_first(&self, start: NodeId) -> Result<Vec<&'a V>> {
        self.check_start(start)?;
        trace!("递归 DFS，起点 {:?}", start);

        let mut visited = HashSet::new();
        let mut result = Vec::new();
        self.visit(start, &mut visited, &mut result);
        Ok(result)
    }

    fn visit(&self, current: NodeId, visited: &mut HashSet<NodeId>, result: &mut Vec<&'a V>) {
        visited.insert(current);
        if let Some(node) = self.graph.node(current) {
            result.push(node.value());
            for neighbor in node.adjacent() {
                if !visited.contains(&neighbor) {
                    self.visit(neighbor, visited, result);
                }
            }
        }
    }

    /// 深度优先遍历（迭代）
    ///
    /// 显式 LIFO 栈，入栈时即标记访问。与递归实现可达集合相同，
    /// 但访问顺序可能不同：两者都是合法的 DFS 序。
    pub fn depth_first_iterative(&self, start: NodeId) -> Result<Vec<&'a V>> {
        self.check_start(start)?;
        trace!("迭代 DFS，起点 {:?}", start);

        let mut visited = HashSet::new();
        let mut stack = vec![start];
        let mut result = Vec::new();
        visited.insert(start);

        while let Some(current) = stack.pop() {
            if let Some(node) = self.graph.node(current) {
                result.push(node.value());
                for neighbor in node.adjacent() {
                    if !visited.contains(&neighbor) {
                        visited.insert(neighbor);
                        stack.push(neighbor);
                    }
                }
            }
        }

        Ok(result)
    }

    /// 广度优先遍历
    ///
    /// FIFO 队列逐层扩展，产生按与起点距离非递减排列的层序序列。
    pub fn breadth_first(&self, start: NodeId) -> Result<Vec<&'a V>> {
        self.check_start(start)?;
        trace!("BFS，起点 {:?}", start);

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut result = Vec::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if let Some(node) = self.graph.node(current) {
                result.push(node.value());
                for neighbor in node.adjacent() {
                    if !visited.contains(&neighbor) {
                        visited.insert(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        Ok(result)
    }
}
