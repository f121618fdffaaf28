//! 最短路径算法
//!
//! 基于 BFS 的无权最短路径查找

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// 路径结果
///
/// 节点句柄与节点值按起点到终点的顺序平行排列。
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<'a, V> {
    /// 路径上的节点序列
    pub nodes: Vec<NodeId>,
    /// 路径上的节点值序列
    pub values: Vec<&'a V>,
    /// 路径长度（边数）
    pub length: usize,
}

/// 路径查找器
pub struct PathFinder<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V> PathFinder<'a, V> {
    /// 创建路径查找器
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self { graph }
    }

    /// 校验顶点已注册
    fn check_vertex(&self, id: NodeId) -> Result<()> {
        if self.graph.contains(id) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(format!("顶点 {:?} 不在图中", id)))
        }
    }

    /// BFS 最短路径查找
    ///
    /// 返回一条边数最少的路径，含两个端点。
    /// 前驱映射以节点 ID 为键：路径重构只依赖节点身份，
    /// 值相同的不同节点互不干扰。
    /// 终点不可达时返回 Ok(None)。
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> Result<Option<PathResult<'a, V>>> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;

        // 起点即终点：无需遍历
        if start == end {
            return Ok(Some(self.singleton(start)));
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut parent: HashMap<NodeId, NodeId> = HashMap::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if let Some(node) = self.graph.node(current) {
                for neighbor in node.adjacent() {
                    if !visited.contains(&neighbor) {
                        visited.insert(neighbor);
                        parent.insert(neighbor, current);
                        queue.push_back(neighbor);

                        if neighbor == end {
                            // 重构路径
                            return Ok(Some(self.reconstruct_path(start, end, &parent)));
                        }
                    }
                }
            }
        }

        debug!("{:?} 到 {:?} 不可达", start, end);
        Ok(None)
    }

    /// 重构路径：从终点沿前驱映射回溯到起点，再反转
    fn reconstruct_path(
        &self,
        start: NodeId,
        end: NodeId,
        parent: &HashMap<NodeId, NodeId>,
    ) -> PathResult<'a, V> {
        let mut nodes = vec![end];
        let mut current = end;

        while current != start {
            if let Some(&prev) = parent.get(&current) {
                nodes.push(prev);
                current = prev;
            } else {
                break;
            }
        }

        nodes.reverse();

        let values = nodes
            .iter()
            .filter_map(|&id| self.graph.value(id))
            .collect();

        PathResult {
            length: nodes.len() - 1,
            nodes,
            values,
        }
    }

    /// 单点路径
    fn singleton(&self, id: NodeId) -> PathResult<'a, V> {
        PathResult {
            nodes: vec![id],
            values: self.graph.value(id).into_iter().collect(),
            length: 0,
        }
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, start: NodeId, end: NodeId) -> Result<bool> {
        Ok(self.shortest_path(start, end)?.is_some())
    }
}
