//! 图数据结构
//!
//! 内存无向图：节点注册表 + 对称邻接集合

use super::node::{Node, NodeId};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// 无向图
///
/// 图拥有全部节点，节点之间通过 ID 句柄互相引用。
/// 注册表保持插入顺序；邻接集合只会包含已注册的节点 ID
/// （移除节点时会清理所有指向它的邻接项）。
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// 节点注册表（保持插入顺序）
    nodes: IndexMap<NodeId, Node<V>>,
    /// 下一个节点 ID
    next_node_id: u64,
}

impl<V> Graph<V> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            next_node_id: 1,
        }
    }

    // ==================== 节点操作 ====================

    /// 添加节点，返回分配的句柄
    ///
    /// 每次调用分配一个新 ID，注册表按 ID 去重，
    /// 同一节点不可能被重复注册。
    pub fn add_vertex(&mut self, value: V) -> NodeId {
        let id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.insert(id, Node::new(id, value));
        trace!("添加顶点 {:?}", id);
        id
    }

    /// 按顺序添加一组节点
    pub fn add_vertices<I>(&mut self, values: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = V>,
    {
        values.into_iter().map(|v| self.add_vertex(v)).collect()
    }

    /// 移除节点，返回其值
    ///
    /// 清理其余所有节点邻接集合中指向该节点的项，
    /// 被移除节点自身的邻接集合随节点一起销毁。
    /// 节点不存在时静默返回 None。
    pub fn remove_vertex(&mut self, id: NodeId) -> Option<V> {
        let node = self.nodes.shift_remove(&id)?;
        for other in self.nodes.values_mut() {
            other.unlink(id);
        }
        debug!("移除顶点 {:?}，清理 {} 条关联边", id, node.degree());
        Some(node.into_value())
    }

    /// 判断节点是否已注册
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// 获取节点
    pub fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(&id)
    }

    /// 获取节点值
    pub fn value(&self, id: NodeId) -> Option<&V> {
        self.nodes.get(&id).map(|n| n.value())
    }

    /// 获取节点值的可变引用
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.nodes.get_mut(&id).map(|n| n.value_mut())
    }

    /// 获取节点数量
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// 判断图是否为空
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 按注册顺序迭代所有节点
    pub fn iter(&self) -> impl Iterator<Item = &Node<V>> {
        self.nodes.values()
    }

    /// 按注册顺序迭代所有节点 ID
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    // ==================== 边操作 ====================

    /// 添加无向边
    ///
    /// 两个端点的邻接集合互相记录对方，对称性由此保证。
    /// 允许自环：add_edge(v, v) 在 v 自身的邻接集合中记录一次。
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        if !self.nodes.contains_key(&a) {
            return Err(Error::VertexNotFound(format!("顶点 {:?} 不存在", a)));
        }
        if !self.nodes.contains_key(&b) {
            return Err(Error::VertexNotFound(format!("顶点 {:?} 不存在", b)));
        }

        if let Some(node) = self.nodes.get_mut(&a) {
            node.link(b);
        }
        if a != b {
            if let Some(node) = self.nodes.get_mut(&b) {
                node.link(a);
            }
        }

        trace!("添加边 {:?} - {:?}", a, b);
        Ok(())
    }

    /// 移除无向边，返回是否实际移除
    ///
    /// 边不存在或端点未注册时静默返回 false。
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        let removed_a = self
            .nodes
            .get_mut(&a)
            .map(|n| n.unlink(b))
            .unwrap_or(false);
        if a == b {
            return removed_a;
        }
        let removed_b = self
            .nodes
            .get_mut(&b)
            .map(|n| n.unlink(a))
            .unwrap_or(false);
        removed_a || removed_b
    }

    /// 判断两点之间是否有边
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes
            .get(&a)
            .map(|n| n.is_adjacent_to(b))
            .unwrap_or(false)
    }

    /// 获取边数量（无向边计一次，自环计一条边）
    pub fn edge_count(&self) -> usize {
        let mut twice = 0;
        for node in self.nodes.values() {
            for neighbor in node.adjacent() {
                // 自环只在自身集合中出现一次，按两个半边计
                if neighbor == node.id() {
                    twice += 2;
                } else {
                    twice += 1;
                }
            }
        }
        twice / 2
    }

    /// 获取节点的度
    pub fn degree(&self, id: NodeId) -> usize {
        self.nodes.get(&id).map(|n| n.degree()).unwrap_or(0)
    }

    // ==================== 邻居查询 ====================

    /// 获取节点的邻居（按邻接插入顺序）
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&id)
            .map(|n| n.adjacent().collect())
            .unwrap_or_default()
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}
