//! 节点定义
//!
//! 节点由图分配的稳定句柄标识，节点值为调用方提供的任意负载

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// 节点 ID（图内唯一，按分配顺序递增，永不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 节点
///
/// 邻接集合只保存节点 ID，不持有其他节点的引用。
/// 集合保持插入顺序，遍历算法依赖这一顺序产生确定的访问序列。
#[derive(Debug, Clone)]
pub struct Node<V> {
    /// 节点 ID
    id: NodeId,
    /// 节点值
    value: V,
    /// 邻接节点 ID 集合（保持插入顺序）
    adjacent: IndexSet<NodeId>,
}

impl<V> Node<V> {
    /// 创建新节点（仅由图分配句柄后调用）
    pub(crate) fn new(id: NodeId, value: V) -> Self {
        Self {
            id,
            value,
            adjacent: IndexSet::new(),
        }
    }

    /// 获取节点 ID
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// 获取节点值
    pub fn value(&self) -> &V {
        &self.value
    }

    /// 获取节点值的可变引用
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// 按插入顺序迭代邻接节点 ID
    pub fn adjacent(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacent.iter().copied()
    }

    /// 获取节点的度（自环计 1）
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// 判断是否与指定节点相邻
    pub fn is_adjacent_to(&self, other: NodeId) -> bool {
        self.adjacent.contains(&other)
    }

    /// 加入邻接关系，返回是否为新增
    pub(crate) fn link(&mut self, other: NodeId) -> bool {
        self.adjacent.insert(other)
    }

    /// 解除邻接关系，返回是否实际移除
    ///
    /// 使用 shift_remove 保持剩余邻接项的插入顺序。
    pub(crate) fn unlink(&mut self, other: NodeId) -> bool {
        self.adjacent.shift_remove(&other)
    }

    /// 取出节点值（移除节点时使用）
    pub(crate) fn into_value(self) -> V {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_basic() {
        let node = Node::new(NodeId::new(1), "A");

        assert_eq!(node.id().as_u64(), 1);
        assert_eq!(*node.value(), "A");
        assert_eq!(node.degree(), 0);
    }

    #[test]
    fn test_node_link_order() {
        let mut node = Node::new(NodeId::new(1), "A");

        assert!(node.link(NodeId::new(3)));
        assert!(node.link(NodeId::new(2)));
        // 重复加入无效果
        assert!(!node.link(NodeId::new(3)));

        // 邻接迭代遵循插入顺序
        let order: Vec<u64> = node.adjacent().map(|id| id.as_u64()).collect();
        assert_eq!(order, vec![3, 2]);
        assert_eq!(node.degree(), 2);
    }

    #[test]
    fn test_node_unlink_keeps_order() {
        let mut node = Node::new(NodeId::new(1), "A");
        node.link(NodeId::new(2));
        node.link(NodeId::new(3));
        node.link(NodeId::new(4));

        assert!(node.unlink(NodeId::new(3)));
        assert!(!node.unlink(NodeId::new(3)));

        let order: Vec<u64> = node.adjacent().map(|id| id.as_u64()).collect();
        assert_eq!(order, vec![2, 4]);
    }

    #[test]
    fn test_node_value_mut() {
        let mut node = Node::new(NodeId::new(1), String::from("A"));
        node.value_mut().push('B');

        assert_eq!(node.value(), "AB");
    }
}
