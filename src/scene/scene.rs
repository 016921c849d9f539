use slotmap::SlotMap;

use crate::scene::node::Node;
use crate::scene::primitive::Primitive;
use crate::scene::transform::Transform;
use crate::scene::NodeHandle;

/// Lifecycle state of a scene entity.
///
/// `Mounted -> Unmounted` is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityState {
    /// Receiving frame updates.
    Mounted,
    /// No further updates; resources released.
    Unmounted,
}

/// Scene mount point.
///
/// Pure data: stores the mounted entities and their transforms. The
/// animation driver addresses entities through [`NodeHandle`]s and never
/// mounts or unmounts anything itself.
#[derive(Default)]
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    /// Mount order, used for iteration.
    pub root_nodes: Vec<NodeHandle>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a new entity at the origin.
    pub fn mount(&mut self, name: &str, primitive: Primitive) -> NodeHandle {
        self.mount_node(Node::new(name, primitive))
    }

    /// Mounts a prepared node.
    pub fn mount_node(&mut self, node: Node) -> NodeHandle {
        log::debug!("Mounting {} '{}'", node.primitive.kind_name(), node.name);
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Unmounts an entity and releases it.
    ///
    /// Returns `false` if the handle was already unmounted.
    pub fn unmount(&mut self, handle: NodeHandle) -> bool {
        let Some(node) = self.nodes.remove(handle) else {
            return false;
        };
        self.root_nodes.retain(|&h| h != handle);
        log::debug!("Unmounted {} '{}'", node.primitive.kind_name(), node.name);
        true
    }

    #[must_use]
    pub fn state(&self, handle: NodeHandle) -> EntityState {
        if self.nodes.contains_key(handle) {
            EntityState::Mounted
        } else {
            EntityState::Unmounted
        }
    }

    #[inline]
    #[must_use]
    pub fn is_mounted(&self, handle: NodeHandle) -> bool {
        self.nodes.contains_key(handle)
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn transform(&self, handle: NodeHandle) -> Option<&Transform> {
        self.nodes.get(handle).map(|node| &node.transform)
    }

    /// Transform handle the animation driver writes into.
    pub fn transform_mut(&mut self, handle: NodeHandle) -> Option<&mut Transform> {
        self.nodes.get_mut(handle).map(|node| &mut node.transform)
    }

    /// Looks up the first mounted node with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.root_nodes
            .iter()
            .copied()
            .find(|&h| self.nodes.get(h).is_some_and(|n| n.name == name))
    }

    /// Iterates mounted entities in mount order.
    pub fn iter_mounted(&self) -> impl Iterator<Item = (NodeHandle, &Node)> {
        self.root_nodes
            .iter()
            .filter_map(move |&h| self.nodes.get(h).map(|node| (h, node)))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Refreshes cached local matrices of all mounted nodes.
    ///
    /// Returns how many were rebuilt.
    pub fn update_matrices(&mut self) -> usize {
        self.nodes
            .values_mut()
            .map(|node| node.transform.update_local_matrix())
            .filter(|&changed| changed)
            .count()
    }
}
