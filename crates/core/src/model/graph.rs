//! In-memory declaration tree.
//!
//! Hosts that already own a symbol graph implement [`DeclarationGraph`] directly;
//! this tree is the reference implementation used by the CLI and the tests.

use modscope_api::models::{DeclarationId, DeclarationKind};
use modscope_plugin::{ContainerSource, DeclarationGraph};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

#[derive(Debug, Clone)]
pub struct DeclarationNode {
    pub name: String,
    pub kind: DeclarationKind,
    pub source: Option<ContainerSource>,
}

/// Ownership tree of declarations. Edges point from parent to child.
#[derive(Debug, Default)]
pub struct DeclarationTree {
    topology: DiGraph<DeclarationNode, ()>,
}

fn to_index(id: DeclarationId) -> NodeIndex {
    NodeIndex::new(id.0 as usize)
}

fn to_id(idx: NodeIndex) -> DeclarationId {
    DeclarationId(idx.index() as u32)
}

impl DeclarationTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, name: impl Into<String>, kind: DeclarationKind) -> DeclarationId {
        let idx = self.topology.add_node(DeclarationNode {
            name: name.into(),
            kind,
            source: None,
        });
        to_id(idx)
    }

    /// Add a declaration owned by `parent`.
    ///
    /// # Panics
    /// If `parent` was not created by this tree.
    pub fn add_child(
        &mut self,
        parent: DeclarationId,
        name: impl Into<String>,
        kind: DeclarationKind,
    ) -> DeclarationId {
        let child = self.add_root(name, kind);
        self.topology.add_edge(to_index(parent), to_index(child), ());
        child
    }

    /// Record the binary source a declaration was deserialized from.
    /// Returns the previous source, if any.
    pub fn set_source(
        &mut self,
        decl: DeclarationId,
        source: ContainerSource,
    ) -> Option<ContainerSource> {
        self.topology
            .node_weight_mut(to_index(decl))
            .and_then(|node| node.source.replace(source))
    }

    pub fn node(&self, decl: DeclarationId) -> Option<&DeclarationNode> {
        self.topology.node_weight(to_index(decl))
    }

    pub fn len(&self) -> usize {
        self.topology.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.topology.node_count() == 0
    }
}

impl DeclarationGraph for DeclarationTree {
    fn kind(&self, decl: DeclarationId) -> Option<DeclarationKind> {
        self.node(decl).map(|node| node.kind)
    }

    fn parent(&self, decl: DeclarationId) -> Option<DeclarationId> {
        if self.topology.node_weight(to_index(decl)).is_none() {
            return None;
        }
        self.topology
            .neighbors_directed(to_index(decl), Direction::Incoming)
            .next()
            .map(to_id)
    }

    fn source(&self, decl: DeclarationId) -> Option<&ContainerSource> {
        self.node(decl).and_then(|node| node.source.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modscope_plugin::AnnotatedSource;

    #[test]
    fn test_parent_chain() {
        let mut tree = DeclarationTree::new();
        let pkg = tree.add_root("org.example", DeclarationKind::Package);
        let class = tree.add_child(pkg, "Foo", DeclarationKind::Class);
        let method = tree.add_child(class, "bar", DeclarationKind::Function);

        assert_eq!(tree.parent(method), Some(class));
        assert_eq!(tree.parent(class), Some(pkg));
        assert_eq!(tree.parent(pkg), None);
        assert_eq!(tree.node(method).map(|n| n.name.as_str()), Some("bar"));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_nearest_container_is_inclusive() {
        let mut tree = DeclarationTree::new();
        let module = tree.add_root("app", DeclarationKind::Module);
        let pkg = tree.add_child(module, "org", DeclarationKind::Package);
        let class = tree.add_child(pkg, "Foo", DeclarationKind::Class);
        let prop = tree.add_child(class, "x", DeclarationKind::Property);

        assert_eq!(tree.nearest_container(prop), Some(class));
        assert_eq!(tree.nearest_container(class), Some(class));
        assert_eq!(tree.nearest_container(module), None);
        assert_eq!(tree.nearest_container(DeclarationId(99)), None);
    }

    #[test]
    fn test_set_source_replaces_previous() {
        let mut tree = DeclarationTree::new();
        let pkg = tree.add_root("js", DeclarationKind::Package);
        let first = ContainerSource::Annotated(AnnotatedSource::default());

        assert!(tree.set_source(pkg, first).is_none());
        let previous = tree.set_source(pkg, ContainerSource::Annotated(AnnotatedSource::default()));
        assert!(previous.is_some());
        assert!(tree.source(pkg).is_some());
        assert!(tree.set_source(DeclarationId(42), ContainerSource::Annotated(AnnotatedSource::default())).is_none());
    }
}
