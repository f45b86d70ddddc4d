/// Role a node plays in the generated scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
	/// Plain transform node.
	Node,
	/// Mesh instance.
	Mesh,
	/// Skeleton root.
	Skeleton,
	/// Geometry helper retained via `fbx/allow_geometry_helper_nodes`.
	HelperGeometry,
	/// Camera.
	Camera,
	/// Light.
	Light,
}

/// One node of the generated scene tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SceneNode {
	/// Node name as reported by the document.
	pub name: String,
	/// Node role.
	pub kind: NodeKind,
	/// Child nodes in document order.
	pub children: Vec<SceneNode>,
}

impl SceneNode {
	/// Leaf node.
	pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
		SceneNode {
			name: name.into(),
			kind,
			children: Vec::new(),
		}
	}

	/// Node with children attached.
	pub fn with_children(name: impl Into<String>, kind: NodeKind, children: Vec<SceneNode>) -> Self {
		SceneNode {
			name: name.into(),
			kind,
			children,
		}
	}

	/// Count of this node plus all descendants.
	pub fn node_count(&self) -> usize {
		1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
	}

	/// Depth-first walk, calling `visit` with each node and its depth.
	pub fn walk(&self, visit: &mut dyn FnMut(&SceneNode, usize)) {
		self.walk_at(visit, 0);
	}

	fn walk_at(&self, visit: &mut dyn FnMut(&SceneNode, usize), depth: usize) {
		visit(self, depth);
		for child in &self.children {
			child.walk_at(visit, depth + 1);
		}
	}
}

/// Generated scene tree; ownership transfers to the caller on import success.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SceneGraph {
	/// Root node of the hierarchy.
	pub root: SceneNode,
}

impl SceneGraph {
	/// Graph rooted at `root`.
	pub fn new(root: SceneNode) -> Self {
		SceneGraph { root }
	}

	/// Total node count including the root.
	pub fn node_count(&self) -> usize {
		self.root.node_count()
	}
}
