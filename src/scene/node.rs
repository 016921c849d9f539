use crate::scene::primitive::Primitive;
use crate::scene::transform::Transform;

/// A mounted scene entity.
///
/// Holds the transform the animation driver writes into and the primitive
/// description the host renders. Lifecycle is owned by
/// [`Scene`](crate::scene::Scene): a node exists exactly while it is mounted.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    /// Hot data written every frame
    pub transform: Transform,
    pub primitive: Primitive,
    pub visible: bool,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>, primitive: Primitive) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
            primitive,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}
