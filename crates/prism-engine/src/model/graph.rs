use std::rc::Rc;

use glam::{Mat4, Vec3};

use crate::light::Light;

use super::Shape;

/// A child of a [`Model`].
#[derive(Debug, Clone)]
pub enum Node {
    Model(Model),
    Shape(Rc<Shape>),
    Light(Light),
}

/// A transform node in the scene graph.
///
/// Lights declared in a model light every shape in that model and in its
/// descendants.
#[derive(Debug, Clone)]
pub struct Model {
    pub transform: Mat4,
    children: Vec<Node>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    pub fn new() -> Self {
        Self {
            transform: Mat4::IDENTITY,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Appends a child model and returns it for further building.
    pub fn add_model(&mut self, model: Model) -> &mut Model {
        self.children.push(Node::Model(model));
        match self.children.last_mut() {
            Some(Node::Model(m)) => m,
            _ => unreachable!("just pushed a model"),
        }
    }

    pub fn add_shape(&mut self, shape: Rc<Shape>) -> &mut Self {
        self.children.push(Node::Shape(shape));
        self
    }

    pub fn add_light(&mut self, light: Light) -> &mut Self {
        self.children.push(Node::Light(light));
        self
    }

    /// Removes every placement of `shape` (by identity) in this subtree.
    ///
    /// Returns how many placements were removed.
    pub fn remove_shape(&mut self, shape: &Rc<Shape>) -> usize {
        let before = self.children.len();
        self.children
            .retain(|node| !matches!(node, Node::Shape(s) if Rc::ptr_eq(s, shape)));
        let mut removed = before - self.children.len();
        for node in &mut self.children {
            if let Node::Model(child) = node {
                removed += child.remove_shape(shape);
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    // ── transform helpers (applied after the current transform) ──────────

    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        self.transform = Mat4::from_translation(offset) * self.transform;
        self
    }

    pub fn scale(&mut self, factor: Vec3) -> &mut Self {
        self.transform = Mat4::from_scale(factor) * self.transform;
        self
    }

    pub fn rotate_x(&mut self, radians: f32) -> &mut Self {
        self.transform = Mat4::from_rotation_x(radians) * self.transform;
        self
    }

    pub fn rotate_y(&mut self, radians: f32) -> &mut Self {
        self.transform = Mat4::from_rotation_y(radians) * self.transform;
        self
    }

    pub fn rotate_z(&mut self, radians: f32) -> &mut Self {
        self.transform = Mat4::from_rotation_z(radians) * self.transform;
        self
    }

    // ── traversal ─────────────────────────────────────────────────────────

    /// Walks the tree depth-first.
    ///
    /// For each model, `light_fn` runs first for every light it declares (with
    /// the model's accumulated world transform); its results join the light
    /// scope. Then, in child order, `shape_fn` runs for every shape with the
    /// lights in scope and `world * shape.transform`, and child models recurse.
    pub fn each_renderable<L, FL, FS>(&self, mut light_fn: FL, mut shape_fn: FS)
    where
        FL: FnMut(&Light, &Mat4) -> L,
        FS: FnMut(&Rc<Shape>, &[L], &Mat4),
    {
        let mut scope = Vec::new();
        self.walk(&Mat4::IDENTITY, &mut scope, &mut light_fn, &mut shape_fn);
    }

    fn walk<L, FL, FS>(&self, parent: &Mat4, scope: &mut Vec<L>, light_fn: &mut FL, shape_fn: &mut FS)
    where
        FL: FnMut(&Light, &Mat4) -> L,
        FS: FnMut(&Rc<Shape>, &[L], &Mat4),
    {
        let world = *parent * self.transform;
        let scope_len = scope.len();

        for node in &self.children {
            if let Node::Light(light) = node {
                scope.push(light_fn(light, &world));
            }
        }

        for node in &self.children {
            match node {
                Node::Shape(shape) => shape_fn(shape, scope, &(world * shape.transform)),
                Node::Model(child) => child.walk(&world, scope, light_fn, shape_fn),
                Node::Light(_) => {}
            }
        }

        scope.truncate(scope_len);
    }
}
