//=========================================================================
// Transform Stack
//=========================================================================
//
// Hierarchical model transform with scoped save/restore.
//
// Architecture:
//   root (camera view) ─ scope() ─► TransformScope ─ scope() ─► ...
//                                        │
//                                        └─ Drop → pop (parent restored)
//
// Composition is right-multiplication: the call issued last applies
// closest to the object, so a subtree is written outermost-first.
//
// Enter/exit pairing is owned by `TransformScope`. There is no public
// pop, which makes an unbalanced traversal unrepresentable.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::ops::{Deref, DerefMut};

use glam::{Mat4, Vec3};

//=== Axis ================================================================

/// Principal rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector for the axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }
}

//=== TransformStack ======================================================

/// Stack of composed model transforms.
///
/// The bottom entry is the root (usually the camera view matrix). It is
/// never popped; every other entry belongs to a live [`TransformScope`].
///
/// # Example
///
/// ```
/// use glam::Vec3;
/// use rotor_city::core::transform::{Axis, TransformStack};
///
/// let mut stack = TransformStack::new();
/// {
///     let mut part = stack.scope();
///     part.translate(Vec3::new(0.5, 3.75, 0.0));
///     part.rotate(Axis::Y, 90.0);
///     // draw with part.current()
/// }
/// assert_eq!(stack.depth(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TransformStack {
    stack: Vec<Mat4>,
}

impl TransformStack {
    //--- Construction -----------------------------------------------------

    /// Creates a stack whose root is the identity matrix.
    pub fn new() -> Self {
        Self::with_root(Mat4::IDENTITY)
    }

    /// Creates a stack with the given root matrix.
    pub fn with_root(root: Mat4) -> Self {
        let mut stack = Vec::with_capacity(16);
        stack.push(root);
        Self { stack }
    }

    /// Replaces the root matrix.
    ///
    /// # Panics
    ///
    /// Panics if called while a scope is open.
    pub fn load_root(&mut self, root: Mat4) {
        assert_eq!(
            self.stack.len(),
            1,
            "load_root called with {} open scope(s)",
            self.stack.len() - 1
        );
        self.stack[0] = root;
    }

    //--- Scoping ----------------------------------------------------------

    /// Enters a scope: duplicates the current matrix and pushes it.
    ///
    /// The returned guard derefs to the stack and pops on drop.
    pub fn scope(&mut self) -> TransformScope<'_> {
        self.enter_scope();
        TransformScope { stack: self }
    }

    /// Runs `body` inside a fresh scope.
    pub fn with_scope<R>(&mut self, body: impl FnOnce(&mut TransformStack) -> R) -> R {
        let mut scope = self.scope();
        body(&mut scope)
    }

    fn enter_scope(&mut self) {
        let top = self.current();
        self.stack.push(top);
    }

    fn exit_scope(&mut self) {
        assert!(self.stack.len() > 1, "transform scope exit without matching enter");
        self.stack.pop();
    }

    //--- Composition ------------------------------------------------------

    /// Right-multiplies the current matrix by `matrix`.
    pub fn multiply(&mut self, matrix: Mat4) {
        let top = self.top_mut();
        *top = *top * matrix;
    }

    /// Applies a (possibly non-uniform) scale.
    pub fn scale(&mut self, factors: Vec3) {
        self.multiply(Mat4::from_scale(factors));
    }

    /// Applies a rotation of `degrees` about `axis`.
    pub fn rotate(&mut self, axis: Axis, degrees: f32) {
        self.multiply(Mat4::from_axis_angle(axis.unit(), degrees.to_radians()));
    }

    /// Applies a translation.
    pub fn translate(&mut self, offset: Vec3) {
        self.multiply(Mat4::from_translation(offset));
    }

    //--- Queries ----------------------------------------------------------

    /// Current composed matrix (the top of the stack).
    pub fn current(&self) -> Mat4 {
        self.stack[self.stack.len() - 1]
    }

    /// Number of entries, root included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn top_mut(&mut self) -> &mut Mat4 {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

//=== TransformScope ======================================================

/// RAII guard for one level of the transform stack.
///
/// Created by [`TransformStack::scope`]. Dropping it restores the parent
/// transform, including on early return and unwinding.
pub struct TransformScope<'a> {
    stack: &'a mut TransformStack,
}

impl Deref for TransformScope<'_> {
    type Target = TransformStack;

    fn deref(&self) -> &TransformStack {
        self.stack
    }
}

impl DerefMut for TransformScope<'_> {
    fn deref_mut(&mut self) -> &mut TransformStack {
        self.stack
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        self.stack.exit_scope();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Mat4, b: Mat4) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    //=====================================================================
    // Scoping
    //=====================================================================

    #[test]
    fn new_stack_has_identity_root() {
        let stack = TransformStack::new();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }

    #[test]
    fn scope_duplicates_current_matrix() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(1.0, 2.0, 3.0));
        let before = stack.current();

        let scope = stack.scope();
        assert_eq!(scope.depth(), 2);
        assert_eq!(scope.current(), before);
    }

    #[test]
    fn dropping_scope_restores_parent() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(1.0, 0.0, 0.0));
        let parent = stack.current();

        {
            let mut scope = stack.scope();
            scope.rotate(Axis::Y, 45.0);
            scope.scale(Vec3::splat(3.0));
            assert_ne!(scope.current(), parent);
        }

        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), parent);
    }

    #[test]
    fn nested_scopes_unwind_in_order() {
        let mut stack = TransformStack::new();

        {
            let mut outer = stack.scope();
            outer.translate(Vec3::X);
            let outer_matrix = outer.current();

            {
                let mut inner = outer.scope();
                inner.translate(Vec3::Y);
                assert_eq!(inner.depth(), 3);
            }

            assert_eq!(outer.depth(), 2);
            assert_eq!(outer.current(), outer_matrix);
        }

        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }

    #[test]
    fn with_scope_is_balanced() {
        let mut stack = TransformStack::new();
        let inner = stack.with_scope(|s| {
            s.translate(Vec3::new(0.0, 5.0, 0.0));
            s.current()
        });

        assert_eq!(inner, Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0)));
        assert_eq!(stack.current(), Mat4::IDENTITY);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn scope_is_released_on_unwind() {
        let mut stack = TransformStack::new();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut scope = stack.scope();
            scope.translate(Vec3::Z);
            panic!("draw failed");
        }));

        assert!(result.is_err());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }

    #[test]
    #[should_panic(expected = "transform scope exit without matching enter")]
    fn exit_without_enter_fails_fast() {
        let mut stack = TransformStack::new();
        stack.exit_scope();
    }

    #[test]
    #[should_panic(expected = "load_root called")]
    fn load_root_inside_scope_fails_fast() {
        let mut stack = TransformStack::new();
        let mut scope = stack.scope();
        scope.load_root(Mat4::IDENTITY);
    }

    //=====================================================================
    // Composition
    //=====================================================================

    #[test]
    fn later_calls_apply_closer_to_object() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(10.0, 0.0, 0.0));
        stack.scale(Vec3::splat(2.0));

        // Scale first, then translate.
        let p = stack.current().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(12.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn rotate_uses_degrees() {
        let mut stack = TransformStack::new();
        stack.rotate(Axis::Y, 90.0);

        let p = stack.current().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5));
    }

    #[test]
    fn rotate_about_each_axis() {
        let mut stack = TransformStack::new();
        stack.rotate(Axis::Z, 90.0);
        let p = stack.current().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::Y, 1e-5));

        let mut stack = TransformStack::new();
        stack.rotate(Axis::X, 90.0);
        let p = stack.current().transform_point3(Vec3::Y);
        assert!(p.abs_diff_eq(Vec3::Z, 1e-5));
    }

    #[test]
    fn root_is_kept_under_composition() {
        let view = Mat4::look_at_rh(Vec3::new(2.0, 1.2, 1.0), Vec3::new(0.0, 0.6, 0.0), Vec3::Y);
        let mut stack = TransformStack::with_root(view);
        {
            let mut scope = stack.scope();
            scope.translate(Vec3::ONE);
            assert!(approx(scope.current(), view * Mat4::from_translation(Vec3::ONE)));
        }
        assert_eq!(stack.current(), view);
    }

    #[test]
    fn load_root_replaces_bottom_entry() {
        let mut stack = TransformStack::new();
        let root = Mat4::from_scale(Vec3::splat(0.5));
        stack.load_root(root);
        assert_eq!(stack.current(), root);
        assert_eq!(stack.depth(), 1);
    }
}
