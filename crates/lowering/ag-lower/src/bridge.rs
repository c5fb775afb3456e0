//! Freezing lowered lists into arrays owned by the AST

use crate::{AstGen, Lower};
use ag_arena::ArrayRef;
use ag_ast::ArrayElement;

impl AstGen<'_> {
    /// Moves `items` into one contiguous array owned by the AST, keeping
    /// their order
    pub fn bridged_array<T, I>(&mut self, items: I) -> ArrayRef<T>
    where
        T: ArrayElement,
        I: IntoIterator<Item = T>,
    {
        self.ast.alloc_array(items)
    }

    /// Lowers every node in order and bridges the results
    pub fn lower_list<'node, N, I>(&mut self, nodes: I) -> ArrayRef<N::Output>
    where
        N: Lower + 'node,
        N::Output: ArrayElement,
        I: IntoIterator<Item = &'node N>,
    {
        // Lowering allocates into the same AST, so the results are collected
        // before the array is handed over.
        let lowered: Vec<_> = nodes.into_iter().map(|node| node.lower(self)).collect();
        self.bridged_array(lowered)
    }
}
