//! Borrowed view of the workspace handed to preconditions and generators.

use lab_catalog::ExperimentDescriptor;
use lab_core::{Rect, ToolKind};
use lab_graph::{ConnectionGraph, PlacedComponent};

#[derive(Debug, Clone, Copy)]
pub struct RunInput<'a> {
    pub experiment: &'a ExperimentDescriptor,
    pub components: &'a [PlacedComponent],
    pub graph: &'a ConnectionGraph,
    /// Canvas bounds in canvas coordinates; the origin is the top-left corner.
    pub canvas: Rect,
}

impl<'a> RunInput<'a> {
    /// First placed component of `kind`, in placement order.
    pub fn first_of(&self, kind: &ToolKind) -> Option<&'a PlacedComponent> {
        self.components.iter().find(|c| &c.kind == kind)
    }

    pub fn has_kind(&self, kind: &ToolKind) -> bool {
        self.first_of(kind).is_some()
    }
}
