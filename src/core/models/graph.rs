//! Directed graph of course prerequisites
//!
//! Nodes and edges are stored as explicit collections. The relation is built
//! from several sources (requirement chains, numbering heuristics, catalogs),
//! so it is not guaranteed to be acyclic; [`PrerequisiteGraph::find_cycle`]
//! and [`PrerequisiteGraph::topological_order`] make that checkable.

use super::CourseId;
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};

/// Where a prerequisite edge came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeOrigin {
    /// An `A & B` chain in the requirements document
    Explicit,
    /// Close course numbers within one department
    Inferred,
    /// The `prerequisites` column of a course catalog
    Catalog,
}

/// A single prerequisite → dependent edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrerequisiteEdge {
    /// Course that must be taken first
    pub prerequisite: CourseId,
    /// Course that requires it
    pub dependent: CourseId,
    /// Source of this edge
    pub origin: EdgeOrigin,
}

/// Prerequisite relation over canonical course ids
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteGraph {
    nodes: Vec<CourseId>,
    edges: Vec<PrerequisiteEdge>,
    node_index: HashSet<CourseId>,
    edge_index: HashSet<(CourseId, CourseId)>,
}

impl PrerequisiteGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course node (no-op if present)
    pub fn add_course(&mut self, course: &CourseId) {
        if self.node_index.insert(course.clone()) {
            self.nodes.push(course.clone());
        }
    }

    /// Record that `prerequisite` must precede `dependent`.
    ///
    /// Both nodes are added if missing. Returns `false` when the edge already
    /// existed, whatever its origin; the first origin recorded is kept.
    pub fn add_prerequisite(
        &mut self,
        dependent: &CourseId,
        prerequisite: &CourseId,
        origin: EdgeOrigin,
    ) -> bool {
        self.add_course(dependent);
        self.add_course(prerequisite);

        let key = (prerequisite.clone(), dependent.clone());
        if !self.edge_index.insert(key) {
            return false;
        }
        self.edges.push(PrerequisiteEdge {
            prerequisite: prerequisite.clone(),
            dependent: dependent.clone(),
            origin,
        });
        true
    }

    /// Returns `true` if the edge `prerequisite → dependent` exists
    #[must_use]
    pub fn has_edge(&self, prerequisite: &str, dependent: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.prerequisite.as_str() == prerequisite && e.dependent.as_str() == dependent)
    }

    /// The edge `prerequisite → dependent`, if present
    #[must_use]
    pub fn edge(&self, prerequisite: &str, dependent: &str) -> Option<&PrerequisiteEdge> {
        self.edges
            .iter()
            .find(|e| e.prerequisite.as_str() == prerequisite && e.dependent.as_str() == dependent)
    }

    /// Prerequisites of a course, in insertion order
    #[must_use]
    pub fn prerequisites_of(&self, course: &str) -> Vec<CourseId> {
        self.edges
            .iter()
            .filter(|e| e.dependent.as_str() == course)
            .map(|e| e.prerequisite.clone())
            .collect()
    }

    /// Courses that list `course` as a prerequisite, in insertion order
    #[must_use]
    pub fn dependents_of(&self, course: &str) -> Vec<CourseId> {
        self.edges
            .iter()
            .filter(|e| e.prerequisite.as_str() == course)
            .map(|e| e.dependent.clone())
            .collect()
    }

    /// All nodes, in insertion order
    #[must_use]
    pub fn courses(&self) -> &[CourseId] {
        &self.nodes
    }

    /// All edges, in insertion order
    #[must_use]
    pub fn edges(&self) -> &[PrerequisiteEdge] {
        &self.edges
    }

    /// Number of course nodes
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if a course exists in the graph
    #[must_use]
    pub fn contains_course(&self, course: &str) -> bool {
        self.node_index.contains(course)
    }

    fn outgoing(&self) -> HashMap<&CourseId, Vec<&CourseId>> {
        let mut outgoing: HashMap<&CourseId, Vec<&CourseId>> = HashMap::new();
        for edge in &self.edges {
            outgoing
                .entry(&edge.prerequisite)
                .or_default()
                .push(&edge.dependent);
        }
        outgoing
    }

    /// Order courses so every prerequisite comes before its dependents.
    ///
    /// # Errors
    ///
    /// Returns an error naming one cycle when the graph is not acyclic.
    pub fn topological_order(&self) -> Result<Vec<CourseId>, String> {
        let outgoing = self.outgoing();
        let mut indegree: HashMap<&CourseId, usize> = self.nodes.iter().map(|c| (c, 0)).collect();
        for edge in &self.edges {
            *indegree.entry(&edge.dependent).or_default() += 1;
        }

        let mut queue: VecDeque<&CourseId> = self
            .nodes
            .iter()
            .filter(|c| indegree.get(c).copied().unwrap_or(0) == 0)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(course) = queue.pop_front() {
            order.push(course.clone());
            for child in outgoing.get(course).into_iter().flatten() {
                if let Some(entry) = indegree.get_mut(child) {
                    *entry = entry.saturating_sub(1);
                    if *entry == 0 {
                        queue.push_back(*child);
                    }
                }
            }
        }

        if order.len() == self.nodes.len() {
            return Ok(order);
        }
        let cycle = self
            .find_cycle()
            .map(|c| c.iter().map(CourseId::as_str).collect::<Vec<_>>().join(" → "))
            .unwrap_or_default();
        Err(format!("Cycle detected in prerequisite graph: {cycle}"))
    }

    /// Find one cycle, returned as the path that closes on its first course.
    ///
    /// A self-loop `A → A` is reported as `[A, A]`.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<CourseId>> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        let outgoing = self.outgoing();
        let mut marks: HashMap<&CourseId, Mark> =
            self.nodes.iter().map(|c| (c, Mark::Unvisited)).collect();

        for start in &self.nodes {
            if marks.get(start) != Some(&Mark::Unvisited) {
                continue;
            }

            // Iterative DFS: stack of (node, next child index) plus the current path.
            let mut stack: Vec<(&CourseId, usize)> = vec![(start, 0)];
            let mut path: Vec<&CourseId> = vec![start];
            marks.insert(start, Mark::InProgress);

            while let Some((node, child_idx)) = stack.last().copied() {
                let children = outgoing.get(node).map_or(&[][..], Vec::as_slice);
                if let Some(&child) = children.get(child_idx) {
                    if let Some(top) = stack.last_mut() {
                        top.1 += 1;
                    }
                    match marks.get(child).copied().unwrap_or(Mark::Unvisited) {
                        Mark::InProgress => {
                            let from = path.iter().position(|c| *c == child).unwrap_or(0);
                            let mut cycle: Vec<CourseId> =
                                path[from..].iter().map(|c| (*c).clone()).collect();
                            cycle.push(child.clone());
                            return Some(cycle);
                        }
                        Mark::Unvisited => {
                            marks.insert(child, Mark::InProgress);
                            stack.push((child, 0));
                            path.push(child);
                        }
                        Mark::Done => {}
                    }
                } else {
                    marks.insert(node, Mark::Done);
                    stack.pop();
                    path.pop();
                }
            }
        }
        None
    }

    /// Returns `true` if the graph has no cycles
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        self.find_cycle().is_none()
    }
}

impl std::fmt::Display for PrerequisiteGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Prerequisite graph ({} courses, {} edges):",
            self.nodes.len(),
            self.edges.len()
        )?;
        writeln!(f)?;

        let mut sorted_courses: Vec<&CourseId> = self.nodes.iter().collect();
        sorted_courses.sort();

        for course in sorted_courses {
            let prereqs = self.prerequisites_of(course.as_str());
            if prereqs.is_empty() {
                writeln!(f, "  {course} → (no prerequisites)")?;
            } else {
                let prereqs_str = prereqs
                    .iter()
                    .map(CourseId::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(f, "  {course} → {prereqs_str}")?;
            }
        }

        Ok(())
    }
}
