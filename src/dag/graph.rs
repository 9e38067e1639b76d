// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::model::{Diagnostic, Task, TaskId, validate_tasks};

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone)]
struct GraphNode {
    /// Direct dependencies present in the task list (dangling ids excluded).
    deps: Vec<TaskId>,
    /// Direct dependents: tasks that list this one as a dependency.
    dependents: Vec<TaskId>,
}

/// In-memory dependency graph keyed by task id.
///
/// This is intentionally lightweight: adjacency plus a cycle check. Readiness
/// and wave planning live in [`super::readiness`] and [`super::planner`].
#[derive(Debug, Clone)]
pub struct TaskGraph {
    nodes: HashMap<TaskId, GraphNode>,
    /// Task ids in task-list order, for deterministic iteration.
    order: Vec<TaskId>,
}

impl TaskGraph {
    /// Build the graph from a flat task list and collect recoverable
    /// diagnostics.
    ///
    /// Dangling dependency ids are reported but do not abort the build; the
    /// referencing task simply keeps an unsatisfiable dependency and stays
    /// permanently unready.
    pub fn build(tasks: &[Task]) -> (Self, Vec<Diagnostic>) {
        let diagnostics = validate_tasks(tasks);
        let known: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

        let mut nodes: HashMap<TaskId, GraphNode> = HashMap::new();
        let mut order: Vec<TaskId> = Vec::with_capacity(tasks.len());

        // First pass: create nodes with deduplicated, present-only deps.
        for task in tasks {
            let mut seen: HashSet<&str> = HashSet::new();
            let deps: Vec<TaskId> = task
                .dependencies
                .iter()
                .filter(|dep| seen.insert(dep.as_str()))
                .filter(|dep| known.contains(dep.as_str()))
                .cloned()
                .collect();

            nodes.insert(
                task.id.clone(),
                GraphNode {
                    deps,
                    dependents: Vec::new(),
                },
            );
            order.push(task.id.clone());
        }

        // Second pass: populate dependents based on deps.
        for id in order.clone() {
            // clone to avoid borrowing issues while mutating
            let deps = nodes.get(&id).map(|n| n.deps.clone()).unwrap_or_default();

            for dep in deps {
                if let Some(dep_node) = nodes.get_mut(&dep) {
                    dep_node.dependents.push(id.clone());
                }
            }
        }

        debug!(
            tasks = order.len(),
            diagnostics = diagnostics.len(),
            "task graph built"
        );

        (Self { nodes, order }, diagnostics)
    }

    /// All task ids, in task-list order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Immediate dependencies of a task (dangling ids excluded).
    pub fn dependencies_of(&self, id: &str) -> &[TaskId] {
        self.nodes.get(id).map(|n| n.deps.as_slice()).unwrap_or(&[])
    }

    /// Immediate dependents of a task (tasks that list this one as a
    /// dependency).
    pub fn dependents_of(&self, id: &str) -> &[TaskId] {
        self.nodes
            .get(id)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Find a dependency cycle among present ids, if any.
    ///
    /// Dangling edges are ignored (they are diagnostics, not cycles). Returns
    /// the member ids of one cycle in task-list order.
    pub fn find_cycle(&self) -> Option<Vec<TaskId>> {
        // Self-references are cycles of length one; catch them before the sort.
        for id in &self.order {
            if self.dependencies_of(id).iter().any(|d| d == id) {
                return Some(vec![id.clone()]);
            }
        }

        // Edge direction: dep -> task, so for B with dependencies = ["A"]
        // we add edge A -> B.
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

        for id in &self.order {
            graph.add_node(id.as_str());
        }

        for id in &self.order {
            for dep in self.dependencies_of(id) {
                if dep != id {
                    graph.add_edge(dep.as_str(), id.as_str(), ());
                }
            }
        }

        // A topological sort succeeds iff there is no cycle.
        if toposort(&graph, None).is_ok() {
            return None;
        }

        // Name the members: any strongly connected component larger than one
        // node is a cycle.
        for scc in tarjan_scc(&graph) {
            if scc.len() > 1 {
                let members: HashSet<&str> = scc.iter().copied().collect();
                let cycle: Vec<TaskId> = self
                    .order
                    .iter()
                    .filter(|id| members.contains(id.as_str()))
                    .cloned()
                    .collect();
                return Some(cycle);
            }
        }

        None
    }

    /// All tasks downstream of `id`, directly or transitively, in task-list
    /// order.
    ///
    /// Used for diagnostics: when a task can never become ready, this is the
    /// work it holds up.
    pub fn transitive_dependents(&self, id: &str) -> Vec<TaskId> {
        let mut stack: Vec<TaskId> = self.dependents_of(id).to_vec();
        let mut visited: HashSet<TaskId> = HashSet::new();

        while let Some(name) = stack.pop() {
            if !visited.insert(name.clone()) {
                continue;
            }
            stack.extend(self.dependents_of(&name).iter().cloned());
        }

        self.order
            .iter()
            .filter(|task_id| visited.contains(task_id.as_str()))
            .cloned()
            .collect()
    }
}
