//! Workflow registry and its routing graph.
//!
//! [`Catalog`] owns the workflows by name. [`RoutingGraph`] is the derived
//! `petgraph` view (one node per workflow, one edge per workflow-to-workflow
//! route) used to validate a catalog before it is evaluated:
//!
//! ```text
//!   in{s<1351:px,qqz}          in ──▶ px
//!   px{a<2006:A,R}      ───▶    │
//!   qqz{s>2770:A,R}             └──▶ qqz
//! ```
//!
//! Terminal destinations (Accept / Reject) have no node.

use std::collections::HashMap;

use log::{debug, warn};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

use super::definition::Workflow;
use super::destination::{Destination, Outcome};
use super::error::WorkflowError;
use crate::solution_space::Axes;

/// Workflows indexed by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    workflows: HashMap<String, Workflow>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, rejecting duplicate names.
    pub fn from_workflows<I>(workflows: I) -> Result<Self, WorkflowError>
    where
        I: IntoIterator<Item = Workflow>,
    {
        let mut catalog = Self::new();
        for workflow in workflows {
            catalog.insert(workflow)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, workflow: Workflow) -> Result<(), WorkflowError> {
        if self.workflows.contains_key(workflow.name()) {
            return Err(WorkflowError::DuplicateWorkflow(workflow.name().to_string()));
        }
        self.workflows.insert(workflow.name().to_string(), workflow);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Workflow, WorkflowError> {
        self.workflows
            .get(name)
            .ok_or_else(|| WorkflowError::UnknownWorkflow(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.workflows.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }

    pub fn workflows(&self) -> impl Iterator<Item = &Workflow> {
        self.workflows.values()
    }

    /// Looks up the workflow `from` routes to, reporting a dangling route.
    pub(crate) fn resolve(&self, from: &str, destination: &str) -> Result<&Workflow, WorkflowError> {
        self.workflows
            .get(destination)
            .ok_or_else(|| WorkflowError::UnknownDestination {
                workflow: from.to_string(),
                destination: destination.to_string(),
            })
    }

    /// Builds the routing graph; every workflow destination must exist.
    pub fn routing_graph(&self) -> Result<RoutingGraph, WorkflowError> {
        let mut names: Vec<&str> = self.workflows.keys().map(String::as_str).collect();
        names.sort_unstable();

        let mut graph = DiGraph::with_capacity(names.len(), names.len() * 2);
        let mut nodes = HashMap::with_capacity(names.len());
        for name in &names {
            nodes.insert(name.to_string(), graph.add_node(name.to_string()));
        }

        for name in &names {
            let from = nodes[*name];
            for destination in self.workflows[*name].destinations() {
                if let Destination::Workflow(target) = destination {
                    let to = *nodes.get(target).ok_or_else(|| {
                        WorkflowError::UnknownDestination {
                            workflow: name.to_string(),
                            destination: target.clone(),
                        }
                    })?;
                    graph.update_edge(from, to, ());
                }
            }
        }

        Ok(RoutingGraph { graph, nodes })
    }

    /// Checks that `start` exists, every route resolves and no route loops.
    ///
    /// Workflows unreachable from `start` are allowed but logged.
    pub fn validate(&self, start: &str) -> Result<RoutingGraph, WorkflowError> {
        self.get(start)?;
        let graph = self.routing_graph()?;
        let order = graph.topological_order()?;
        debug!(
            "validated {} workflows, {} routes, start `{}`",
            order.len(),
            graph.route_count(),
            start
        );

        let reachable = graph.reachable_from(start);
        if reachable.len() < self.len() {
            let mut unreachable: Vec<&str> = self
                .workflows
                .keys()
                .map(String::as_str)
                .filter(|name| !reachable.contains(name))
                .collect();
            unreachable.sort_unstable();
            warn!(
                "{} workflow(s) unreachable from `{}`: {}",
                unreachable.len(),
                start,
                unreachable.join(", ")
            );
        }
        Ok(graph)
    }

    /// Runs a single tuple through the catalog from `start`.
    pub fn evaluate_point(
        &self,
        start: &str,
        axes: &Axes,
        point: &[i64],
    ) -> Result<Outcome, WorkflowError> {
        let mut current = self.get(start)?;
        // An acyclic route visits each workflow at most once.
        for _ in 0..self.len() {
            match current.route(axes, point)? {
                Destination::Workflow(next) => current = self.resolve(current.name(), next)?,
                Destination::Accept => return Ok(Outcome::Accepted),
                Destination::Reject => return Ok(Outcome::Rejected),
            }
        }
        Err(WorkflowError::Cycle(current.name().to_string()))
    }
}

/// Directed graph of workflow-to-workflow routes.
#[derive(Debug, Clone)]
pub struct RoutingGraph {
    graph: DiGraph<String, ()>,
    nodes: HashMap<String, NodeIndex>,
}

impl RoutingGraph {
    pub fn workflow_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct workflow-to-workflow routes.
    pub fn route_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Workflow names ordered so every route points forward.
    pub fn topological_order(&self) -> Result<Vec<&str>, WorkflowError> {
        toposort(&self.graph, None)
            .map(|order| order.into_iter().map(|n| self.graph[n].as_str()).collect())
            .map_err(|cycle| WorkflowError::Cycle(self.graph[cycle.node_id()].clone()))
    }

    /// Names of the workflows reachable from `start`, `start` included.
    pub fn reachable_from(&self, start: &str) -> Vec<&str> {
        let Some(&root) = self.nodes.get(start) else {
            return Vec::new();
        };
        let mut dfs = Dfs::new(&self.graph, root);
        let mut reachable = Vec::new();
        while let Some(node) = dfs.next(&self.graph) {
            reachable.push(self.graph[node].as_str());
        }
        reachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::Rule;
    use test_log::test;

    fn xmas() -> Axes {
        Axes::new(['x', 'm', 'a', 's'])
    }

    fn chain() -> Catalog {
        Catalog::from_workflows([
            Workflow::new(
                "in",
                vec![Rule::less('s', 1351, Destination::workflow("px"))],
                Destination::workflow("qqz"),
            ),
            Workflow::new(
                "px",
                vec![Rule::less('a', 2006, Destination::Accept)],
                Destination::Reject,
            ),
            Workflow::new(
                "qqz",
                vec![Rule::greater('s', 2770, Destination::Accept)],
                Destination::Reject,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn duplicate_workflow_is_rejected() {
        let err = Catalog::from_workflows([
            Workflow::new("in", vec![], Destination::Accept),
            Workflow::new("in", vec![], Destination::Reject),
        ])
        .unwrap_err();
        assert_eq!(err, WorkflowError::DuplicateWorkflow("in".to_string()));
    }

    #[test]
    fn get_unknown_workflow() {
        assert_eq!(
            chain().get("nope").unwrap_err(),
            WorkflowError::UnknownWorkflow("nope".to_string())
        );
    }

    #[test]
    fn routing_graph_has_one_edge_per_route() {
        let graph = chain().routing_graph().unwrap();
        assert_eq!(graph.workflow_count(), 3);
        assert_eq!(graph.route_count(), 2);
        let order = graph.topological_order().unwrap();
        assert_eq!(order[0], "in");
    }

    #[test]
    fn dangling_destination_is_reported() {
        let catalog = Catalog::from_workflows([Workflow::new(
            "in",
            vec![Rule::less('s', 10, Destination::workflow("ghost"))],
            Destination::Reject,
        )])
        .unwrap();
        assert_eq!(
            catalog.validate("in").unwrap_err(),
            WorkflowError::UnknownDestination {
                workflow: "in".to_string(),
                destination: "ghost".to_string(),
            }
        );
    }

    #[test]
    fn cycle_is_reported() {
        let catalog = Catalog::from_workflows([
            Workflow::new("in", vec![], Destination::workflow("loop")),
            Workflow::new(
                "loop",
                vec![Rule::less('x', 5, Destination::Accept)],
                Destination::workflow("in"),
            ),
        ])
        .unwrap();
        assert!(matches!(
            catalog.validate("in").unwrap_err(),
            WorkflowError::Cycle(_)
        ));
        assert!(matches!(
            catalog.evaluate_point("in", &xmas(), &[10, 0, 0, 0]),
            Err(WorkflowError::Cycle(_))
        ));
        assert_eq!(
            catalog.evaluate_point("in", &xmas(), &[1, 0, 0, 0]),
            Ok(Outcome::Accepted)
        );
    }

    #[test]
    fn validate_requires_start() {
        assert_eq!(
            chain().validate("start").unwrap_err(),
            WorkflowError::UnknownWorkflow("start".to_string())
        );
    }

    #[test]
    fn unreachable_workflows_are_tolerated() {
        let mut catalog = chain();
        catalog
            .insert(Workflow::new("orphan", vec![], Destination::Accept))
            .unwrap();
        let graph = catalog.validate("in").unwrap();
        let mut reachable = graph.reachable_from("in");
        reachable.sort_unstable();
        assert_eq!(reachable, vec!["in", "px", "qqz"]);
    }

    #[test]
    fn evaluate_point_follows_routes() {
        let catalog = chain();
        let axes = xmas();
        assert_eq!(
            catalog.evaluate_point("in", &axes, &[1, 1, 100, 1000]),
            Ok(Outcome::Accepted)
        );
        assert_eq!(
            catalog.evaluate_point("in", &axes, &[1, 1, 3000, 1000]),
            Ok(Outcome::Rejected)
        );
        assert_eq!(
            catalog.evaluate_point("in", &axes, &[1, 1, 3000, 3000]),
            Ok(Outcome::Accepted)
        );
        assert_eq!(
            catalog.evaluate_point("in", &axes, &[1, 1, 1, 2000]),
            Ok(Outcome::Rejected)
        );
    }
}
