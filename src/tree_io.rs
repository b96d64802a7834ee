extern crate dot;

use std::io;
use std::io::Write;

use itertools::Itertools;

use crate::tree::Expr;

/// The parse trees of a list of formulas as one GraphViz graph.
///
/// Structurally equal subtrees are drawn once, so formulas that share a
/// subexpression share its node.
pub struct ParseForest {
    pub roots: Vec<(String, Expr)>,
    pub nodes: Vec<Expr>,
}

type GraphNode = usize;
type GraphEdge = (usize, String, usize);

impl ParseForest {
    pub fn new<S: AsRef<str>>(formulas: &[(S, Expr)]) -> Self {
        let roots: Vec<(String, Expr)> = formulas
            .iter()
            .map(|(text, expr)| (text.as_ref().to_string(), expr.clone()))
            .collect();

        let nodes = roots
            .iter()
            .flat_map(|(_, expr)| Self::nodes_recursive(expr))
            .unique()
            .collect();

        Self { roots, nodes }
    }

    pub fn render_dot<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        dot::render(self, writer)
    }

    fn nodes_recursive(root: &Expr) -> Vec<Expr> {
        let this_node = vec![root.clone()];

        match root {
            Expr::BinaryOp(_, l, r) => {
                let left_nodes = Self::nodes_recursive(l);
                let right_nodes = Self::nodes_recursive(r);

                left_nodes
                    .into_iter()
                    .chain(right_nodes)
                    .chain(this_node)
                    .collect()
            }
            Expr::Not(e) => Self::nodes_recursive(e)
                .into_iter()
                .chain(this_node)
                .collect(),
            Expr::Var(_) => this_node,
        }
    }

    fn position(&self, expr: &Expr) -> usize {
        // every subtree was collected in `new`
        self.nodes
            .iter()
            .position(|n| n == expr)
            .expect("cannot find position")
    }

    /// Formula nodes are numbered after the expression nodes.
    fn root_node(&self, i: usize) -> GraphNode {
        self.nodes.len() + i
    }
}

impl<'a> dot::Labeller<'a, GraphNode, GraphEdge> for ParseForest {
    fn graph_id(&self) -> dot::Id<'a> {
        dot::Id::new("parse_forest").expect("cannot create Id named 'parse_forest'")
    }

    fn node_id(&self, n: &GraphNode) -> dot::Id<'a> {
        dot::Id::new(format!("n_{}", n))
            .unwrap_or_else(|_| panic!("cannot create Id named 'n_{n}'"))
    }

    fn node_shape(&'a self, n: &GraphNode) -> Option<dot::LabelText<'a>> {
        (*n >= self.nodes.len()).then(|| dot::LabelText::label("box"))
    }

    fn node_label(&self, n: &GraphNode) -> dot::LabelText<'a> {
        match self.nodes.get(*n) {
            Some(Expr::Var(s)) => dot::LabelText::label(s.to_string()),
            Some(Expr::Not(_)) => dot::LabelText::label("~".to_string()),
            Some(Expr::BinaryOp(op, _, _)) => dot::LabelText::label(op.to_string()),
            None => dot::LabelText::label(self.roots[*n - self.nodes.len()].0.clone()),
        }
    }

    fn edge_label(&self, e: &GraphEdge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.1.clone())
    }
}

impl<'a> dot::GraphWalk<'a, GraphNode, GraphEdge> for ParseForest {
    fn nodes(&self) -> dot::Nodes<'a, GraphNode> {
        (0..self.nodes.len() + self.roots.len()).collect()
    }

    fn edges(&self) -> dot::Edges<'a, GraphEdge> {
        let mut edges: Vec<GraphEdge> = Vec::new();

        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Expr::BinaryOp(_, l, r) => {
                    edges.push((i, "L".to_string(), self.position(l)));
                    edges.push((i, "R".to_string(), self.position(r)));
                }
                Expr::Not(e) => edges.push((i, "".to_string(), self.position(e))),
                Expr::Var(_) => {}
            }
        }

        for (i, (_, expr)) in self.roots.iter().enumerate() {
            edges.push((self.root_node(i), "".to_string(), self.position(expr)));
        }

        edges.into()
    }

    fn source(&self, e: &GraphEdge) -> GraphNode {
        e.0
    }

    fn target(&self, e: &GraphEdge) -> GraphNode {
        e.2
    }
}
