//! Tree optimizer.
//!
//! A single post-order walk rewrites the tree in place. Every node's children are
//! fully optimized before the node itself is examined, so folds compose bottom-up
//! (`(2 + 3) * 4` becomes `20`). At each node three rewrites are tried in order:
//!
//! 1. **Constant folding** of `BINARY_EXPR` and `UNARY_EXPR` over integer literals
//! 2. **Dead-code elimination** of `IF_STMT` with a literal condition
//! 3. **Loop unrolling** of `FOR_STMT` with a small literal trip count
//!
//! Nothing here can fail. A node that does not match a pattern is left untouched.
//! The walk is not repeated to a fixed point.

use crate::ast::{BinaryOp, Node, NodeData, UnaryOp};
use std::mem;
use tracing::debug;

/// Which rewrites run and how far loops may be unrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizerConfig {
    pub fold_constants: bool,
    pub eliminate_dead_code: bool,
    pub unroll_loops: bool,
    /// Largest trip count a loop may have and still be unrolled.
    pub max_unroll: i64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            fold_constants: true,
            eliminate_dead_code: true,
            unroll_loops: true,
            max_unroll: 16,
        }
    }
}

/// Counts of rewrites applied so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimizationStats {
    /// Expressions replaced by an integer literal
    pub folded: usize,
    /// Conditionals replaced by one of their branches or by an empty sequence
    pub eliminated: usize,
    /// Loops replaced by a sequence of body copies
    pub unrolled: usize,
}

impl OptimizationStats {
    pub fn total(&self) -> usize {
        self.folded + self.eliminated + self.unrolled
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "folded": self.folded,
            "eliminated": self.eliminated,
            "unrolled": self.unrolled,
        })
    }
}

#[derive(Debug, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
    stats: OptimizationStats,
}

impl Optimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Optimizer {
            config,
            stats: OptimizationStats::default(),
        }
    }

    /// Rewrites applied by every `optimize` call on this optimizer.
    pub fn stats(&self) -> OptimizationStats {
        self.stats
    }

    /// Optimize `node` and its whole subtree in place.
    pub fn optimize(&mut self, node: &mut Node) {
        for child in &mut node.children {
            self.optimize(child);
        }

        if self.config.fold_constants {
            self.fold_binary(node);
            self.fold_unary(node);
        }
        if self.config.eliminate_dead_code {
            self.eliminate_dead_branch(node);
        }
        if self.config.unroll_loops {
            self.unroll_loop(node);
        }
    }

    fn fold_binary(&mut self, node: &mut Node) {
        let NodeData::BinaryExpr(op) = &node.data else {
            return;
        };
        let [left, right] = node.children.as_slice() else {
            return;
        };
        let (Some(left), Some(right)) = (left.int_value(), right.int_value()) else {
            return;
        };

        if let Some(value) = op.fold(left, right) {
            debug!(op = %op, left, right, value, "folded binary expression");
            *node = Node::int(value);
            self.stats.folded += 1;
        }
    }

    fn fold_unary(&mut self, node: &mut Node) {
        let NodeData::UnaryExpr(op) = &node.data else {
            return;
        };
        let [operand] = node.children.as_slice() else {
            return;
        };
        let Some(operand) = operand.int_value() else {
            return;
        };

        if let Some(value) = op.fold(operand) {
            debug!(op = %op, operand, value, "folded unary expression");
            *node = Node::int(value);
            self.stats.folded += 1;
        }
    }

    fn eliminate_dead_branch(&mut self, node: &mut Node) {
        if !matches!(node.data, NodeData::IfStmt) || node.children.len() < 2 {
            return;
        }
        let Some(condition) = node.children[0].int_value() else {
            return;
        };

        let replacement = if condition == 0 {
            debug!("removed conditional with false condition");
            Node::sequence(Vec::new())
        } else {
            debug!(condition, "replaced conditional with its then-branch");
            // Any branches past the then-branch are dropped along with the condition
            mem::take(&mut node.children).swap_remove(1)
        };

        *node = replacement;
        self.stats.eliminated += 1;
    }

    fn unroll_loop(&mut self, node: &mut Node) {
        if !matches!(node.data, NodeData::ForStmt) {
            return;
        }
        let Some(trips) = unroll_trip_count(&node.children) else {
            return;
        };
        if trips <= 0 || trips > self.config.max_unroll {
            return;
        }

        let Some(body) = node.children.pop() else {
            return;
        };
        debug!(trips, body = %body.kind(), "unrolled loop");

        // The loop variable is not substituted; every copy is the same body
        let copies = (0..trips).map(|_| body.clone()).collect();
        *node = Node::sequence(copies);
        self.stats.unrolled += 1;
    }
}

/// Trip count `end - start` of a loop shaped like
/// `for (i = start; i < end; i++) body`, or `None` for any other shape.
fn unroll_trip_count(children: &[Node]) -> Option<i64> {
    let [init, condition, increment, _body] = children else {
        return None;
    };

    let NodeData::Declaration { name } = &init.data else {
        return None;
    };
    let [start] = init.children.as_slice() else {
        return None;
    };
    let start = start.int_value()?;

    let NodeData::BinaryExpr(BinaryOp::LessThan) = &condition.data else {
        return None;
    };
    let [bound_var, end] = condition.children.as_slice() else {
        return None;
    };
    let end = end.int_value()?;

    let NodeData::UnaryExpr(UnaryOp::Increment) = &increment.data else {
        return None;
    };
    let [step_var] = increment.children.as_slice() else {
        return None;
    };

    let names_match = matches!(&bound_var.data, NodeData::VarRef { name: v } if v == name)
        && matches!(&step_var.data, NodeData::VarRef { name: v } if v == name);
    if !names_match {
        return None;
    }

    end.checked_sub(start)
}

/// Optimize a tree with the default configuration.
pub fn optimize(node: &mut Node) {
    Optimizer::default().optimize(node);
}
