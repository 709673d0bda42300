//! Operator grammar for a relation-free run
//!
//! Passes run in order over the run: function applications, big operators
//! and integrals claim their arguments first, then postfix and prefix
//! operators bind to their single operand. Operators still missing an
//! operand are handled per [`DanglingOperatorPolicy`]. Adjacent operands
//! become implicit multiplications and the remaining alternation of operands
//! and binary operators is grouped by precedence.

use core::{iter, mem};

use super::{DANGLING_ANNOTATION, TreeBuilder};
use crate::semantic_tree::{SemanticId, SemanticNode};
use crate::symbols::SecondaryKind;
use crate::types::{DanglingOperatorPolicy, SemanticFont, SemanticRole, SemanticType};

/// Glyph of the operator synthesized between adjacent operands.
pub const INVISIBLE_TIMES: &str = "\u{2062}";

/// Binding strength of a binary operator; lower binds looser.
fn precedence(role: SemanticRole) -> u8 {
    match role {
        SemanticRole::Logic => 0,
        role if role.is_additive() => 1,
        _ => 2,
    }
}

impl TreeBuilder<'_> {
    /// Groups a run that contains no punctuation and no relation.
    pub(super) fn operators(&mut self, nodes: Vec<SemanticId>) -> SemanticId {
        match nodes.as_slice() {
            [] => return self.tree.create_empty(),
            [single] => return *single,
            _ => {}
        }
        let nodes = self.applications(nodes);
        let nodes = self.postfix(nodes);
        let nodes = self.prefix(nodes);
        let nodes = self.dangling(nodes);
        let nodes = self.implicit(nodes);
        self.binary(nodes)
    }

    fn is_operator(&self, id: SemanticId) -> bool {
        let node = self.tree.at(id);
        node.node_type() == SemanticType::Operator && !node.annotation.contains(DANGLING_ANNOTATION)
    }

    fn operator_role(&self, id: SemanticId) -> Option<SemanticRole> {
        self.is_operator(id).then(|| self.tree.at(id).role)
    }

    fn is_additive_operator(&self, id: SemanticId) -> bool {
        self.operator_role(id).is_some_and(SemanticRole::is_additive)
    }

    /// The node a scripted construct is built on.
    fn base_leaf(&self, id: SemanticId) -> &SemanticNode {
        let node = self.tree.at(id);
        match node.node_type() {
            SemanticType::LimLower
            | SemanticType::LimUpper
            | SemanticType::LimBoth
            | SemanticType::Subscript
            | SemanticType::Superscript => node
                .children()
                .first()
                .map_or(node, |base| self.base_leaf(*base)),
            _ => node,
        }
    }

    fn is_function_head(&self, id: SemanticId) -> bool {
        let base = self.base_leaf(id);
        match base.node_type() {
            SemanticType::Function => true,
            SemanticType::Identifier => base.role == SemanticRole::SimpleFunc,
            _ => false,
        }
    }

    /// Function heads that take an argument without parentheses.
    fn is_prefix_function(&self, id: SemanticId) -> bool {
        self.base_leaf(id).node_type() == SemanticType::Function
    }

    fn big_operator_kind(&self, id: SemanticId) -> Option<SemanticRole> {
        let base = self.base_leaf(id);
        (base.node_type() == SemanticType::LargeOp).then_some(base.role)
    }

    fn is_differential(&self, id: SemanticId) -> bool {
        let node = self.tree.at(id);
        node.node_type() == SemanticType::Identifier
            && node.is_leaf()
            && self
                .symbols
                .classify_secondary(SecondaryKind::Differential, &node.text)
                .is_some()
    }

    /// End of the operand run starting at `start`: the first additive
    /// operator after its first element.
    fn additive_boundary(&self, nodes: &[SemanticId], start: usize) -> usize {
        (start + 1..nodes.len())
            .find(|idx| self.is_additive_operator(nodes[*idx]))
            .unwrap_or(nodes.len())
    }

    fn applications(&mut self, nodes: Vec<SemanticId>) -> Vec<SemanticId> {
        let mut out = Vec::with_capacity(nodes.len());
        let mut idx = 0;
        while idx < nodes.len() {
            let (built, next) = match self.big_operator_kind(nodes[idx]) {
                Some(SemanticRole::Integral) => self.integral(&nodes, idx),
                Some(role) => self.big_operator(&nodes, idx, role),
                None => self
                    .application(&nodes, idx)
                    .unwrap_or((nodes[idx], idx + 1)),
            };
            out.push(built);
            idx = next;
        }
        out
    }

    /// BIGOP over the run up to the next additive operator.
    fn big_operator(
        &mut self,
        nodes: &[SemanticId],
        idx: usize,
        role: SemanticRole,
    ) -> (SemanticId, usize) {
        let head = nodes[idx];
        let mut content = vec![head];
        let mut start = idx + 1;
        if let Some(glyph) = self.dummy_glyph(nodes, start) {
            content.push(glyph);
            start += 1;
        }
        let end = self.additive_boundary(nodes, start);
        if end <= start {
            return (head, idx + 1);
        }
        tracing::trace!(?role, operands = end - start, "big operator");
        let body = self.operators(nodes[start..end].to_vec());
        let node = self
            .tree
            .create_node(SemanticType::BigOp, role, vec![body], content);
        (node, end)
    }

    /// A multiplication glyph directly after a big operator head at
    /// `start - 1`, provided an operand follows it.
    fn dummy_glyph(&self, nodes: &[SemanticId], start: usize) -> Option<SemanticId> {
        let next = nodes.get(start).copied()?;
        (self.operator_role(next) == Some(SemanticRole::Multiplication) && start + 1 < nodes.len())
            .then_some(next)
    }

    /// Position of the differential `d` belonging to an integral whose
    /// integrand starts at `start`. Integrals nested in the integrand claim
    /// the differentials that follow them first.
    fn differential_position(&self, nodes: &[SemanticId], start: usize) -> Option<usize> {
        let mut nested = 0_usize;
        let mut pos = start;
        while pos + 1 < nodes.len() {
            if self.big_operator_kind(nodes[pos]) == Some(SemanticRole::Integral) {
                nested += 1;
            } else if self.is_differential(nodes[pos]) && !self.is_operator(nodes[pos + 1]) {
                if nested == 0 {
                    return Some(pos);
                }
                nested -= 1;
                pos += 1;
            }
            pos += 1;
        }
        None
    }

    /// INTEGRAL with children `[integrand, differential]`.
    fn integral(&mut self, nodes: &[SemanticId], idx: usize) -> (SemanticId, usize) {
        let head = nodes[idx];
        let mut content = vec![head];
        let mut start = idx + 1;
        if let Some(glyph) = self.dummy_glyph(nodes, start) {
            content.push(glyph);
            start += 1;
        }
        let found = self.differential_position(nodes, start);

        let (integrand, differential, next) = if let Some(d) = found {
            let integrand = self.operators(nodes[start..d].to_vec());
            self.tree.at_mut(nodes[d]).role = SemanticRole::Differential;
            let differential = self.tree.create_node(
                SemanticType::PrefixOp,
                SemanticRole::Differential,
                vec![nodes[d + 1]],
                vec![nodes[d]],
            );
            (integrand, differential, d + 2)
        } else {
            let end = self.additive_boundary(nodes, start).max(start);
            let integrand = self.operators(nodes[start..end].to_vec());
            (integrand, self.tree.create_empty(), end)
        };
        tracing::trace!(differential = found.is_some(), "integral");

        let node = self.tree.create_node(
            SemanticType::Integral,
            SemanticRole::Integral,
            vec![integrand, differential],
            content,
        );
        (node, next)
    }

    fn application_role(&self, head: SemanticId) -> SemanticRole {
        if self.is_function_head(head) {
            self.base_leaf(head).role
        } else {
            SemanticRole::SimpleFunc
        }
    }

    /// APPL for a function head at `idx`, with the next free position.
    fn application(&mut self, nodes: &[SemanticId], idx: usize) -> Option<(SemanticId, usize)> {
        let head = nodes[idx];
        let next = *nodes.get(idx + 1)?;
        if self.is_operator(head) {
            return None;
        }
        let role = self.application_role(head);

        if self.operator_role(next) == Some(SemanticRole::Application) {
            let argument = *nodes.get(idx + 2)?;
            if self.is_operator(argument) {
                return None;
            }
            tracing::trace!(?role, "explicit application");
            let node = self.tree.create_node(
                SemanticType::Appl,
                role,
                vec![argument],
                vec![head, next],
            );
            return Some((node, idx + 3));
        }

        if !self.is_function_head(head) {
            return None;
        }
        if self.tree.at(next).node_type() == SemanticType::Fenced {
            tracing::trace!(?role, "application");
            let node = self
                .tree
                .create_node(SemanticType::Appl, role, vec![next], vec![head]);
            return Some((node, idx + 2));
        }
        if !self.is_prefix_function(head) {
            return None;
        }

        let mut run = Vec::new();
        let mut start = idx + 1;
        if self.is_function_head(next) {
            let (inner, after) = self
                .application(nodes, start)
                .unwrap_or((next, start + 1));
            run.push(inner);
            start = after;
        }
        let end = (start..nodes.len())
            .find(|pos| {
                let id = nodes[*pos];
                self.is_operator(id)
                    || self.is_function_head(id)
                    || self.big_operator_kind(id).is_some()
            })
            .unwrap_or(nodes.len());
        run.extend_from_slice(&nodes[start..end]);
        if run.is_empty() {
            return None;
        }
        tracing::trace!(?role, operands = run.len(), "prefix function application");
        let argument = self.operators(run);
        let node = self
            .tree
            .create_node(SemanticType::Appl, role, vec![argument], vec![head]);
        Some((node, end))
    }

    fn postfix(&mut self, nodes: Vec<SemanticId>) -> Vec<SemanticId> {
        let mut out: Vec<SemanticId> = Vec::with_capacity(nodes.len());
        for id in nodes {
            if let Some(role) = self.operator_role(id)
                && role.is_postfix()
                && let Some(operand) = out.last().copied()
                && !self.is_operator(operand)
            {
                out.pop();
                let node = self.tree.create_node(
                    SemanticType::PostfixOp,
                    role,
                    vec![operand],
                    vec![id],
                );
                out.push(node);
                continue;
            }
            out.push(id);
        }
        out
    }

    /// Prefix operators, and additive operators lacking a left operand,
    /// bind right to left so that stacked signs nest.
    fn prefix(&mut self, nodes: Vec<SemanticId>) -> Vec<SemanticId> {
        let mut out: Vec<SemanticId> = Vec::with_capacity(nodes.len());
        for idx in (0..nodes.len()).rev() {
            let id = nodes[idx];
            if let Some(role) = self.operator_role(id)
                && (role.is_prefix()
                    || (role.is_additive() && (idx == 0 || self.is_operator(nodes[idx - 1]))))
                && let Some(operand) = out.last().copied()
                && !self.is_operator(operand)
            {
                out.pop();
                tracing::trace!(?role, "prefix operator");
                let node = self.tree.create_node(
                    SemanticType::PrefixOp,
                    role,
                    vec![operand],
                    vec![id],
                );
                out.push(node);
                continue;
            }
            out.push(id);
        }
        out.reverse();
        out
    }

    /// Binary operators at either end of the run.
    fn dangling(&mut self, mut nodes: Vec<SemanticId>) -> Vec<SemanticId> {
        let policy = self.settings.dangling_operators;

        if nodes.len() >= 2 && self.is_operator(nodes[0]) && !self.is_operator(nodes[1]) {
            let op = nodes[0];
            tracing::debug!(glyph = %self.tree.at(op).text, ?policy, "operator without left operand");
            match policy {
                DanglingOperatorPolicy::Prefix => {
                    let operand = nodes.remove(1);
                    let role = self.tree.at(op).role;
                    let node = self.tree.create_node(
                        SemanticType::PrefixOp,
                        role,
                        vec![operand],
                        vec![op],
                    );
                    self.tree.at_mut(node).annotation.add(DANGLING_ANNOTATION, "left");
                    nodes[0] = node;
                }
                DanglingOperatorPolicy::Operand => {
                    self.tree.at_mut(op).annotation.add(DANGLING_ANNOTATION, "left");
                }
            }
        }

        let len = nodes.len();
        if len >= 2 && self.is_operator(nodes[len - 1]) && !self.is_operator(nodes[len - 2]) {
            let op = nodes[len - 1];
            tracing::debug!(glyph = %self.tree.at(op).text, ?policy, "operator without right operand");
            match policy {
                DanglingOperatorPolicy::Prefix => {
                    nodes.pop();
                    if let Some(operand) = nodes.pop() {
                        let node = self.postfix_dangling(operand, op);
                        nodes.push(node);
                    }
                }
                DanglingOperatorPolicy::Operand => {
                    self.tree.at_mut(op).annotation.add(DANGLING_ANNOTATION, "right");
                }
            }
        }
        nodes
    }

    fn postfix_dangling(&mut self, operand: SemanticId, op: SemanticId) -> SemanticId {
        let role = self.tree.at(op).role;
        let node = self
            .tree
            .create_node(SemanticType::PostfixOp, role, vec![operand], vec![op]);
        self.tree.at_mut(node).annotation.add(DANGLING_ANNOTATION, "right");
        node
    }

    /// Collapses operand runs into implicit multiplications, leaving a strict
    /// alternation of operands and binary operators.
    fn implicit(&mut self, nodes: Vec<SemanticId>) -> Vec<SemanticId> {
        let mut out = Vec::with_capacity(nodes.len());
        let mut run = Vec::new();
        let mut expect_operand = true;
        for id in nodes {
            if !self.is_operator(id) {
                run.push(id);
                expect_operand = false;
            } else if expect_operand {
                tracing::debug!(glyph = %self.tree.at(id).text, "operator where an operand is expected");
                self.tree.at_mut(id).annotation.add(DANGLING_ANNOTATION, "left");
                run.push(id);
                expect_operand = false;
            } else {
                let operand = self.implicit_run(mem::take(&mut run));
                out.push(operand);
                out.push(id);
                expect_operand = true;
            }
        }
        if run.is_empty() {
            if let Some(op) = out.pop()
                && let Some(operand) = out.pop()
            {
                let node = self.postfix_dangling(operand, op);
                out.push(node);
            }
        } else {
            let operand = self.implicit_run(run);
            out.push(operand);
        }
        out
    }

    fn implicit_run(&mut self, run: Vec<SemanticId>) -> SemanticId {
        if let [single] = run.as_slice() {
            return *single;
        }
        tracing::trace!(operands = run.len(), "implicit multiplication");
        let content = iter::repeat_with(|| {
            self.tree.create_leaf(
                SemanticType::Operator,
                SemanticRole::Multiplication,
                SemanticFont::Normal,
                INVISIBLE_TIMES,
            )
        })
        .take(run.len() - 1)
        .collect();
        self.tree
            .create_node(SemanticType::InfixOp, SemanticRole::Implicit, run, content)
    }

    /// Groups an alternation `operand (operator operand)*` by precedence.
    fn binary(&mut self, nodes: Vec<SemanticId>) -> SemanticId {
        match nodes.as_slice() {
            [] => return self.tree.create_empty(),
            [single] => return *single,
            _ => {}
        }
        let Some(loosest) = nodes
            .iter()
            .skip(1)
            .step_by(2)
            .map(|op| precedence(self.tree.at(*op).role))
            .min()
        else {
            return self.tree.create_empty();
        };

        let mut operands = Vec::new();
        let mut operators = Vec::new();
        let mut segment = Vec::new();
        for (idx, id) in nodes.into_iter().enumerate() {
            if idx % 2 == 1 && precedence(self.tree.at(id).role) == loosest {
                operands.push(self.binary(mem::take(&mut segment)));
                operators.push(id);
            } else {
                segment.push(id);
            }
        }
        operands.push(self.binary(segment));

        let mut operands = operands.into_iter();
        let Some(first) = operands.next() else {
            return self.tree.create_empty();
        };
        let mut children = vec![first];
        let mut content = Vec::new();
        let mut current: Option<SemanticRole> = None;
        for (op, operand) in operators.into_iter().zip(operands) {
            let role = self.tree.at(op).role;
            if let Some(previous) = current
                && previous != role
            {
                let nested = self.tree.create_node(
                    SemanticType::InfixOp,
                    previous,
                    mem::take(&mut children),
                    mem::take(&mut content),
                );
                children.push(nested);
            }
            current = Some(role);
            children.push(operand);
            content.push(op);
        }
        self.tree.create_node(
            SemanticType::InfixOp,
            current.unwrap_or(SemanticRole::Unknown),
            children,
            content,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::{DANGLING_ANNOTATION, build};
    use crate::context::SemanticContext;
    use crate::mathml_tree::{MathElement, MathNodeType, MathTree};
    use crate::semantic_tree::{SemanticNode, SemanticTree};
    use crate::types::{DanglingOperatorPolicy, SemanticRole, SemanticType, Settings};
    use std::sync::OnceLock;

    use MathNodeType::{Mi, Mn, Mo};

    fn ctx() -> &'static SemanticContext {
        static CTX: OnceLock<SemanticContext> = OnceLock::new();
        CTX.get_or_init(SemanticContext::default)
    }

    fn build_with(tokens: &[(MathNodeType, &str)], settings: &Settings) -> SemanticTree {
        let row = MathElement::with_children(
            MathNodeType::Mrow,
            tokens
                .iter()
                .map(|(node_type, text)| MathElement::token(*node_type, *text))
                .collect(),
        );
        build(ctx(), &MathTree::from(row), settings).unwrap()
    }

    fn build_tokens(tokens: &[(MathNodeType, &str)]) -> SemanticTree {
        build_with(tokens, &Settings::default())
    }

    fn child<'t>(tree: &'t SemanticTree, node: &SemanticNode, idx: usize) -> &'t SemanticNode {
        tree.node(node.children()[idx]).unwrap()
    }

    fn content_text(tree: &SemanticTree, node: &SemanticNode) -> Vec<String> {
        node.content()
            .iter()
            .map(|id| tree.node(*id).unwrap().text.clone())
            .collect()
    }

    #[test]
    fn addition() {
        let tree = build_tokens(&[(Mn, "2"), (Mo, "+"), (Mn, "3")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::InfixOp);
        assert_eq!(root.role, SemanticRole::Addition);
        assert_eq!(content_text(&tree, root), vec!["+"]);
        assert_eq!(child(&tree, root, 0).text, "2");
        assert_eq!(child(&tree, root, 1).text, "3");
    }

    #[test]
    fn same_role_flattens() {
        let tree = build_tokens(&[(Mi, "a"), (Mo, "+"), (Mi, "b"), (Mo, "+"), (Mi, "c")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.children().len(), 3);
        assert_eq!(content_text(&tree, root), vec!["+", "+"]);
    }

    #[test]
    fn role_change_nests_left() {
        let tree = build_tokens(&[(Mi, "a"), (Mo, "-"), (Mi, "b"), (Mo, "+"), (Mi, "c")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.role, SemanticRole::Addition);
        let left = child(&tree, root, 0);
        assert_eq!(left.node_type(), SemanticType::InfixOp);
        assert_eq!(left.role, SemanticRole::Subtraction);
    }

    #[test]
    fn multiplication_binds_tighter() {
        let tree = build_tokens(&[(Mi, "a"), (Mo, "+"), (Mi, "b"), (Mo, "\u{d7}"), (Mi, "c")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.role, SemanticRole::Addition);
        let right = child(&tree, root, 1);
        assert_eq!(right.role, SemanticRole::Multiplication);
        assert_eq!(right.children().len(), 2);
    }

    #[test]
    fn implicit_multiplication() {
        let tree = build_tokens(&[(Mn, "2"), (Mi, "x"), (Mi, "y")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::InfixOp);
        assert_eq!(root.role, SemanticRole::Implicit);
        assert_eq!(content_text(&tree, root), vec!["\u{2062}", "\u{2062}"]);
        for id in root.content() {
            assert!(tree.source(*id).is_none());
        }
    }

    #[test]
    fn leading_minus_is_prefix() {
        let tree = build_tokens(&[(Mo, "-"), (Mi, "x")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::PrefixOp);
        assert_eq!(content_text(&tree, root), vec!["-"]);
    }

    #[test]
    fn minus_after_operator_is_prefix() {
        let tree = build_tokens(&[(Mi, "a"), (Mo, "\u{d7}"), (Mo, "-"), (Mi, "b")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.role, SemanticRole::Multiplication);
        assert_eq!(child(&tree, root, 1).node_type(), SemanticType::PrefixOp);
    }

    #[test]
    fn primes_are_postfix() {
        let tree = build_tokens(&[(Mi, "x"), (Mo, "\u{2032}")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::PostfixOp);
        assert_eq!(root.role, SemanticRole::Prime);
    }

    #[test]
    fn dangling_operator_policies() {
        let tokens = [(Mo, "\u{d7}"), (Mi, "x")];
        let tree = build_tokens(&tokens);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::PrefixOp);
        assert!(root.annotation.has(DANGLING_ANNOTATION, "left"));

        let settings = Settings::builder()
            .dangling_operators(DanglingOperatorPolicy::Operand)
            .build();
        let tree = build_with(&tokens, &settings);
        let root = tree.root_node().unwrap();
        assert_eq!(root.role, SemanticRole::Implicit);
        assert!(child(&tree, root, 0).annotation.has(DANGLING_ANNOTATION, "left"));

        let tree = build_tokens(&[(Mi, "x"), (Mo, "+")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::PostfixOp);
        assert!(root.annotation.has(DANGLING_ANNOTATION, "right"));
    }

    #[test]
    fn doubled_operator_keeps_alternation() {
        let tree = build_tokens(&[(Mi, "a"), (Mo, "\u{d7}"), (Mo, "\u{d7}"), (Mi, "b")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.role, SemanticRole::Multiplication);
        let right = child(&tree, root, 1);
        assert_eq!(right.role, SemanticRole::Implicit);
        assert!(child(&tree, right, 0).annotation.has(DANGLING_ANNOTATION, "left"));
    }

    #[test]
    fn prefix_function_takes_operand_run() {
        let tree = build_tokens(&[(Mi, "sin"), (Mi, "x"), (Mo, "+"), (Mn, "1")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.role, SemanticRole::Addition);
        let appl = child(&tree, root, 0);
        assert_eq!(appl.node_type(), SemanticType::Appl);
        assert_eq!(appl.role, SemanticRole::PrefixFunc);
        assert_eq!(content_text(&tree, appl), vec!["sin"]);
    }

    #[test]
    fn simple_function_needs_fence() {
        let tree = build_tokens(&[(Mi, "f"), (Mo, "("), (Mi, "x"), (Mo, ")")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Appl);
        assert_eq!(child(&tree, root, 0).node_type(), SemanticType::Fenced);

        let tree = build_tokens(&[(Mi, "f"), (Mi, "x")]);
        assert_eq!(tree.root_node().unwrap().role, SemanticRole::Implicit);
    }

    #[test]
    fn explicit_application() {
        let tree = build_tokens(&[(Mi, "x"), (Mo, "\u{2061}"), (Mi, "y")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Appl);
        assert_eq!(content_text(&tree, root), vec!["x", "\u{2061}"]);
    }

    #[test]
    fn sum_body_stops_at_addition() {
        let tree = build_tokens(&[(Mo, "\u{2211}"), (Mi, "a"), (Mi, "b"), (Mo, "+"), (Mi, "c")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.role, SemanticRole::Addition);
        let bigop = child(&tree, root, 0);
        assert_eq!(bigop.node_type(), SemanticType::BigOp);
        assert_eq!(child(&tree, bigop, 0).role, SemanticRole::Implicit);
    }

    #[test]
    fn integral_with_differential() {
        let tree = build_tokens(&[(Mo, "\u{222b}"), (Mi, "x"), (Mi, "d"), (Mi, "x")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Integral);
        assert_eq!(child(&tree, root, 0).text, "x");
        let differential = child(&tree, root, 1);
        assert_eq!(differential.node_type(), SemanticType::PrefixOp);
        assert_eq!(differential.role, SemanticRole::Differential);
        assert_eq!(content_text(&tree, differential), vec!["d"]);

        let tree = build_tokens(&[(Mo, "\u{222b}"), (Mi, "f")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Integral);
        assert_eq!(child(&tree, root, 1).node_type(), SemanticType::Empty);
    }

    #[test]
    fn prefix_function_applied_to_function() {
        let tree = build_tokens(&[(Mi, "sin"), (Mi, "f"), (Mo, "("), (Mi, "x"), (Mo, ")")]);
        let root = tree.root_node().unwrap();
        assert_eq!((root.node_type(), root.role), (SemanticType::Appl, SemanticRole::PrefixFunc));
        assert_eq!(content_text(&tree, root), vec!["sin"]);
        let inner = child(&tree, root, 0);
        assert_eq!((inner.node_type(), inner.role), (SemanticType::Appl, SemanticRole::SimpleFunc));
        assert_eq!(child(&tree, inner, 0).node_type(), SemanticType::Fenced);

        let tree = build_tokens(&[(Mi, "sin"), (Mi, "sin"), (Mi, "x")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.role, SemanticRole::PrefixFunc);
        let inner = child(&tree, root, 0);
        assert_eq!((inner.node_type(), inner.role), (SemanticType::Appl, SemanticRole::PrefixFunc));
        assert_eq!(child(&tree, inner, 0).text, "x");

        let tree = build_tokens(&[(Mi, "sin"), (Mi, "f"), (Mi, "x")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Appl);
        assert_eq!(child(&tree, root, 0).role, SemanticRole::Implicit);
    }

    #[test]
    fn limit_applied_to_function() {
        let limit = MathElement::with_children(
            MathNodeType::Munder,
            vec![
                MathElement::token(Mi, "lim"),
                MathElement::with_children(
                    MathNodeType::Mrow,
                    vec![
                        MathElement::token(Mi, "x"),
                        MathElement::token(Mo, "\u{2192}"),
                        MathElement::token(Mn, "0"),
                    ],
                ),
            ],
        );
        let row = MathElement::with_children(
            MathNodeType::Mrow,
            vec![
                limit,
                MathElement::token(Mi, "f"),
                MathElement::token(Mo, "("),
                MathElement::token(Mi, "x"),
                MathElement::token(Mo, ")"),
            ],
        );
        let tree = build(ctx(), &MathTree::from(row), &Settings::default()).unwrap();
        let root = tree.root_node().unwrap();
        assert_eq!((root.node_type(), root.role), (SemanticType::Appl, SemanticRole::LimFunc));
        let head = tree.node(root.content()[0]).unwrap();
        assert_eq!(head.node_type(), SemanticType::LimLower);
        let inner = child(&tree, root, 0);
        assert_eq!((inner.node_type(), inner.role), (SemanticType::Appl, SemanticRole::SimpleFunc));
        assert_eq!(content_text(&tree, inner), vec!["f"]);
        assert_eq!(child(&tree, inner, 0).node_type(), SemanticType::Fenced);
    }

    #[test]
    fn nested_integrals_take_nearest_differential() {
        let tree = build_tokens(&[
            (Mo, "\u{222b}"),
            (Mi, "x"),
            (Mo, "+"),
            (Mo, "\u{222b}"),
            (Mi, "y"),
            (Mi, "d"),
            (Mi, "y"),
        ]);
        let root = tree.root_node().unwrap();
        assert_eq!((root.node_type(), root.role), (SemanticType::InfixOp, SemanticRole::Addition));
        let first = child(&tree, root, 0);
        assert_eq!(first.node_type(), SemanticType::Integral);
        assert_eq!(child(&tree, first, 0).text, "x");
        assert_eq!(child(&tree, first, 1).node_type(), SemanticType::Empty);
        let second = child(&tree, root, 1);
        assert_eq!(second.node_type(), SemanticType::Integral);
        assert_eq!(child(&tree, second, 0).text, "y");
        assert_eq!(child(&tree, child(&tree, second, 1), 0).text, "y");

        let tree = build_tokens(&[
            (Mo, "\u{222b}"),
            (Mo, "\u{222b}"),
            (Mi, "f"),
            (Mi, "d"),
            (Mi, "x"),
            (Mi, "d"),
            (Mi, "y"),
        ]);
        let outer = tree.root_node().unwrap();
        assert_eq!(outer.node_type(), SemanticType::Integral);
        assert_eq!(child(&tree, child(&tree, outer, 1), 0).text, "y");
        let inner = child(&tree, outer, 0);
        assert_eq!(inner.node_type(), SemanticType::Integral);
        assert_eq!(child(&tree, inner, 0).text, "f");
        assert_eq!(child(&tree, child(&tree, inner, 1), 0).text, "x");
    }

    #[test]
    fn integral_keeps_multiplication_glyph() {
        let tree = build_tokens(&[
            (Mo, "\u{222b}"),
            (Mo, "\u{22c5}"),
            (Mi, "x"),
            (Mi, "d"),
            (Mi, "x"),
        ]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Integral);
        assert_eq!(content_text(&tree, root), vec!["\u{222b}", "\u{22c5}"]);
        assert_eq!(child(&tree, root, 0).text, "x");
        assert_eq!(child(&tree, root, 1).role, SemanticRole::Differential);
    }
}
