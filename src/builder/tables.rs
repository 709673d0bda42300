//! Tables, rows and cells

use super::TreeBuilder;
use crate::mathml_tree::{MathNode, MathNodeId, MathNodeType};
use crate::semantic_tree::SemanticId;
use crate::types::{SemanticError, SemanticRole, SemanticType};

impl TreeBuilder<'_> {
    /// `mtable`. Its role is decided later, from where the table sits.
    pub(super) fn table(
        &mut self,
        id: MathNodeId,
        node: &MathNode,
    ) -> Result<SemanticId, SemanticError> {
        let mut rows = Vec::with_capacity(node.children().len());
        for child in node.children() {
            let row = self.element(*child)?;
            if !self.tree.at(row).is_empty_node() {
                rows.push(row);
            }
        }
        Ok(self.sourced_node(id, SemanticType::Table, SemanticRole::Unknown, rows, Vec::new()))
    }

    /// `mtr` and `mlabeledtr`. A row with a single cell is a LINE holding
    /// the cell's content directly.
    pub(super) fn table_row(
        &mut self,
        id: MathNodeId,
        node: &MathNode,
    ) -> Result<SemanticId, SemanticError> {
        let math = self.math;
        let children = node.children();

        if node.node_type == MathNodeType::Mlabeledtr {
            let Some((label, cells)) = children.split_first() else {
                return Ok(self.sourced_node(id, SemanticType::Row, SemanticRole::Unknown, Vec::new(), Vec::new()));
            };
            let label = self.cell(*label, SemanticRole::Label)?;
            let cells = self.cells(cells)?;
            return Ok(self.sourced_node(id, SemanticType::Row, SemanticRole::Unknown, cells, vec![label]));
        }

        if let [only] = children {
            let cell = math.node(*only)?;
            if cell.node_type == MathNodeType::Mtd {
                let content = self.row(cell.children())?;
                return Ok(self.sourced_node(id, SemanticType::Line, SemanticRole::Unknown, vec![content], Vec::new()));
            }
        }

        let cells = self.cells(children)?;
        Ok(self.sourced_node(id, SemanticType::Row, SemanticRole::Unknown, cells, Vec::new()))
    }

    fn cells(&mut self, ids: &[MathNodeId]) -> Result<Vec<SemanticId>, SemanticError> {
        ids.iter()
            .map(|id| self.cell(*id, SemanticRole::Unknown))
            .collect()
    }

    /// CELL over the inferred row of an `mtd`. Anything else found in a row
    /// is wrapped in a cell without a source element.
    fn cell(&mut self, id: MathNodeId, role: SemanticRole) -> Result<SemanticId, SemanticError> {
        let math = self.math;
        let node = math.node(id)?;
        if node.node_type == MathNodeType::Mtd {
            let content = self.row(node.children())?;
            return Ok(self.sourced_node(id, SemanticType::Cell, role, vec![content], Vec::new()));
        }
        let content = self.element(id)?;
        Ok(self
            .tree
            .create_node(SemanticType::Cell, role, vec![content], Vec::new()))
    }
}
