use std::{
    panic::{UnwindSafe, catch_unwind},
    sync::OnceLock,
};

use math_semantics::{
    MathElement, MathTree, SemanticContext, SemanticError, SemanticNode, SemanticRole,
    SemanticTree, SemanticType, Settings, enrich, mathml_tree::MathNodeType, semantic_tree,
    semantic_tree::SemanticId,
};

static DEFAULT_CONTEXT: OnceLock<SemanticContext> = OnceLock::new();
pub fn default_ctx() -> &'static SemanticContext {
    DEFAULT_CONTEXT.get_or_init(SemanticContext::default)
}

pub fn mi(text: &str) -> MathElement {
    MathElement::token(MathNodeType::Mi, text)
}

pub fn mn(text: &str) -> MathElement {
    MathElement::token(MathNodeType::Mn, text)
}

pub fn mo(text: &str) -> MathElement {
    MathElement::token(MathNodeType::Mo, text)
}

pub fn mrow(children: Vec<MathElement>) -> MathElement {
    MathElement::with_children(MathNodeType::Mrow, children)
}

/// An `mrow` of tokens, each one an `mn` if it starts with a digit, an `mi`
/// if it starts with a letter and an `mo` otherwise.
pub fn tokens(texts: &[&str]) -> MathElement {
    mrow(
        texts
            .iter()
            .map(|text| match text.chars().next() {
                Some(c) if c.is_ascii_digit() => mn(text),
                Some(c) if c.is_alphabetic() => mi(text),
                _ => mo(text),
            })
            .collect(),
    )
}

/// An `mtable` whose cells each hold one row of tokens.
pub fn mtable(rows: &[&[&[&str]]]) -> MathElement {
    MathElement::with_children(
        MathNodeType::Mtable,
        rows.iter()
            .map(|cells| {
                MathElement::with_children(
                    MathNodeType::Mtr,
                    cells
                        .iter()
                        .map(|cell| {
                            MathElement::with_children(
                                MathNodeType::Mtd,
                                vec![tokens(cell)],
                            )
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

pub struct TestMath<'a> {
    pub element: MathElement,
    pub ctx: &'a SemanticContext,
    pub file: &'static str,
    pub line: u32,
    pub code: &'static str,
}

impl TestMath<'_> {
    pub fn to_build(self, settings: &Settings) -> Result<SemanticTree, SemanticError> {
        semantic_tree(self.ctx, &MathTree::from(self.element), settings)
    }

    pub fn to_build_as(
        self,
        node_type: SemanticType,
        role: SemanticRole,
        settings: &Settings,
    ) -> Result<SemanticTree, SemanticError> {
        let (file, line, code) = (self.file, self.line, self.code);
        let tree = self.to_build(settings)?;
        let root = tree.root_node()?;
        assert_eq!(
            (root.node_type(), root.role),
            (node_type, role),
            "root of {code} at {file}:{line}\n{}",
            tree.to_xml()?
        );
        Ok(tree)
    }

    pub fn to_enrich(self, settings: &Settings) -> Result<(SemanticTree, MathTree), SemanticError> {
        let mut math = MathTree::from(self.element);
        let tree = enrich(self.ctx, &mut math, settings)?;
        Ok((tree, math))
    }
}

pub fn expect_impl(
    element: MathElement,
    file: &'static str,
    line: u32,
    code: &'static str,
) -> TestMath<'static> {
    TestMath {
        element,
        ctx: default_ctx(),
        file,
        line,
        code,
    }
}

#[macro_export]
macro_rules! expect {
    ($e:expr) => {
        $crate::expect_impl($e, file!(), line!(), stringify!($e))
    };
}

pub fn it<F>(desc: &str, test_fn: F)
where
    F: FnOnce() -> Result<(), SemanticError> + UnwindSafe,
{
    match catch_unwind(test_fn) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => panic!("Test '{desc}' failed with Result::Err: {e}"),
        Err(panic_payload) => {
            let msg = if let Some(s) = panic_payload.downcast_ref::<&str>() {
                (*s).to_owned()
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "<non-string panic payload>".to_owned()
            };
            panic!("Test '{desc}' panicked: {msg}");
        }
    }
}

/// The nodes behind `ids`.
pub fn nodes<'t>(tree: &'t SemanticTree, ids: &[SemanticId]) -> Vec<&'t SemanticNode> {
    ids.iter()
        .map(|id| tree.node(*id).expect("id handed out by the tree"))
        .collect()
}

/// Texts of the nodes behind `ids`.
pub fn texts<'t>(tree: &'t SemanticTree, ids: &[SemanticId]) -> Vec<&'t str> {
    nodes(tree, ids).into_iter().map(|node| node.text.as_str()).collect()
}

#[macro_export]
macro_rules! assert_let {
    ($pat:pat = $expr:expr, $($arg:tt)+) => {
        let $pat = $expr else {
            panic!($($arg)+);
        };
    };
    ($pat:pat = $expr:expr) => {
        let $pat = $expr else {
            panic!(
                "assert_let failed: pattern `{}` did not match {} at {}:{} \n{:#?}",
                stringify!($pat), stringify!($expr),
                file!(), line!(),
                $expr
            );
        };
    };
}
