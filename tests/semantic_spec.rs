mod setup;
use math_semantics::{
    DanglingOperatorPolicy, MathElement, MathTree, SemanticFont, SemanticRole, SemanticType,
    Settings, delimiter::{METRIC_FENCES, NEUTRAL_FENCES, matches},
    enrich_to_string,
    mathml_tree::MathNodeType,
    role_resolver::resolve,
};
use setup::*;
use test_log::test;

// Every function is a group of related behaviours

#[test]
fn a_symbol_classifier() {
    it("should be total and deterministic", || {
        let symbols = &default_ctx().symbols;
        for symbol in ["+", "x", "\u{2211}", "(", "\u{2061}", "sin", "", "\u{1f600}", "qq"] {
            assert_eq!(symbols.classify(symbol), symbols.classify(symbol), "{symbol:?}");
        }
        assert!(symbols.classify("\u{1f600}").is_unknown());
        assert!(symbols.classify("").is_unknown());
        Ok(())
    });

    it("should classify common symbols", || {
        let symbols = &default_ctx().symbols;
        let plus = symbols.classify("+");
        assert_eq!((plus.node_type, plus.role), (SemanticType::Operator, SemanticRole::Addition));
        let sum = symbols.classify("\u{2211}");
        assert_eq!((sum.node_type, sum.role), (SemanticType::LargeOp, SemanticRole::Sum));
        let sin = symbols.classify("sin");
        assert_eq!(sin.node_type, SemanticType::Function);
        let bold_a = symbols.classify("\u{1d400}");
        assert_eq!(bold_a.font, SemanticFont::Bold);
        Ok(())
    });
}

#[test]
fn a_fence_matcher() {
    it("should pair neutral and metric fences only with themselves", || {
        for x in NEUTRAL_FENCES.iter().chain(METRIC_FENCES.iter()) {
            assert!(matches(x, x), "{x:?}");
            for y in NEUTRAL_FENCES.iter().chain(METRIC_FENCES.iter()) {
                if x != y {
                    assert!(!matches(x, y), "{x:?} {y:?}");
                }
            }
        }
        Ok(())
    });

    it("should pair open and close fences through the table", || {
        assert!(matches("(", ")"));
        assert!(matches("[", "]"));
        assert!(!matches("(", "]"));
        assert!(!matches(")", "("));
        Ok(())
    });
}

#[test]
fn a_tree_builder() {
    it("should build an infix addition", || {
        let tree = expect!(tokens(&["2", "+", "3"])).to_build_as(
            SemanticType::InfixOp,
            SemanticRole::Addition,
            &Settings::default(),
        )?;
        let root = tree.root_node()?;
        assert_eq!(texts(&tree, root.content()), ["+"]);
        let children = nodes(&tree, root.children());
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|child| child.node_type() == SemanticType::Number));
        assert_eq!(texts(&tree, root.children()), ["2", "3"]);
        Ok(())
    });

    it("should build a parenthesised identifier", || {
        let tree = expect!(tokens(&["(", "x", ")"])).to_build_as(
            SemanticType::Fenced,
            SemanticRole::LeftRight,
            &Settings::default(),
        )?;
        let root = tree.root_node()?;
        assert_eq!(texts(&tree, root.content()), ["(", ")"]);
        let child = tree.node(root.children()[0])?;
        assert_eq!((child.node_type(), child.text.as_str()), (SemanticType::Identifier, "x"));
        Ok(())
    });

    it("should build a function application", || {
        let tree = expect!(tokens(&["f", "(", "x", ")"])).to_build_as(
            SemanticType::Appl,
            SemanticRole::SimpleFunc,
            &Settings::default(),
        )?;
        let root = tree.root_node()?;
        assert_eq!(texts(&tree, root.content()), ["f"]);
        let argument = tree.node(root.children()[0])?;
        assert_eq!(argument.node_type(), SemanticType::Fenced);
        assert_eq!(texts(&tree, argument.children()), ["x"]);
        Ok(())
    });

    it("should apply a limit to a function application", || {
        let limit = MathElement::with_children(
            MathNodeType::Munder,
            vec![mi("lim"), tokens(&["x", "\u{2192}", "0"])],
        );
        let element = mrow(vec![limit, mi("f"), mo("("), mi("x"), mo(")")]);
        let tree = expect!(element).to_build_as(
            SemanticType::Appl,
            SemanticRole::LimFunc,
            &Settings::default(),
        )?;
        let root = tree.root_node()?;
        assert_eq!(tree.node(root.content()[0])?.node_type(), SemanticType::LimLower);
        let inner = tree.node(root.children()[0])?;
        assert_eq!((inner.node_type(), inner.role), (SemanticType::Appl, SemanticRole::SimpleFunc));
        assert_eq!(texts(&tree, inner.content()), ["f"]);

        let tree = expect!(tokens(&["sin", "sin", "x"])).to_build_as(
            SemanticType::Appl,
            SemanticRole::PrefixFunc,
            &Settings::default(),
        )?;
        let inner = tree.node(tree.root_node()?.children()[0])?;
        assert_eq!((inner.node_type(), inner.role), (SemanticType::Appl, SemanticRole::PrefixFunc));
        Ok(())
    });

    it("should give each integral its own differential", || {
        let tree = expect!(tokens(&["\u{222b}", "x", "+", "\u{222b}", "y", "d", "y"])).to_build_as(
            SemanticType::InfixOp,
            SemanticRole::Addition,
            &Settings::default(),
        )?;
        let integrals = nodes(&tree, tree.root_node()?.children());
        assert!(integrals.iter().all(|node| node.node_type() == SemanticType::Integral));
        assert_eq!(tree.node(integrals[0].children()[1])?.node_type(), SemanticType::Empty);
        assert_eq!(tree.node(integrals[1].children()[1])?.role, SemanticRole::Differential);
        Ok(())
    });

    it("should build a neutral fence", || {
        let tree = expect!(tokens(&["|", "x", "|"])).to_build_as(
            SemanticType::Fenced,
            SemanticRole::Neutral,
            &Settings::default(),
        )?;
        let root = tree.root_node()?;
        assert_eq!(texts(&tree, root.content()), ["|", "|"]);
        Ok(())
    });

    it("should read a leading dash as a negative sign", || {
        for dash in ["-", "\u{2212}"] {
            let tree = expect!(tokens(&[dash, "x"])).to_build_as(
                SemanticType::PrefixOp,
                SemanticRole::Negative,
                &Settings::default(),
            )?;
            let root = tree.root_node()?;
            assert_eq!(texts(&tree, root.children()), ["x"]);
        }
        Ok(())
    });

    it("should keep an inner dash binary", || {
        expect!(tokens(&["a", "-", "b"])).to_build_as(
            SemanticType::InfixOp,
            SemanticRole::Subtraction,
            &Settings::default(),
        )?;
        Ok(())
    });

    it("should degrade unbalanced fences without failing", || {
        let tree = expect!(tokens(&["(", "a", "]", "+", "b"])).to_build(&Settings::default())?;
        let fences = tree
            .iter()
            .filter(|node| node.annotation.has("fence", "unmatched"))
            .count();
        assert_eq!(fences, 2);
        Ok(())
    });

    it("should honour the dangling operator policy", || {
        let tree = expect!(tokens(&["x", "+"])).to_build(&Settings::default())?;
        let root = tree.root_node()?;
        assert_eq!(root.node_type(), SemanticType::PostfixOp);
        assert!(root.annotation.has("dangling", "right"));

        let settings = Settings::builder()
            .dangling_operators(DanglingOperatorPolicy::Operand)
            .build();
        let tree = expect!(tokens(&["x", "+"])).to_build(&settings)?;
        assert!(tree.iter().all(|node| node.node_type() != SemanticType::PostfixOp));
        assert!(tree.iter().any(|node| node.annotation.has("dangling", "right")));
        Ok(())
    });

    it("should build identical trees for identical input", || {
        let element = mrow(vec![
            tokens(&["a", "=", "b"]),
            mo(","),
            MathElement::with_children(MathNodeType::Msup, vec![mi("x"), mn("2")]),
            mtable(&[&[&["1"], &["0"]], &[&["0"], &["1"]]]),
        ]);
        let first = expect!(element.clone()).to_build(&Settings::default())?;
        let second = expect!(element).to_build(&Settings::default())?;
        let shape = |tree: &math_semantics::SemanticTree| {
            tree.iter()
                .map(|node| (node.node_type(), node.role, node.font()))
                .collect::<Vec<_>>()
        };
        assert_eq!(shape(&first), shape(&second));
        Ok(())
    });
}

#[test]
fn a_role_resolver() {
    it("should be idempotent", || {
        let element = mrow(vec![
            mo("-"),
            mo("["),
            mtable(&[&[&["a"], &["b"]], &[&["c"], &["d"]]]),
            mo("]"),
            mo("+"),
            mo("\u{2211}"),
            mo("\u{22c5}"),
            mi("k"),
        ]);
        let mut tree = expect!(element).to_build(&Settings::default())?;
        let once = tree.clone();
        resolve(&mut tree);
        assert_eq!(tree, once);
        Ok(())
    });

    it("should recognise fenced matrices", || {
        let element = mrow(vec![
            mo("("),
            mtable(&[&[&["a"], &["b"]], &[&["c"], &["d"]]]),
            mo(")"),
        ]);
        let tree = expect!(element).to_build_as(
            SemanticType::Fenced,
            SemanticRole::SquareMatrix,
            &Settings::default(),
        )?;
        let table = tree.node(tree.root_node()?.children()[0])?;
        assert_eq!(table.role, SemanticRole::SquareMatrix);
        Ok(())
    });
}

#[test]
fn a_tree_annotator() {
    it("should write identity attributes", || {
        let markup = enrich_to_string(default_ctx(), tokens(&["2", "+", "3"]), &Settings::default())?;
        assert!(markup.starts_with("<mrow "), "{markup}");
        assert!(markup.contains("semantic-type=\"infixop\""), "{markup}");
        assert!(markup.contains("semantic-role=\"addition\""), "{markup}");
        assert!(markup.contains("<mo semantic-font=\"normal\""), "{markup}");
        Ok(())
    });

    it("should honour the attribute prefix", || {
        let settings = Settings::builder().attribute_prefix("data-".to_owned()).build();
        let markup = enrich_to_string(default_ctx(), tokens(&["x"]), &settings)?;
        assert!(markup.contains("data-type=\"identifier\""), "{markup}");
        assert!(!markup.contains("semantic-"), "{markup}");
        Ok(())
    });

    it("should splice empheq wrappers above the table", || {
        let element = mrow(vec![
            mi("a"),
            mo("="),
            mn("2"),
            mo("{"),
            mtable(&[&[&["1"], &["x"]], &[&["0"], &["y"]]]),
        ])
        .with_attribute("class", "empheq");
        let original = MathTree::from(element.clone()).len();
        let (tree, math) = expect!(element).to_enrich(&Settings::default())?;
        assert_eq!(math.len(), original + 2);

        let root = math.root().expect("annotated tree has a root");
        assert_let!(Some(table) = tree.iter().find(|node| node.node_type() == SemanticType::Table));
        let table_element = tree.source(table.id()).expect("table keeps its element");
        assert_eq!(math.node(table_element)?.node_type, MathNodeType::Mtable);

        let ancestors = math.ancestors(table_element)?;
        assert_eq!(ancestors.len(), 3);
        assert!(ancestors[0].index() >= original && ancestors[1].index() >= original);
        assert_eq!(ancestors[2], root);

        let cases = math.node(ancestors[0])?;
        assert_eq!(cases.attribute("semantic-type"), Some("cases"));
        let implicit = math.node(ancestors[1])?;
        assert_eq!(implicit.attribute("semantic-role"), Some("implicit"));
        assert_eq!(math.node(root)?.attribute("semantic-type"), Some("relseq"));
        assert!(math.node(root)?.has_class("empheq"));

        let table_markup = math.node(table_element)?;
        let table_id = table.id().to_string();
        assert_eq!(table_markup.attribute("semantic-id"), Some(table_id.as_str()));
        assert_eq!(table_markup.attribute("semantic-role"), Some("cases"));
        for row in table.children() {
            for cell in tree.node(*row)?.children() {
                let element = tree.source(*cell).expect("cells keep their elements");
                let cell_id = cell.to_string();
                let cell_markup = math.node(element)?;
                assert_eq!(cell_markup.node_type, MathNodeType::Mtd);
                assert_eq!(cell_markup.attribute("semantic-id"), Some(cell_id.as_str()));
                assert_eq!(cell_markup.attribute("semantic-type"), Some("cell"));
            }
        }
        assert!(!math.to_markup()?.contains("annotation-emph"));
        Ok(())
    });
}
