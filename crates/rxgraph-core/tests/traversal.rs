mod common;

use std::collections::{BTreeSet, HashMap};

use pretty_assertions::assert_eq;
use rxgraph_core::{Attributes, ErrorKind, MemoryStore, RenderConfig};

use common::{
    CountingStore, FailingStore, bare_store, declared_edges, declared_nodes, lines, render,
};

// ============================================================================
// Cycles and depth
// ============================================================================

#[test]
fn test_cycle_terminates_with_single_declarations() {
    let mut store = MemoryStore::new();
    store
        .add_concept("A", Attributes::labeled("Alpha"))
        .add_concept("B", Attributes::labeled("Beta"))
        .add_relation("A", "r1", "B")
        .add_relation("B", "r2", "A");

    let ctx = render(&store, "A", RenderConfig::new(3, 10));

    assert_eq!(
        lines(&ctx),
        vec![
            "A [label=\"Alpha\"];",
            "B [label=\"Beta\"];",
            "B -> A [label=\"r2\"];",
            "A -> B [label=\"r1\"];",
        ]
    );
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn test_depth_bound_stops_long_chains() {
    let store = bare_store(
        &["n1", "n2", "n3", "n4", "n5"],
        &[
            ("n1", "next", "n2"),
            ("n2", "next", "n3"),
            ("n3", "next", "n4"),
            ("n4", "next", "n5"),
        ],
    );

    // n1 at depth 1, n2 at depth 3 (leaf), n3 is never reached.
    let ctx = render(&store, "n1", RenderConfig::new(2, 10));

    assert_eq!(declared_nodes(&ctx), vec!["n1", "n2"]);
    assert_eq!(
        declared_edges(&ctx),
        vec![("n1".to_string(), "n2".to_string())]
    );
    assert_eq!(ctx.stats().leaves, 1);
}

// ============================================================================
// Fan-out collapsing
// ============================================================================

#[test]
fn test_fan_out_collapses_into_proxy() {
    let store = bare_store(
        &["R", "A", "B", "C"],
        &[("R", "x", "A"), ("R", "x", "B"), ("R", "x", "C")],
    );

    let ctx = render(&store, "R", RenderConfig::new(10, 2));

    assert_eq!(
        lines(&ctx),
        vec![
            "R;",
            "__proxy_1 [shape=box,style=dashed,label=\"3\"];",
            "R -> __proxy_1 [style=dashed,label=\"x\"];",
        ]
    );
    assert_eq!(ctx.stats().proxies, 1);
}

#[test]
fn test_collapsed_group_keeps_back_edge() {
    let store = bare_store(
        &["Z", "R", "A", "B"],
        &[
            ("Z", "y", "R"),
            ("R", "x", "A"),
            ("R", "x", "B"),
            ("R", "x", "Z"),
        ],
    );

    let ctx = render(&store, "Z", RenderConfig::new(10, 2));

    assert_eq!(
        lines(&ctx),
        vec![
            "Z;",
            "R;",
            "__proxy_1 [shape=box,style=dashed,label=\"3\"];",
            "R -> __proxy_1 [style=dashed,label=\"x\"];",
            "R -> Z [label=\"x\"];",
            "Z -> R [label=\"y\"];",
        ]
    );
}

#[test]
fn test_group_at_width_limit_is_not_collapsed() {
    let store = bare_store(
        &["R", "A", "B"],
        &[("R", "x", "A"), ("R", "x", "B")],
    );

    let ctx = render(&store, "R", RenderConfig::new(10, 2));

    assert_eq!(
        lines(&ctx),
        vec!["R;", "A;", "R -> A [label=\"x\"];", "B;", "R -> B [label=\"x\"];"]
    );
    assert_eq!(ctx.stats().proxies, 0);
}

#[test]
fn test_only_the_dense_label_collapses() {
    let store = bare_store(
        &["R", "A", "B", "C", "D"],
        &[
            ("R", "many", "A"),
            ("R", "many", "B"),
            ("R", "many", "C"),
            ("R", "one", "D"),
        ],
    );

    let ctx = render(&store, "R", RenderConfig::new(10, 2));

    assert_eq!(declared_nodes(&ctx), vec!["R", "__proxy_1", "D"]);
    assert_eq!(
        declared_edges(&ctx),
        vec![
            ("R".to_string(), "__proxy_1".to_string()),
            ("R".to_string(), "D".to_string()),
        ]
    );
}

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn test_leaf_issues_only_back_reference_lookup() {
    let mut inner = MemoryStore::new();
    inner
        .add_concept("A", Attributes::labeled("A"))
        .add_concept("B", Attributes::labeled("B"))
        .add_concept("C", Attributes::labeled("C"))
        .add_relation("A", "n", "B")
        .add_relation("B", "n", "C")
        .add_relation("B", "p", "A");
    let store = CountingStore::new(inner);

    let ctx = render(&store, "A", RenderConfig::new(1, 10));

    assert_eq!(
        lines(&ctx),
        vec![
            "A [label=\"A\"];",
            "B [label=\"B\"];",
            "B -> A [label=\"p\"];",
            "A -> B [label=\"n\"];",
        ]
    );
    assert_eq!(store.calls("relations_of", "A"), 1);
    assert_eq!(store.calls("relations_of", "B"), 0);
    assert_eq!(store.calls("relations_between", "B"), 1);
    assert_eq!(store.calls("attributes_of", "C"), 0);
    assert_eq!(ctx.stats().leaves, 1);
}

#[test]
fn test_leaf_without_back_relation_adds_nothing() {
    let store = CountingStore::new(bare_store(
        &["A", "B", "C"],
        &[("A", "n", "B"), ("B", "n", "C")],
    ));

    let ctx = render(&store, "A", RenderConfig::new(1, 10));

    assert_eq!(lines(&ctx), vec!["A;", "B;", "A -> B [label=\"n\"];"]);
    assert_eq!(store.calls("relations_between", "B"), 1);
    assert_eq!(store.calls("relations_of", "B"), 0);
}

// ============================================================================
// Degradation
// ============================================================================

#[test]
fn test_missing_attributes_degrade_to_bare_stub() {
    let mut store = MemoryStore::new();
    store
        .add_concept("R", Attributes::labeled("Root"))
        .add_concept("B", Attributes::labeled("Bee"))
        .add_concept("C", Attributes::labeled("Sea"))
        .add_concept("D", Attributes::labeled("Dee"))
        .add_relation("R", "x", "A")
        .add_relation("R", "x", "B")
        .add_relation("R", "x", "C")
        .add_relation("A", "y", "D");

    let ctx = render(&store, "R", RenderConfig::new(10, 10));

    assert_eq!(
        lines(&ctx),
        vec![
            "R [label=\"Root\"];",
            "A;",
            "R -> A [label=\"x\"];",
            "B [label=\"Bee\"];",
            "R -> B [label=\"x\"];",
            "C [label=\"Sea\"];",
            "R -> C [label=\"x\"];",
        ]
    );
    assert_eq!(ctx.degradations().len(), 1);
    assert_eq!(ctx.degradations()[0].key.as_str(), "A");
    assert_eq!(ctx.degradations()[0].kind, ErrorKind::NotFound);
}

#[test]
fn test_failed_relations_keep_node_and_siblings() {
    let mut inner = MemoryStore::new();
    inner
        .add_concept("R", Attributes::labeled("R"))
        .add_concept("A", Attributes::labeled("A"))
        .add_concept("B", Attributes::labeled("B"))
        .add_concept("C", Attributes::labeled("C"))
        .add_relation("R", "x", "A")
        .add_relation("R", "x", "B")
        .add_relation("A", "y", "C");
    let store = FailingStore::new(inner).fail("relations_of", "A");

    let ctx = render(&store, "R", RenderConfig::new(10, 10));

    assert_eq!(
        lines(&ctx),
        vec![
            "R [label=\"R\"];",
            "A [label=\"A\"];",
            "R -> A [label=\"x\"];",
            "B [label=\"B\"];",
            "R -> B [label=\"x\"];",
        ]
    );
    assert_eq!(ctx.degradations().len(), 1);
    assert_eq!(ctx.degradations()[0].key.as_str(), "A");
    assert_eq!(ctx.degradations()[0].kind, ErrorKind::QueryFailed);
}

#[test]
fn test_failed_back_reference_check_degrades_leaf() {
    let store = FailingStore::new(bare_store(
        &["A", "B"],
        &[("A", "n", "B"), ("B", "p", "A")],
    ))
    .fail("relations_between", "B");

    let ctx = render(&store, "A", RenderConfig::new(1, 10));

    assert_eq!(lines(&ctx), vec!["A;", "B;", "A -> B [label=\"n\"];"]);
    assert_eq!(ctx.degradations().len(), 1);
    assert_eq!(ctx.degradations()[0].key.as_str(), "B");
    assert_eq!(ctx.degradations()[0].kind, ErrorKind::QueryFailed);
}

#[test]
fn test_unknown_root_renders_bare() {
    let store = MemoryStore::new();
    let ctx = render(&store, "nothing", RenderConfig::default());

    assert_eq!(lines(&ctx), vec!["nothing;"]);
    assert_eq!(ctx.degradations().len(), 1);
}

// ============================================================================
// Dedup, ordering and determinism
// ============================================================================

#[test]
fn test_diamond_declares_each_node_once() {
    let store = bare_store(
        &["R", "A", "B", "C"],
        &[
            ("R", "x", "A"),
            ("R", "x", "B"),
            ("A", "y", "C"),
            ("B", "y", "C"),
            ("C", "z", "R"),
        ],
    );

    let ctx = render(&store, "R", RenderConfig::new(20, 10));

    let nodes = declared_nodes(&ctx);
    let unique: BTreeSet<&String> = nodes.iter().collect();
    assert_eq!(nodes.len(), unique.len(), "duplicate declaration in {nodes:?}");
    assert_eq!(unique.len(), 4);

    let edges = declared_edges(&ctx);
    let unique_edges: BTreeSet<&(String, String)> = edges.iter().collect();
    assert_eq!(edges.len(), 5);
    assert_eq!(unique_edges.len(), 5);
}

#[test]
fn test_edges_follow_their_endpoints() {
    let store = bare_store(
        &["R", "A", "B", "C"],
        &[
            ("R", "x", "A"),
            ("R", "x", "B"),
            ("A", "y", "C"),
            ("B", "y", "C"),
            ("C", "z", "R"),
            ("C", "self", "C"),
        ],
    );

    let ctx = render(&store, "R", RenderConfig::new(20, 10));

    let mut first_seen: HashMap<String, usize> = HashMap::new();
    for (index, line) in lines(&ctx).into_iter().enumerate() {
        match line.split_once(" -> ") {
            Some((from, rest)) => {
                let to = rest.split([' ', ';']).next().unwrap_or_default();
                assert!(first_seen[from] < index, "{from} declared after {line}");
                assert!(first_seen[to] < index, "{to} declared after {line}");
            }
            None => {
                let id = line.trim_end_matches(';').to_string();
                first_seen.entry(id).or_insert(index);
            }
        }
    }
}

#[test]
fn test_self_loop_renders_once() {
    let store = bare_store(&["A"], &[("A", "self", "A")]);

    let ctx = render(&store, "A", RenderConfig::default());

    assert_eq!(lines(&ctx), vec!["A;", "A -> A [label=\"self\"];"]);
}

#[test]
fn test_output_is_deterministic() {
    let forward = bare_store(
        &["R", "A", "B", "C", "D"],
        &[
            ("R", "x", "A"),
            ("R", "x", "B"),
            ("R", "w", "C"),
            ("C", "v", "D"),
            ("D", "u", "R"),
        ],
    );
    let reversed = bare_store(
        &["D", "C", "B", "A", "R"],
        &[
            ("D", "u", "R"),
            ("C", "v", "D"),
            ("R", "w", "C"),
            ("R", "x", "B"),
            ("R", "x", "A"),
        ],
    );

    let first = render(&forward, "R", RenderConfig::new(6, 1)).into_output();
    let second = render(&forward, "R", RenderConfig::new(6, 1)).into_output();
    let third = render(&reversed, "R", RenderConfig::new(6, 1)).into_output();

    assert_eq!(first, second);
    assert_eq!(first, third);
}

// ============================================================================
// Synthesized identities
// ============================================================================

#[test]
fn test_store_id_cannot_shadow_proxy() {
    let mut store = MemoryStore::new();
    store
        .add_concept("R", Attributes::new())
        .add_concept("__proxy_1", Attributes::labeled("real"))
        .add_relation("R", "a", "__proxy_1")
        .add_relation("R", "x", "A")
        .add_relation("R", "x", "B")
        .add_relation("R", "x", "C");

    let ctx = render(&store, "R", RenderConfig::new(10, 2));

    assert_eq!(
        lines(&ctx),
        vec![
            "R;",
            "__proxy_1 [label=\"real\"];",
            "R -> __proxy_1 [label=\"a\"];",
            "__proxy_2 [shape=box,style=dashed,label=\"3\"];",
            "R -> __proxy_2 [style=dashed,label=\"x\"];",
        ]
    );
}

#[test]
fn test_store_id_reached_after_proxy_is_renamed() {
    let mut store = MemoryStore::new();
    store
        .add_concept("R", Attributes::new())
        .add_concept("__proxy_1", Attributes::labeled("real"))
        .add_relation("R", "m", "A")
        .add_relation("R", "m", "B")
        .add_relation("R", "m", "C")
        .add_relation("R", "z", "__proxy_1");

    let ctx = render(&store, "R", RenderConfig::new(10, 2));

    assert_eq!(
        lines(&ctx),
        vec![
            "R;",
            "__proxy_1 [shape=box,style=dashed,label=\"3\"];",
            "R -> __proxy_1 [style=dashed,label=\"m\"];",
            "__proxy_1_2 [label=\"real\"];",
            "R -> __proxy_1_2 [label=\"z\"];",
        ]
    );
    assert_eq!(ctx.stats().nodes, 3);
}
