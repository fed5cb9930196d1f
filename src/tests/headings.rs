use super::*;
use crate::txt2::heading_level;

#[test]
fn level_mapping() {
    let mapped: Vec<u8> = (1..=6).map(heading_level).collect();
    assert_eq!(mapped, [1, 1, 2, 2, 3, 3]);
}

#[test]
fn title() {
    let arena = Arena::new();
    let root = doc(&arena, &[heading(&arena, 1, &[text(&arena, "Title")])]);
    txt2(root, "Title\n===\n\n");
}

#[test]
fn level_two_is_level_one() {
    let arena = Arena::new();
    let root = doc(&arena, &[heading(&arena, 2, &[text(&arena, "Title")])]);
    txt2(root, "Title\n===\n\n");
}

#[test]
fn level_three_and_four() {
    let arena = Arena::new();
    let root = doc(
        &arena,
        &[
            heading(&arena, 3, &[text(&arena, "Sub")]),
            heading(&arena, 4, &[text(&arena, "Also")]),
        ],
    );
    txt2(root, "=== Sub ===\n\n=== Also ===\n\n");
}

#[test]
fn level_five_and_six() {
    let arena = Arena::new();
    let root = doc(
        &arena,
        &[
            heading(&arena, 5, &[text(&arena, "Deep")]),
            heading(&arena, 6, &[text(&arena, "Deeper")]),
        ],
    );
    txt2(root, "=== Deep\n\n=== Deeper\n\n");
}

#[test]
fn heading_then_paragraph() {
    let arena = Arena::new();
    let root = doc(
        &arena,
        &[
            heading(&arena, 1, &[text(&arena, "Title")]),
            para(&arena, &[text(&arena, "Body.")]),
        ],
    );
    txt2(root, "Title\n===\n\nBody.\n");
}

#[test]
fn heading_with_inlines() {
    let arena = Arena::new();
    let root = doc(
        &arena,
        &[heading(
            &arena,
            3,
            &[
                text(&arena, "A "),
                node(&arena, NodeValue::Emph, &[text(&arena, "b")]),
            ],
        )],
    );
    txt2(root, "=== A __b__ ===\n\n");
}

#[test]
fn heading_markers_are_escaped() {
    let arena = Arena::new();
    let root = doc(&arena, &[heading(&arena, 3, &[text(&arena, "x")])]);

    let escape = |s: &str| s.replace('=', "\\=");
    let mut plugins = Plugins::default();
    plugins.render.escape = Some(&escape);

    txt2_plugins(root, &Options::default(), &plugins, "\\=\\=\\= x \\=\\=\\=\n\n");
}
