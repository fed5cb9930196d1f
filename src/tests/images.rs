use super::*;

#[test]
fn image_with_title() {
    let arena = Arena::new();
    let root = para(
        &arena,
        &[image(&arena, "img.png", "Alt", &[text(&arena, "description")])],
    );
    txt2(root, "<> img.png -  (Alt)\n");
}

#[test]
fn image_without_title() {
    let arena = Arena::new();
    let root = para(&arena, &[image(&arena, "img.png", "", &[text(&arena, "d")])]);
    txt2(root, "<> img.png - \n");
}

#[test]
fn description_is_suppressed() {
    let arena = Arena::new();
    let root = para(
        &arena,
        &[image(
            &arena,
            "a.png",
            "T",
            &[
                text(&arena, "plain "),
                node(&arena, NodeValue::Emph, &[text(&arena, "emph")]),
                code(&arena, "code"),
                node(&arena, NodeValue::LineBreak, &[]),
                node(&arena, NodeValue::HtmlInline("<b>".to_string()), &[]),
            ],
        )],
    );
    txt2(root, "<> a.png -  (T)\n");
}

#[test]
fn text_after_image() {
    let arena = Arena::new();
    let root = para(
        &arena,
        &[
            text(&arena, "before "),
            image(&arena, "i.png", "T", &[text(&arena, "x")]),
            text(&arena, "after"),
        ],
    );
    txt2(root, "before <> i.png -  (T)\nafter\n");
}

#[test]
fn nested_images() {
    let arena = Arena::new();
    let root = para(
        &arena,
        &[image(
            &arena,
            "outer.png",
            "Outer",
            &[
                text(&arena, "a"),
                image(&arena, "inner.png", "Inner", &[text(&arena, "b")]),
                text(&arena, "c"),
            ],
        )],
    );
    txt2(root, "<> outer.png -  (Outer)\n");
}

#[test]
fn sibling_images() {
    let arena = Arena::new();
    let root = para(
        &arena,
        &[
            image(&arena, "one.png", "1", &[]),
            image(&arena, "two.png", "2", &[]),
        ],
    );
    txt2(root, "<> one.png -  (1)\n<> two.png -  (2)\n");
}

#[test]
fn image_inside_link() {
    let arena = Arena::new();
    let root = para(
        &arena,
        &[link(
            &arena,
            "/page",
            &[image(&arena, "i.png", "T", &[text(&arena, "x")])],
        )],
    );
    txt2(root, "__<> i.png -  (T)\n__(/page)\n");
}

#[test]
fn image_url_is_not_escaped() {
    let arena = Arena::new();
    let root = para(&arena, &[image(&arena, "a_b.png", "c_d", &[])]);

    let escape = |s: &str| s.replace('_', "\\_");
    let mut plugins = Plugins::default();
    plugins.render.escape = Some(&escape);

    txt2_plugins(root, &Options::default(), &plugins, "<> a_b.png -  (c_d)\n");
}
