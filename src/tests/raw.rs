use super::*;
use crate::txt2::RAW_OMITTED;

fn safe() -> Options {
    let mut options = Options::default();
    options.render.safe = true;
    options
}

#[test]
fn html_inline_passes_through() {
    let arena = Arena::new();
    let root = para(
        &arena,
        &[
            node(&arena, NodeValue::HtmlInline("<b>".to_string()), &[]),
            text(&arena, "x"),
            node(&arena, NodeValue::HtmlInline("</b>".to_string()), &[]),
        ],
    );
    txt2(root, "<b>x</b>\n");
}

#[test]
fn html_inline_safe() {
    let arena = Arena::new();
    let root = para(
        &arena,
        &[node(&arena, NodeValue::HtmlInline("<b>".to_string()), &[])],
    );
    txt2_opts(root, &safe(), "<!-- raw HTML omitted -->\n");
}

#[test]
fn html_block_passes_through() {
    let arena = Arena::new();
    let root = doc(
        &arena,
        &[
            para(&arena, &[text(&arena, "a")]),
            html_block(&arena, "<div>x</div>"),
            para(&arena, &[text(&arena, "b")]),
        ],
    );
    txt2(root, "a\n<div>x</div>\nb\n");
}

#[test]
fn html_block_trailing_newline() {
    let arena = Arena::new();
    let root = doc(&arena, &[html_block(&arena, "<div>\n</div>\n")]);
    txt2(root, "<div>\n</div>\n");
}

#[test]
fn html_block_safe() {
    let arena = Arena::new();
    let root = doc(
        &arena,
        &[
            para(&arena, &[text(&arena, "a")]),
            html_block(&arena, "<script>alert(1)</script>"),
        ],
    );
    txt2_opts(root, &safe(), &format!("a\n{}\n", RAW_OMITTED));
}

#[test]
fn safe_leaves_text_alone() {
    let arena = Arena::new();
    let root = para(&arena, &[text(&arena, "<b>")]);
    txt2_opts(root, &safe(), "<b>\n");
}

#[test]
fn raw_markup_is_not_escaped() {
    let arena = Arena::new();
    let root = para(
        &arena,
        &[node(&arena, NodeValue::HtmlInline("<a_b>".to_string()), &[])],
    );

    let escape = |s: &str| s.replace('_', "\\_");
    let mut plugins = Plugins::default();
    plugins.render.escape = Some(&escape);

    txt2_plugins(root, &Options::default(), &plugins, "<a_b>\n");
}
