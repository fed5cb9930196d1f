use std::fmt::Write;

use super::*;
use crate::txt2::{Context, WriteWithLast};

#[test]
fn write_with_last_tracks_final_char() {
    let mut s = String::new();
    let mut w = WriteWithLast::new(&mut s);
    assert_eq!(w.last_char(), '\n');

    w.write_str("abc").unwrap();
    assert_eq!(w.last_char(), 'c');

    w.write_str("").unwrap();
    assert_eq!(w.last_char(), 'c');

    w.write_str("цитата").unwrap();
    assert_eq!(w.last_char(), 'а');

    assert_eq!(s, "abcцитата");
}

#[test]
fn cr_is_idempotent() {
    let options = Options::default();
    let plugins = Plugins::default();
    let mut out = String::new();

    let mut context = Context::new(&mut out, &options, &plugins);
    context.cr().unwrap();
    context.lit("a").unwrap();
    context.cr().unwrap();
    context.cr().unwrap();
    context.cr().unwrap();
    context.lit("b").unwrap();
    context.cr().unwrap();

    assert_eq!(out, "a\nb\n");
}

#[test]
fn newline_is_unconditional() {
    let options = Options::default();
    let plugins = Plugins::default();
    let mut out = String::new();

    let mut context = Context::new(&mut out, &options, &plugins);
    context.newline().unwrap();
    context.lit("a").unwrap();
    context.newline().unwrap();
    context.newline().unwrap();
    context.cr().unwrap();

    assert_eq!(out, "\na\n\n");
}

#[test]
fn suppression_drops_writes() {
    let options = Options::default();
    let plugins = Plugins::default();
    let mut out = String::new();

    let mut context = Context::new(&mut out, &options, &plugins);
    context.lit("x").unwrap();
    assert_eq!(context.enter_suppressed(), 1);
    assert_eq!(context.enter_suppressed(), 2);
    context.lit("hidden").unwrap();
    context.out("hidden").unwrap();
    context.newline().unwrap();
    context.tag("img", &[], true).unwrap();
    assert_eq!(context.last_char(), 'x');
    assert_eq!(context.exit_suppressed(), 1);
    context.lit("still hidden").unwrap();
    assert_eq!(context.exit_suppressed(), 0);
    context.cr().unwrap();
    context.lit("y").unwrap();

    assert_eq!(out, "x\ny");
}

#[test]
fn list_level_counter() {
    let options = Options::default();
    let plugins = Plugins::default();
    let mut out = String::new();

    let mut context = Context::new(&mut out, &options, &plugins);
    assert_eq!(context.list_level(), -1);
    context.enter_list();
    context.enter_list();
    assert_eq!(context.list_level(), 1);
    context.exit_list();
    context.exit_list();
    assert_eq!(context.list_level(), -1);
}

#[test]
fn counters_saturate() {
    let options = Options::default();
    let plugins = Plugins::default();
    let mut out = String::new();

    let mut context = Context::new(&mut out, &options, &plugins);
    assert_eq!(context.exit_suppressed(), 0);
    context.exit_list();
    assert_eq!(context.list_level(), -1);

    context.enter_suppressed();
    context.enter_list();
    context.finish();
}

#[test]
fn tag_formatting() {
    let options = Options::default();
    let plugins = Plugins::default();
    let mut out = String::new();

    let mut context = Context::new(&mut out, &options, &plugins);
    context.tag("((цитата", &[], false).unwrap();
    context
        .tag(
            "img",
            &[("src", "a.png".to_string()), ("alt", "x".to_string())],
            true,
        )
        .unwrap();

    assert_eq!(out, "{((цитата}{img src=\"a.png\" alt=\"x\" /}");
}

#[test]
fn out_escapes_but_lit_does_not() {
    let options = Options::default();
    let escape = |s: &str| s.replace('_', "\\_");
    let mut plugins = Plugins::default();
    plugins.render.escape = Some(&escape);
    let mut out = String::new();

    let mut context = Context::new(&mut out, &options, &plugins);
    context.out("a_b").unwrap();
    context.lit(" __c_d__").unwrap();

    assert_eq!(out, "a\\_b __c_d__");
}

#[test]
fn attrs_follow_sourcepos_option() {
    let arena = Arena::new();
    let known = node_at(&arena, NodeValue::BlockQuote, (3, 1, 4, 10), &[]);
    let unknown = node(&arena, NodeValue::BlockQuote, &[]);
    let plugins = Plugins::default();
    let mut out = String::new();

    let mut options = Options::default();
    {
        let context = Context::new(&mut out, &options, &plugins);
        assert!(context.attrs(known).is_empty());
    }

    options.render.sourcepos = true;
    let context = Context::new(&mut out, &options, &plugins);
    assert_eq!(
        context.attrs(known).as_slice(),
        &[("data-sourcepos", "3:1-4:10".to_string())]
    );
    assert!(context.attrs(unknown).is_empty());
}
