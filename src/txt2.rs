//! The txt2 formatter.
//!
//! txt2 is a plain-text wiki markup: `__emphasis__`, `**strong**`,
//! `__text__(url)` links, `===` headings, `((код` … `))` code blocks and
//! `{((цитата}` … `{))}` quotes.  Formatting is driven by a depth-first walk
//! of the document tree; every node is handed to a formatter function on
//! entering and, unless it is a leaf, again on exiting.

mod context;

pub use context::{Attributes, Context, WriteWithLast};

use std::cmp;
use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::arena_tree::NodeEdge;
use crate::nodes::{
    can_contain_type, parent_list_type, AstNode, ListType, NodeCodeBlock, NodeCustom,
    NodeHeading, NodeLink, NodeList, NodeValue,
};
use crate::{Error, Options, Plugins, Result};

/// Written in place of raw markup when [`Render::safe`](crate::options::Render::safe) is set.
pub const RAW_OMITTED: &str = "<!-- raw HTML omitted -->";

static STRIKETHROUGH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~([^\s]+)~~").unwrap());

/// A node formatter: called with `entering == true` before a node's children
/// are visited and with `entering == false` after (non-leaf nodes only).
pub type Formatter = for<'a, 'o> fn(&mut Context<'o>, &'a AstNode<'a>, bool) -> Result<()>;

/// Formats a document tree as txt2, modified by the given options.
pub fn format_document<'a>(
    root: &'a AstNode<'a>,
    options: &Options,
    output: &mut dyn Write,
) -> Result<()> {
    format_document_with_plugins(root, options, output, &Plugins::default())
}

/// Formats a document tree as txt2, modified by the given options.  Accepts custom plugins.
pub fn format_document_with_plugins<'a>(
    root: &'a AstNode<'a>,
    options: &Options,
    output: &mut dyn Write,
    plugins: &Plugins,
) -> Result<()> {
    format_document_with_formatter(root, options, output, plugins, format_node_default)
}

/// Formats a document tree with a custom formatter function.
///
/// The tree is walked in document order.  Each node is checked for placement
/// (see [`can_contain_type`]) before its formatter runs on entering; the
/// formatter runs again on exiting unless the node is a leaf.
pub fn format_document_with_formatter<'a>(
    root: &'a AstNode<'a>,
    options: &Options,
    output: &mut dyn Write,
    plugins: &Plugins,
    formatter: Formatter,
) -> Result<()> {
    tracing::debug!(
        root = root.data.borrow().value.type_name(),
        "Rendering txt2 document"
    );

    let mut context = Context::new(output, options, plugins);

    for edge in root.traverse() {
        match edge {
            NodeEdge::Start(node) => {
                check_placement(root, node)?;
                formatter(&mut context, node, true)?;
            }
            NodeEdge::End(node) => {
                if !node.data.borrow().value.is_leaf() {
                    formatter(&mut context, node, false)?;
                }
            }
        }
    }

    context.finish();
    Ok(())
}

fn check_placement<'a>(root: &'a AstNode<'a>, node: &'a AstNode<'a>) -> Result<()> {
    let ast = node.data.borrow();

    if let NodeValue::Document = ast.value {
        if node.same_node(root) {
            return Ok(());
        }
        tracing::warn!(sourcepos = %ast.sourcepos, "Document node below the root");
        return Err(Error::UnsupportedNodeType {
            node_type: ast.value.type_name(),
            sourcepos: ast.sourcepos,
        });
    }

    if node.same_node(root) {
        return Ok(());
    }

    match node.parent() {
        Some(parent) if !can_contain_type(parent, &ast.value) => Err(malformed(
            node,
            format!(
                "{} cannot contain {}",
                parent.data.borrow().value.type_name(),
                ast.value.type_name()
            ),
        )),
        _ => Ok(()),
    }
}

fn malformed<'a>(node: &'a AstNode<'a>, reason: String) -> Error {
    let sourcepos = node.data.borrow().sourcepos;
    tracing::warn!(%sourcepos, %reason, "Malformed document tree");
    Error::MalformedTree { sourcepos, reason }
}

/// The default formatter: one handler per node type.
pub fn format_node_default<'a>(
    context: &mut Context,
    node: &'a AstNode<'a>,
    entering: bool,
) -> Result<()> {
    match node.data.borrow().value {
        NodeValue::Document => Ok(()),
        NodeValue::BlockQuote => render_block_quote(context, node, entering),
        NodeValue::List(..) => render_list(context, entering),
        NodeValue::Item(ref nl) => render_item(context, node, nl, entering),
        NodeValue::CodeBlock(ref ncb) => render_code_block(context, ncb),
        NodeValue::HtmlBlock(ref nhb) => render_html_block(context, &nhb.literal),
        NodeValue::CustomBlock(ref nc) => render_custom_block(context, nc, entering),
        NodeValue::Paragraph => render_paragraph(context, entering),
        NodeValue::Heading(ref nh) => render_heading(context, node, nh, entering),
        NodeValue::ThematicBreak => render_thematic_break(context),
        NodeValue::Text(ref literal) => render_text(context, literal),
        NodeValue::SoftBreak => render_soft_break(context),
        NodeValue::LineBreak => render_line_break(context),
        NodeValue::Code(ref code) => render_code(context, &code.literal),
        NodeValue::HtmlInline(ref literal) => render_html_inline(context, literal),
        NodeValue::CustomInline(ref nc) => render_custom_inline(context, nc, entering),
        NodeValue::Emph => render_emph(context),
        NodeValue::Strong => render_strong(context),
        NodeValue::Link(ref nl) => render_link(context, nl, entering),
        NodeValue::Image(ref nl) => render_image(context, nl, entering),
    }
}

/// Rewrites the first `~~word~~` in `literal` to `--word--`.  Later
/// occurrences are left as they are.
pub fn replace_strikethrough(literal: &str) -> std::borrow::Cow<'_, str> {
    STRIKETHROUGH.replace(literal, "--$1--")
}

/// The txt2 heading level (1 to 3) for a source heading level (1 to 6).
pub fn heading_level(level: u8) -> u8 {
    cmp::min(3, level.div_ceil(2))
}

// Inlines.

fn render_text(context: &mut Context, literal: &str) -> Result<()> {
    context.out(&replace_strikethrough(literal))?;
    Ok(())
}

fn render_soft_break(context: &mut Context) -> Result<()> {
    let options = context.options;
    context.lit(&options.render.softbreak)?;
    Ok(())
}

fn render_line_break(context: &mut Context) -> Result<()> {
    context.cr()?;
    Ok(())
}

fn render_emph(context: &mut Context) -> Result<()> {
    context.lit("__")?;
    Ok(())
}

fn render_strong(context: &mut Context) -> Result<()> {
    context.lit("**")?;
    Ok(())
}

fn render_link(context: &mut Context, nl: &NodeLink, entering: bool) -> Result<()> {
    if entering {
        context.lit("__")?;
    } else {
        context.lit(&format!("__({})", nl.url))?;
    }
    Ok(())
}

// The description between entering and exiting is never printed; only the
// outermost of nested images writes its source and title.
fn render_image(context: &mut Context, nl: &NodeLink, entering: bool) -> Result<()> {
    if entering {
        if context.suppression_depth() == 0 {
            context.lit("<> ")?;
            context.lit(&nl.url)?;
            context.lit(" - ")?;
        }
        context.enter_suppressed();
    } else if context.exit_suppressed() == 0 {
        if !nl.title.is_empty() {
            context.lit(&format!(" ({})", nl.title))?;
        }
        context.cr()?;
    }
    Ok(())
}

fn render_code(context: &mut Context, literal: &str) -> Result<()> {
    context.lit(&format!("`{}`", literal))?;
    Ok(())
}

fn render_html_inline(context: &mut Context, literal: &str) -> Result<()> {
    if context.options.render.safe {
        tracing::trace!(len = literal.len(), "Omitting raw inline markup");
        context.lit(RAW_OMITTED)?;
    } else {
        context.lit(literal)?;
    }
    Ok(())
}

fn render_custom_inline(context: &mut Context, nc: &NodeCustom, entering: bool) -> Result<()> {
    let literal = if entering { &nc.on_enter } else { &nc.on_exit };
    if !literal.is_empty() {
        context.lit(literal)?;
    }
    Ok(())
}

// Blocks.

fn render_paragraph(context: &mut Context, entering: bool) -> Result<()> {
    if !entering {
        context.cr()?;
    }
    Ok(())
}

fn render_heading<'a>(
    context: &mut Context,
    node: &'a AstNode<'a>,
    nh: &NodeHeading,
    entering: bool,
) -> Result<()> {
    if !(1..=6).contains(&nh.level) {
        return Err(malformed(
            node,
            format!("heading level {} outside 1..=6", nh.level),
        ));
    }

    match heading_level(nh.level) {
        1 => {
            if !entering {
                context.cr()?;
                context.out("===")?;
                context.newline()?;
                context.newline()?;
            }
        }
        2 => {
            if entering {
                context.out("=== ")?;
            } else {
                context.out(" ===")?;
                context.newline()?;
                context.newline()?;
            }
        }
        _ => {
            if entering {
                context.out("=== ")?;
            } else {
                context.newline()?;
                context.newline()?;
            }
        }
    }
    Ok(())
}

fn render_code_block(context: &mut Context, ncb: &NodeCodeBlock) -> Result<()> {
    // An info string starting with whitespace names no language.
    if let Some(language) = ncb
        .info
        .split(char::is_whitespace)
        .next()
        .filter(|w| !w.is_empty())
    {
        context.out(language)?;
        context.cr()?;
    }
    context.out("((код")?;
    context.cr()?;
    context.out(&ncb.literal)?;
    context.cr()?;
    context.out("))")?;
    Ok(())
}

fn render_thematic_break(context: &mut Context) -> Result<()> {
    context.cr()?;
    context.out("---")?;
    context.cr()?;
    Ok(())
}

fn render_block_quote<'a>(
    context: &mut Context,
    node: &'a AstNode<'a>,
    entering: bool,
) -> Result<()> {
    if entering {
        let attrs = context.attrs(node);
        context.cr()?;
        context.tag("((цитата", &attrs, false)?;
        context.cr()?;
    } else {
        context.cr()?;
        context.tag("))", &[], false)?;
        context.cr()?;
    }
    Ok(())
}

fn render_list(context: &mut Context, entering: bool) -> Result<()> {
    if entering {
        if context.list_level() == -1 {
            context.cr()?;
            context.newline()?;
        } else {
            context.cr()?;
        }
        context.enter_list();
    } else {
        context.cr()?;
        context.exit_list();
    }
    Ok(())
}

fn render_item<'a>(
    context: &mut Context,
    node: &'a AstNode<'a>,
    nl: &NodeList,
    entering: bool,
) -> Result<()> {
    if !entering {
        context.cr()?;
        return Ok(());
    }

    let list_type = parent_list_type(node)
        .ok_or_else(|| malformed(node, "list item outside of a list".to_owned()))?;

    let level = context.list_level();
    if level > 0 {
        context.out(&"   ".repeat(level as usize))?;
    }
    match list_type {
        ListType::Bullet => context.out("- ")?,
        ListType::Ordered => context.out(&format!("{}. ", nl.start))?,
    }
    Ok(())
}

fn render_html_block(context: &mut Context, literal: &str) -> Result<()> {
    context.cr()?;
    if context.options.render.safe {
        tracing::trace!(len = literal.len(), "Omitting raw block markup");
        context.lit(RAW_OMITTED)?;
    } else {
        context.lit(literal)?;
    }
    context.cr()?;
    Ok(())
}

fn render_custom_block(context: &mut Context, nc: &NodeCustom, entering: bool) -> Result<()> {
    context.cr()?;
    render_custom_inline(context, nc, entering)?;
    context.cr()?;
    Ok(())
}
