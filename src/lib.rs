//! A renderer from CommonMark-style document trees to txt2, a plain-text
//! wiki markup.
//!
//! The crate does not parse anything: build a tree of [`nodes::AstNode`]s in
//! an [`Arena`] (or convert one from your parser of choice) and hand its root
//! to [`render`].
//!
//! ```
//! use txt2::nodes::{NodeHeading, NodeValue};
//! use txt2::{render, Arena, Options};
//!
//! let arena = Arena::new();
//! let doc = arena.alloc(NodeValue::Document.into());
//! let heading = arena.alloc(NodeValue::Heading(NodeHeading { level: 1 }).into());
//! heading.append(arena.alloc(NodeValue::Text("Title".to_string()).into()));
//! doc.append(heading);
//!
//! let para = arena.alloc(NodeValue::Paragraph.into());
//! let emph = arena.alloc(NodeValue::Emph.into());
//! emph.append(arena.alloc(NodeValue::Text("hi".to_string()).into()));
//! para.append(emph);
//! doc.append(para);
//!
//! assert_eq!(render(doc, &Options::default()).unwrap(), "Title\n===\n\n__hi__\n");
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]
#![allow(
    unknown_lints,
    clippy::doc_lazy_continuation,
    clippy::too_many_arguments
)]

pub mod adapters;
pub mod arena_tree;
mod error;
pub mod nodes;
pub mod options;
pub mod txt2;

pub use error::{Error, Result};
pub use options::{Options, Plugins};
pub use txt2::format_document as format_txt2;
pub use txt2::format_document_with_plugins as format_txt2_with_plugins;

use nodes::AstNode;

/// Convenience type alias for arena used to create nodes.
pub type Arena<'a> = typed_arena::Arena<AstNode<'a>>;

/// Render a document tree to a txt2 string.
pub fn render<'a>(root: &'a AstNode<'a>, options: &Options) -> Result<String> {
    render_with_plugins(root, options, &Plugins::default())
}

/// Render a document tree to a txt2 string.  Accepts custom plugins.
pub fn render_with_plugins<'a>(
    root: &'a AstNode<'a>,
    options: &Options,
    plugins: &Plugins,
) -> Result<String> {
    let mut s = String::new();
    txt2::format_document_with_plugins(root, options, &mut s, plugins)?;
    Ok(s)
}

/// Create a formatter that overrides the txt2 handler for some node types
/// and falls back to [`txt2::format_node_default`] for the rest.
///
/// ```
/// use txt2::nodes::NodeValue;
/// use txt2::{create_formatter, Arena, Options};
///
/// create_formatter!(SlashEmph, {
///     NodeValue::Emph => |context, node, entering| {
///         context.lit("//")?;
///     },
/// });
///
/// let arena = Arena::new();
/// let para = arena.alloc(NodeValue::Paragraph.into());
/// let emph = arena.alloc(NodeValue::Emph.into());
/// emph.append(arena.alloc(NodeValue::Text("hi".to_string()).into()));
/// para.append(emph);
///
/// let mut out = String::new();
/// SlashEmph::format_document(para, &Options::default(), &mut out).unwrap();
/// assert_eq!(out, "//hi//\n");
/// ```
#[macro_export]
macro_rules! create_formatter {
    ($name:ident, { $( $pat:pat => | $context:ident, $node:ident, $entering:ident | $case:block ),* $(,)? }) => {
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl $name {
            /// Formats a document tree as txt2 using this formatter.
            pub fn format_document<'a>(
                root: &'a $crate::nodes::AstNode<'a>,
                options: &$crate::Options,
                output: &mut dyn ::std::fmt::Write,
            ) -> $crate::Result<()> {
                Self::format_document_with_plugins(root, options, output, &$crate::Plugins::default())
            }

            /// Formats a document tree as txt2 using this formatter.  Accepts custom plugins.
            pub fn format_document_with_plugins<'a>(
                root: &'a $crate::nodes::AstNode<'a>,
                options: &$crate::Options,
                output: &mut dyn ::std::fmt::Write,
                plugins: &$crate::Plugins,
            ) -> $crate::Result<()> {
                $crate::txt2::format_document_with_formatter(
                    root,
                    options,
                    output,
                    plugins,
                    Self::format_node,
                )
            }

            /// Formats a single node on entering or exiting.
            pub fn format_node<'a>(
                context: &mut $crate::txt2::Context<'_>,
                node: &'a $crate::nodes::AstNode<'a>,
                entering: bool,
            ) -> $crate::Result<()> {
                let ast = node.data.borrow();
                match &ast.value {
                    $(
                        #[allow(unreachable_code)]
                        $pat => {
                            #[allow(unused_variables)]
                            let $context = context;
                            #[allow(unused_variables)]
                            let $node = node;
                            #[allow(unused_variables)]
                            let $entering = entering;
                            $case
                            Ok(())
                        }
                    )*
                    _ => $crate::txt2::format_node_default(context, node, entering),
                }
            }
        }
    };
}
