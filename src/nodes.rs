//! The document tree consumed by the txt2 formatter.

use crate::arena_tree::Node;
use std::cell::RefCell;

/// The core AST node enum.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    /// The root of every document.  Contains **blocks**.
    Document,

    /// **Block**. A block quote.  Contains other **blocks**.
    ///
    /// ``` md
    /// > A block quote.
    /// ```
    BlockQuote,

    /// **Block**.  A list.  Contains list items.
    ///
    /// ``` md
    /// * An unordered list
    /// * Another item
    ///
    /// 1. An ordered list
    /// 2. Another item
    /// ```
    List(NodeList),

    /// **Block**.  A list item.  Contains other **blocks**.  Its `start` is the
    /// ordinal printed for this item in an ordered list; the list kind is
    /// taken from the parent [`NodeValue::List`].
    Item(NodeList),

    /// **Block**. A code block.  Contains raw text which is not interpreted
    /// as markup.
    CodeBlock(NodeCodeBlock),

    /// **Block**. A raw HTML block.  Passed through verbatim unless
    /// [`Render::safe`](crate::options::Render::safe) is set.
    HtmlBlock(NodeHtmlBlock),

    /// **Block**. A block whose opening and closing text is supplied by the
    /// producer of the tree.  Contains any nodes.
    CustomBlock(NodeCustom),

    /// **Block**. A paragraph.  Contains **inlines**.
    Paragraph,

    /// **Block**. A heading, levels 1 to 6.  Contains **inlines**.
    Heading(NodeHeading),

    /// **Block**. A thematic break.  Has no children.
    ThematicBreak,

    /// **Inline**.  Textual content.
    Text(String),

    /// **Inline**.  A soft line break.
    SoftBreak,

    /// **Inline**.  A hard line break.
    LineBreak,

    /// **Inline**.  A code span.
    Code(NodeCode),

    /// **Inline**.  Raw HTML contained inline.
    HtmlInline(String),

    /// **Inline**.  An inline whose opening and closing text is supplied by
    /// the producer of the tree.  Contains **inlines**.
    CustomInline(NodeCustom),

    /// **Inline**.  Emphasised text.
    Emph,

    /// **Inline**.  Strong text.
    Strong,

    /// **Inline**.  A link to some URL, with possible title.
    Link(NodeLink),

    /// **Inline**.  An image.  Its children are the image description.
    Image(NodeLink),
}

/// An inline code span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeCode {
    /// The content of the inline code span, not interpreted as markup.
    pub literal: String,
}

/// The details of a link's destination, or an image's source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLink {
    /// The URL for the link destination or image source.
    pub url: String,

    /// The title for the link or image.
    ///
    /// For images this is what the txt2 formatter prints in parentheses after
    /// the source; the description children are never printed.
    pub title: String,
}

/// The metadata of a list; the kind of list and the ordinal it starts at.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NodeList {
    /// The kind of list (bullet (unordered) or ordered).
    pub list_type: ListType,

    /// For ordered lists, the ordinal the list (or item) starts at.
    pub start: usize,
}

/// The type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    /// A bullet list, i.e. an unordered list.
    #[default]
    Bullet,

    /// An ordered list.
    Ordered,
}

/// The metadata and data of a code block.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct NodeCodeBlock {
    /// The info string after the opening fence, if any.  Its first word is
    /// taken as the language, unless the string starts with whitespace.
    pub info: String,

    /// The literal contents of the code block.
    pub literal: String,
}

/// The metadata of a heading.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct NodeHeading {
    /// The level of the header; from 1 to 6.
    pub level: u8,
}

/// The metadata of an included HTML block.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NodeHtmlBlock {
    /// The literal contents of the HTML block.
    pub literal: String,
}

/// Literal text written around a custom node's children.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NodeCustom {
    /// Written on entering the node, when non-empty.
    pub on_enter: String,

    /// Written on exiting the node, when non-empty.
    pub on_exit: String,
}

impl NodeValue {
    /// Indicates whether this node is a block node or inline node.
    pub fn block(&self) -> bool {
        matches!(
            *self,
            NodeValue::Document
                | NodeValue::BlockQuote
                | NodeValue::List(..)
                | NodeValue::Item(..)
                | NodeValue::CodeBlock(..)
                | NodeValue::HtmlBlock(..)
                | NodeValue::CustomBlock(..)
                | NodeValue::Paragraph
                | NodeValue::Heading(..)
                | NodeValue::ThematicBreak
        )
    }

    /// Whether nodes of this type are atomic.  A formatter sees leaf nodes
    /// once, on entering; every other node is seen on entering and exiting.
    pub fn is_leaf(&self) -> bool {
        matches!(
            *self,
            NodeValue::Text(..)
                | NodeValue::SoftBreak
                | NodeValue::LineBreak
                | NodeValue::Code(..)
                | NodeValue::CodeBlock(..)
                | NodeValue::HtmlInline(..)
                | NodeValue::HtmlBlock(..)
                | NodeValue::ThematicBreak
        )
    }

    /// The name of the node type, as used in error messages and logs.
    pub fn type_name(&self) -> &'static str {
        match *self {
            NodeValue::Document => "document",
            NodeValue::BlockQuote => "block_quote",
            NodeValue::List(..) => "list",
            NodeValue::Item(..) => "item",
            NodeValue::CodeBlock(..) => "code_block",
            NodeValue::HtmlBlock(..) => "html_block",
            NodeValue::CustomBlock(..) => "custom_block",
            NodeValue::Paragraph => "paragraph",
            NodeValue::Heading(..) => "heading",
            NodeValue::ThematicBreak => "thematic_break",
            NodeValue::Text(..) => "text",
            NodeValue::SoftBreak => "softbreak",
            NodeValue::LineBreak => "linebreak",
            NodeValue::Code(..) => "code",
            NodeValue::HtmlInline(..) => "html_inline",
            NodeValue::CustomInline(..) => "custom_inline",
            NodeValue::Emph => "emph",
            NodeValue::Strong => "strong",
            NodeValue::Link(..) => "link",
            NodeValue::Image(..) => "image",
        }
    }
}

/// A single node in the document tree.
///
/// The struct contains metadata about the node's position in the original document, and the core
/// enum, `NodeValue`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    /// The node value itself.
    pub value: NodeValue,

    /// The positions in the source document this node comes from.  A start
    /// line of 0 means the position is unknown.
    pub sourcepos: Sourcepos,
}

/// Represents the position in the source this node was parsed from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sourcepos {
    /// The line and column of the first character of this node.
    pub start: LineColumn,
    /// The line and column of the last character of this node.
    pub end: LineColumn,
}

impl Sourcepos {
    /// Whether this position was recorded at all.
    pub fn is_known(&self) -> bool {
        self.start.line != 0
    }
}

impl std::fmt::Display for Sourcepos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column,
        )
    }
}

impl From<(usize, usize, usize, usize)> for Sourcepos {
    fn from(sp: (usize, usize, usize, usize)) -> Sourcepos {
        Sourcepos {
            start: LineColumn {
                line: sp.0,
                column: sp.1,
            },
            end: LineColumn {
                line: sp.2,
                column: sp.3,
            },
        }
    }
}

/// Represents the 1-based line and column positions of a given character.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineColumn {
    /// The 1-based line number of the character.
    pub line: usize,
    /// The 1-based column number of the character.
    pub column: usize,
}

impl From<(usize, usize)> for LineColumn {
    fn from(lc: (usize, usize)) -> LineColumn {
        LineColumn {
            line: lc.0,
            column: lc.1,
        }
    }
}

impl Ast {
    /// Create a new AST node with the given value, starting at the given
    /// position.
    pub fn new(value: NodeValue, start: LineColumn) -> Self {
        Ast {
            value,
            sourcepos: Sourcepos {
                start,
                end: (start.line, 0).into(),
            },
        }
    }

    /// Create a new AST node with the given value and full source position.
    pub fn new_with_sourcepos(value: NodeValue, sourcepos: Sourcepos) -> Self {
        Ast { value, sourcepos }
    }
}

/// The type of a node within the document.
///
/// It is bound by the lifetime `'a`, which corresponds to the `Arena` nodes are allocated in.
/// Child `Ast`s are wrapped in `RefCell` for interior mutability.
pub type AstNode<'a> = Node<'a, RefCell<Ast>>;

impl<'a> From<NodeValue> for AstNode<'a> {
    /// Create a new AST node with the given value.  The sourcepos is set to (0,0)-(0,0).
    fn from(value: NodeValue) -> Self {
        Node::new(RefCell::new(Ast::new_with_sourcepos(
            value,
            Sourcepos::default(),
        )))
    }
}

impl<'a> From<Ast> for AstNode<'a> {
    /// Create a new AST node with the given Ast.
    fn from(ast: Ast) -> Self {
        Node::new(RefCell::new(ast))
    }
}

/// Returns true if the given node can contain a node with the given value.
pub fn can_contain_type<'a>(node: &'a AstNode<'a>, child: &NodeValue) -> bool {
    if let NodeValue::Document = *child {
        return false;
    }

    match node.data.borrow().value {
        NodeValue::Document | NodeValue::BlockQuote | NodeValue::Item(..) => {
            child.block() && !matches!(*child, NodeValue::Item(..))
        }

        NodeValue::List(..) => matches!(*child, NodeValue::Item(..)),

        NodeValue::CustomBlock(..) => !matches!(*child, NodeValue::Item(..)),

        NodeValue::Paragraph
        | NodeValue::Heading(..)
        | NodeValue::Emph
        | NodeValue::Strong
        | NodeValue::Link(..)
        | NodeValue::Image(..)
        | NodeValue::CustomInline(..) => !child.block(),

        _ => false,
    }
}

/// The kind of the list directly containing this node; `None` if the parent
/// is not a list.
pub(crate) fn parent_list_type<'a>(node: &'a AstNode<'a>) -> Option<ListType> {
    let parent = node.parent()?;
    let ast = parent.data.borrow();
    match ast.value {
        NodeValue::List(ref nl) => Some(nl.list_type),
        _ => None,
    }
}
