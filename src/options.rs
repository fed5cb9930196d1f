//! Configuration for the formatter.

#[cfg(feature = "bon")]
use bon::Builder;
use std::fmt::{self, Debug, Formatter};

use crate::adapters::EscapeAdapter;

#[derive(Default, Debug, Clone)]
/// Umbrella options struct.
pub struct Options {
    /// Configure render-time options.
    pub render: Render,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Options for formatter functions.
pub struct Render {
    /// The string substituted for each soft line break.
    ///
    /// ```rust
    /// # use txt2::{nodes::NodeValue, render, Arena, Options};
    /// let arena = Arena::new();
    /// let para = arena.alloc(NodeValue::Paragraph.into());
    /// para.append(arena.alloc(NodeValue::Text("Hello.".into()).into()));
    /// para.append(arena.alloc(NodeValue::SoftBreak.into()));
    /// para.append(arena.alloc(NodeValue::Text("World.".into()).into()));
    ///
    /// let mut options = Options::default();
    /// assert_eq!(render(para, &options).unwrap(), "Hello.\nWorld.\n");
    ///
    /// options.render.softbreak = " ".into();
    /// assert_eq!(render(para, &options).unwrap(), "Hello. World.\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = "\n".to_owned(), into))]
    pub softbreak: String,

    /// Replace raw inline and block markup by a placeholder comment.
    ///
    /// ```rust
    /// # use txt2::{nodes::NodeValue, render, Arena, Options};
    /// let arena = Arena::new();
    /// let para = arena.alloc(NodeValue::Paragraph.into());
    /// para.append(arena.alloc(NodeValue::HtmlInline("<b>".into()).into()));
    ///
    /// let mut options = Options::default();
    /// assert_eq!(render(para, &options).unwrap(), "<b>\n");
    ///
    /// options.render.safe = true;
    /// assert_eq!(render(para, &options).unwrap(), "<!-- raw HTML omitted -->\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub safe: bool,

    /// Annotate block quotes with a `data-sourcepos` attribute.
    ///
    /// ```rust
    /// # use txt2::{nodes::{Ast, NodeValue}, render, Arena, Options};
    /// let arena = Arena::new();
    /// let quote = arena.alloc(
    ///     Ast::new_with_sourcepos(NodeValue::BlockQuote, (1, 1, 2, 7).into()).into(),
    /// );
    ///
    /// let mut options = Options::default();
    /// assert_eq!(render(quote, &options).unwrap(), "{((цитата}\n{))}\n");
    ///
    /// options.render.sourcepos = true;
    /// assert_eq!(
    ///     render(quote, &options).unwrap(),
    ///     "{((цитата data-sourcepos=\"1:1-2:7\"}\n{))}\n"
    /// );
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub sourcepos: bool,
}

impl Default for Render {
    fn default() -> Self {
        Render {
            softbreak: "\n".to_owned(),
            safe: false,
            sourcepos: false,
        }
    }
}

#[derive(Default, Debug, Clone, Copy)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Umbrella plugins struct.
pub struct Plugins<'p> {
    /// Configure render-time plugins.
    #[cfg_attr(feature = "bon", builder(default))]
    pub render: RenderPlugins<'p>,
}

#[derive(Default, Clone, Copy)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Plugins for alternative rendering.
pub struct RenderPlugins<'p> {
    /// Provide an escaping function applied to literal text.  `None` leaves
    /// text untouched.
    ///
    /// ```rust
    /// # use txt2::{nodes::NodeValue, render_with_plugins, Arena, Options, Plugins};
    /// let arena = Arena::new();
    /// let para = arena.alloc(NodeValue::Paragraph.into());
    /// para.append(arena.alloc(NodeValue::Text("a*b".into()).into()));
    ///
    /// let escape = |s: &str| s.replace('*', "\\*");
    /// let mut plugins = Plugins::default();
    /// plugins.render.escape = Some(&escape);
    ///
    /// assert_eq!(
    ///     render_with_plugins(para, &Options::default(), &plugins).unwrap(),
    ///     "a\\*b\n"
    /// );
    /// ```
    pub escape: Option<&'p dyn EscapeAdapter>,
}

impl Debug for RenderPlugins<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPlugins")
            .field("escape", &self.escape.map(|_| "impl EscapeAdapter"))
            .finish()
    }
}
