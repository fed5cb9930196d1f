use std::borrow::Cow;
use std::fmt::{self, Write};

use smallvec::SmallVec;

use crate::nodes::AstNode;
use crate::{Options, Plugins};

/// Attributes of a pseudo-tag, as `(key, value)` pairs in output order.
pub type Attributes = SmallVec<[(&'static str, String); 1]>;

/// A `fmt::Write` that remembers the last character written through it.
///
/// Starts out as if a line feed had just been written, so a line break
/// requested at the very start of the output is dropped.
pub struct WriteWithLast<'w> {
    output: &'w mut dyn Write,
    last: char,
}

impl<'w> WriteWithLast<'w> {
    /// Wrap `output`.
    pub fn new(output: &'w mut dyn Write) -> Self {
        WriteWithLast { output, last: '\n' }
    }

    /// The last character physically written.
    pub fn last_char(&self) -> char {
        self.last
    }
}

impl Write for WriteWithLast<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Some(c) = s.chars().next_back() {
            self.last = c;
        }
        self.output.write_str(s)
    }
}

impl fmt::Debug for WriteWithLast<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WriteWithLast")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

/// Renderer state for a single txt2 render.
///
/// Holds the output, the suppression depth (while positive every write is
/// dropped) and the list nesting level (-1 outside of any list).  A context
/// is created by the driver for one render call and never reused.
pub struct Context<'o> {
    output: WriteWithLast<'o>,

    /// The options in effect for this render.
    pub options: &'o Options,
    /// The plugins in effect for this render.
    pub plugins: &'o Plugins<'o>,

    disable_tags: usize,
    indent_level: isize,
}

impl<'o> Context<'o> {
    /// Create a fresh context writing to `output`.
    pub fn new(output: &'o mut dyn Write, options: &'o Options, plugins: &'o Plugins<'o>) -> Self {
        Context {
            output: WriteWithLast::new(output),
            options,
            plugins,
            disable_tags: 0,
            indent_level: -1,
        }
    }

    /// Called by the driver once the whole tree has been visited.
    ///
    /// A custom formatter may leave the counters unbalanced; that is logged,
    /// not treated as an error.
    pub fn finish(&mut self) {
        if self.disable_tags != 0 {
            tracing::warn!(depth = self.disable_tags, "Unbalanced suppression at end of render");
        }
        if self.indent_level != -1 {
            tracing::warn!(level = self.indent_level, "Unbalanced list nesting at end of render");
        }
        tracing::debug!(last = ?self.output.last_char(), "Finished txt2 render");
    }

    /// Write `s` verbatim, unless output is suppressed.
    pub fn lit(&mut self, s: &str) -> fmt::Result {
        if self.disable_tags > 0 {
            return Ok(());
        }
        self.output.write_str(s)
    }

    /// Write `s` through the escape plugin, unless output is suppressed.
    pub fn out(&mut self, s: &str) -> fmt::Result {
        let plugins = self.plugins;
        let escaped = match plugins.render.escape {
            Some(adapter) => adapter.escape(s),
            None => Cow::Borrowed(s),
        };
        self.lit(&escaped)
    }

    /// Ensure the output ends with a line feed.  Any number of consecutive
    /// calls produce at most one.
    pub fn cr(&mut self) -> fmt::Result {
        if self.output.last_char() != '\n' {
            self.lit("\n")?;
        }
        Ok(())
    }

    /// Write a line feed unconditionally.
    pub fn newline(&mut self) -> fmt::Result {
        self.lit("\n")
    }

    /// The last character written to the output.
    pub fn last_char(&self) -> char {
        self.output.last_char()
    }

    /// Write a `{name key="value" /}` pseudo-tag.
    pub fn tag(&mut self, name: &str, attrs: &[(&str, String)], selfclosing: bool) -> fmt::Result {
        if self.disable_tags > 0 {
            return Ok(());
        }
        let mut tag = String::with_capacity(name.len() + 2);
        tag.push('{');
        tag.push_str(name);
        for (key, value) in attrs {
            write!(tag, " {}=\"{}\"", key, value)?;
        }
        if selfclosing {
            tag.push_str(" /");
        }
        tag.push('}');
        self.lit(&tag)
    }

    /// Diagnostic attributes for `node`: its source position when
    /// [`Render::sourcepos`](crate::options::Render::sourcepos) is set and
    /// the position is known.
    pub fn attrs<'a>(&self, node: &'a AstNode<'a>) -> Attributes {
        let mut attrs = Attributes::new();
        if self.options.render.sourcepos {
            let sourcepos = node.data.borrow().sourcepos;
            if sourcepos.is_known() {
                attrs.push(("data-sourcepos", sourcepos.to_string()));
            }
        }
        attrs
    }

    /// Current suppression depth.
    pub fn suppression_depth(&self) -> usize {
        self.disable_tags
    }

    /// Start dropping output, nesting.  Returns the new depth.
    pub fn enter_suppressed(&mut self) -> usize {
        self.disable_tags += 1;
        self.disable_tags
    }

    /// Undo one [`Context::enter_suppressed`].  Returns the new depth.
    pub fn exit_suppressed(&mut self) -> usize {
        self.disable_tags = self.disable_tags.saturating_sub(1);
        self.disable_tags
    }

    /// Current list nesting level; -1 outside any list, 0 inside a top-level
    /// list.
    pub fn list_level(&self) -> isize {
        self.indent_level
    }

    /// Enter a (possibly nested) list.
    pub fn enter_list(&mut self) {
        self.indent_level += 1;
    }

    /// Leave the innermost list.
    pub fn exit_list(&mut self) {
        self.indent_level = (self.indent_level - 1).max(-1);
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<txt2::txt2::Context>")
    }
}
