//! Scoped code writer with parent/child composition
//!
//! A [`CodeWriter`] is either the root of an artifact or a child scope entered from a parent. A child mutably
//! borrows its parent's buffer for as long as it lives, so the parent cannot be written, read or released while any
//! child is open. Releasing a child (explicitly via [`CodeWriter::release`] or implicitly on drop) appends the
//! child's buffer verbatim to the parent's buffer.

use super::config::EmitConfig;

/// Indent-scoped text buffer
pub struct CodeWriter<'p> {
    /// This scope's own output
    buffer: String,
    /// Indentation depth (root = 0, child = parent + 1)
    depth: usize,
    /// Configuration, inherited by children
    config: EmitConfig,
    /// Parent buffer, written only on release
    parent: Option<&'p mut String>,
}

impl CodeWriter<'static> {
    /// Create a root writer
    pub fn new(config: EmitConfig) -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            config,
            parent: None,
        }
    }

    /// Take the root's text
    pub fn finish(mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

impl<'p> CodeWriter<'p> {
    /// Enter a child scope one level deeper than `self`
    pub fn child(&mut self) -> CodeWriter<'_> {
        CodeWriter {
            buffer: String::new(),
            depth: self.depth + 1,
            config: self.config,
            parent: Some(&mut self.buffer),
        }
    }

    /// Append text, optionally prefixed by `depth` indentation units
    pub fn append(&mut self, text: &str, with_indent: bool) -> &mut Self {
        if with_indent {
            self.write_indent();
        }
        self.buffer.push_str(text);
        self
    }

    /// Append an indented line
    ///
    /// An empty `text` produces a bare line terminator (no trailing indentation).
    pub fn append_line(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.append(text, true);
        }
        self.line_break()
    }

    /// Append a line terminator
    pub fn line_break(&mut self) -> &mut Self {
        self.buffer.push_str(self.config.newline.as_str());
        self
    }

    /// Release this scope into its parent
    ///
    /// Consumes the scope, so nothing can be appended after release. A root has no parent and releasing it only
    /// drops it; take a root's text with [`CodeWriter::finish`] instead.
    pub fn release(mut self) {
        self.flush();
    }

    /// Current indentation depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// This scope's own (unreleased) text
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Get the configuration
    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    fn write_indent(&mut self) {
        if self.depth > 0 {
            let indent = self.config.indent.unit().repeat(self.depth);
            self.buffer.push_str(&indent);
        }
    }

    fn flush(&mut self) {
        if let Some(parent) = self.parent.as_deref_mut() {
            parent.push_str(&self.buffer);
            self.buffer.clear();
        }
    }
}

impl Drop for CodeWriter<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}
