//! Emission configuration: indentation unit and line terminator.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Tab,
    Spaces(usize),
}

impl Indent {
    /// The text of one indentation unit.
    pub fn unit(self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(width) => " ".repeat(width),
        }
    }
}

/// Line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Newline {
    Lf,
    CrLf,
}

impl Newline {
    pub fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
        }
    }
}

/// Emission configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitConfig {
    /// Indentation unit repeated once per scope depth
    pub indent: Indent,
    /// Line terminator appended by `append_line`
    pub newline: Newline,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent: Indent::Tab,
            newline: Newline::Lf,
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set the line terminator
    pub fn with_newline(mut self, newline: Newline) -> Self {
        self.newline = newline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_tabs() {
        let config = EmitConfig::default();
        assert_eq!(config.indent, Indent::Tab);
        assert_eq!(config.newline, Newline::Lf);
    }

    #[test]
    fn test_indent_units() {
        assert_eq!(Indent::Tab.unit(), "\t");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Spaces(0).unit(), "");
    }

    #[test]
    fn test_builder_methods() {
        let config = EmitConfig::new()
            .with_indent(Indent::Spaces(2))
            .with_newline(Newline::CrLf);
        assert_eq!(config.indent, Indent::Spaces(2));
        assert_eq!(config.newline.as_str(), "\r\n");
    }
}
