//! Linter descriptors: named switches that gate and tag diagnostics.

use lint_context_core::{
    get_linter_value, linter_option_name, log_lint, LinterOptions, MessageSink, SinkError,
    SyntaxNode,
};

/// A named linter and its default enabled state.
///
/// Bundles the two per-diagnostic decisions every rule makes: option
/// resolution (`linter.<name>` overriding `linter.all`, with this
/// linter's default as the final fallback) and warning emission tagged
/// with the linter's name.
#[derive(Debug, Clone)]
pub struct Linter {
    name: String,
    default_enabled: bool,
    description: String,
}

impl Linter {
    /// Creates a linter that is enabled by default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_enabled: true,
            description: String::new(),
        }
    }

    /// Sets the default enabled state.
    #[must_use]
    pub fn default_enabled(mut self, enabled: bool) -> Self {
        self.default_enabled = enabled;
        self
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the linter's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the linter's description.
    #[must_use]
    pub fn describe(&self) -> &str {
        &self.description
    }

    /// Returns the option name controlling this linter
    /// (`linter.<name>`).
    #[must_use]
    pub fn option_name(&self) -> String {
        linter_option_name(&self.name)
    }

    /// Resolves whether this linter should run under `options`.
    #[must_use]
    pub fn enabled(&self, options: &LinterOptions) -> bool {
        get_linter_value(options, &self.name, self.default_enabled)
    }

    /// Emits a violation unconditionally, tagged with this linter's
    /// name.
    ///
    /// # Errors
    ///
    /// Propagates sink delivery failure.
    pub fn log<S: MessageSink + ?Sized>(
        &self,
        sink: &mut S,
        target: &SyntaxNode,
        message: &str,
    ) -> Result<(), SinkError> {
        log_lint(sink, &self.name, target, message)
    }

    /// Emits a violation only when the linter is enabled under
    /// `options`.
    ///
    /// # Errors
    ///
    /// Propagates sink delivery failure.
    pub fn check<S: MessageSink + ?Sized>(
        &self,
        options: &LinterOptions,
        sink: &mut S,
        target: &SyntaxNode,
        message: &str,
    ) -> Result<(), SinkError> {
        if self.enabled(options) {
            self.log(sink, target, message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lint_context_core::{MemorySink, SourceRange, LINTER_ALL};

    fn target() -> SyntaxNode {
        SyntaxNode::new("decl").with_range(SourceRange::new(0, 10))
    }

    #[test]
    fn option_name_uses_linter_prefix() {
        assert_eq!(Linter::new("foo").option_name(), "linter.foo");
    }

    #[test]
    fn disabled_linter_emits_nothing() {
        let linter = Linter::new("foo");
        let options = LinterOptions::new().set("linter.foo", false);
        let mut sink = MemorySink::new();

        linter
            .check(&options, &mut sink, &target(), "message")
            .expect("memory sink never fails");
        assert!(sink.messages.is_empty());
    }

    #[test]
    fn force_enabled_linter_overrides_global_off() {
        let linter = Linter::new("foo").default_enabled(false);
        let options = LinterOptions::new()
            .set(LINTER_ALL, false)
            .set("linter.foo", true);
        let mut sink = MemorySink::new();

        linter
            .check(&options, &mut sink, &target(), "message")
            .expect("memory sink never fails");
        assert_eq!(sink.messages.len(), 1);
        assert_eq!(sink.messages[0].text, "message [foo]");
    }

    #[test]
    fn linter_default_is_the_final_fallback() {
        let options = LinterOptions::new();
        assert!(Linter::new("foo").enabled(&options));
        assert!(!Linter::new("foo").default_enabled(false).enabled(&options));
    }
}
