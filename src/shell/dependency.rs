//! External tool availability checks.

/// Reports whether a named external tool can be invoked.
pub trait DependencyChecker {
    /// Whether `tool` is found on the system path.
    fn is_available(&self, tool: &str) -> bool;
}

/// Return the first tool in `tools` that `checker` cannot find.
pub fn first_missing<'t, C>(checker: &C, tools: &[&'t str]) -> Option<&'t str>
where
    C: DependencyChecker + ?Sized,
{
    tools.iter().copied().find(|tool| !checker.is_available(tool))
}
