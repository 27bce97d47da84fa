//! Ordered command registries.
//!
//! A [`Registry`] holds commands in registration order and resolves an
//! identifier to the first command whose id matches exactly. The same type
//! serves the top-level command list and the nested subcommand list of a
//! compound command; only the error reported for an unresolved id differs,
//! which is what [`Scope`] captures.

use tracing::debug;

use crate::cli::commands::{Command, Context};
use crate::error::{Result, ToolboxError};

/// Where a registry sits in the command tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Top-level commands.
    Commands,
    /// Subcommands of the named parent command.
    Subcommands { parent: &'static str },
}

/// Ordered collection of commands, queried by identifier.
pub struct Registry<C: ?Sized = dyn Command> {
    scope: Scope,
    entries: Vec<Box<C>>,
}

impl<C: ?Sized> Registry<C> {
    /// Create an empty top-level registry.
    pub fn new() -> Self {
        Self::scoped(Scope::Commands)
    }

    /// Create an empty registry of subcommands for `parent`.
    pub fn subcommands_of(parent: &'static str) -> Self {
        Self::scoped(Scope::Subcommands { parent })
    }

    fn scoped(scope: Scope) -> Self {
        Self {
            scope,
            entries: Vec::new(),
        }
    }

    /// Where this registry sits in the command tree.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Iterate over all entries in registration order.
    pub fn list_all(&self) -> impl Iterator<Item = &C> {
        self.entries.iter().map(|c| c.as_ref())
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Command + ?Sized> Registry<C> {
    /// Append a command.
    ///
    /// Ids are not deduplicated; registering the same id twice leaves the
    /// second entry unreachable.
    pub fn register(&mut self, command: Box<C>) {
        debug_assert!(!command.id().is_empty(), "command ids must not be empty");
        debug_assert!(
            self.lookup(command.id()).is_none(),
            "command id registered twice: {}",
            command.id()
        );
        self.entries.push(command);
    }

    /// Get the first command whose id equals `id` (case-sensitive).
    pub fn lookup(&self, id: &str) -> Option<&C> {
        self.list_all().find(|c| c.id() == id)
    }

    /// Ids in registration order.
    pub fn ids(&self) -> Vec<&str> {
        self.list_all().map(|c| c.id()).collect()
    }

    /// Ids joined with `|`, as shown in usage lines.
    pub fn usage_ids(&self) -> String {
        self.ids().join("|")
    }

    /// Resolve the first token to a command, check its dependencies and run
    /// it with the remaining tokens.
    pub fn dispatch(&self, tokens: &[String], ctx: &mut Context<'_>) -> Result<()> {
        let (id, rest) = match tokens.split_first() {
            Some((id, rest)) => (Some(id.as_str()), rest),
            None => (None, tokens),
        };

        let command = id
            .and_then(|id| self.lookup(id))
            .ok_or_else(|| self.unresolved(id))?;

        debug!("Resolved {:?} to {}", self.scope, command.id());
        command.assert_dependencies_satisfied(ctx.shell)?;
        command.execute(rest, ctx)
    }

    fn unresolved(&self, id: Option<&str>) -> ToolboxError {
        match (self.scope, id) {
            (Scope::Commands, Some(id)) => ToolboxError::UnknownCommand { id: id.to_string() },
            (Scope::Commands, None) => ToolboxError::NoCommand,
            (Scope::Subcommands { parent }, id) => ToolboxError::UnknownSubcommand {
                parent: parent.to_string(),
                id: id.map(String::from),
                available: self.usage_ids(),
            },
        }
    }
}

impl<C: ?Sized> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockShell;
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    struct Stub {
        id: &'static str,
        calls: Rc<RefCell<Vec<Vec<String>>>>,
    }

    impl Command for Stub {
        fn id(&self) -> &str {
            self.id
        }
        fn execute(&self, args: &[String], _ctx: &mut Context<'_>) -> Result<()> {
            self.calls.borrow_mut().push(args.to_vec());
            Ok(())
        }
    }

    fn stub(id: &'static str) -> Box<Stub> {
        Box::new(Stub {
            id,
            calls: Rc::default(),
        })
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn registry_new_is_empty() {
        let registry: Registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.scope(), Scope::Commands);
    }

    #[test]
    fn lookup_is_exact() {
        let mut registry: Registry<Stub> = Registry::new();
        registry.register(stub("build"));
        registry.register(stub("run"));

        assert_eq!(registry.lookup("run").map(|c| c.id()), Some("run"));
        assert!(registry.lookup("Run").is_none());
        assert!(registry.lookup("ru").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn lookup_is_repeatable() {
        let mut registry: Registry<Stub> = Registry::new();
        registry.register(stub("build"));

        let first = registry.lookup("build").map(|c| c as *const Stub);
        let second = registry.lookup("build").map(|c| c as *const Stub);
        assert_eq!(first, second);
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry: Registry<Stub> = Registry::new();
        registry.register(stub("help"));
        registry.register(stub("build"));
        registry.register(stub("run"));

        assert_eq!(registry.ids(), vec!["help", "build", "run"]);
        assert_eq!(registry.usage_ids(), "help|build|run");
    }

    #[test]
    fn subcommand_dispatch_forwards_rest() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry: Registry<Stub> = Registry::subcommands_of("heroku");
        registry.register(Box::new(Stub {
            id: "init",
            calls: Rc::clone(&calls),
        }));
        let commands = Registry::new();
        let shell = MockShell::new();
        let mut ui = MockUI::new();
        let mut ctx = Context::new("toolbox", Path::new("."), &shell, &mut ui, &commands);

        registry.dispatch(&tokens(&["init"]), &mut ctx).unwrap();
        registry
            .dispatch(&tokens(&["init", "--verbose"]), &mut ctx)
            .unwrap();

        assert_eq!(*calls.borrow(), vec![vec![], tokens(&["--verbose"])]);
    }

    #[test]
    fn unknown_subcommand_lists_available() {
        let mut registry: Registry<Stub> = Registry::subcommands_of("heroku");
        registry.register(stub("init"));
        registry.register(stub("push"));
        let commands = Registry::new();
        let shell = MockShell::new();
        let mut ui = MockUI::new();
        let mut ctx = Context::new("toolbox", Path::new("."), &shell, &mut ui, &commands);

        let err = registry
            .dispatch(&tokens(&["deploy"]), &mut ctx)
            .unwrap_err();

        assert!(err.to_string().contains("deploy"));
        assert!(err.to_string().contains("init|push"));
    }

    #[test]
    fn missing_subcommand_lists_available() {
        let mut registry: Registry<Stub> = Registry::subcommands_of("heroku");
        registry.register(stub("init"));
        registry.register(stub("push"));
        let commands = Registry::new();
        let shell = MockShell::new();
        let mut ui = MockUI::new();
        let mut ctx = Context::new("toolbox", Path::new("."), &shell, &mut ui, &commands);

        let err = registry.dispatch(&[], &mut ctx).unwrap_err();

        assert!(matches!(
            err,
            ToolboxError::UnknownSubcommand { id: None, .. }
        ));
        assert!(err.to_string().contains("init|push"));
    }

    #[test]
    fn empty_tokens_at_top_level_is_no_command() {
        let registry: Registry<Stub> = Registry::new();
        let commands = Registry::new();
        let shell = MockShell::new();
        let mut ui = MockUI::new();
        let mut ctx = Context::new("toolbox", Path::new("."), &shell, &mut ui, &commands);

        let err = registry.dispatch(&[], &mut ctx).unwrap_err();
        assert!(matches!(err, ToolboxError::NoCommand));
    }
}
