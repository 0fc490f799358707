//! Command registry and dispatcher

use std::collections::HashMap;
use std::io::Write;

use tracing::debug;

use super::handlers::{CreateHandler, DeleteHandler, EditHandler, FetchHandler, HealthHandler};
use super::{CommandName, Context, Handler};
use crate::error::ReminderError;

/// Produces the handler for one invocation
pub type HandlerFactory = fn() -> Box<dyn Handler>;

fn factory<H: Handler + Default + 'static>() -> Box<dyn Handler> {
    Box::new(H::default())
}

/// Mapping from command name to handler factory
pub struct Registry {
    factories: HashMap<CommandName, HandlerFactory>,
}

impl Default for Registry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Registry holding the five built-in commands
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::with_capacity(CommandName::ALL.len()),
        };
        registry.register(CommandName::Create, factory::<CreateHandler>);
        registry.register(CommandName::Edit, factory::<EditHandler>);
        registry.register(CommandName::Fetch, factory::<FetchHandler>);
        registry.register(CommandName::Delete, factory::<DeleteHandler>);
        registry.register(CommandName::Health, factory::<HealthHandler>);
        registry
    }

    fn register(&mut self, name: CommandName, factory: HandlerFactory) {
        self.factories.insert(name, factory);
    }

    /// Registered command names, sorted alphabetically
    #[must_use]
    #[inline]
    pub fn names(&self) -> Vec<CommandName> {
        let mut names: Vec<CommandName> = self.factories.keys().copied().collect();
        names.sort_by_key(|name| name.as_str());
        names
    }

    /// Instantiate the handler registered for `name`
    ///
    /// # Errors
    ///
    /// Returns `UnknownCommand` if no handler is registered under `name`
    #[inline]
    pub fn resolve(&self, name: &str) -> Result<Box<dyn Handler>, ReminderError> {
        let command = name.parse::<CommandName>()?;
        self.factories
            .get(&command)
            .map(|make| make())
            .ok_or_else(|| ReminderError::unknown_command(name))
    }

    /// Resolve `name` and run its handler against `args`
    ///
    /// The handler's result is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is unknown or its handler fails
    #[inline]
    pub fn dispatch(
        &self,
        name: &str,
        args: &[String],
        ctx: &Context<'_>,
        out: &mut dyn Write,
    ) -> Result<(), ReminderError> {
        let handler = self.resolve(name)?;
        debug!("Dispatching '{}'", handler.name());
        handler.run(ctx, args, out)
    }
}
