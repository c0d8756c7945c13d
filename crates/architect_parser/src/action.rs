//! Verb records and the action registry.

use std::collections::BTreeMap;

use architect_foundation::{Error, Result};
use architect_storage::{ActionInfo, Content};
use tracing::warn;

/// The verb handled outside the template path.
pub const TAKE: &str = "take";

/// A player verb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    /// Verb name
    pub verb: String,
    /// Fewest arguments accepted
    pub min_args: usize,
    /// Most arguments accepted
    pub max_args: usize,
    /// Instructions run when the first argument has no override
    pub template: Vec<String>,
}

impl Action {
    /// Creates a verb taking between `min_args` and `max_args` arguments.
    #[must_use]
    pub fn new(verb: impl Into<String>, min_args: usize, max_args: usize) -> Self {
        Self {
            verb: verb.into(),
            min_args,
            max_args,
            template: Vec::new(),
        }
    }

    /// Builds a verb from its raw record.
    #[must_use]
    pub fn from_info(verb: &str, info: &ActionInfo) -> Self {
        Self {
            verb: verb.to_lowercase(),
            min_args: info.min_args,
            max_args: info.max_args.max(info.min_args),
            template: info.template.clone(),
        }
    }

    /// Sets the instruction template.
    #[must_use]
    pub fn with_template<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Checks an argument count against this verb's bounds.
    ///
    /// # Errors
    ///
    /// Returns an argument arity error outside `min_args..=max_args`.
    pub fn check_arity(&self, count: usize) -> Result<()> {
        if (self.min_args..=self.max_args).contains(&count) {
            Ok(())
        } else {
            Err(Error::argument_arity(self.min_args, self.max_args, count))
        }
    }
}

/// Registry of all defined actions.
#[derive(Clone, Debug, Default)]
pub struct ActionRegistry {
    actions: BTreeMap<String, Action>,
}

impl ActionRegistry {
    /// Creates a new empty action registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from the action records of some content.
    #[must_use]
    pub fn from_content(content: &Content) -> Self {
        let mut registry = Self::new();
        for (verb, info) in &content.actions {
            registry.register(Action::from_info(verb, info));
        }
        registry
    }

    /// Registers an action, replacing any with the same verb.
    ///
    /// [`TAKE`] is built in and cannot be redefined; such an action is
    /// dropped.
    pub fn register(&mut self, action: Action) {
        if action.verb == TAKE {
            warn!(verb = TAKE, "ignoring content action for built-in verb");
            return;
        }
        self.actions.insert(action.verb.clone(), action);
    }

    /// Looks up an action by verb.
    #[must_use]
    pub fn get(&self, verb: &str) -> Option<&Action> {
        self.actions.get(verb)
    }

    /// Returns true if the verb is registered or is [`TAKE`].
    #[must_use]
    pub fn is_verb(&self, word: &str) -> bool {
        word == TAKE || self.actions.contains_key(word)
    }

    /// Returns all registered actions in verb order.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.values()
    }

    /// Returns every verb the player can use, [`TAKE`] included, sorted.
    #[must_use]
    pub fn verbs(&self) -> Vec<&str> {
        let mut verbs: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        verbs.push(TAKE);
        verbs.sort_unstable();
        verbs
    }
}
