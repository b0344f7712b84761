//! Named rule registry
//!
//!     Closures can't refer to themselves, so recursive grammars need a level of
//!     indirection. A [`Grammar`] keeps one slot per rule name: [`Grammar::reference`]
//!     returns a matcher that looks the rule up when it runs, which means a rule can be
//!     used before it is defined, including from inside its own definition.
//!
//!     Every defined rule wraps its match in a named production carrying the rule name.
//!
//!     References between rules hold weak handles to the rule slots, so recursive rules
//!     form no reference cycles. Matchers handed out by a [`CompiledGrammar`] own the whole
//!     rule table instead, and keep working after the grammar itself is dropped. A bare
//!     [`Grammar::reference`] taken outside any rule resolves only while its grammar or a
//!     compiled form of it is alive.
//!
//!     Rules are ordered choice all the way down, so left recursion (`expr := expr "+" ...`)
//!     does not terminate. Write such rules with repetition instead.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use log::debug;
use once_cell::sync::OnceCell;

use crate::config::EngineConfig;
use crate::error::{GrammarError, ParseError};
use crate::matching::{repetition, repetition_bounded, rest_after, rule, Matcher};
use crate::tree::Node;

type Slot<T> = Arc<OnceCell<Matcher<T>>>;

/// Rule table under construction.
pub struct Grammar<T> {
    config: EngineConfig,
    slots: HashMap<String, Slot<T>>,
}

impl<T: 'static> Grammar<T> {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            slots: HashMap::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn slot(&mut self, name: &str) -> &Slot<T> {
        self.slots.entry(name.to_string()).or_default()
    }

    /// Define `name` as `matcher`, wrapped in a production named `name`.
    pub fn define(&mut self, name: &str, matcher: Matcher<T>) -> Result<(), GrammarError> {
        let named = rule(name, matcher);
        self.slot(name)
            .set(named)
            .map_err(|_| GrammarError::DuplicateRule(name.to_string()))
    }

    /// A matcher that runs whatever `name` is defined as at match time.
    pub fn reference(&mut self, name: &str) -> Matcher<T> {
        let slot = Arc::downgrade(self.slot(name));
        Matcher::from_fn(move |tokens| resolve(&slot)?.matches(tokens))
    }

    /// Repetition honoring the configured iteration cap.
    pub fn repetition(&self, matcher: Matcher<T>) -> Matcher<T> {
        match self.config.repetition.max {
            Some(max) => repetition_bounded(matcher, max),
            None => repetition(matcher),
        }
    }

    /// Check that every referenced rule is defined and fix the start rule.
    pub fn build(self, start: &str) -> Result<CompiledGrammar<T>, GrammarError> {
        let mut undefined: Vec<&String> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.get().is_none())
            .map(|(name, _)| name)
            .collect();
        undefined.sort();
        if let Some(name) = undefined.first() {
            return Err(GrammarError::UndefinedRule {
                name: name.to_string(),
            });
        }

        let slots = Arc::new(self.slots);
        let start_matcher = owning_matcher(&slots, start)
            .ok_or_else(|| GrammarError::NoStartRule(start.to_string()))?;

        debug!(
            "grammar built with {} rules, starting at '{}'",
            slots.len(),
            start
        );
        Ok(CompiledGrammar {
            start: start_matcher,
            config: self.config,
            slots,
        })
    }
}

impl<T: 'static> Default for Grammar<T> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn resolve<T>(slot: &Weak<OnceCell<Matcher<T>>>) -> Option<Matcher<T>> {
    slot.upgrade()?.get().cloned()
}

// Holds the table strongly, so the weak references inside the rules stay resolvable.
fn owning_matcher<T: 'static>(
    slots: &Arc<HashMap<String, Slot<T>>>,
    name: &str,
) -> Option<Matcher<T>> {
    slots.get(name)?.get()?;
    let slots = Arc::clone(slots);
    let name = name.to_string();
    Some(Matcher::from_fn(move |tokens| {
        slots.get(&name)?.get()?.matches(tokens)
    }))
}

/// A grammar whose references are all resolved.
pub struct CompiledGrammar<T> {
    start: Matcher<T>,
    config: EngineConfig,
    slots: Arc<HashMap<String, Slot<T>>>,
}

impl<T: 'static> CompiledGrammar<T> {
    /// Run the start rule.
    pub fn matches<'t>(&self, tokens: &'t [T]) -> Option<Node<'t, T>> {
        self.start.matches(tokens)
    }

    /// Run the start rule, enforcing `parse.require_complete`.
    pub fn parse<'t>(&self, tokens: &'t [T]) -> Result<Node<'t, T>, ParseError> {
        let node = self.matches(tokens).ok_or(ParseError::NoMatch)?;
        if self.config.parse.require_complete && !rest_after(tokens, &node).is_empty() {
            return Err(ParseError::Incomplete {
                consumed: node.len(),
                total: tokens.len(),
            });
        }
        Ok(node)
    }

    /// The matcher for a single rule. It stays usable after `self` is dropped.
    pub fn rule(&self, name: &str) -> Option<Matcher<T>> {
        owning_matcher(&self.slots, name)
    }

    /// Defined rule names, sorted.
    pub fn rule_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
