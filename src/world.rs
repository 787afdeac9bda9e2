//! Fixpoint evaluation and querying.

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::construct::{Caveat, Fact, FactSet, Predicate, Rule};
use crate::error::{DatalogError, Result};

/// Holds the facts and rules of one authorization evaluation.
///
/// There is no internal locking: build one world per evaluation, or
/// serialize access to it.
#[derive(Debug, Clone, Default)]
pub struct World {
    facts: FactSet,
    rules: Vec<Rule>,
    config: EngineConfig,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
    /// Returns false if an equal fact was already known.
    pub fn add_fact(&mut self, fact: Fact) -> bool {
        self.facts.insert(fact)
    }
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }
    pub fn facts(&self) -> &FactSet {
        &self.facts
    }
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Applies every rule until a round derives nothing new.
    ///
    /// Each round applies all rules to the whole current fact set and buffers
    /// the results; they are merged only once every rule applied cleanly, so
    /// a failing round leaves the facts as they were. Gives up with
    /// [`DatalogError::NonTermination`] after `max_iterations` rounds.
    pub fn run(&mut self) -> Result<()> {
        let max_iterations = self.config.max_iterations;
        for round in 0..max_iterations {
            let mut new_facts = FactSet::new();
            for rule in &self.rules {
                rule.apply(&self.facts, &mut new_facts)?;
            }
            let added = self.facts.extend(new_facts);
            debug!(round, added, total = self.facts.len(), "fixpoint round");
            if added == 0 {
                return Ok(());
            }
        }
        warn!(iterations = max_iterations, rules = self.rules.len(), "no fixpoint reached");
        Err(DatalogError::NonTermination { iterations: max_iterations })
    }

    /// Every fact matching `pattern`; variables in the pattern match anything.
    pub fn query(&self, pattern: &Predicate) -> FactSet {
        self.facts.iter().filter(|f| f.matches(pattern)).cloned().collect()
    }

    /// Evaluates `rule` once against the current facts without keeping the
    /// results in the world.
    pub fn query_rule(&self, rule: &Rule) -> Result<FactSet> {
        let mut new_facts = FactSet::new();
        rule.apply(&self.facts, &mut new_facts)?;
        Ok(new_facts)
    }

    /// A caveat holds when any of its queries yields at least one fact.
    /// A caveat without queries never holds.
    pub fn check_caveat(&self, caveat: &Caveat) -> Result<bool> {
        for query in caveat.queries() {
            if !self.query_rule(query)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
