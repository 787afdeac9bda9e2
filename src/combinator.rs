//! The join engine.
//!
//! A depth-first backtracking join: each level binds the first remaining
//! body predicate against every fact that structurally matches it, then
//! recurses on the rest of the body. Every branch owns a cloned binding
//! frame, so a failed branch can never leak partial bindings into a sibling.

use std::collections::HashMap;

use crate::atom::{Atom, AtomHasher, Variable};
use crate::construct::{Constraint, Fact, FactSet, Predicate};

/// A complete assignment, one value per variable of the frame.
pub type Bindings = HashMap<Variable, Atom, AtomHasher>;

// ------------- MatchedVariables -------------
/// An in-progress assignment; `None` marks a variable not bound yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedVariables {
    frame: HashMap<Variable, Option<Atom>, AtomHasher>,
}

impl MatchedVariables {
    pub fn new<I: IntoIterator<Item = Variable>>(variables: I) -> Self {
        Self {
            frame: variables.into_iter().map(|v| (v, None)).collect(),
        }
    }
    /// Binds an unbound variable, or confirms an existing binding.
    /// Returns false when the variable is already bound to another value,
    /// or is not part of the frame at all.
    pub fn insert(&mut self, variable: Variable, value: Atom) -> bool {
        match self.frame.get_mut(&variable) {
            Some(Some(existing)) => *existing == value,
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }
    pub fn get(&self, variable: &Variable) -> Option<&Atom> {
        self.frame.get(variable).and_then(Option::as_ref)
    }
    pub fn len(&self) -> usize {
        self.frame.len()
    }
    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }
    pub fn is_complete(&self) -> bool {
        self.frame.values().all(Option::is_some)
    }
    /// The finished assignment, or None while any variable is unbound.
    pub fn complete(&self) -> Option<Bindings> {
        self.frame
            .iter()
            .map(|(variable, value)| value.clone().map(|v| (*variable, v)))
            .collect()
    }
}

// ------------- Combinator -------------
pub struct Combinator<'a> {
    variables: MatchedVariables,
    predicates: &'a [Predicate],
    constraints: &'a [Constraint],
    all_facts: &'a FactSet,
    current_facts: Vec<&'a Fact>,
}

impl<'a> Combinator<'a> {
    pub fn new(
        variables: MatchedVariables,
        predicates: &'a [Predicate],
        constraints: &'a [Constraint],
        all_facts: &'a FactSet,
    ) -> Self {
        let current_facts = match predicates.first() {
            Some(first) => all_facts.iter().filter(|f| f.matches(first)).collect(),
            None => Vec::new(),
        };
        Self {
            variables,
            predicates,
            constraints,
            all_facts,
            current_facts,
        }
    }

    /// Enumerates every complete, constraint-satisfying extension of the frame.
    /// Result order is unspecified.
    pub fn combine(&self) -> Vec<Bindings> {
        let Some((predicate, rest)) = self.predicates.split_first() else {
            return self.variables.complete().into_iter().collect();
        };
        let mut results = Vec::new();
        for fact in &self.current_facts {
            let Some(variables) = self.bind(predicate, fact) else {
                continue;
            };
            if rest.is_empty() {
                results.extend(variables.complete());
            } else {
                results.extend(
                    Combinator::new(variables, rest, self.constraints, self.all_facts).combine(),
                );
            }
        }
        results
    }

    // Extends a copy of the frame with the values `fact` gives the variables
    // of `predicate`, or None when a constraint or an earlier binding disagrees.
    fn bind(&self, predicate: &Predicate, fact: &Fact) -> Option<MatchedVariables> {
        let mut variables = self.variables.clone();
        for (atom, value) in predicate.atoms().iter().zip(fact.atoms()) {
            let Atom::Variable(variable) = atom else {
                continue;
            };
            if !self.constraints.iter().all(|c| c.check(*variable, value)) {
                return None;
            }
            if !variables.insert(*variable, value.clone()) {
                return None;
            }
        }
        Some(variables)
    }
}
