// other keepers use HashSet
use std::collections::HashSet;
use std::collections::hash_set::Iter;
// used for sorted variable listings
use std::collections::BTreeSet;

// used to print out readable forms of a construct
use std::fmt;
// used to let a fact be read as its predicate
use std::ops;

// trace the per-rule results
use tracing::{trace, warn};

// our own stuff that we need
use crate::atom::{Atom, AtomHasher, Symbol, Variable};
use crate::combinator::{Combinator, MatchedVariables};
use crate::error::{DatalogError, Result};
use crate::matcher::Matcher;

// ------------- Predicate -------------
/// A name plus an ordered tuple of atoms, possibly holding variables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Predicate {
    name: Symbol,
    atoms: Vec<Atom>,
}

impl Predicate {
    pub fn new(name: Symbol, atoms: Vec<Atom>) -> Self {
        Self { name, atoms }
    }
    pub fn name(&self) -> Symbol {
        self.name
    }
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }
    pub fn arity(&self) -> usize {
        self.atoms.len()
    }
    /// Structural test used by joins and queries: same name and arity, and
    /// every position where neither side is a variable holds equal values.
    ///
    /// Unlike `==`, a variable on either side is a wildcard here.
    pub fn matches(&self, other: &Predicate) -> bool {
        self.name == other.name
            && self.atoms.len() == other.atoms.len()
            && self
                .atoms
                .iter()
                .zip(other.atoms.iter())
                .all(|(a, b)| a.is_variable() || b.is_variable() || a == b)
    }
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.atoms.iter().filter_map(Atom::as_variable)
    }
    pub fn is_ground(&self) -> bool {
        self.variables().next().is_none()
    }
}
impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let atoms: Vec<String> = self.atoms.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.name, atoms.join(", "))
    }
}

// ------------- Fact -------------
/// A ground predicate. Variables are rejected at construction, so nothing
/// downstream ever has to check a constraint against an unresolved variable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fact {
    predicate: Predicate,
}

impl Fact {
    pub fn new(predicate: Predicate) -> Result<Self> {
        if !predicate.is_ground() {
            return Err(DatalogError::NonGroundFact { predicate: predicate.to_string() });
        }
        Ok(Self { predicate })
    }
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
    pub fn into_predicate(self) -> Predicate {
        self.predicate
    }
}
impl ops::Deref for Fact {
    type Target = Predicate;
    fn deref(&self) -> &Self::Target {
        &self.predicate
    }
}
impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.predicate)
    }
}

// ------------- Constraint -------------
/// Restricts the values one variable may take.
#[derive(Debug, Clone)]
pub struct Constraint {
    variable: Variable,
    matcher: Matcher,
}

impl Constraint {
    pub fn new(variable: Variable, matcher: Matcher) -> Self {
        Self { variable, matcher }
    }
    pub fn variable(&self) -> Variable {
        self.variable
    }
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
    /// Checks a candidate binding. Constraints on other variables pass.
    ///
    /// The value must already be resolved; checking against a variable is a
    /// caller bug.
    pub fn check(&self, variable: Variable, value: &Atom) -> bool {
        if self.variable != variable {
            return true;
        }
        debug_assert!(!value.is_variable(), "constraint checked against variable {}", value);
        self.matcher.matches(value)
    }
}
impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.variable, self.matcher)
    }
}

// ------------- Rule -------------
#[derive(Debug, Clone)]
pub struct Rule {
    head: Predicate,
    body: Vec<Predicate>,
    constraints: Vec<Constraint>,
}

impl Rule {
    pub fn new(head: Predicate, body: Vec<Predicate>, constraints: Vec<Constraint>) -> Self {
        Self { head, body, constraints }
    }
    pub fn head(&self) -> &Predicate {
        &self.head
    }
    pub fn body(&self) -> &[Predicate] {
        &self.body
    }
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
    /// All variables occurring in the body: the binding frame of one evaluation.
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.body.iter().flat_map(|p| p.variables()).collect()
    }
    /// Reports the first head variable that the body can never bind.
    pub fn validate(&self) -> Result<()> {
        let bound = self.variables();
        match self.head.variables().find(|v| !bound.contains(v)) {
            Some(missing_variable) => Err(self.invalid(missing_variable)),
            None => Ok(()),
        }
    }
    fn invalid(&self, missing_variable: Variable) -> DatalogError {
        DatalogError::InvalidRule { rule: self.to_string(), missing_variable }
    }
    /// Derives every fact this rule yields over `facts` in one pass, adding
    /// them to `new_facts`. `facts` is never touched.
    ///
    /// A head variable the body cannot bind fails even when the body matches
    /// nothing.
    pub fn apply(&self, facts: &FactSet, new_facts: &mut FactSet) -> Result<()> {
        if let Err(e) = self.validate() {
            warn!(rule = %self, "head variable missing from body");
            return Err(e);
        }
        let variables = MatchedVariables::new(self.variables());
        let bindings = Combinator::new(variables, &self.body, &self.constraints, facts).combine();
        trace!(rule = %self, results = bindings.len(), "rule applied");
        for binding in bindings {
            let mut atoms = Vec::with_capacity(self.head.arity());
            for atom in self.head.atoms() {
                match atom {
                    Atom::Variable(v) => match binding.get(v) {
                        Some(value) => atoms.push(value.clone()),
                        None => {
                            warn!(rule = %self, variable = %v, "head variable missing from body");
                            return Err(self.invalid(*v));
                        }
                    },
                    _ => atoms.push(atom.clone()),
                }
            }
            new_facts.insert(Fact::new(Predicate::new(self.head.name(), atoms))?);
        }
        Ok(())
    }
}
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let body: Vec<String> = self.body.iter().map(|p| p.to_string()).collect();
        write!(f, "{} <- {}", self.head, body.join(", "))?;
        if !self.constraints.is_empty() {
            let constraints: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();
            write!(f, " @ {}", constraints.join(", "))?;
        }
        Ok(())
    }
}

// ------------- Caveat -------------
/// A restriction that holds as soon as any of its queries yields a result.
#[derive(Debug, Clone, Default)]
pub struct Caveat {
    queries: Vec<Rule>,
}

impl Caveat {
    pub fn new(queries: Vec<Rule>) -> Self {
        Self { queries }
    }
    pub fn queries(&self) -> &[Rule] {
        &self.queries
    }
}

// ------------- FactSet -------------
/// An unordered, duplicate free collection of facts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactSet {
    kept: HashSet<Fact, AtomHasher>,
}

impl FactSet {
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns false when an equal fact was already kept.
    pub fn insert(&mut self, fact: Fact) -> bool {
        self.kept.insert(fact)
    }
    /// Inserts every fact and returns how many were actually new.
    pub fn extend<I: IntoIterator<Item = Fact>>(&mut self, facts: I) -> usize {
        facts.into_iter().map(|f| self.kept.insert(f)).filter(|new| *new).count()
    }
    pub fn contains(&self, fact: &Fact) -> bool {
        self.kept.contains(fact)
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
    pub fn iter(&self) -> Iter<'_, Fact> {
        self.kept.iter()
    }
}
impl IntoIterator for FactSet {
    type Item = Fact;
    type IntoIter = std::collections::hash_set::IntoIter<Fact>;
    fn into_iter(self) -> Self::IntoIter {
        self.kept.into_iter()
    }
}
impl<'a> IntoIterator for &'a FactSet {
    type Item = &'a Fact;
    type IntoIter = Iter<'a, Fact>;
    fn into_iter(self) -> Self::IntoIter {
        self.kept.iter()
    }
}
impl FromIterator<Fact> for FactSet {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        Self { kept: iter.into_iter().collect() }
    }
}
