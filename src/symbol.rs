// bimap is a bidirectional hashmap, so lookups can be done both from left and right
use bimap::BiMap;

use crate::atom::{Atom, Symbol};
use crate::construct::{Constraint, Fact, Predicate, Rule};
use crate::matcher::Matcher;
use crate::error::{DatalogError, Result};

/// Interns names as [`Symbol`]s. Ids are handed out densely from 0 and a
/// name keeps its id for the lifetime of the table.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    kept: BiMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns the symbol for `name` and whether it was previously kept.
    pub fn keep(&mut self, name: &str) -> (Symbol, bool) {
        if let Some(symbol) = self.kept.get_by_left(name) {
            return (*symbol, true);
        }
        let symbol = Symbol(self.kept.len() as u64);
        self.kept.insert(name.to_owned(), symbol);
        (symbol, false)
    }
    pub fn insert(&mut self, name: &str) -> Symbol {
        self.keep(name).0
    }
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.kept.get_by_left(name).copied()
    }
    pub fn name(&self, symbol: Symbol) -> Result<&str> {
        self.kept
            .get_by_right(&symbol)
            .map(String::as_str)
            .ok_or(DatalogError::UnknownSymbol(symbol))
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }

    // builders for the layers above
    pub fn symbol(&mut self, name: &str) -> Atom {
        Atom::Symbol(self.insert(name))
    }
    pub fn predicate(&mut self, name: &str, atoms: Vec<Atom>) -> Predicate {
        Predicate::new(self.insert(name), atoms)
    }

    // readable forms, with names instead of ids
    pub fn print_atom(&self, atom: &Atom) -> Result<String> {
        match atom {
            Atom::Symbol(s) => Ok(format!("#{}", self.name(*s)?)),
            _ => Ok(atom.to_string()),
        }
    }
    pub fn print_predicate(&self, predicate: &Predicate) -> Result<String> {
        let atoms = predicate
            .atoms()
            .iter()
            .map(|a| self.print_atom(a))
            .collect::<Result<Vec<String>>>()?;
        Ok(format!("{}({})", self.name(predicate.name())?, atoms.join(", ")))
    }
    pub fn print_fact(&self, fact: &Fact) -> Result<String> {
        self.print_predicate(fact.predicate())
    }
    pub fn print_constraint(&self, constraint: &Constraint) -> Result<String> {
        match constraint.matcher() {
            Matcher::SymbolIn { set, not } => {
                let mut names = set
                    .iter()
                    .map(|s| self.print_atom(&Atom::Symbol(*s)))
                    .collect::<Result<Vec<String>>>()?;
                names.sort();
                let operator = if *not { "not in" } else { "in" };
                Ok(format!("{} {} [{}]", constraint.variable(), operator, names.join(", ")))
            }
            _ => Ok(constraint.to_string()),
        }
    }
    pub fn print_rule(&self, rule: &Rule) -> Result<String> {
        let body = rule
            .body()
            .iter()
            .map(|p| self.print_predicate(p))
            .collect::<Result<Vec<String>>>()?;
        let mut printed = format!("{} <- {}", self.print_predicate(rule.head())?, body.join(", "));
        if !rule.constraints().is_empty() {
            let constraints = rule
                .constraints()
                .iter()
                .map(|c| self.print_constraint(c))
                .collect::<Result<Vec<String>>>()?;
            printed.push_str(" @ ");
            printed.push_str(&constraints.join(", "));
        }
        Ok(printed)
    }
}
