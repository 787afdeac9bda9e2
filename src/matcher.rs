//! Single-value tests used to constrain variable bindings.
//!
//! Every matcher is total: an atom of the wrong tag simply does not match,
//! so constraint sets need no per-type guards.

use std::collections::HashSet;
// used to print out readable forms of a matcher
use std::fmt;

// the "standard" regular expression package
use regex::Regex;

use crate::atom::{Atom, AtomHasher, Symbol};
use crate::error::{DatalogError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerComparison {
    Equal,
    Lower,
    Larger,
    LowerOrEqual,
    LargerOrEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringComparison {
    Equal,
    Prefix,
    Suffix,
}

/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateComparison {
    Before,
    After,
}

#[derive(Debug, Clone)]
pub enum Matcher {
    Integer { comparison: IntegerComparison, value: i64 },
    IntegerIn { set: HashSet<i64, AtomHasher>, not: bool },
    String { comparison: StringComparison, value: String },
    StringIn { set: HashSet<String, AtomHasher>, not: bool },
    StringRegex(Regex),
    Date { comparison: DateComparison, value: u64 },
    SymbolIn { set: HashSet<Symbol, AtomHasher>, not: bool },
    /// Placeholder for a constraint that could not be built. Never matches.
    Invalid,
}

impl Matcher {
    pub fn integer(comparison: IntegerComparison, value: i64) -> Self {
        Matcher::Integer { comparison, value }
    }
    pub fn integer_in<I: IntoIterator<Item = i64>>(set: I, not: bool) -> Self {
        Matcher::IntegerIn { set: set.into_iter().collect(), not }
    }
    pub fn string<S: Into<String>>(comparison: StringComparison, value: S) -> Self {
        Matcher::String { comparison, value: value.into() }
    }
    pub fn string_in<I, S>(set: I, not: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Matcher::StringIn { set: set.into_iter().map(Into::into).collect(), not }
    }
    pub fn string_regex(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| DatalogError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Matcher::StringRegex(regex))
    }
    pub fn date(comparison: DateComparison, value: u64) -> Self {
        Matcher::Date { comparison, value }
    }
    pub fn symbol_in<I: IntoIterator<Item = Symbol>>(set: I, not: bool) -> Self {
        Matcher::SymbolIn { set: set.into_iter().collect(), not }
    }

    pub fn matches(&self, atom: &Atom) -> bool {
        match (self, atom) {
            (Matcher::Integer { comparison, value }, Atom::Integer(i)) => match comparison {
                IntegerComparison::Equal => i == value,
                IntegerComparison::Lower => i < value,
                IntegerComparison::Larger => i > value,
                IntegerComparison::LowerOrEqual => i <= value,
                IntegerComparison::LargerOrEqual => i >= value,
            },
            (Matcher::IntegerIn { set, not }, Atom::Integer(i)) => set.contains(i) != *not,
            (Matcher::String { comparison, value }, Atom::String(s)) => match comparison {
                StringComparison::Equal => s == value,
                StringComparison::Prefix => s.starts_with(value.as_str()),
                StringComparison::Suffix => s.ends_with(value.as_str()),
            },
            (Matcher::StringIn { set, not }, Atom::String(s)) => set.contains(s) != *not,
            (Matcher::StringRegex(regex), Atom::String(s)) => regex.is_match(s),
            (Matcher::Date { comparison, value }, Atom::Date(d)) => match comparison {
                DateComparison::Before => d <= value,
                DateComparison::After => d >= value,
            },
            (Matcher::SymbolIn { set, not }, Atom::Symbol(s)) => set.contains(s) != *not,
            // wrong tag, or the invalid placeholder
            _ => false,
        }
    }
}

// Set members are listed in sorted order so equal sets always print alike.
fn write_set<T: fmt::Display + Ord>(
    f: &mut fmt::Formatter,
    set: &HashSet<T, AtomHasher>,
    not: bool,
) -> fmt::Result {
    let mut members: Vec<&T> = set.iter().collect();
    members.sort();
    let members: Vec<String> = members.iter().map(|m| m.to_string()).collect();
    let operator = if not { "not in" } else { "in" };
    write!(f, "{} [{}]", operator, members.join(", "))
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Matcher::Integer { comparison, value } => {
                let operator = match comparison {
                    IntegerComparison::Equal => "==",
                    IntegerComparison::Lower => "<",
                    IntegerComparison::Larger => ">",
                    IntegerComparison::LowerOrEqual => "<=",
                    IntegerComparison::LargerOrEqual => ">=",
                };
                write!(f, "{} {}", operator, value)
            }
            Matcher::IntegerIn { set, not } => write_set(f, set, *not),
            Matcher::String { comparison, value } => {
                let operator = match comparison {
                    StringComparison::Equal => "==",
                    StringComparison::Prefix => "starts with",
                    StringComparison::Suffix => "ends with",
                };
                write!(f, "{} {:?}", operator, value)
            }
            Matcher::StringIn { set, not } => {
                let quoted: HashSet<String, AtomHasher> = set.iter().map(|s| format!("{:?}", s)).collect();
                write_set(f, &quoted, *not)
            }
            Matcher::StringRegex(regex) => write!(f, "matches /{}/", regex.as_str()),
            Matcher::Date { comparison, value } => {
                let operator = match comparison {
                    DateComparison::Before => "before",
                    DateComparison::After => "after",
                };
                write!(f, "{} {}", operator, Atom::Date(*value))
            }
            Matcher::SymbolIn { set, not } => write_set(f, set, *not),
            Matcher::Invalid => write!(f, "invalid"),
        }
    }
}
