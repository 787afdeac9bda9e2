// used to convert date atoms to and from calendar time
use chrono::{DateTime, TimeZone, Utc};
// used to print out readable forms of an atom
use std::fmt;
use std::hash::BuildHasherDefault;
// we will use a fast hashing algo for the small sets and binding frames
use seahash::SeaHasher;

pub type AtomHasher = BuildHasherDefault<SeaHasher>;

// ------------- Symbol -------------
/// An interned name, resolved through a [`crate::symbol::SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(pub u64);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ------------- Variable -------------
/// A logic variable. Its scope is one evaluation of one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(pub u32);

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

// ------------- Atom -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AtomType {
    Symbol,
    Variable,
    Integer,
    String,
    Date,
}

/// A single typed value in facts and rules.
///
/// Equality compares the tag first, so `Integer(5)` never equals
/// `String("5")`. Dates are seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Atom {
    Symbol(Symbol),
    Variable(Variable),
    Integer(i64),
    String(String),
    Date(u64),
}

impl Atom {
    pub fn kind(&self) -> AtomType {
        match self {
            Atom::Symbol(_) => AtomType::Symbol,
            Atom::Variable(_) => AtomType::Variable,
            Atom::Integer(_) => AtomType::Integer,
            Atom::String(_) => AtomType::String,
            Atom::Date(_) => AtomType::Date,
        }
    }
    pub fn variable(v: u32) -> Self {
        Atom::Variable(Variable(v))
    }
    pub fn is_variable(&self) -> bool {
        matches!(self, Atom::Variable(_))
    }
    pub fn as_variable(&self) -> Option<Variable> {
        match self {
            Atom::Variable(v) => Some(*v),
            _ => None,
        }
    }
    // Moments before the epoch cannot be represented and clamp to 0.
    pub fn date_from(moment: DateTime<Utc>) -> Self {
        Atom::Date(u64::try_from(moment.timestamp()).unwrap_or(0))
    }
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Atom::Date(secs) => {
                let secs = i64::try_from(*secs).ok()?;
                Utc.timestamp_opt(secs, 0).single()
            }
            _ => None,
        }
    }
}

impl From<i64> for Atom {
    fn from(i: i64) -> Self {
        Atom::Integer(i)
    }
}
impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Atom::String(s.to_owned())
    }
}
impl From<String> for Atom {
    fn from(s: String) -> Self {
        Atom::String(s)
    }
}
impl From<Symbol> for Atom {
    fn from(s: Symbol) -> Self {
        Atom::Symbol(s)
    }
}
impl From<Variable> for Atom {
    fn from(v: Variable) -> Self {
        Atom::Variable(v)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Atom::Symbol(s) => write!(f, "{}", s),
            Atom::Variable(v) => write!(f, "{}", v),
            Atom::Integer(i) => write!(f, "{}", i),
            Atom::String(s) => write!(f, "{:?}", s),
            Atom::Date(secs) => match self.as_datetime() {
                Some(moment) => write!(f, "{}", moment.to_rfc3339()),
                None => write!(f, "@{}", secs),
            },
        }
    }
}
