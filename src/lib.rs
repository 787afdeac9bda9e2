//! Claimlog – the datalog evaluation kernel beneath a claim and caveat token format.
//!
//! Callers present ground *facts* (claims, request context) and *rules*;
//! the engine computes every fact the rules can derive and answers queries
//! against that closure. A *caveat* is a set of rules of which at least one
//! must produce a result for a restriction to be satisfied.
//!
//! ## Modules
//! * [`atom`] – The tagged value model: symbols, variables, integers, strings and dates.
//! * [`matcher`] – Single-value tests (comparisons, set membership, prefix/suffix, regex).
//! * [`construct`] – Predicates, facts, constraints, rules, caveats and the
//!   duplicate free [`construct::FactSet`].
//! * [`combinator`] – The backtracking join enumerating consistent variable bindings.
//! * [`world`] – Bounded fixpoint evaluation, queries and caveat checks.
//! * [`symbol`] – Interning of names into symbols and readable printing.
//! * [`config`] – Engine settings such as the iteration cap.
//! * [`logging`] – A `tracing` subscriber for tests and embedding binaries.
//!
//! ## Quick Start
//! ```
//! use claimlog::{Atom, Fact, Predicate, Rule, SymbolTable, Variable, World};
//! let mut symbols = SymbolTable::new();
//! let mut world = World::new();
//! let alice = symbols.symbol("alice");
//! let file = symbols.symbol("file1");
//! let read = symbols.symbol("read");
//! world.add_fact(Fact::new(symbols.predicate("owner", vec![alice.clone(), file.clone()])).unwrap());
//! let x = Atom::Variable(Variable(0));
//! let y = Atom::Variable(Variable(1));
//! world.add_rule(Rule::new(
//!     symbols.predicate("right", vec![x.clone(), read.clone(), y.clone()]),
//!     vec![symbols.predicate("owner", vec![x, y])],
//!     vec![],
//! ));
//! world.run().unwrap();
//! let pattern = Predicate::new(symbols.insert("right"), vec![alice, read, file]);
//! assert_eq!(world.query(&pattern).len(), 1);
//! ```
//!
//! ## Errors
//! Structural problems ([`DatalogError::InvalidRule`]) and runaway rule sets
//! ([`DatalogError::NonTermination`]) are errors. An empty query result is not:
//! it simply means nothing matched.

pub mod atom;
pub mod combinator;
pub mod config;
pub mod construct;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod symbol;
pub mod world;

pub use atom::{Atom, AtomType, Symbol, Variable};
pub use combinator::{Bindings, Combinator, MatchedVariables};
pub use config::{DEFAULT_MAX_ITERATIONS, EngineConfig};
pub use construct::{Caveat, Constraint, Fact, FactSet, Predicate, Rule};
pub use error::{DatalogError, Result};
pub use matcher::{DateComparison, IntegerComparison, Matcher, StringComparison};
pub use symbol::SymbolTable;
pub use world::World;
