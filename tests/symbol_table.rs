use claimlog::{
    Atom, Constraint, DatalogError, Fact, IntegerComparison, Matcher, Predicate, Rule, Symbol,
    SymbolTable, Variable,
};

#[test]
fn symbols_are_kept_once() {
    let mut symbols = SymbolTable::new();
    let (user, previously_kept) = symbols.keep("user");
    assert!(!previously_kept);
    let (again, previously_kept) = symbols.keep("user");
    assert!(previously_kept);
    assert_eq!(user, again);
    assert_ne!(symbols.insert("group"), user);
    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols.get("group"), Some(Symbol(1)));
    assert_eq!(symbols.get("nobody"), None);
    assert_eq!(symbols.name(user).unwrap(), "user");
}

#[test]
fn unknown_symbols_are_reported() {
    let symbols = SymbolTable::new();
    assert!(matches!(symbols.name(Symbol(9)), Err(DatalogError::UnknownSymbol(Symbol(9)))));
}

#[test]
fn printing_uses_names() {
    let mut symbols = SymbolTable::new();
    let alice = symbols.symbol("alice");
    let fact = Fact::new(symbols.predicate("owner", vec![alice, Atom::Integer(3), Atom::Date(0)])).unwrap();
    assert_eq!(
        symbols.print_fact(&fact).unwrap(),
        "owner(#alice, 3, 1970-01-01T00:00:00+00:00)"
    );

    let rule = Rule::new(
        symbols.predicate("right", vec![Atom::Variable(Variable(0))]),
        vec![symbols.predicate("owner", vec![Atom::Variable(Variable(0)), Atom::Variable(Variable(1))])],
        vec![],
    );
    assert_eq!(symbols.print_rule(&rule).unwrap(), "right($0) <- owner($0, $1)");
}

#[test]
fn printed_rules_show_their_constraints() {
    let mut symbols = SymbolTable::new();
    let admin = symbols.insert("admin");
    let guest = symbols.insert("guest");
    let rule = |constraints: Vec<Constraint>| {
        Rule::new(
            Predicate::new(Symbol(9), vec![Atom::Variable(Variable(0))]),
            vec![Predicate::new(
                Symbol(8),
                vec![Atom::Variable(Variable(0)), Atom::Variable(Variable(1))],
            )],
            constraints,
        )
    };
    let larger = rule(vec![Constraint::new(Variable(0), Matcher::integer(IntegerComparison::Larger, 10))]);
    let lower = rule(vec![Constraint::new(Variable(0), Matcher::integer(IntegerComparison::Lower, 10))]);
    assert_eq!(larger.to_string(), "#9($0) <- #8($0, $1) @ $0 > 10");
    assert_ne!(larger.to_string(), lower.to_string());

    let roles = rule(vec![
        Constraint::new(Variable(0), Matcher::integer_in([3, 1, 2], true)),
        Constraint::new(Variable(1), Matcher::symbol_in([guest, admin], false)),
    ]);
    assert_eq!(
        roles.to_string(),
        "#9($0) <- #8($0, $1) @ $0 not in [1, 2, 3], $1 in [#0, #1]"
    );

    let named = Rule::new(
        symbols.predicate("granted", vec![Atom::Variable(Variable(0))]),
        vec![symbols.predicate(
            "member",
            vec![Atom::Variable(Variable(0)), Atom::Variable(Variable(1))],
        )],
        roles.constraints().to_vec(),
    );
    assert_eq!(
        symbols.print_rule(&named).unwrap(),
        "granted($0) <- member($0, $1) @ $0 not in [1, 2, 3], $1 in [#admin, #guest]"
    );
}
