use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use claimlog::{
    Atom, Constraint, Fact, IntegerComparison, Matcher, Predicate, Rule, Symbol, Variable, World,
};

const EDGE: Symbol = Symbol(0);
const PATH: Symbol = Symbol(1);
const VALUE: Symbol = Symbol(2);
const PAIR: Symbol = Symbol(3);

fn var(v: u32) -> Atom {
    Atom::Variable(Variable(v))
}

fn closure_world(length: i64) -> World {
    let mut world = World::new();
    for i in 0..length {
        let edge = Predicate::new(EDGE, vec![Atom::Integer(i), Atom::Integer(i + 1)]);
        world.add_fact(Fact::new(edge).unwrap());
    }
    world.add_rule(Rule::new(
        Predicate::new(PATH, vec![var(0), var(1)]),
        vec![Predicate::new(EDGE, vec![var(0), var(1)])],
        vec![],
    ));
    world.add_rule(Rule::new(
        Predicate::new(PATH, vec![var(0), var(2)]),
        vec![
            Predicate::new(PATH, vec![var(0), var(1)]),
            Predicate::new(EDGE, vec![var(1), var(2)]),
        ],
        vec![],
    ));
    world
}

fn constrained_join_world(size: i64) -> World {
    let mut world = World::new();
    for i in 0..size {
        world.add_fact(Fact::new(Predicate::new(VALUE, vec![Atom::Integer(i)])).unwrap());
    }
    world.add_rule(Rule::new(
        Predicate::new(PAIR, vec![var(0), var(1)]),
        vec![
            Predicate::new(VALUE, vec![var(0)]),
            Predicate::new(VALUE, vec![var(1)]),
        ],
        vec![
            Constraint::new(Variable(0), Matcher::integer(IntegerComparison::Lower, 10)),
            Constraint::new(Variable(1), Matcher::integer_in([1, 3, 5, 7], false)),
        ],
    ));
    world
}

pub fn criterion_benchmark(c: &mut Criterion) {
    for length in [8, 16, 32] {
        c.bench_function(&format!("closure {length}"), |b| {
            b.iter(|| {
                let mut world = closure_world(length);
                world.run().unwrap();
                black_box(world.facts().len())
            })
        });
    }
    let world = constrained_join_world(200);
    let rule = &world.rules()[0];
    c.bench_function("constrained join 200", |b| {
        b.iter(|| black_box(world.query_rule(rule).unwrap().len()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
