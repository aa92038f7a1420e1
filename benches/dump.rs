use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use litdump::{dump, dump_value, DumpOptions, Dumper, Obj, Value};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn benchmark_dump_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("dump_simple_struct", |b| {
        b.iter(|| dump(black_box(&user)))
    });
}

fn benchmark_dump_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("dump_sequence");

    for size in [10, 50, 100, 500].iter() {
        let users: Vec<User> = (0..*size)
            .map(|i| User {
                id: i,
                name: format!("user-{}", i),
                email: format!("user-{}@example.com", i),
                active: i % 2 == 0,
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &users, |b, users| {
            b.iter(|| dump(black_box(users)))
        });
    }

    group.finish();
}

fn benchmark_dump_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 1,
        metadata: Metadata {
            created: "2024-01-01".to_string(),
            updated: "2024-06-01".to_string(),
            version: 3,
        },
        tags: vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()],
    };

    c.bench_function("dump_nested_struct", |b| {
        b.iter(|| dump(black_box(&data)))
    });
}

fn benchmark_dump_shared_graph(c: &mut Criterion) {
    let shared = Obj::new("Address").prop("city", "Zurich").build();
    let people: Vec<Value> = (0..100)
        .map(|i| {
            Value::Object(
                Obj::new("Person")
                    .prop("name", format!("person-{}", i))
                    .prop("address", Value::Object(shared.clone()))
                    .build(),
            )
        })
        .collect();
    let graph = Value::seq_of("Person", people);

    c.bench_function("dump_shared_graph_100", |b| {
        b.iter(|| dump_value(black_box(&graph)))
    });
}

fn benchmark_dump_pretty(c: &mut Criterion) {
    let data = NestedData {
        id: 1,
        metadata: Metadata {
            created: "2024-01-01".to_string(),
            updated: "2024-06-01".to_string(),
            version: 3,
        },
        tags: vec!["alpha".to_string(), "beta".to_string()],
    };
    let dumper = Dumper::with_options(DumpOptions::pretty());

    c.bench_function("dump_nested_struct_pretty", |b| {
        b.iter(|| dumper.dump(black_box(&data)))
    });
}

criterion_group!(
    benches,
    benchmark_dump_simple,
    benchmark_dump_sequence,
    benchmark_dump_nested,
    benchmark_dump_shared_graph,
    benchmark_dump_pretty
);
criterion_main!(benches);
