use criterion::{black_box, criterion_group, criterion_main, Criterion};
use greeting_model::core::greeting::{Greeting, GreetingService};

fn new_benchmark(c: &mut Criterion) {
    c.bench_function("new", |b| {
        b.iter(|| Greeting::new(black_box(1), black_box("Hello, %s!")))
    });
}

fn issue_benchmark(c: &mut Criterion) {
    let service = GreetingService::new(0, "Hello, %s!");
    c.bench_function("issue", |b| b.iter(|| black_box(service.issue())));
}

criterion_group!(benches, new_benchmark, issue_benchmark);
criterion_main!(benches);
