use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tinyc::compiler::Compiler;

const PROGRAM: &str = r#"
  (print "start")
  (add 2 (subtract 4 2))
  (add 2 (subtract (add 2 2) 2))
  (concat "hello" "world" (join "a" "b" "c"))
  (add 1 2 3 4 5 6 7 8 9 10)
"#;

fn full_compiler_benchmark(c: &mut Criterion) {
    let compiler = Compiler::new();

    c.bench_function("Compiler#compile", |b| {
        b.iter(|| black_box(compiler.compile(black_box(PROGRAM))))
    });
}

fn stages_benchmark(c: &mut Criterion) {
    let compiler = Compiler::new();
    let tokens = compiler.tokenize(PROGRAM).unwrap();
    let ast = compiler.parse(&tokens).unwrap();
    let new_ast = compiler.transform(&ast).unwrap();

    c.bench_function("Compiler#tokenize", |b| {
        b.iter(|| black_box(compiler.tokenize(PROGRAM)))
    });
    c.bench_function("Compiler#parse", |b| {
        b.iter(|| black_box(compiler.parse(&tokens)))
    });
    c.bench_function("Compiler#transform", |b| {
        b.iter(|| black_box(compiler.transform(&ast)))
    });
    c.bench_function("Compiler#generate", |b| {
        b.iter(|| black_box(compiler.generate(&new_ast)))
    });
}

criterion_group!(benches, full_compiler_benchmark, stages_benchmark);
criterion_main!(benches);
