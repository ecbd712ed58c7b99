use criterion::{Criterion, criterion_group, criterion_main};
use doccomment_engine::{DocumentationComment, markup};

fn generate_comment(parameters: usize) -> String {
    let mut comment = String::from(
        "/// Runs the build step.\n///\n/// Longer explanation of what the step does\n/// across a couple of lines.\n///\n/// - Parameters:\n",
    );
    for index in 0..parameters {
        comment.push_str(&format!("///   - arg{index}: Description of argument {index}.\n"));
    }
    comment.push_str("/// - Returns: The step result.\n/// - Throws: When the step fails.\n");
    comment.push_str("/// - Note: Runs once per build.\n/// - Warning: Slow on large inputs.\n");
    comment
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    group.sample_size(10);

    let comment = generate_comment(50);
    group.bench_function("parse_comment", |b| {
        b.iter(|| {
            let parsed = DocumentationComment::parse(std::hint::black_box(&comment));
            std::hint::black_box(parsed);
        });
    });

    let document = markup::parse(&doccomment_engine::strip_comment_syntax(&comment));
    group.bench_function("from_document", |b| {
        b.iter(|| {
            let parsed = DocumentationComment::from_document(std::hint::black_box(&document));
            std::hint::black_box(parsed);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
