use criterion::{black_box, criterion_group, criterion_main, Criterion};

const QUERY: &str = "
MATCH (actor:Person {name: 'Tom Hanks'})-[:ACTED_IN]->(movie:Movie)
OPTIONAL MATCH (movie)<-[:DIRECTED]-(director:Person)
WITH movie, director, count(*) AS appearances
WHERE movie.released > 1990 AND appearances >= 1
RETURN movie.title, director.name, appearances
ORDER BY movie.released DESC
LIMIT 25;
";

fn bench_parse_query(c: &mut Criterion) {
    c.bench_function("parse_query", move |b| {
        b.iter(|| {
            let parser = cypher_parser::Parser::new(black_box(QUERY));
            let tree = parser.parse();
            assert!(tree.errors().is_empty());
            black_box(tree);
        })
    });
}

fn bench_lex_query(c: &mut Criterion) {
    c.bench_function("lex_query", move |b| {
        b.iter(|| {
            let lexer = cypher_parser::Lexer::new(black_box(QUERY));
            let (tokens, errors) = lexer.lex();
            assert!(errors.is_empty());
            black_box(tokens);
        })
    });
}

criterion_group!(benches, bench_parse_query, bench_lex_query);
criterion_main!(benches);
