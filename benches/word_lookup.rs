use std::fs;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tempfile::TempDir;
use word_dictionary::{DictionaryConfig, WordDictionary};

const PROBES: [&str; 6] = ["  Apple ", "BANANA", "cherry", "missing", "Zebra", "  "];

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for size in [1_000, 100_000].iter() {
        let dir = TempDir::new().unwrap();
        let source_dir = dir.path().join("txt");
        fs::create_dir(&source_dir).unwrap();

        let mut content = String::from("apple banana cherry zebra ");
        for i in 0..*size {
            // Hex digits shifted into g..v, so every generated token is kept
            let word: String =
                format!("{:x}", i + 0x100).bytes().map(|b| (b'g' + b % 16) as char).collect();
            content.push_str(&word);
            content.push(' ');
        }
        fs::write(source_dir.join("words.txt"), content).unwrap();

        let mut dictionary =
            WordDictionary::new(DictionaryConfig::new(&source_dir, dir.path().join("dict.txt")));
        dictionary.initialize();

        group.throughput(Throughput::Elements(PROBES.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &dictionary, |b, dictionary| {
            b.iter(|| PROBES.iter().filter(|w| dictionary.query(black_box(w))).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
