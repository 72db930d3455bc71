use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lemmatag::lexicon::{Lexicon, LexiconEntry, Vocabulary};
use lemmatag::resolve::{FuzzyPolicy, Resolver, ResolverConfig};
use lemmatag::util::levenshtein::{levenshtein_distance, levenshtein_distance_within};

fn generate_words(count: usize, length: usize) -> Vec<String> {
    let alphabet: Vec<char> = "abcdefghilmnoprstuvz".chars().collect();
    (0..count)
        .map(|i| {
            (0..length)
                .map(|j| alphabet[(i * 7 + j * 3 + i * j) % alphabet.len()])
                .collect()
        })
        .collect()
}

fn bench_distances(c: &mut Criterion) {
    let words = generate_words(101, 10);
    let query = &words[0];
    let targets = &words[1..101];

    let mut group = c.benchmark_group("edit_distance");

    group.bench_function("levenshtein", |b| {
        b.iter(|| {
            for target in targets {
                black_box(levenshtein_distance(black_box(query), black_box(target)));
            }
        })
    });

    group.bench_function("levenshtein_within_2", |b| {
        b.iter(|| {
            for target in targets {
                black_box(levenshtein_distance_within(
                    black_box(query),
                    black_box(target),
                    2,
                ));
            }
        })
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let words = generate_words(400, 9);
    let lexicon = Lexicon::from_entries(words.chunks(4).enumerate().map(|(i, forms)| {
        LexiconEntry::new(format!("concept{}", i % 10), forms[0].clone(), forms.to_vec())
    }));
    let vocabulary = Vocabulary::from_words(generate_words(200, 7));

    let mut group = c.benchmark_group("resolve");

    for policy in [FuzzyPolicy::Ranked, FuzzyPolicy::Nearest] {
        let config = ResolverConfig {
            policy,
            ..Default::default()
        };
        let resolver = Resolver::with_config(&lexicon, &vocabulary, config);

        group.bench_function(format!("{policy:?}"), |b| {
            b.iter(|| black_box(resolver.resolve(black_box("xyzzyabcd"))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distances, bench_resolve);
criterion_main!(benches);
