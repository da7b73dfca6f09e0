use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kmertop::counter::count;
use kmertop::kmer::KmerLength;
use kmertop::rank::top_n;
use kmertop::reader::parse_str;
use kmertop::run::count_kmers;
use std::io::Write;
use tempfile::NamedTempFile;

fn sequences(records: usize, len: usize) -> Vec<Bytes> {
    // Deterministic, non-repetitive bases from a small LCG.
    let mut state: u32 = 0x2545_f491;
    (0..records)
        .map(|_| {
            let bases: Vec<u8> = (0..len)
                .map(|_| {
                    state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                    b"ACGT"[(state >> 30) as usize]
                })
                .collect();
            Bytes::from(bases)
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut fasta = String::new();
    for (i, seq) in sequences(200, 600).iter().enumerate() {
        fasta.push_str(&format!(">seq{i}\n"));
        for line in seq.chunks(60) {
            fasta.push_str(std::str::from_utf8(line).unwrap_or_default());
            fasta.push('\n');
        }
    }

    c.bench_function("parse_str", |b| {
        b.iter(|| parse_str(black_box(&fasta), false))
    });
}

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");
    let seqs = sequences(200, 600);

    for k in [3, 5, 8] {
        let k_len = KmerLength::new(k).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(k), &k_len, |b, &k_len| {
            b.iter(|| count(black_box(&seqs), k_len))
        });
    }

    group.finish();
}

fn bench_top_n(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_n");
    let seqs = sequences(200, 600);

    for k in [3, 8] {
        let tally = count(&seqs, KmerLength::new(k).unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(k), &tally, |b, tally| {
            b.iter(|| top_n(black_box(tally.clone()), 5))
        });
    }

    group.finish();
}

fn bench_count_kmers_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_kmers");

    let mut file = NamedTempFile::new().unwrap();
    for i in 0..100 {
        writeln!(file, ">seq{i}").unwrap();
        writeln!(file, "{}", "ACGTACGTACGTACGTACGTACGTACGTACGT".repeat(10)).unwrap();
    }
    let path = file.path().to_path_buf();

    for k in [4, 6, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| count_kmers(black_box(&path), black_box(k)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_count,
    bench_top_n,
    bench_count_kmers_file,
);

criterion_main!(benches);
