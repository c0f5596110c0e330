//! Parsing and serialisation benchmarks on synthetic LAS content

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lasdev::{ReaderConfig, WriterConfig, parse_las_str, to_las_string};

const CURVES: [&str; 8] = ["DEPT", "DT", "RHOB", "NPHI", "SFLU", "SFLA", "ILM", "ILD"];
const ROWS: usize = 10_000;

fn header(version: &str, wrap: &str, extra: &str) -> String {
    let mut text = format!(
        "~VERSION INFORMATION\n VERS.  {} :\n WRAP.  {} :\n{}~WELL INFORMATION\n NULL.  -999.25 : NULL VALUE\n~CURVE INFORMATION\n",
        version, wrap, extra
    );
    for curve in CURVES {
        text.push_str(&format!(" {}.UNIT  : {} curve\n", curve, curve));
    }
    text
}

fn row_values(row: usize) -> Vec<String> {
    let depth = 1000.0 + row as f64 * 0.125;
    std::iter::once(format!("{:.3}", depth))
        .chain((1..CURVES.len()).map(|c| format!("{:.4}", depth * c as f64 / 7.0)))
        .collect()
}

fn synthetic_normal() -> String {
    let mut text = header("2.0", "NO", "");
    text.push_str("~A\n");
    for row in 0..ROWS {
        text.push_str(&row_values(row).join(" "));
        text.push('\n');
    }
    text
}

fn synthetic_wrapped() -> String {
    let mut text = header("1.2", "YES", "");
    text.push_str("~A\n");
    for row in 0..ROWS {
        let values = row_values(row);
        text.push_str(&values[0]);
        text.push('\n');
        for chunk in values[1..].chunks(3) {
            text.push_str(&chunk.join(" "));
            text.push('\n');
        }
    }
    text
}

fn synthetic_v3() -> String {
    let mut text = header("3.0", "NO", " DLM.  COMMA :\n");
    text.push_str("~A Log_Data\n");
    for row in 0..ROWS {
        text.push_str(&row_values(row).join(","));
        text.push('\n');
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let config = ReaderConfig::default();
    let normal = synthetic_normal();
    let wrapped = synthetic_wrapped();
    let v3 = synthetic_v3();

    let mut group = c.benchmark_group("parse");
    group.bench_function("normal", |b| {
        b.iter(|| parse_las_str(black_box(&normal), &config))
    });
    group.bench_function("wrapped", |b| {
        b.iter(|| parse_las_str(black_box(&wrapped), &config))
    });
    group.bench_function("v3_comma", |b| {
        b.iter(|| parse_las_str(black_box(&v3), &config))
    });
    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let document = parse_las_str(&synthetic_normal(), &ReaderConfig::default());
    let config = WriterConfig::default();

    c.bench_function("to_las_string", |b| {
        b.iter(|| to_las_string(black_box(&document), &config))
    });
}

criterion_group!(benches, bench_parse, bench_write);
criterion_main!(benches);
