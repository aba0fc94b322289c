use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridfall::surface::{Playfield, Settings};

fn bench_unchanged_grid(c: &mut Criterion) {
    let mut field = Playfield::new(&Settings::default());
    let cells: Vec<u8> = (0..200).map(|i| (i % 8) as u8).collect();
    let mut out = Vec::with_capacity(64 * 1024);
    field.encode_grid_into(&cells, &[], 0, &mut out).unwrap();

    c.bench_function("encode_unchanged_grid", |b| {
        b.iter(|| {
            out.clear();
            field
                .encode_grid_into(black_box(&cells), &[], 0, &mut out)
                .unwrap();
        })
    });
}

fn bench_full_repaint(c: &mut Criterion) {
    let mut field = Playfield::new(&Settings::default());
    let ones = vec![1u8; 200];
    let twos = vec![2u8; 200];
    let mut out = Vec::with_capacity(64 * 1024);
    let mut flip = false;

    c.bench_function("encode_full_repaint", |b| {
        b.iter(|| {
            flip = !flip;
            let cells = if flip { &ones } else { &twos };
            out.clear();
            field
                .encode_grid_into(black_box(cells), &[], 0, &mut out)
                .unwrap();
        })
    });
}

criterion_group!(benches, bench_unchanged_grid, bench_full_repaint);
criterion_main!(benches);
