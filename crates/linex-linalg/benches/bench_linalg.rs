use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use linex_linalg::{
    basis, change_of_basis, eigenvalues, qr, rref, ChangeOfBasisOptions, EigenOptions, QrOptions,
    RrefOptions,
};
use linex_matrix::Matrix;

// diagonally dominant so that every size is invertible and has full column rank
fn test_matrix(n: usize) -> Matrix {
    Matrix::from_fn([n, n], |i, j| {
        if i == j {
            n as f64 + 1.0
        } else {
            ((i * 7 + j * 3) % 5) as f64 * 0.25
        }
    })
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("engines");

    for n in [3, 8, 16].iter() {
        let a = test_matrix(*n);
        let b = a.transpose();

        group.bench_with_input(BenchmarkId::new("rref", n), &a, |bench, a| {
            bench.iter(|| black_box(rref(a, &RrefOptions::default())))
        });

        group.bench_with_input(BenchmarkId::new("qr", n), &a, |bench, a| {
            bench.iter(|| black_box(qr(a, &QrOptions::default())))
        });

        group.bench_with_input(BenchmarkId::new("eigenvalues", n), &a, |bench, a| {
            bench.iter(|| black_box(eigenvalues(a, &EigenOptions::default())))
        });

        group.bench_with_input(BenchmarkId::new("determinant", n), &a, |bench, a| {
            bench.iter(|| black_box(basis::determinant(a)))
        });

        group.bench_with_input(
            BenchmarkId::new("change_of_basis", n),
            &(a.clone(), b),
            |bench, (a, b)| {
                bench.iter(|| black_box(change_of_basis(a, b, &ChangeOfBasisOptions::default())))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
