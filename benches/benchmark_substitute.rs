use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sbligen::substitute::{OutputMode, ParameterSubstitution};

/// Synthetic generated source with placeholders spread over many
/// kernel definitions
fn large_source(kernels: usize) -> String {
    let mut s = String::from("#include \"opensbli.h\"\ngama=Input;\nMinf=Input;\nniter=Input;\n");
    for i in 0..kernels {
        s.push_str(&format!(
            "void kernel_{}(const double *a, double *b) {{\n  b[0] = a[0] * a[0];\n}}\n",
            i
        ));
    }
    s.push_str("run();\nops_exit();\n");
    s
}

pub fn bench_substitute(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitute");
    let mut sub = ParameterSubstitution::new("opensbli", OutputMode::Hdf5);
    sub.add_constant("gama", 1.4);
    sub.add_constant("Minf", 2.0);
    sub.add_constant("niter", 5000);
    sub.add_datasets(&["rho", "rhou0", "rhou1", "rhoE"]);

    for kernels in [100, 1000, 10_000].iter() {
        let source = large_source(*kernels);
        let name = format!("kernels_{}", kernels);
        group.bench_function(name, |b| {
            b.iter(|| sub.substitute_str(black_box(&source)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_substitute);
criterion_main!(benches);
