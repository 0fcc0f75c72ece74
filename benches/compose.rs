use criterion::{criterion_group, criterion_main, Criterion};

use attachview::compose::compose;
use attachview::gallery::collect_images;
use attachview::model::Attachment;
use attachview::render::PreviewOptions;
use attachview::resolve::PassthroughResolver;

fn sample_list(len: usize) -> Vec<Attachment> {
    let kinds = [
        ("jpg", Some("image/jpeg")),
        ("mp4", Some("video/mp4")),
        ("zip", Some("application/zip")),
        ("pdf", Some("application/pdf")),
        ("bin", None),
    ];
    (0..len)
        .map(|i| {
            let (ext, mime) = kinds[i % kinds.len()];
            let att = Attachment::new(format!("file-{i}.{ext}")).with_size(i as u64 * 731);
            match mime {
                Some(m) => att.with_type(m),
                None => att,
            }
        })
        .collect()
}

fn bench_collect_images(c: &mut Criterion) {
    let list = sample_list(50);
    c.bench_function("collect_images_50", |b| b.iter(|| collect_images(&list).len()));
}

fn bench_compose(c: &mut Criterion) {
    let list = sample_list(50);
    let options = PreviewOptions::default();
    c.bench_function("compose_50", |b| {
        b.iter(|| compose(&list, &options, &PassthroughResolver).len())
    });
}

criterion_group!(benches, bench_collect_images, bench_compose);
criterion_main!(benches);
