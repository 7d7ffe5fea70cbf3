use criterion::{Criterion, Throughput};
use enough::Unstoppable;
use zentarga::{DecodeRequest, EncodeRequest, Image, Origin};

const W: usize = 512;
const H: usize = 512;

fn noise_image(seed: u32) -> Image {
    let mut pixels = vec![0u8; W * H * 3];
    let mut state = seed;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    Image::from_bgr_bytes(W as u32, H as u32, Origin::BottomLeft, pixels).unwrap()
}

fn bench_codec(c: &mut Criterion) {
    let image = noise_image(0xDEAD_BEEF);
    let encoded = EncodeRequest::tga().encode(&image, Unstoppable).unwrap();

    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Bytes((W * H * 3) as u64));
    group.bench_function("decode", |b| {
        b.iter(|| DecodeRequest::new(&encoded).decode(Unstoppable).unwrap())
    });
    group.bench_function("encode", |b| {
        b.iter(|| EncodeRequest::tga().encode(&image, Unstoppable).unwrap())
    });
    group.finish();
}

fn bench_blend(c: &mut Criterion) {
    let top = noise_image(0xDEAD_BEEF);
    let bottom = noise_image(0x2F6E_2B1E);

    let mut group = c.benchmark_group("blend");
    group.throughput(Throughput::Bytes((W * H * 3) as u64));
    group.bench_function("multiply", |b| {
        b.iter(|| zentarga::multiply(&top, &bottom, &Unstoppable).unwrap())
    });
    group.bench_function("overlay", |b| {
        b.iter(|| zentarga::overlay(&top, &bottom, &Unstoppable).unwrap())
    });
    group.bench_function("flip", |b| {
        b.iter(|| zentarga::flip(&top, &Unstoppable).unwrap())
    });
    group.finish();
}

fn main() {
    let mut criterion = Criterion::default().configure_from_args();
    bench_codec(&mut criterion);
    bench_blend(&mut criterion);
    criterion.final_summary();
}
