use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use coap_packet::*;


fn message_from_bytes(c: &mut Criterion) {
  let mut group = c.benchmark_group("msg/from_bytes");
  group.measurement_time(std::time::Duration::from_secs(5));

  for inp in bench_input::inputs().iter() {
    let bytes = inp.get_bytes();

    group.bench_with_input(BenchmarkId::new("coap_packet/size", bytes.len()),
                           &bytes,
                           |b, bytes| b.iter(|| Packet::try_from_bytes(bytes)));

    group.bench_with_input(BenchmarkId::new("coap_packet/verify/size", bytes.len()),
                           &bytes,
                           |b, bytes| b.iter(|| validate::verify(bytes)));

    group.bench_with_input(BenchmarkId::new("coap_lite/size", bytes.len()),
                           &bytes,
                           |b, bytes| b.iter(|| coap_lite::Packet::from_bytes(bytes)));
  }
  group.finish();
}

criterion_group!(benches, message_from_bytes);
criterion_main!(benches);
