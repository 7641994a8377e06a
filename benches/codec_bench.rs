//! Benchmarks for meteo codec operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meteo::protocol::{
    decode_request, decode_response, encode_request, encode_response, Request, Response,
};

fn codec_benchmarks(c: &mut Criterion) {
    let request = Request::new(b't', "reggio calabria");
    let request_block = encode_request(&request);
    let response = Response::success(b't', 21.5);
    let response_block = encode_response(&response);

    c.bench_function("encode_request", |b| {
        b.iter(|| encode_request(black_box(&request)))
    });
    c.bench_function("decode_request", |b| {
        b.iter(|| decode_request(black_box(&request_block)))
    });
    c.bench_function("encode_response", |b| {
        b.iter(|| encode_response(black_box(&response)))
    });
    c.bench_function("decode_response", |b| {
        b.iter(|| decode_response(black_box(&response_block)))
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
