#[macro_use]
extern crate criterion;

extern crate fenpack;


criterion_main! {
    codec_benches::codec_benches
}
