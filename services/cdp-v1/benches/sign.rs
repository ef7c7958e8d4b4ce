use cdpsign_core::{Context, Signer};
use cdpsign_v1::{make_signature_header, Headers, RequestSigner, StaticCredentialProvider};
use criterion::{criterion_group, criterion_main, Criterion};

const PRIVATE_KEY: &str = "Mzjg58S93/qdg0HuVP6PsLSRDTe+fQZ5++v/mkUUx4k=";

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("cdp_v1");

    group.bench_function("make_signature_header", |b| {
        let headers = Headers::from([
            ("content-type", "application/json"),
            ("x-altus-date", "Thu, 01 Jan 1970 00:00:00 GMT"),
        ]);

        b.iter(|| {
            make_signature_header(
                "POST",
                "https://api.us-west-1.cdp.cloudera.com/api/v1/iam/listUsers?pageSize=100",
                &headers,
                "access_key_id",
                PRIVATE_KEY,
            )
            .expect("signing must succeed")
        })
    });

    group.bench_function("signer", |b| {
        let rt = tokio::runtime::Runtime::new().expect("runtime must be created");
        let signer = Signer::new(
            Context::new(),
            StaticCredentialProvider::new("access_key_id", PRIVATE_KEY),
            RequestSigner::new(),
        );

        b.to_async(&rt).iter(|| async {
            let mut req = http::Request::post("https://api.us-west-1.cdp.cloudera.com/api/v1/iam/listUsers")
                .header("content-type", "application/json")
                .body(())
                .expect("request must be valid")
                .into_parts()
                .0;
            signer.sign(&mut req, None).await.expect("signing must succeed")
        })
    });

    group.finish();
}
