use criterion::{Criterion, black_box, criterion_group, criterion_main};
use usaddr_core::{extract_features, parse_records};

fn bench_extract_features(c: &mut Criterion) {
    let inputs: Vec<Vec<&str>> = vec![
        vec!["123", "Main", "St", "N"],
        vec!["1600", "Pennsylvania", "Ave.", "NW", "Washington,", "DC", "20500"],
        vec!["PO", "Box", "#1234", "Springfield,", "IL", "62704"],
        vec!["Dr.", "Jones", "c/o", "Acme", "&", "Sons", "Ste.", "12½"],
    ];

    c.bench_function("extract_features_single", |b| {
        b.iter(|| extract_features(black_box(&inputs[1])));
    });

    c.bench_function("extract_features_batch_4", |b| {
        b.iter(|| {
            for tokens in &inputs {
                let _ = extract_features(black_box(tokens));
            }
        });
    });
}

fn bench_parse_records(c: &mut Criterion) {
    let record = "<AddressString><AddressNumber>1600</AddressNumber>\
        <StreetName>Pennsylvania</StreetName><StreetNamePostType>Ave.</StreetNamePostType>\
        <PlaceName>Washington,</PlaceName><StateName>DC</StateName></AddressString>";
    let document = format!("<AddressCollection>{}</AddressCollection>", record.repeat(100));

    c.bench_function("parse_records_100", |b| {
        b.iter(|| parse_records("bench.xml", black_box(&document)).unwrap());
    });
}

criterion_group!(benches, bench_extract_features, bench_parse_records);
criterion_main!(benches);
