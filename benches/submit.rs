use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rusty_inbox::prelude::{
    ContactManager, ContactRecord, ContactSubmission, MemStorage, SequentialIds, contact,
};

// Store prepopulated with `n` records, all in memory so the numbers reflect
// validation and bookkeeping rather than disk I/O.
fn make_manager_with_n(n: usize) -> ContactManager {
    let records = (0..n)
        .map(|i| ContactRecord {
            id: i as i64,
            name: format!("User{i}"),
            email: format!("user{i}@yahoo.com"),
            subject: contact::DEFAULT_SUBJECT.to_string(),
            message: "Hello there".to_string(),
            timestamp: contact::iso_timestamp(contact::Utc::now()),
            ip: Some("127.0.0.1".to_string()),
        })
        .collect();

    ContactManager::new(
        Box::new(MemStorage::with_records(records)),
        Box::new(SequentialIds::starting_at(n as i64)),
    )
}

fn bench_email_shape(c: &mut Criterion) {
    c.bench_function("Email shape check", |b| {
        b.iter(|| {
            black_box(contact::validate_email(black_box("bryanwelch@gmail.com")));
            black_box(contact::validate_email(black_box("bryanwelch@gmail")));
        });
    });
}

fn bench_submit(c: &mut Criterion) {
    c.bench_function("Submitting into 5k contacts (in-memory)", |b| {
        b.iter_batched(
            || make_manager_with_n(5_000),
            |manager| {
                let record = manager
                    .submit(
                        ContactSubmission::new("Zoe", "bryanwelch@gmail.com", None, "Hi"),
                        None,
                    )
                    .expect("submit");
                black_box(record);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_list(c: &mut Criterion) {
    let manager = make_manager_with_n(5_000);

    c.bench_function("Listing 5k contacts (in-memory)", |b| {
        b.iter(|| black_box(manager.list().expect("list")));
    });
}

criterion_group!(benches, bench_email_shape, bench_submit, bench_list);
criterion_main!(benches);
