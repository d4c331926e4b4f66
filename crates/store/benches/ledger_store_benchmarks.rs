use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rust_decimal::Decimal;
use std::sync::Arc;
use std::thread;

use finledger_core::AccountId;
use finledger_ledger::{balance, EntryDraft};
use finledger_store::{InMemoryLedgerStore, LedgerStore};

fn seed_account(store: &InMemoryLedgerStore, entries: usize) -> AccountId {
    let account = AccountId::new();
    for i in 0..entries {
        let draft =
            EntryDraft::deposit(account, Decimal::new(100 + i as i64, 2), "seed").unwrap();
        store.append(draft).unwrap();
    }
    account
}

/// Balance fold cost as the entry log grows.
fn bench_balance_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance_fold");

    for entries in [100usize, 1_000, 10_000] {
        let store = InMemoryLedgerStore::new();
        let account = seed_account(&store, entries);

        group.throughput(Throughput::Elements(entries as u64));
        group.bench_with_input(BenchmarkId::from_parameter(entries), &entries, |b, _| {
            b.iter(|| {
                let log = store.entries_for(account).unwrap();
                black_box(balance(&log))
            })
        });
    }

    group.finish();
}

/// Append throughput with several threads hammering distinct accounts.
fn bench_contended_appends(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_appends");

    for threads in [1usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &n| {
            b.iter(|| {
                let store = Arc::new(InMemoryLedgerStore::new());
                let handles: Vec<_> = (0..n)
                    .map(|_| {
                        let store = Arc::clone(&store);
                        thread::spawn(move || {
                            let account = AccountId::new();
                            for _ in 0..100 {
                                let draft = EntryDraft::deposit(
                                    account,
                                    Decimal::ONE_HUNDRED,
                                    "bench",
                                )
                                .unwrap();
                                store.append(draft).unwrap();
                            }
                        })
                    })
                    .collect();
                for h in handles {
                    h.join().unwrap();
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_balance_fold, bench_contended_appends);
criterion_main!(benches);
