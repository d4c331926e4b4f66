use std::sync::Arc;

use finledger_directory::InMemoryAccountDirectory;
use finledger_engine::{OperationRecorder, StatementQuery, TransferCoordinator};
use finledger_store::{AccountLocks, InMemoryLedgerStore};

pub type Recorder = OperationRecorder<InMemoryLedgerStore, InMemoryAccountDirectory>;
pub type Coordinator = TransferCoordinator<InMemoryLedgerStore, InMemoryAccountDirectory>;
pub type Query = StatementQuery<InMemoryLedgerStore, InMemoryAccountDirectory>;

/// The engine services behind the HTTP handlers.
///
/// Recorder and coordinator share one lock registry; that sharing is what
/// makes a plain withdrawal and a transfer leg against the same account
/// serialize with each other.
pub struct AppServices {
    pub directory: Arc<InMemoryAccountDirectory>,
    pub recorder: Recorder,
    pub coordinator: Coordinator,
    pub statements: Query,
}

pub fn build_services() -> AppServices {
    let store = Arc::new(InMemoryLedgerStore::new());
    let directory = Arc::new(InMemoryAccountDirectory::new());
    let locks = Arc::new(AccountLocks::new());

    AppServices {
        recorder: OperationRecorder::new(
            Arc::clone(&store),
            Arc::clone(&directory),
            Arc::clone(&locks),
        ),
        coordinator: TransferCoordinator::new(
            Arc::clone(&store),
            Arc::clone(&directory),
            locks,
        ),
        statements: StatementQuery::new(store, Arc::clone(&directory)),
        directory,
    }
}
