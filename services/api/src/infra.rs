use abirechner::prognose::{PrognoseId, PrognoseRecord, PrognoseRepository, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryPrognoseRepository {
    records: Arc<Mutex<HashMap<PrognoseId, PrognoseRecord>>>,
}

impl PrognoseRepository for InMemoryPrognoseRepository {
    fn insert(&self, record: PrognoseRecord) -> Result<PrognoseRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.prognose_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.prognose_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &PrognoseId) -> Result<Option<PrognoseRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<PrognoseRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<PrognoseRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.computed_at.cmp(&a.computed_at));
        records.truncate(limit);
        Ok(records)
    }
}
