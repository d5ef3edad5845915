//! JSON file backed employee repository.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::{debug, info, instrument};

use payroll_core::{
    application::{ApplicationError, ports::EmployeeRepository},
    domain::{Employee, EmployeeId},
    error::{Context, PayrollResult},
};

use super::RecordTable;

/// Employee repository persisted as a pretty-printed JSON array.
///
/// The whole file is loaded on open and rewritten after every mutation.
/// Loading does not validate records; run an audit to find broken ones.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
    inner: Arc<RwLock<RecordTable>>,
}

impl JsonFileRepository {
    /// Open the repository at `path`. A missing file is an empty repository.
    ///
    /// Fails when the file is not a JSON array of employees, or when two
    /// records share an id.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> PayrollResult<Self> {
        let path = path.as_ref().to_path_buf();
        let records = load(&path)?;
        info!(count = records.len(), "Loaded employees");

        let table = RecordTable::from_records(records).map_err(|e| match e {
            ApplicationError::Persistence { reason } => ApplicationError::Persistence {
                reason: format!("{}: {}", path.display(), reason),
            },
            other => other,
        })?;

        Ok(Self {
            path,
            inner: Arc::new(RwLock::new(table)),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, table: &RecordTable) -> PayrollResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory {}", parent.display()))?;
        }

        let records: Vec<&Employee> = table.values().collect();
        let json = serde_json::to_string_pretty(&records).context("Failed to encode employees")?;

        // Stage to a sibling file, then rename over the target.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).context(format!("Failed to write file {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .context(format!("Failed to replace file {}", self.path.display()))?;

        debug!(path = %self.path.display(), count = records.len(), "Persisted employees");
        Ok(())
    }

    /// Run `op` on a staged copy under the write lock. The file is rewritten
    /// and the copy published only when `op` succeeded and changed something.
    fn mutate<T>(
        &self,
        op: impl FnOnce(&mut RecordTable) -> Result<T, ApplicationError>,
    ) -> PayrollResult<T> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut staged = inner.clone();
        let out = op(&mut staged)?;
        if staged != *inner {
            self.persist(&staged)?;
            *inner = staged;
        }
        Ok(out)
    }
}

impl EmployeeRepository for JsonFileRepository {
    fn save(&self, employee: Employee) -> PayrollResult<Employee> {
        self.mutate(|table| table.upsert(employee))
    }

    fn find(&self, id: EmployeeId) -> PayrollResult<Option<Employee>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.get(id).cloned())
    }

    fn list(&self) -> PayrollResult<Vec<Employee>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }

    fn remove(&self, id: EmployeeId) -> PayrollResult<Option<Employee>> {
        self.mutate(|table| Ok(table.remove(id)))
    }
}

fn load(path: &Path) -> PayrollResult<Vec<Employee>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e).context(format!("Failed to read file {}", path.display())),
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str::<Vec<Employee>>(&content)
        .context(format!("Failed to parse {}", path.display()))
}
