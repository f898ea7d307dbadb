//! Record gateway contract shared by file and in-memory backends.

use crate::model::goal::Goal;
use crate::model::task::Task;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Persistence failure surfaced to the record store.
#[derive(Debug)]
pub enum GatewayError {
    /// Reading, writing or renaming a file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Persisted content is not a valid record document.
    Decode {
        path: PathBuf,
        source: serde_json::Error,
        /// Copy of the unreadable file, when one could be written.
        preserved: Option<PathBuf>,
    },
    /// Records could not be encoded.
    Encode(serde_json::Error),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "record file I/O failed at `{}`: {source}", path.display())
            }
            Self::Decode {
                path,
                source,
                preserved,
            } => {
                write!(f, "record file `{}` is not valid: {source}", path.display())?;
                if let Some(copy) = preserved {
                    write!(f, " (original kept at `{}`)", copy.display())?;
                }
                Ok(())
            }
            Self::Encode(err) => write!(f, "failed to encode records: {err}"),
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

/// Owned pair of collections as persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl RecordSet {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.goals.is_empty()
    }
}

/// Borrowed view used on the save path to avoid cloning collections.
#[derive(Debug, Serialize)]
pub(crate) struct RecordSetRef<'a> {
    pub tasks: &'a [Task],
    pub goals: &'a [Goal],
}

/// Load/save contract for durable record storage.
pub trait RecordGateway {
    /// Loads both collections.
    fn load(&self) -> GatewayResult<RecordSet>;
    /// Persists both collections; success means the write is durable.
    fn save(&mut self, tasks: &[Task], goals: &[Goal]) -> GatewayResult<()>;
}

pub(crate) fn encode_records(tasks: &[Task], goals: &[Goal]) -> GatewayResult<Vec<u8>> {
    serde_json::to_vec_pretty(&RecordSetRef { tasks, goals }).map_err(GatewayError::Encode)
}
