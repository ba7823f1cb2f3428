//! JSON file store of registered users
//!
//! The whole file is one JSON array and is rewritten on every save. There is
//! no locking: two processes sharing a file race and the last writer wins.
//! Lookups are linear scans, which is fine for a handful of users.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::transit::{Person, Role};

/// Default location of the user store
pub const DEFAULT_USERS_FILE: &str = "users.json";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("failed to access user store {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("user store {path} is corrupt")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode user store {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What `load` does with a file that exists but does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptStorePolicy {
    /// Return `StoreError::Corrupt`
    #[default]
    Fail,
    /// Log a warning and behave as if the store were empty
    TreatAsEmpty,
}

/// Persisted role discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordRole {
    Passenger,
    Driver,
}

/// One persisted user entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub role: RecordRole,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub username: String,
    #[serde(default)]
    pub license_number: Option<String>,
}

impl From<&Person> for UserRecord {
    fn from(person: &Person) -> Self {
        let (role, license_number) = match &person.role {
            Role::Passenger => (RecordRole::Passenger, None),
            Role::Driver { license_number } => {
                (RecordRole::Driver, Some(license_number.clone()))
            }
        };
        Self {
            role,
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            age: person.age,
            username: person.username.clone(),
            license_number,
        }
    }
}

impl From<UserRecord> for Person {
    fn from(record: UserRecord) -> Self {
        let role = match record.role {
            RecordRole::Passenger => Role::Passenger,
            RecordRole::Driver => Role::Driver {
                license_number: record.license_number.unwrap_or_default(),
            },
        };
        Self {
            first_name: record.first_name,
            last_name: record.last_name,
            age: record.age,
            username: record.username,
            role,
        }
    }
}

/// Handle to the user store file
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
    policy: CorruptStorePolicy,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>, policy: CorruptStorePolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. A missing file is an empty store and is not created.
    pub fn load(&self) -> Result<Vec<UserRecord>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("User store {} does not exist yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(records) => Ok(records),
            Err(source) if source.is_io() => Err(StoreError::Io {
                path: self.path.clone(),
                source: source.into(),
            }),
            Err(source) => match self.policy {
                CorruptStorePolicy::Fail => Err(StoreError::Corrupt {
                    path: self.path.clone(),
                    source,
                }),
                CorruptStorePolicy::TreatAsEmpty => {
                    warn!(
                        "User store {} is corrupt ({}), treating it as empty",
                        self.path.display(),
                        source
                    );
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Overwrite the file with `records`, indented by four spaces
    pub fn save(&self, records: &[UserRecord]) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        records
            .serialize(&mut serializer)
            .map_err(|source| StoreError::Encode {
                path: self.path.clone(),
                source,
            })?;
        writer.flush().map_err(io_error)?;
        Ok(())
    }

    /// Find a user by exact, case-sensitive username
    pub fn find(&self, username: &str) -> Result<Option<Person>, StoreError> {
        Ok(self
            .load()?
            .into_iter()
            .find(|record| record.username == username)
            .map(Person::from))
    }

    pub fn contains(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.load()?.iter().any(|record| record.username == username))
    }

    /// Append a user and flush the whole store
    pub fn append(&self, person: &Person) -> Result<(), StoreError> {
        let mut records = self.load()?;
        records.push(UserRecord::from(person));
        self.save(&records)?;
        debug!(
            "Stored user {} ({} records in {})",
            person.username,
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}
