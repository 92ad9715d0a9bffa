#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::oneshot;

use birthday_core::error::{AuthError, ServerError, TransportError};
use birthday_core::traits::{BirthdayRemote, IdentityProvider, User};
use birthday_core::{Birthday, BirthdayId, Credentials, FixedClock, IdToken, Result, UserId};
use birthday_store::CollectionStore;

/// The date every test computes ages against.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// A record as the server would hold it, with a bogus age to prove it is recomputed.
pub fn stored(id: i64, name: &str, year: i32, month: u32, day: u32) -> Birthday {
    let mut b = Birthday::new(name, year, month, day);
    b.id = BirthdayId::new(id);
    b.age = 999;
    b
}

pub fn names(records: &[Birthday]) -> Vec<&str> {
    records.iter().map(|b| b.name.as_str()).collect()
}

/// In-memory stand-in for the REST API.
///
/// List and create calls can be held back with [`ScriptedRemote::hold_next_list`]
/// and [`ScriptedRemote::hold_next_create`] so a test decides the order in
/// which responses arrive.
#[derive(Default)]
pub struct ScriptedRemote {
    records: Mutex<Vec<Birthday>>,
    next_id: AtomicI64,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    create_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    fail_list: AtomicBool,
    fail_writes: AtomicBool,
    list_calls: AtomicUsize,
    write_calls: AtomicUsize,
}

impl ScriptedRemote {
    pub fn with_records(records: Vec<Birthday>) -> Self {
        let next = records.iter().map(|r| r.id.get()).max().unwrap_or(0) + 1;
        Self {
            records: Mutex::new(records),
            next_id: AtomicI64::new(next),
            ..Default::default()
        }
    }

    /// Insert directly on the "server", bypassing the store.
    pub fn insert(&self, record: Birthday) {
        self.records.lock().unwrap().push(record);
    }

    pub fn server_records(&self) -> Vec<Birthday> {
        self.records.lock().unwrap().clone()
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    /// The next list call snapshots the records, then waits until the
    /// returned sender fires before answering.
    pub fn hold_next_list(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    /// The next create call is counted, then waits until the returned
    /// sender fires before storing the record.
    pub fn hold_next_create(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.create_gates.lock().unwrap().push_back(rx);
        tx
    }

    fn check_writes(&self) -> Result<()> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ServerError::new(500, None, Some("Internal Server Error".into())).into());
        }
        Ok(())
    }

    fn not_found(id: BirthdayId) -> birthday_core::Error {
        ServerError::new(404, None, Some(format!("no birthday {}", id))).into()
    }
}

#[async_trait]
impl BirthdayRemote for ScriptedRemote {
    async fn list(&self) -> Result<Vec<Birthday>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().pop_front();
        let failing = self.fail_list.load(Ordering::SeqCst);
        let snapshot = self.server_records();

        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if failing {
            return Err(TransportError::Connection {
                message: "network unreachable".into(),
            }
            .into());
        }
        Ok(snapshot)
    }

    async fn get(&self, id: BirthdayId) -> Result<Birthday> {
        self.server_records()
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, birthday: &Birthday) -> Result<Birthday> {
        self.check_writes()?;
        let gate = self.create_gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let mut created = birthday.clone();
        created.id = BirthdayId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.insert(created.clone());
        Ok(created)
    }

    async fn update(&self, id: BirthdayId, birthday: &Birthday) -> Result<Birthday> {
        self.check_writes()?;
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = Birthday {
            id,
            ..birthday.clone()
        };
        Ok(slot.clone())
    }

    async fn delete(&self, id: BirthdayId) -> Result<Option<Birthday>> {
        self.check_writes()?;
        let mut records = self.records.lock().unwrap();
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(Some(records.remove(index)))
    }
}

/// Store over a scripted remote, pinned to [`today`].
pub fn store_with(records: Vec<Birthday>) -> CollectionStore<ScriptedRemote> {
    CollectionStore::with_clock(ScriptedRemote::with_records(records), FixedClock(today()))
}

/// Identity provider accepting one fixed password.
pub struct FakeIdentity {
    pub password: String,
    pub sign_outs: AtomicUsize,
}

impl FakeIdentity {
    pub fn new(password: &str) -> Self {
        Self {
            password: password.to_string(),
            sign_outs: AtomicUsize::new(0),
        }
    }

    fn user_for(credentials: &Credentials) -> User {
        User {
            id: UserId::new(format!("uid-{}", credentials.email())),
            email: credentials.email().to_string(),
            id_token: IdToken::new("token"),
        }
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn sign_in(&self, credentials: &Credentials) -> Result<User> {
        if credentials.password() != self.password {
            return Err(AuthError::InvalidCredentials("INVALID_PASSWORD".into()).into());
        }
        Ok(Self::user_for(credentials))
    }

    async fn register(&self, credentials: &Credentials) -> Result<User> {
        if credentials.email().starts_with("taken") {
            return Err(AuthError::EmailTaken.into());
        }
        Ok(Self::user_for(credentials))
    }

    async fn sign_out(&self, _user: &User) -> Result<()> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
