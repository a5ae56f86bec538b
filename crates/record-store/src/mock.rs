//! # Mock Store
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`] whose requests are answered from a queue of
//! scripted expectations instead of a running [`StoreActor`](crate::StoreActor). Use it to unit
//! test code that sits on top of a store client, especially failure paths that a healthy store
//! never produces.
//!
//! | | MockStore | StoreActor |
//! |---|---|---|
//! | **State** | none, replies are scripted | real records |
//! | **Error injection** | `return_err(...)` | only `NotFound` / `DuplicateId` |
//! | **Use case** | logic around the client | the store itself, full system |
//!
//! ```rust
//! use record_store::mock::MockStore;
//! use record_store::{Record, StoreError};
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Note { id: u32 }
//! #[derive(Debug)] struct NotePatch;
//!
//! impl Record for Note {
//!     type Id = u32; type Patch = NotePatch; type Error = Infallible;
//!     fn id(&self) -> u32 { self.id }
//!     fn on_update(&mut self, _: NotePatch) -> Result<(), Infallible> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Note>::new();
//!     mock.expect_get(1).return_ok(Some(Note { id: 1 }));
//!     mock.expect_list().return_err(StoreError::StoreClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap(), Some(Note { id: 1 }));
//!     assert!(matches!(client.list().await, Err(StoreError::StoreClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! Requests must arrive in the order the expectations were queued. A request that does not match
//! the next expectation is logged and its reply channel dropped, so the caller sees
//! [`StoreError::StoreDropped`].

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::error;

enum Expectation<T: Record> {
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Insert {
        response: Result<T, StoreError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted stand-in for a running store.
pub struct MockStore<T: Record> {
    client: StoreClient<T>,
    expectations: Expectations<T>,
    unmatched: Arc<Mutex<usize>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockStore<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let unmatched = Arc::new(Mutex::new(0));
        let queue = expectations.clone();
        let misses = unmatched.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Insert { respond_to, .. },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        error!("Unexpected request or expectation mismatch");
                        *misses.lock().unwrap() += 1;
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            unmatched,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::List { response }
        })
    }

    pub fn expect_insert(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Insert { response }
        })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get { id, response }
        })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Update { id, response }
        })
    }

    /// Panics unless every expectation was consumed and no request went unmatched.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
        let misses = *self.unmatched.lock().unwrap();
        if misses > 0 {
            panic!("{} request(s) did not match an expectation", misses);
        }
    }
}

/// Queues the reply for one expected request.
pub struct ExpectationBuilder<T: Record, R> {
    expectations: Expectations<T>,
    build: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: Record, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        build: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    /// The expected request succeeds with `value`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// The expected request fails with `error`.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.build)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}
