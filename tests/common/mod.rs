#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use kenobi_nego::{Mechanism, NativeHandle, SecurityProvider};

pub type ReleaseLog = Rc<RefCell<Vec<String>>>;

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .try_init();
}

/// Records its label into the release log when dropped
#[derive(Debug)]
pub struct FakeHandle {
    pub label: String,
    invalid: bool,
    log: ReleaseLog,
}
impl FakeHandle {
    pub fn new(label: &str, log: &ReleaseLog) -> Self {
        Self {
            label: label.to_owned(),
            invalid: false,
            log: log.clone(),
        }
    }
    pub fn invalid(label: &str, log: &ReleaseLog) -> Self {
        let mut handle = Self::new(label, log);
        handle.invalid = true;
        handle
    }
}
impl NativeHandle for FakeHandle {
    fn is_invalid(&self) -> bool {
        self.invalid
    }
}
impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.label.clone());
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FakeError {
    #[error("cannot resolve {0:?}")]
    Unresolvable(String),
    #[error("no default acceptor identity")]
    NoAcceptor,
}

#[derive(Clone, Default)]
pub struct FakeProvider {
    pub log: ReleaseLog,
    pub acceptor_acquisitions: Rc<Cell<usize>>,
    pub name_imports: Rc<Cell<usize>>,
    pub fail_acceptor: Rc<Cell<bool>>,
    pub mechanism: Option<Mechanism>,
}
impl FakeProvider {
    pub fn released(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
    pub fn handle(&self, label: &str) -> FakeHandle {
        FakeHandle::new(label, &self.log)
    }
}
impl SecurityProvider for FakeProvider {
    type Credential = FakeHandle;
    type Name = FakeHandle;
    type Context = FakeHandle;
    type Error = FakeError;

    fn acquire_acceptor(&self) -> Result<FakeHandle, FakeError> {
        if self.fail_acceptor.get() {
            return Err(FakeError::NoAcceptor);
        }
        self.acceptor_acquisitions.set(self.acceptor_acquisitions.get() + 1);
        Ok(self.handle("credential"))
    }
    fn import_target(&self, principal: &str) -> Result<FakeHandle, FakeError> {
        // host part missing
        if principal.ends_with('/') || principal.contains(char::is_whitespace) {
            return Err(FakeError::Unresolvable(principal.to_owned()));
        }
        self.name_imports.set(self.name_imports.get() + 1);
        Ok(self.handle("name"))
    }
    fn negotiated_mechanism(&self, _context: &FakeHandle) -> Option<Mechanism> {
        self.mechanism
    }
}
