//! Tracer handle and RAII scope guard.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use super::sink::{AttrValue, SpanRecord, SpanSink};

/// Handle for opening timing scopes. Cheap to clone; one per process,
/// constructed at startup and passed into the app state.
#[derive(Clone)]
pub struct Tracer {
    inner: Arc<TracerInner>,
}

struct TracerInner {
    service: String,
    sink: Arc<dyn SpanSink>,
    next_id: AtomicU64,
}

impl Tracer {
    pub fn new(service: impl Into<String>, sink: Arc<dyn SpanSink>) -> Self {
        Self {
            inner: Arc::new(TracerInner {
                service: service.into(),
                sink,
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Default service label for scopes opened from this tracer.
    pub fn service(&self) -> &str {
        &self.inner.service
    }

    /// Open a root scope. The interval starts now and ends when the guard
    /// drops.
    pub fn scope(&self, name: &'static str) -> Scope<'static> {
        Scope {
            tracer: self.clone(),
            id: self.next_id(),
            parent_id: None,
            name,
            service: self.inner.service.clone(),
            resource: None,
            attrs: Vec::new(),
            start: Instant::now(),
            _parent: PhantomData,
        }
    }

    fn next_id(&self) -> u64 {
        self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// An open timing scope. Dropping the guard closes the interval and emits a
/// [`SpanRecord`] to the tracer's sink.
///
/// Children borrow their parent for the lifetime of the child guard, so the
/// parent cannot close first and sibling work is naturally sequential.
pub struct Scope<'a> {
    tracer: Tracer,
    id: u64,
    parent_id: Option<u64>,
    name: &'static str,
    service: String,
    resource: Option<String>,
    attrs: Vec<(&'static str, AttrValue)>,
    start: Instant,
    _parent: PhantomData<&'a ()>,
}

impl Scope<'_> {
    /// Open a child scope. Inherits the service label unless overridden.
    pub fn child<'s>(&'s self, name: &'static str) -> Scope<'s> {
        Scope {
            tracer: self.tracer.clone(),
            id: self.tracer.next_id(),
            parent_id: Some(self.id),
            name,
            service: self.service.clone(),
            resource: None,
            attrs: Vec::new(),
            start: Instant::now(),
            _parent: PhantomData,
        }
    }

    /// Override the service label for this scope.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// Attach a resource label, e.g. the statement a simulated query runs.
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Attach a key/value attribute. Later writes to the same key win.
    pub fn set_attr(&mut self, key: &'static str, value: impl Into<AttrValue>) {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.attrs.push((key, value));
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        let record = SpanRecord {
            id: self.id,
            parent_id: self.parent_id,
            name: self.name,
            service: std::mem::take(&mut self.service),
            resource: self.resource.take(),
            attrs: std::mem::take(&mut self.attrs),
            start: self.start,
            end: Instant::now(),
        };
        self.tracer.inner.sink.record(record);
    }
}
