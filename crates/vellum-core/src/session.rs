use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Stable identity of an object placed in a scene.
///
/// Ids are allocated from a process-wide counter and never reused, so a stale
/// id can never alias a newer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(NonZeroU64);

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

impl ObjectId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        let raw = NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed);
        // The counter starts at 1 and would need 2^64 allocations to wrap.
        Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }

    /// Rebuild an id from its raw value. Returns `None` for zero.
    pub fn from_raw(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    /// The raw numeric value of this id.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors returned by [`EditSession`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Another object already holds the edit session.
    #[error("object {active} is already being edited (requested by {requested})")]
    AlreadyEditing {
        /// The object currently in edit mode.
        active: ObjectId,
        /// The object that tried to enter edit mode.
        requested: ObjectId,
    },
}

/// The editor-wide "object currently being text-edited" slot.
///
/// An `EditSession` is created once by the top-level controller and handed to
/// every editable object it owns.  Clones share the same slot.  At most one
/// object can hold the slot at a time: [`begin`](EditSession::begin) is a
/// check-and-set that fails while another object is editing, and
/// [`end`](EditSession::end) only releases the slot for its current holder.
///
/// # Example
///
/// ```
/// use vellum_core::session::{EditSession, ObjectId};
///
/// let session = EditSession::new();
/// let a = ObjectId::next();
/// let b = ObjectId::next();
///
/// session.begin(a).unwrap();
/// assert!(session.begin(b).is_err());
/// assert!(session.end(a));
/// assert_eq!(session.active(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    slot: Arc<AtomicU64>,
}

impl EditSession {
    /// Create an empty session (nobody editing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for `id`.
    ///
    /// Succeeds when the slot is empty or already held by `id`.
    pub fn begin(&self, id: ObjectId) -> Result<(), SessionError> {
        match self
            .slot
            .compare_exchange(0, id.get(), Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => Ok(()),
            Err(current) => match ObjectId::from_raw(current) {
                Some(active) if active != id => Err(SessionError::AlreadyEditing {
                    active,
                    requested: id,
                }),
                _ => Ok(()),
            },
        }
    }

    /// Release the slot if `id` holds it. Returns whether it was released.
    pub fn end(&self, id: ObjectId) -> bool {
        self.slot
            .compare_exchange(id.get(), 0, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// The object currently being edited, if any.
    pub fn active(&self) -> Option<ObjectId> {
        ObjectId::from_raw(self.slot.load(Ordering::Acquire))
    }

    /// Whether `id` currently holds the slot.
    pub fn is_editing(&self, id: ObjectId) -> bool {
        self.active() == Some(id)
    }
}
