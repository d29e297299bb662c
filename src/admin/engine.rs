use uuid::Uuid;

/// A row administered through one of the resource pages.
pub trait AdminRecord {
    fn record_id(&self) -> Uuid;
}

/// What a form submission does, decided solely by whether a record id
/// accompanied the form.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SubmitAction {
    Insert,
    Update(Uuid),
}

impl SubmitAction {
    pub fn for_form(editing: Option<Uuid>) -> Self {
        match editing {
            Some(id) => Self::Update(id),
            None => Self::Insert,
        }
    }
}

/// Resolves the record selected for editing against the fetched list.
///
/// The caller copies the returned record's fields into form state, so the form
/// holds a snapshot from selection time. An id that is no longer in the list
/// (deleted elsewhere, stale link) resolves to no selection.
pub fn resolve_editing<R: AdminRecord>(rows: &[R], edit: Option<Uuid>) -> Option<&R> {
    let id = edit?;
    rows.iter().find(|r| r.record_id() == id)
}

/// Two-phase delete confirmation. At most one row is armed at a time; arming
/// another row replaces (disarms) the previous one.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct DeleteArm {
    armed: Option<Uuid>,
}

impl DeleteArm {
    pub fn new(armed: Option<Uuid>) -> Self {
        Self { armed }
    }

    pub fn arm(self, id: Uuid) -> Self {
        Self { armed: Some(id) }
    }

    pub fn cancel(self) -> Self {
        Self { armed: None }
    }

    pub fn is_armed(&self, id: Uuid) -> bool {
        self.armed == Some(id)
    }

    /// A delete only executes when the confirmed row is the armed row.
    pub fn confirms(&self, id: Uuid) -> bool {
        self.is_armed(id)
    }
}

/// Applies a filter/search predicate to the fetched list for rendering.
/// The underlying list is untouched; dropping the predicate yields it back
/// in full.
pub fn filter_rows<'r, R>(rows: &'r [R], pred: impl Fn(&R) -> bool) -> Vec<&'r R> {
    rows.iter().filter(|r| pred(r)).collect()
}

/// Case-insensitive substring match used by the search boxes.
pub fn matches_term<S: AsRef<str>>(haystacks: &[S], term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|h| h.as_ref().to_lowercase().contains(&term))
}
