use std::fmt;

use crate::error::EditorError;

/// Stable key of an editor field.
///
/// Assigned at construction and never reused, so deleting one field does not
/// shift the identity of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u64);

impl FieldId {
    /// Rebuild an id that travelled through a view layer
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorField {
    pub id: FieldId,
    pub text: String,
}

type CommitFn<'a> = Box<dyn FnMut(Vec<String>) + 'a>;

/// Editable snapshot of the session history.
///
/// Every delete commits the remaining entries right away; `save` commits and
/// consumes the editor, `close` drops it without committing.
pub struct HistoryEditor<'a> {
    fields: Vec<EditorField>,
    commit: CommitFn<'a>,
}

impl<'a> HistoryEditor<'a> {
    pub fn new(snapshot: &[String], commit: impl FnMut(Vec<String>) + 'a) -> Self {
        let fields = snapshot
            .iter()
            .enumerate()
            .map(|(i, text)| EditorField {
                id: FieldId(i as u64),
                text: text.clone(),
            })
            .collect();

        Self {
            fields,
            commit: Box::new(commit),
        }
    }

    pub fn fields(&self) -> &[EditorField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn text(&self, id: FieldId) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.text.as_str())
    }

    pub fn edit_entry(&mut self, id: FieldId, text: impl Into<String>) -> Result<(), EditorError> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(EditorError::UnknownField(id))?;
        field.text = text.into();
        Ok(())
    }

    /// Remove a field and immediately commit what is left
    pub fn delete_entry(&mut self, id: FieldId) -> Result<(), EditorError> {
        let index = self
            .fields
            .iter()
            .position(|f| f.id == id)
            .ok_or(EditorError::UnknownField(id))?;

        self.fields.remove(index);
        tracing::debug!("Deleted history field {id}, {} left", self.fields.len());

        let entries = self.entries();
        (self.commit)(entries);
        Ok(())
    }

    /// Current text of every live field, trimmed
    pub fn entries(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| f.text.trim().to_string())
            .collect()
    }

    pub fn save(mut self) {
        let entries = self.entries();
        tracing::debug!("Saving {} history entries", entries.len());
        (self.commit)(entries);
    }

    pub fn close(self) {
        tracing::debug!("History editor closed without saving");
    }
}

impl fmt::Debug for HistoryEditor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryEditor")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
