//! Editable list state shared by the admin editors

use std::rc::Rc;
use yew::prelude::*;

/// The record being edited and where it came from
#[derive(Clone, Debug, PartialEq)]
pub struct Draft<T> {
    /// Position in the list, `None` for a record not yet created
    pub index: Option<usize>,
    pub record: T,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordList<T> {
    pub items: Vec<T>,
    pub draft: Option<Draft<T>>,
    pub saving: bool,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            draft: None,
            saving: false,
        }
    }
}

pub enum RecordAction<T> {
    Loaded(Vec<T>),
    StartNew,
    StartEdit(usize),
    UpdateDraft(T),
    CancelEdit,
    Saving,
    /// The server accepted the draft and returned the stored record
    Saved(T),
    SaveFailed,
    Removed(usize),
}

impl<T: Clone + Default> Reducible for RecordList<T> {
    type Action = RecordAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RecordAction::Loaded(items) => {
                next.items = items;
                next.draft = None;
            }
            RecordAction::StartNew => {
                next.draft = Some(Draft {
                    index: None,
                    record: T::default(),
                });
            }
            RecordAction::StartEdit(index) => {
                let Some(record) = self.items.get(index) else {
                    return self;
                };
                next.draft = Some(Draft {
                    index: Some(index),
                    record: record.clone(),
                });
            }
            RecordAction::UpdateDraft(record) => {
                let Some(draft) = next.draft.as_mut() else {
                    return self;
                };
                draft.record = record;
            }
            RecordAction::CancelEdit => next.draft = None,
            RecordAction::Saving => next.saving = true,
            RecordAction::Saved(record) => {
                match next.draft.take().and_then(|draft| draft.index) {
                    Some(index) if index < next.items.len() => next.items[index] = record,
                    _ => next.items.push(record),
                }
                next.saving = false;
            }
            RecordAction::SaveFailed => next.saving = false,
            RecordAction::Removed(index) => {
                if index >= next.items.len() {
                    return self;
                }
                next.items.remove(index);
                // Indices after the removed one shift down
                next.draft = match next.draft.take() {
                    Some(Draft { index: Some(i), .. }) if i == index => None,
                    Some(Draft {
                        index: Some(i),
                        record,
                    }) if i > index => Some(Draft {
                        index: Some(i - 1),
                        record,
                    }),
                    other => other,
                };
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(items: &[&str]) -> Rc<RecordList<String>> {
        Rc::new(RecordList::default()).reduce(RecordAction::Loaded(
            items.iter().map(|s| s.to_string()).collect(),
        ))
    }

    #[test]
    fn test_edit_and_save_replaces_in_place() {
        let state = loaded(&["a", "b", "c"])
            .reduce(RecordAction::StartEdit(1))
            .reduce(RecordAction::UpdateDraft("B".into()))
            .reduce(RecordAction::Saving);
        assert!(state.saving);
        assert_eq!(state.draft.as_ref().unwrap().record, "B");

        let state = state.reduce(RecordAction::Saved("B!".into()));
        assert_eq!(state.items, ["a", "B!", "c"]);
        assert!(state.draft.is_none());
        assert!(!state.saving);
    }

    #[test]
    fn test_new_record_is_appended() {
        let state = loaded(&["a"])
            .reduce(RecordAction::StartNew)
            .reduce(RecordAction::Saved("z".into()));
        assert_eq!(state.items, ["a", "z"]);
    }

    #[test]
    fn test_failed_save_keeps_the_draft() {
        let state = loaded(&["a"])
            .reduce(RecordAction::StartEdit(0))
            .reduce(RecordAction::Saving)
            .reduce(RecordAction::SaveFailed);
        assert!(!state.saving);
        assert_eq!(state.draft.as_ref().unwrap().index, Some(0));
    }

    #[test]
    fn test_out_of_range_actions_are_ignored() {
        let state = loaded(&["a"]);
        let same = Rc::clone(&state).reduce(RecordAction::StartEdit(5));
        assert!(Rc::ptr_eq(&state, &same));
        let same = Rc::clone(&state).reduce(RecordAction::Removed(5));
        assert!(Rc::ptr_eq(&state, &same));
        let same = Rc::clone(&state).reduce(RecordAction::UpdateDraft("x".into()));
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn test_removal_shifts_the_draft_index() {
        let state = loaded(&["a", "b", "c"])
            .reduce(RecordAction::StartEdit(2))
            .reduce(RecordAction::Removed(0));
        assert_eq!(state.items, ["b", "c"]);
        assert_eq!(state.draft.as_ref().unwrap().index, Some(1));

        let state = state.reduce(RecordAction::Removed(1));
        assert_eq!(state.items, ["b"]);
        assert!(state.draft.is_none());
    }
}
