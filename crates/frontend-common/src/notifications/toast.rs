//! Toast queue state

use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Success => {
                "bg-green-50 dark:bg-green-900/40 border-green-300 dark:border-green-700 text-green-800 dark:text-green-200"
            }
            Self::Info => {
                "bg-blue-50 dark:bg-blue-900/40 border-blue-300 dark:border-blue-700 text-blue-800 dark:text-blue-200"
            }
            Self::Warning => {
                "bg-amber-50 dark:bg-amber-900/40 border-amber-300 dark:border-amber-700 text-amber-800 dark:text-amber-200"
            }
            Self::Error => {
                "bg-red-50 dark:bg-red-900/40 border-red-300 dark:border-red-700 text-red-800 dark:text-red-200"
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Assigned by the queue on push
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title, message)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u64),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(mut toast) => {
                let mut next = (*self).clone();
                next.next_id += 1;
                toast.id = next.next_id;
                next.toasts.push(toast);
                Rc::new(next)
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                Rc::new(Self {
                    toasts: self.toasts.iter().filter(|t| t.id != id).cloned().collect(),
                    next_id: self.next_id,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(Toast::info("a", "first")))
            .reduce(ToastAction::Push(Toast::warning("b", "second")));

        let ids: Vec<u64> = queue.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(queue.toasts[1].kind, ToastKind::Warning);
    }

    #[test]
    fn test_dismiss_removes_only_matching_toast() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(Toast::info("a", "first")))
            .reduce(ToastAction::Push(Toast::info("b", "second")))
            .reduce(ToastAction::Dismiss(1));

        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].title, "b");
    }

    #[test]
    fn test_ids_are_not_reused_after_dismiss() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(Toast::error("a", "x")))
            .reduce(ToastAction::Dismiss(1))
            .reduce(ToastAction::Push(Toast::error("b", "y")));

        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].id, 2);
    }

    #[test]
    fn test_dismiss_unknown_id_keeps_state() {
        let queue = Rc::new(ToastQueue::default()).reduce(ToastAction::Push(Toast::info("a", "x")));
        let same = Rc::clone(&queue).reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &same));
    }
}
