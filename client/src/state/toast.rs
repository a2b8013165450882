//! Dismissible notification queue.
//!
//! DESIGN
//! ======
//! Toasts are plain data. The `ToastStack` component renders them and
//! schedules each dismissal after its `duration_ms`; users can also dismiss
//! one early.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const SUCCESS_DURATION_MS: u32 = 3000;
pub const ERROR_DURATION_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Info,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub duration_ms: u32,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        variant: ToastVariant,
        duration_ms: u32,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, title: title.into(), description, variant, duration_ms });
        id
    }

    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(title, Some(description.into()), ToastVariant::Info, SUCCESS_DURATION_MS)
    }

    pub fn error(&mut self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.push(title, description, ToastVariant::Destructive, ERROR_DURATION_MS)
    }

    /// Remove toast `id`. Returns whether it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}
