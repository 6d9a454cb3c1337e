//! Transient success/error notices shown at the top of a form.
//!
//! [`flash`] sets a notice and clears it again after [`NOTICE_MS`], unless a
//! newer notice replaced it in the meantime. A notice signal disposed with its
//! page is simply not written.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

pub const NOTICE_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

/// Clear `slot` only if it still holds `shown`.
pub(crate) fn clear_if_current(slot: &mut Option<Notice>, shown: &Notice) {
    if slot.as_ref() == Some(shown) {
        *slot = None;
    }
}

/// Show `notice` in `slot` and schedule its removal.
pub fn flash(slot: RwSignal<Option<Notice>>, notice: Notice) {
    slot.set(Some(notice.clone()));
    crate::util::task::spawn(async move {
        #[cfg(feature = "csr")]
        gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
        slot.try_update(|current| clear_if_current(current, &notice));
    });
}
