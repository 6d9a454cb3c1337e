//! Field checks shared by the account forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Loose shape check; the backend is the authority on addresses.
pub(crate) fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
