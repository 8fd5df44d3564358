/// `type` of a password input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Password,
    Text,
}

/// Icon classes shown while the value is concealed and while it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPair<'a> {
    pub concealed: &'a str,
    pub revealed: &'a str,
}

impl Default for IconPair<'static> {
    fn default() -> Self {
        Self {
            concealed: "bx-eye",
            revealed: "bx-eye-slash",
        }
    }
}

/// The element wrapping a password input and its toggle icon.
pub trait PasswordContainer {
    /// `None` when the container has no input.
    fn input_kind(&self) -> Option<InputKind>;
    fn set_input_kind(&mut self, kind: InputKind);
    fn has_icon(&self) -> bool;
    fn replace_icon_class(&mut self, from: &str, to: &str);
}

/// Flip the input between masked and plain text and swap the icon class to
/// match. Returns the new kind, or `None` when the input or icon is missing.
pub fn toggle_password<C: PasswordContainer>(
    container: &mut C,
    icons: &IconPair<'_>,
) -> Option<InputKind> {
    let kind = container.input_kind()?;
    if !container.has_icon() {
        return None;
    }

    let next = match kind {
        InputKind::Password => {
            container.replace_icon_class(icons.concealed, icons.revealed);
            InputKind::Text
        }
        InputKind::Text => {
            container.replace_icon_class(icons.revealed, icons.concealed);
            InputKind::Password
        }
    };
    container.set_input_kind(next);
    Some(next)
}
