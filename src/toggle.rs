//! Read-more and answer toggles.
//!
//! Both toggles are two-state machines whose state lives only in the page:
//! the read-more container's class list and an answer's inline `display`.
//! Each call reads that attribute, flips it, and returns the new state.
//! Missing elements are reported before anything is written.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::config::ReadMoreConfig;
use crate::consts::{DISPLAY_HIDDEN, DISPLAY_VISIBLE};
use crate::dom::Dom;
use crate::error::ToggleError;

/// State of a read-more container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    Collapsed,
    Expanded,
}

impl Expansion {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// State of an answer element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

impl Visibility {
    /// Only an exact `none` counts as hidden; unset or any other value is visible.
    #[must_use]
    pub fn from_display(display: &str) -> Self {
        if display == DISPLAY_HIDDEN { Self::Hidden } else { Self::Visible }
    }

    /// The inline `display` value written for this state.
    #[must_use]
    pub fn as_display(self) -> &'static str {
        match self {
            Self::Hidden => DISPLAY_HIDDEN,
            Self::Visible => DISPLAY_VISIBLE,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }
}

/// A container/button pair bound once at page initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadMore {
    config: ReadMoreConfig,
}

impl ReadMore {
    /// Bind to the container and button named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::ElementNotFound`] if either element is absent.
    pub fn bind(dom: &impl Dom, config: ReadMoreConfig) -> Result<Self, ToggleError> {
        for id in [&config.container_id, &config.button_id] {
            if !dom.contains(id) {
                return Err(ToggleError::not_found(id));
            }
        }
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ReadMoreConfig {
        &self.config
    }

    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.config.container_id
    }

    #[must_use]
    pub fn button_id(&self) -> &str {
        &self.config.button_id
    }

    /// Button text for `state`.
    #[must_use]
    pub fn label(&self, state: Expansion) -> &str {
        match state {
            Expansion::Collapsed => &self.config.collapsed_label,
            Expansion::Expanded => &self.config.expanded_label,
        }
    }

    /// Read the container's current state from its class list.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::ElementNotFound`] if the container is gone.
    pub fn state(&self, dom: &impl Dom) -> Result<Expansion, ToggleError> {
        let expanded = dom.has_class(&self.config.container_id, &self.config.expanded_class)?;
        Ok(if expanded { Expansion::Expanded } else { Expansion::Collapsed })
    }

    /// Write the button label that matches the container's current state.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::ElementNotFound`] if either element is gone.
    pub fn sync_label(&self, dom: &mut impl Dom) -> Result<Expansion, ToggleError> {
        let state = self.state(&*dom)?;
        dom.set_text(&self.config.button_id, self.label(state))?;
        Ok(state)
    }

    /// Flip the container's class and the button's label together.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::ElementNotFound`] if either element is gone;
    /// neither is modified in that case.
    pub fn toggle_expanded(&self, dom: &mut impl Dom) -> Result<Expansion, ToggleError> {
        let current = self.state(&*dom)?;
        if !dom.contains(&self.config.button_id) {
            return Err(ToggleError::not_found(&self.config.button_id));
        }
        let next = current.toggled();
        dom.set_class(&self.config.container_id, &self.config.expanded_class, next.is_expanded())?;
        dom.set_text(&self.config.button_id, self.label(next))?;
        log::debug!("read-more #{}: {current:?} -> {next:?}", self.config.container_id);
        Ok(next)
    }
}

/// Read whether the answer with `id` is hidden.
///
/// # Errors
///
/// Returns [`ToggleError::ElementNotFound`] if no element has `id`.
pub fn answer_visibility(dom: &impl Dom, id: &str) -> Result<Visibility, ToggleError> {
    Ok(Visibility::from_display(&dom.display(id)?))
}

/// Show a hidden answer, or hide a visible one.
///
/// # Errors
///
/// Returns [`ToggleError::ElementNotFound`] if no element has `id`.
pub fn toggle_answer_visibility(dom: &mut impl Dom, id: &str) -> Result<Visibility, ToggleError> {
    let current = answer_visibility(&*dom, id)?;
    let next = current.toggled();
    dom.set_display(id, next.as_display())?;
    log::debug!("answer #{id}: {current:?} -> {next:?}");
    Ok(next)
}
