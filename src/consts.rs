//! Shared defaults for the toggle crate.

// ── Read more ───────────────────────────────────────────────────

/// Id of the text container that expands and collapses.
pub const CONTAINER_ID: &str = "text-container";

/// Id of the button that drives the container.
pub const BUTTON_ID: &str = "read-more-btn";

/// Class present on the container while it is expanded.
pub const EXPANDED_CLASS: &str = "expanded";

/// Button label shown while the container is expanded.
pub const EXPANDED_LABEL: &str = "Read Less👆";

/// Button label shown while the container is collapsed.
pub const COLLAPSED_LABEL: &str = "Read More👇";

// ── Answers ─────────────────────────────────────────────────────

/// Inline `display` value of a hidden answer.
pub const DISPLAY_HIDDEN: &str = "none";

/// Inline `display` value written when an answer is revealed.
pub const DISPLAY_VISIBLE: &str = "block";
