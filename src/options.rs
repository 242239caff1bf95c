//! Configuration for rendering.
//!
//! The engine keeps no ambient state: the one locale-like knob, the group
//! separator used by the `n` presentation type, is an explicit option passed
//! at [`Renderer`](crate::Renderer) construction. The explicit `,` flag in a
//! spec always groups with a comma regardless of this setting.
//!
//! ## Examples
//!
//! ```rust
//! use specfmt::{format_with_options, FormatOptions};
//!
//! let options = FormatOptions::new().with_group_separator('.');
//! let rendered = format_with_options(1234567, "n", &options).unwrap();
//! assert_eq!(rendered, "1.234.567");
//! ```

use serde::{Deserialize, Serialize};

/// Rendering options.
///
/// # Examples
///
/// ```rust
/// use specfmt::FormatOptions;
///
/// let options = FormatOptions::new();
/// assert_eq!(options.group_separator, ',');
///
/// let options = FormatOptions::new().with_group_separator('_');
/// assert_eq!(options.group_separator, '_');
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Separator the `n` presentation type puts between digit groups.
    pub group_separator: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            group_separator: ',',
        }
    }
}

impl FormatOptions {
    /// Creates the default options (comma group separator).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the group separator used by the `n` presentation type.
    #[must_use]
    pub fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = separator;
        self
    }
}
