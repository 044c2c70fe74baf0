//! Shared UI primitive library for the browser shell and its pages.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the shell stylesheet.
//! Components should compose these primitives instead of emitting ad hoc control
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    AppShell, Button, ButtonSize, ButtonVariant, Cluster, EmptyState, FieldGroup, FieldVariant,
    Heading, IconButton, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, MenuItem,
    MenuSeparator, MenuSurface, Modal, Panel, SelectField, Stack, Switch, Text, TextField,
    TextRole, TextTone, ToolBar, Tree, TreeItem,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppShell, Button, ButtonSize, ButtonVariant, Cluster, EmptyState, FieldGroup,
        FieldVariant, Heading, Icon, IconButton, IconName, IconSize, LayoutAlign, LayoutGap,
        LayoutJustify, LayoutPadding, MenuItem, MenuSeparator, MenuSurface, Modal, Panel,
        SelectField, Stack, Switch, Text, TextField, TextRole, TextTone, ToolBar, Tree, TreeItem,
    };
}
