//! Per-store header/footer content used to buttress the shell template.

use crate::markup::Markup;

pub trait StaticShellContent: Send + Sync {
    /// Content added to the page header; `None` if no header is desired.
    fn header(&self) -> Option<Markup> {
        None
    }

    /// Content added to the page footer; `None` if no footer is desired.
    fn footer(&self) -> Option<Markup> {
        None
    }
}
