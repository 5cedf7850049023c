/*! Word document writing.

One AsciiDoc document is written per cached word, see [adoc] for the layout.
!*/
pub mod adoc;
mod docwriter;

pub use docwriter::DocWriter;
