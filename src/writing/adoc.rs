//! AsciiDoc rendering of an [AnnotationRecord].
//!
//! ```text
//! = Eltern
//!
//! :Part Of Speech:		noun, singular or mass
//! :Lema:		Eltern
//! :Prefix:		E
//! :Suffix:		ern
//! // END-OF-HEADER. DO NOT MODIFY OR DELETE THIS LINE
//!
//! _Eltern_ is a _noun, singular or mass_. Its lema is _Eltern_.
//! ```
//!
//! Everything above the end-of-header mark is regenerated on every run.
use crate::cache::AnnotationRecord;

pub const EXTENSION: &str = "adoc";
pub const END_OF_HEADER: &str = "// END-OF-HEADER. DO NOT MODIFY OR DELETE THIS LINE";

fn property(name: &str, value: &str) -> String {
    format!(":{}:\t\t{}\n", name, value)
}

/// Render the document of a record.
pub fn render(record: &AnnotationRecord) -> String {
    let mut out = format!("= {}\n\n", record.word);
    out.push_str(&property("Part Of Speech", &record.pos));
    out.push_str(&property("Lema", &record.lemma));
    out.push_str(&property("Prefix", &record.prefix));
    out.push_str(&property("Suffix", &record.suffix));
    out.push_str(END_OF_HEADER);
    out.push_str("\n\n");
    out.push_str(&format!(
        "_{}_ is a _{}_. Its lema is _{}_.",
        record.word, record.pos, record.lemma
    ));
    out
}
