//! Document-level language attribute propagation

use eb_shared::Language;

/// Receives the active language whenever it is resolved or changed
///
/// Models the host document's `lang` attribute in document-rendering
/// environments. Native shells and tests use [`NoopDocumentSink`].
pub trait DocumentLanguageSink {
    fn apply_language(&mut self, language: Language);
}

/// Sink for environments with no document to annotate
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDocumentSink;

impl DocumentLanguageSink for NoopDocumentSink {
    fn apply_language(&mut self, _language: Language) {}
}
