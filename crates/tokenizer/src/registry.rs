use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Result, TokenizerError};
use crate::stream::TokenStream;
use crate::types::{Document, Token};

/// Version of the module contract a host engine discovers modules against.
pub const TOKENIZER_API_VERSION: u32 = 1;

/// A pluggable tokenizer module.
///
/// This is the seam a host search engine drives: bind a document with
/// [`open`](Self::open), then pull tokens from the returned stream. A
/// module holds no state across documents, so one instance may serve any
/// number of concurrent `open` calls.
pub trait Tokenizer: Send + Sync {
    /// Stable name the host registers and looks the module up by
    fn name(&self) -> &'static str;

    /// Bind fresh scanning state to one document
    fn open<'a>(&self, doc: Document<'a>) -> Result<TokenStream<'a>>;

    /// Tokenize a whole document in one call
    fn tokenize(&self, doc: Document<'_>) -> Result<Vec<Token>> {
        self.open(doc)?.collect_tokens()
    }
}

/// The code-identifier tokenizer: splits camelCase, acronyms, snake_case,
/// and letter/digit transitions into lowercase sub-word tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierTokenizer;

impl Tokenizer for IdentifierTokenizer {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn open<'a>(&self, doc: Document<'a>) -> Result<TokenStream<'a>> {
        TokenStream::open(doc)
    }
}

/// Named tokenizer modules a host engine can discover.
///
/// The registry is keyed by module name; registering the same name twice
/// is an error so a host cannot silently shadow a module another component
/// relies on.
pub struct TokenizerRegistry {
    modules: HashMap<&'static str, Arc<dyn Tokenizer>>,
}

impl TokenizerRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Registry pre-populated with [`IdentifierTokenizer`]
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let module: Arc<dyn Tokenizer> = Arc::new(IdentifierTokenizer);
        registry.modules.insert(module.name(), module);
        registry
    }

    /// Register a module under its own name
    pub fn register(&mut self, module: Arc<dyn Tokenizer>) -> Result<()> {
        let name = module.name();
        if self.modules.contains_key(name) {
            return Err(TokenizerError::DuplicateModule(name.to_string()));
        }
        self.modules.insert(name, module);
        Ok(())
    }

    /// Look a module up by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tokenizer>> {
        self.modules.get(name).cloned()
    }

    /// Names of all registered modules, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.modules.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for TokenizerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdentifierTokenizer, Tokenizer, TokenizerRegistry};
    use crate::error::TokenizerError;
    use crate::types::Document;
    use std::sync::Arc;

    #[test]
    fn default_registry_resolves_the_identifier_module() {
        let registry = TokenizerRegistry::with_defaults();
        let module = registry.get("identifier").expect("registered module");

        let tokens = module.tokenize(Document::new(b"APIEndpoint")).unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["api", "endpoint"]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = TokenizerRegistry::with_defaults();
        let err = registry
            .register(Arc::new(IdentifierTokenizer))
            .unwrap_err();
        assert_eq!(err, TokenizerError::DuplicateModule("identifier".into()));
    }

    #[test]
    fn unknown_module_is_none() {
        let registry = TokenizerRegistry::new();
        assert!(registry.get("identifier").is_none());
    }

    #[test]
    fn one_module_serves_independent_streams() {
        let tokenizer = IdentifierTokenizer;
        let doc = Document::new(b"helloWorld");

        let mut first = tokenizer.open(doc).unwrap();
        let mut second = tokenizer.open(doc).unwrap();

        // Advancing one stream never moves the other
        assert_eq!(first.next().unwrap().unwrap().text, "hello");
        assert_eq!(second.next().unwrap().unwrap().text, "hello");
        assert_eq!(first.next().unwrap().unwrap().text, "world");
        assert_eq!(second.next().unwrap().unwrap().text, "world");
    }
}
