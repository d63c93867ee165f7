//! Stable identities for indexed entities
//!
//! A [`VName`] is derived only from the file identity and the names of the
//! entity and its enclosing definitions. Nothing about the run (addresses,
//! visit counts, timestamps) enters it, so identical input always yields
//! identical identities.

use std::fmt;

use smol_str::SmolStr;

use super::schema::LANGUAGE;

/// Where a source file lives, as seen by the index consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileIdentity {
    pub corpus: SmolStr,
    pub root: SmolStr,
    pub path: SmolStr,
}

impl FileIdentity {
    pub fn new(path: impl Into<SmolStr>) -> Self {
        Self {
            corpus: SmolStr::default(),
            root: SmolStr::default(),
            path: path.into(),
        }
    }

    pub fn with_corpus(mut self, corpus: impl Into<SmolStr>) -> Self {
        self.corpus = corpus.into();
        self
    }

    pub fn with_root(mut self, root: impl Into<SmolStr>) -> Self {
        self.root = root.into();
        self
    }

    /// VName of the file node itself.
    pub fn vname(&self) -> VName {
        VName {
            signature: SmolStr::default(),
            corpus: self.corpus.clone(),
            root: self.root.clone(),
            path: self.path.clone(),
            language: SmolStr::default(),
        }
    }
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.corpus.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}/{}", self.corpus, self.path)
        }
    }
}

/// Kythe vector name.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct VName {
    pub signature: SmolStr,
    pub corpus: SmolStr,
    pub root: SmolStr,
    pub path: SmolStr,
    pub language: SmolStr,
}

impl VName {
    /// Semantic entity in `file` with an already-built signature.
    pub fn entity(file: &FileIdentity, signature: Signature) -> Self {
        Self {
            signature: signature.0,
            corpus: file.corpus.clone(),
            root: file.root.clone(),
            path: file.path.clone(),
            language: SmolStr::new_static(LANGUAGE),
        }
    }

    /// Anchor covering `[start, end)` in `file`.
    pub fn anchor(file: &FileIdentity, start: u32, end: u32) -> Self {
        Self {
            signature: SmolStr::new(format!("@{start}:{end}")),
            corpus: file.corpus.clone(),
            root: file.root.clone(),
            path: file.path.clone(),
            language: SmolStr::new_static(LANGUAGE),
        }
    }

    pub fn with_language(mut self, language: impl Into<SmolStr>) -> Self {
        self.language = language.into();
        self
    }
}

impl fmt::Display for VName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kythe://{}?lang={}?path={}?root={}#{}",
            self.corpus, self.language, self.path, self.root, self.signature
        )
    }
}

/// Signature of a declared entity: the file path followed by the names of
/// its enclosing definitions and its own name, joined by `#`.
///
/// `#` and `\` inside a name are escaped with `\`, so distinct scope chains
/// never collide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(SmolStr);

impl Signature {
    pub fn new<'a>(file: &FileIdentity, scope: impl IntoIterator<Item = &'a str>, name: &'a str) -> Self {
        let mut signature = String::from(file.path.as_str());
        for component in scope.into_iter().chain(std::iter::once(name)) {
            signature.push('#');
            push_escaped(&mut signature, component);
        }
        Self(SmolStr::new(signature))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn push_escaped(out: &mut String, component: &str) {
    for c in component.chars() {
        if matches!(c, '#' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
}
