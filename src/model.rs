//! Minimal view of the model elements figures present.
//!
//! The surrounding editor owns the full model; a figure only needs an
//! opaque identity and the current name text. Elements are shared as
//! `Rc<RefCell<ModelElement>>` so a rename made by the editor is visible
//! to every figure bound to the element.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for element identifiers.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Opaque, interned model-element identity.
///
/// Identities are cheap to copy and compare; the backing string lives in
/// a global interner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`.
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// A model element as seen by its figures: identity plus current name.
#[derive(Debug, Clone)]
pub struct ModelElement {
    id: Id,
    name: String,
}

impl ModelElement {
    /// Creates a model element with the given identity and name.
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the element identity.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the current name text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the element. Figures bound to it will pick up the new
    /// name the next time they measure or render.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
