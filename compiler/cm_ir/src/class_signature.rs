//! The class name and its `final`/`abstract` modifier.

/// Class modifier. `final` and `abstract` exclude each other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClassKind {
    #[default]
    Normal,
    Final,
    Abstract,
}

impl ClassKind {
    /// Source keyword, or `None` for a plain class.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            ClassKind::Normal => None,
            ClassKind::Final => Some("final"),
            ClassKind::Abstract => Some("abstract"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassSignature {
    pub name: String,
    pub kind: ClassKind,
}

impl ClassSignature {
    pub fn new(name: impl Into<String>) -> Self {
        ClassSignature {
            name: name.into(),
            kind: ClassKind::Normal,
        }
    }

    pub fn is_final(&self) -> bool {
        self.kind == ClassKind::Final
    }

    pub fn is_abstract(&self) -> bool {
        self.kind == ClassKind::Abstract
    }

    /// Setting `final` clears `abstract`. Clearing it only affects a final
    /// class.
    pub fn set_final(&mut self, value: bool) {
        if value {
            self.kind = ClassKind::Final;
        } else if self.is_final() {
            self.kind = ClassKind::Normal;
        }
    }

    /// Setting `abstract` clears `final`. Clearing it only affects an
    /// abstract class.
    pub fn set_abstract(&mut self, value: bool) {
        if value {
            self.kind = ClassKind::Abstract;
        } else if self.is_abstract() {
            self.kind = ClassKind::Normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_and_abstract_exclude_each_other() {
        let mut sig = ClassSignature::new("Foo");
        sig.set_final(true);
        assert!(sig.is_final());
        sig.set_abstract(true);
        assert!(sig.is_abstract());
        assert!(!sig.is_final());
    }

    #[test]
    fn clearing_other_flag_is_noop() {
        let mut sig = ClassSignature::new("Foo");
        sig.set_abstract(true);
        sig.set_final(false);
        assert_eq!(sig.kind, ClassKind::Abstract);
        sig.set_abstract(false);
        assert_eq!(sig.kind, ClassKind::Normal);
    }
}
