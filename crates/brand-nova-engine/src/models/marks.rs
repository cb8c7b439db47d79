use serde::{Deserialize, Serialize};

/// A boolean inline text attribute that combines freely with the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
}

impl Mark {
    /// Every mark in serialization order: the first entry wraps innermost.
    pub const ORDER: [Mark; 5] = [
        Mark::Bold,
        Mark::Italic,
        Mark::Underline,
        Mark::Strikethrough,
        Mark::Code,
    ];

    /// The HTML tag that renders this mark.
    pub fn html_tag(self) -> &'static str {
        match self {
            Mark::Bold => "strong",
            Mark::Italic => "em",
            Mark::Underline => "u",
            Mark::Strikethrough => "del",
            Mark::Code => "code",
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// The set of marks carried by a text run.
///
/// Serialized flat into the owning text node, with unset flags omitted:
/// `{"text": "x", "bold": true}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marks {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
}

impl Marks {
    /// Builds a mark set with exactly the given marks active.
    pub fn of(marks: &[Mark]) -> Self {
        let mut out = Self::default();
        for &m in marks {
            out.set(m, true);
        }
        out
    }

    pub fn get(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Strikethrough => self.strikethrough,
            Mark::Code => self.code,
        }
    }

    pub fn set(&mut self, mark: Mark, on: bool) {
        let slot = match mark {
            Mark::Bold => &mut self.bold,
            Mark::Italic => &mut self.italic,
            Mark::Underline => &mut self.underline,
            Mark::Strikethrough => &mut self.strikethrough,
            Mark::Code => &mut self.code,
        };
        *slot = on;
    }

    /// Flips a mark, the way a toolbar button or hotkey toggles it.
    pub fn toggle(&mut self, mark: Mark) {
        self.set(mark, !self.get(mark));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Mark::ORDER.iter().all(|&m| !self.get(m))
    }

    /// Active marks in [`Mark::ORDER`].
    pub fn iter_active(&self) -> impl Iterator<Item = Mark> + '_ {
        Mark::ORDER.into_iter().filter(|&m| self.get(m))
    }
}
