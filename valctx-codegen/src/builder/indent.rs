/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Indentation of the generated accessor files.
    pub const ACCESSORS: Self = Self::Spaces(4);

    /// Write one indent level to `buf`.
    pub fn write_to(&self, buf: &mut String) {
        match self {
            Self::Spaces(width) => buf.extend(std::iter::repeat_n(' ', usize::from(*width))),
            Self::Tab => buf.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::ACCESSORS
    }
}
