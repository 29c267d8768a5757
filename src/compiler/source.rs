use std::fmt;
use std::io::{self, Read};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Byte range into the source text.
pub type Span = Range<usize>;

#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    File(PathBuf),
    Stdin,
    Synthetic,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::File(path) => write!(f, "{}", path.display()),
            Origin::Stdin => f.write_str("<stdin>"),
            Origin::Synthetic => f.write_str("<synthetic>"),
        }
    }
}

/// Program text together with where it came from.
#[derive(Debug, Clone)]
pub struct Source {
    origin: Origin,
    content: String,
}

impl Source {
    pub fn new<C: Into<String>>(origin: Origin, content: C) -> Self {
        Self {
            origin,
            content: content.into(),
        }
    }

    pub fn synthetic<C: Into<String>>(content: C) -> Self {
        Self::new(Origin::Synthetic, content)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::new(Origin::File(path.as_ref().to_path_buf()), content))
    }

    pub fn from_stdin() -> io::Result<Self> {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        Ok(Self::new(Origin::Stdin, content))
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

pub trait HasSourceLocation {
    fn source_location(&self) -> Span;
}
