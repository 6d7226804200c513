use std::io;
use std::path::PathBuf;

use smol_str::SmolStr;

/// Errors raised while building the registry or resolving imports.
///
/// All of them are fatal to a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("import root `{}` cannot be made absolute: {source}", .path.display())]
    ImportRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot find type info for `{0}`")]
    UnknownType(SmolStr),

    #[error("error searching `{}` for `{target}`: {source}", .root.display())]
    FileSearch {
        root: PathBuf,
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot locate `{target}` under any import root")]
    NotFound { target: String },

    #[error("cannot compute a relative path from `{}` to `{}`", .from.display(), .to.display())]
    RelativePath { from: PathBuf, to: PathBuf },

    #[error("`{}` is not below import root `{}`", .path.display(), .root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("error resolving dependencies of `{file}` on `{target}`: {source}")]
    Resolve {
        file: String,
        target: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the file being resolved and the file it imports from.
    pub(crate) fn in_file(self, file: &str, target: &str) -> Self {
        Error::Resolve {
            file: file.to_string(),
            target: target.to_string(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for registry and resolver operations.
pub type Result<T> = std::result::Result<T, Error>;
