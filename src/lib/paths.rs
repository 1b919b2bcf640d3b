//! File argument normalization.

use std::{
    collections::VecDeque,
    env,
    ffi::OsString,
    fs, io,
    path::{Component, Path, PathBuf},
};

use crate::lib::errors::LaunchError;

/// Prefix marking an editor command such as `+10` or `+/pattern`.
pub const EDITOR_COMMAND_PREFIX: char = '+';

/// Returns true if the argument is an editor command and must pass through untouched.
pub fn is_editor_command(argument: &str) -> bool {
    argument.starts_with(EDITOR_COMMAND_PREFIX)
}

/// Normalize file arguments lazily, preserving order and length.
///
/// Editor commands pass through; everything else is resolved relative to the
/// current directory. The first failure is yielded as a
/// [`LaunchError::PathResolution`].
pub fn normalize_additional_args(
    args: &[String],
) -> impl Iterator<Item = Result<String, LaunchError>> + '_ {
    args.iter().map(|argument| {
        if is_editor_command(argument) {
            return Ok(argument.clone());
        }
        env::current_dir()
            .and_then(|cwd| resolve_path_from(&cwd, argument))
            .map_err(|source| LaunchError::PathResolution {
                argument: argument.clone(),
                source,
            })
    })
}

/// Resolve `raw` against `base` into an absolute, symlink-free, slash-separated string.
///
/// Components that do not exist (or sit under a non-directory) are kept as
/// text; symlinks later in the path are still followed.
pub fn resolve_path_from(base: &Path, raw: &str) -> io::Result<String> {
    let path = Path::new(raw);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    let resolved = resolve_absolute_with(&SystemPathLookup, &absolute)?;
    to_slash_string(&resolved)
}

/// Upper bound on symlinks followed while resolving one argument.
const MAX_SYMLINK_HOPS: usize = 40;

/// What a single path component turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathEntry {
    Symlink(PathBuf),
    Other,
}

/// Filesystem access used during resolution.
pub trait PathLookup {
    fn lookup(&self, path: &Path) -> io::Result<PathEntry>;
}

/// Lookup backed by `lstat` and `readlink`.
pub struct SystemPathLookup;

impl PathLookup for SystemPathLookup {
    fn lookup(&self, path: &Path) -> io::Result<PathEntry> {
        if fs::symlink_metadata(path)?.file_type().is_symlink() {
            return Ok(PathEntry::Symlink(fs::read_link(path)?));
        }
        Ok(PathEntry::Other)
    }
}

enum Step {
    Prefix(OsString),
    RootDir,
    ParentDir,
    Name(OsString),
}

fn steps(path: &Path) -> Vec<Step> {
    path.components()
        .filter_map(|component| match component {
            Component::Prefix(prefix) => Some(Step::Prefix(prefix.as_os_str().to_owned())),
            Component::RootDir => Some(Step::RootDir),
            Component::CurDir => None,
            Component::ParentDir => Some(Step::ParentDir),
            Component::Normal(name) => Some(Step::Name(name.to_owned())),
        })
        .collect()
}

fn is_missing(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Walk `path` one component at a time, following symlinks as they appear.
fn resolve_absolute_with(lookup: &impl PathLookup, path: &Path) -> io::Result<PathBuf> {
    let mut pending: VecDeque<Step> = steps(path).into();
    let mut resolved = PathBuf::new();
    let mut hops = 0;

    while let Some(step) = pending.pop_front() {
        match step {
            Step::Prefix(prefix) => resolved = PathBuf::from(prefix),
            Step::RootDir => resolved.push(Component::RootDir),
            Step::ParentDir => {
                resolved.pop();
            }
            Step::Name(name) => {
                resolved.push(&name);
                match lookup.lookup(&resolved) {
                    Ok(PathEntry::Symlink(target)) => {
                        hops += 1;
                        if hops > MAX_SYMLINK_HOPS {
                            return Err(io::Error::other(format!(
                                "too many levels of symbolic links at {}",
                                resolved.display()
                            )));
                        }
                        resolved.pop();
                        for step in steps(&target).into_iter().rev() {
                            pending.push_front(step);
                        }
                    }
                    Ok(PathEntry::Other) => {}
                    Err(err) if is_missing(&err) => {}
                    Err(err) => return Err(err),
                }
            }
        }
    }

    Ok(resolved)
}

fn to_slash_string(path: &Path) -> io::Result<String> {
    let text = path.to_str().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} is not valid UTF-8", path.display()),
        )
    })?;

    #[cfg(windows)]
    let text = text
        .strip_prefix(r"\\?\")
        .unwrap_or(text)
        .replace('\\', "/");
    #[cfg(not(windows))]
    let text = text.to_string();

    Ok(text)
}
