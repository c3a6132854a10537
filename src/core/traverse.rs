//! Recursive directory traversal
//!
//! Walks a tree level by level. Each level contributes its files and then its
//! subdirectories (those accepted by the predicate), after which every
//! subdirectory is visited whether or not it was accepted: the predicate
//! filters what is reported, it never prunes the walk. Symlinked
//! subdirectories are reported like any other but are not entered.

use std::path::{Path, PathBuf};

use log::debug;

use crate::core::listing;
use crate::error::Result;

type Predicate<'a> = Box<dyn Fn(&Path) -> bool + 'a>;

/// One element of a nested traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A matching file or directory
    Entry(PathBuf),
    /// Everything collected below one subdirectory
    Level(Vec<Node>),
}

impl Node {
    /// Flatten a nested result into its entries, depth first.
    pub fn flatten(nodes: Vec<Node>) -> Vec<PathBuf> {
        let mut out = Vec::new();
        for node in nodes {
            match node {
                Node::Entry(path) => out.push(path),
                Node::Level(children) => out.extend(Node::flatten(children)),
            }
        }
        out
    }
}

/// Result of [`Traverse::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Traversal {
    Flat(Vec<PathBuf>),
    Nested(Vec<Node>),
}

impl Traversal {
    /// All matched paths regardless of shape
    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            Traversal::Flat(paths) => paths,
            Traversal::Nested(nodes) => Node::flatten(nodes),
        }
    }
}

/// Builder for a recursive walk
///
/// ```no_run
/// use file_comfort::core::traverse::Traverse;
///
/// let rust_files = Traverse::new("src")
///     .predicate(|p| p.extension().map_or(false, |e| e == "rs"))
///     .max_depth(Some(2))
///     .collect_flat()?;
/// # Ok::<(), file_comfort::ComfortError>(())
/// ```
pub struct Traverse<'a> {
    root: PathBuf,
    predicate: Option<Predicate<'a>>,
    max_depth: Option<usize>,
    flatten: bool,
}

impl<'a> Traverse<'a> {
    /// Walk `root` with no predicate, no depth limit and flat output.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            predicate: None,
            max_depth: None,
            flatten: true,
        }
    }

    /// Only report entries for which `predicate` returns true.
    pub fn predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Path) -> bool + 'a,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Stop descending once this depth is reached (`None` means unlimited).
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Run the walk, producing the shape selected by [`Traverse::flatten`].
    pub fn run(&self) -> Result<Traversal> {
        if self.flatten {
            self.collect_flat().map(Traversal::Flat)
        } else {
            self.collect_nested().map(Traversal::Nested)
        }
    }

    /// Run the walk and merge every level into one list.
    pub fn collect_flat(&self) -> Result<Vec<PathBuf>> {
        self.collect_nested().map(Node::flatten)
    }

    /// Run the walk keeping one [`Node::Level`] per visited subdirectory.
    pub fn collect_nested(&self) -> Result<Vec<Node>> {
        self.visit(&self.root, 0)
    }

    fn accepts(&self, path: &Path) -> bool {
        self.predicate.as_ref().map_or(true, |predicate| predicate(path))
    }

    fn visit(&self, dir: &Path, depth: usize) -> Result<Vec<Node>> {
        debug!("Traversing {} at depth {}", dir.display(), depth);

        let files = listing::files(dir)?.collect::<Result<Vec<_>>>()?;
        let subdirs = listing::dirs(dir)?.collect::<Result<Vec<_>>>()?;

        let mut nodes: Vec<Node> = files
            .into_iter()
            .chain(subdirs.iter().cloned())
            .filter(|path| self.accepts(path))
            .map(Node::Entry)
            .collect();

        if self.max_depth == Some(depth) {
            return Ok(nodes);
        }

        for subdir in subdirs.iter().filter(|dir| listing::is_descendable(dir)) {
            nodes.push(Node::Level(self.visit(subdir, depth + 1)?));
        }
        Ok(nodes)
    }
}

/// Walk `root` and collect matching files and directories.
///
/// # Arguments
///
/// * `root` - Directory to start from (depth 0)
/// * `predicate` - Optional filter applied to both files and directories
/// * `max_depth` - Depth at which to stop descending, `None` for unlimited
/// * `flatten` - Merge all levels into one list instead of nesting them
pub fn traverse<P, F>(
    root: P,
    predicate: Option<F>,
    max_depth: Option<usize>,
    flatten: bool,
) -> Result<Traversal>
where
    P: AsRef<Path>,
    F: Fn(&Path) -> bool,
{
    let mut walk = Traverse::new(root).max_depth(max_depth).flatten(flatten);
    if let Some(predicate) = predicate {
        walk = walk.predicate(predicate);
    }
    walk.run()
}
