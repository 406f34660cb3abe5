//! Export sinks for a generated file tree: on-disk project directories,
//! ZIP archives (maximum deflate), and a printable tree listing.
//!
//! Sinks treat the tree as read-only and complete; an export failure
//! never corrupts the in-memory tree.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use ptree::TreeBuilder;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::infra::utils::SlugUtils;
use crate::templates::FileTree;

/// Archive file name for a site: `<slug>.zip`.
pub fn zip_file_name(site_name: &str) -> String {
    format!("{}.zip", SlugUtils::slugify(site_name))
}

/// Write every tree entry under `<out_dir>/<slug>/`, creating parent
/// directories as needed. Entries are independent, so the writes run in
/// parallel. Refuses to touch an existing project root unless `force`.
pub fn write_project(
    tree: &FileTree,
    site_name: &str,
    out_dir: &Utf8Path,
    force: bool,
) -> Result<Utf8PathBuf> {
    let root = out_dir.join(SlugUtils::slugify(site_name));

    if root.exists() && !force {
        anyhow::bail!("Project directory already exists at {root}. Use --force to overwrite.");
    }

    tree.iter()
        .collect::<Vec<_>>()
        .par_iter()
        .try_for_each(|(path, content)| -> Result<()> {
            let dest = root.join(path.as_str());
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create directory {parent}"))?;
            }
            fs::write(&dest, content.as_bytes()).with_context(|| format!("write {dest}"))?;
            Ok(())
        })?;

    debug!(files = tree.len(), root = %root, "project written");
    Ok(root)
}

/// Package the tree as `<out_dir>/<slug>.zip`, preserving every path and
/// content byte-for-byte with maximum deflate compression. The archive
/// is staged in a temp file and promoted atomically.
pub fn export_zip(tree: &FileTree, site_name: &str, out_dir: &Utf8Path) -> Result<Utf8PathBuf> {
    fs::create_dir_all(out_dir).with_context(|| format!("create directory {out_dir}"))?;

    let dest = out_dir.join(zip_file_name(site_name));
    let staging = tempfile::NamedTempFile::new_in(out_dir.as_std_path())
        .context("create staging file for archive")?;

    let mut zip = ZipWriter::new(staging.as_file());
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    for (path, content) in tree {
        zip.start_file(path.as_str(), options)
            .with_context(|| format!("add {path} to archive"))?;
        zip.write_all(content.as_bytes())
            .with_context(|| format!("write {path} into archive"))?;
    }
    zip.finish().context("finalize archive")?;
    drop(zip);

    staging
        .persist(dest.as_std_path())
        .with_context(|| format!("promote archive to {dest}"))?;

    debug!(files = tree.len(), dest = %dest, "archive written");
    Ok(dest)
}

/// Total content size of the tree in bytes.
pub fn project_size(tree: &FileTree) -> u64 {
    tree.values().map(|content| content.len() as u64).sum()
}

/// Human-readable byte count: `0 Bytes`, `1.5 KB`, `2 MB`, ...
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    // Two decimals with trailing zeros trimmed
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[exponent])
}

#[derive(Default)]
struct Node {
    children: BTreeMap<String, Node>,
    is_dir: bool,
}

impl Node {
    fn insert(&mut self, segments: &[&str]) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };
        let child = self.children.entry((*first).to_string()).or_default();
        if rest.is_empty() {
            child.is_dir = false;
        } else {
            child.is_dir = true;
            child.insert(rest);
        }
    }
}

fn add_children(builder: &mut TreeBuilder, children: &BTreeMap<String, Node>) {
    // Directories first, then files, both in name order
    for (name, node) in children.iter().filter(|(_, n)| n.is_dir) {
        builder.begin_child(format!("{name}/"));
        add_children(builder, &node.children);
        builder.end_child();
    }
    for (name, _) in children.iter().filter(|(_, n)| !n.is_dir) {
        builder.add_empty_child(name.clone());
    }
}

/// Render the tree as an indented listing rooted at the site slug.
pub fn render_tree(site_name: &str, tree: &FileTree) -> Result<String> {
    let mut root = Node {
        children: BTreeMap::new(),
        is_dir: true,
    };
    for path in tree.keys() {
        let segments: Vec<&str> = path.split('/').collect();
        root.insert(&segments);
    }

    let mut builder = TreeBuilder::new(format!("{}/", SlugUtils::slugify(site_name)));
    add_children(&mut builder, &root.children);

    let mut out = Vec::new();
    ptree::write_tree(&builder.build(), &mut out).context("render file tree")?;
    String::from_utf8(out).context("tree listing is valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> FileTree {
        let mut tree = FileTree::new();
        tree.insert("package.json".to_string(), "{}".to_string());
        tree.insert("src/App.tsx".to_string(), "export {}".to_string());
        tree.insert("src/components/Nav.tsx".to_string(), "export {}".to_string());
        tree
    }

    #[test]
    fn byte_formatting() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(512), "512 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1024 * 1024), "1 MB");
    }

    #[test]
    fn project_size_sums_contents() {
        assert_eq!(project_size(&sample_tree()), 2 + 9 + 9);
    }

    #[test]
    fn tree_listing_nests_directories() {
        let listing = render_tree("My Site", &sample_tree()).unwrap();
        assert!(listing.starts_with("my-site/"));
        assert!(listing.contains("src/"));
        assert!(listing.contains("components/"));
        assert!(listing.contains("Nav.tsx"));
        assert!(listing.contains("package.json"));
    }

    #[test]
    fn zip_name_is_slugged() {
        assert_eq!(zip_file_name("Sunny Side Bakery"), "sunny-side-bakery.zip");
    }
}
