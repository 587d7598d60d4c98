#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// Temporary working directory holding a resource pack at `RP/`, the layout the
// pipeline hands to the filter.
pub struct PackFixture {
    _temp: TempDir,
    pub workdir: PathBuf,
    pub root: PathBuf,
}

impl PackFixture {
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("failed to allocate temp pack")?;
        let workdir = temp.path().to_path_buf();
        let root = workdir.join("RP");
        fs::create_dir_all(&root)?;
        Ok(Self {
            _temp: temp,
            workdir,
            root,
        })
    }

    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn read(&self, relative: &str) -> Result<String> {
        let path = self.root.join(relative);
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.root.join(relative).exists()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Relative paths of every file under the pack, sorted.
    pub fn files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        collect_files(&self.root, &self.root, &mut files)?;
        files.sort();
        Ok(files)
    }

    /// Run the filter binary from the fixture's working directory.
    pub fn run_filter(&self, args: &[&str]) -> Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_texture-namespace"))
            .args(args)
            .current_dir(&self.workdir)
            .env_remove("TEXTURE_NAMESPACE_PACK_ROOT")
            .env_remove("RUST_LOG")
            .output()
            .context("failed to execute texture-namespace")
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(root, &path, out)?;
        } else {
            let relative = path.strip_prefix(root)?;
            out.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(())
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

pub const CRAB_ENTITY: &str = r#"{
  "format_version": "1.10.0",
  "minecraft:client_entity": {
    "description": {
      "identifier": "chillcraft:crab_mech",
      "textures": {
        "default": "textures/entity/crab_mech/crab_mech_black",
        "red": "textures/entity/crab_mech/crab_mech_red"
      }
    }
  }
}
"#;

pub const ITEM_TEXTURE: &str = r#"{
  "resource_pack_name": "mechs",
  "texture_data": {
    "wrench": { "textures": "textures/items/wrench" }
  }
}
"#;
