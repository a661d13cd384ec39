//! 素材库（资产字节存储）模块
//!
//! # 设计思路
//!
//! 图片内联只需要两个能力：把展示用文件名解析成资产标识，
//! 以及按标识读出原始字节。两者抽象为 [`AssetStore`] 接口，
//! 流水线不关心资产实际存放在哪里。
//!
//! # 实现思路
//!
//! 默认实现 [`FolderVault`] 以一个本地目录为素材库根：
//! - 含 `/` 的名字按库内相对路径直接定位；
//! - 裸文件名优先在笔记所在目录查找，再全库扫描；
//! - 扫描跳过 `.` 开头的目录（如 `.obsidian`、`.git`）。
//!
//! 同名冲突的裁决规则是本协作方的契约，见 [`FolderVault`] 文档。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// 资产的逻辑标识：素材库内的相对路径。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetId(PathBuf);

impl AssetId {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// 资产声明的扩展名（不含点），用于确定 MIME 类型。
    pub fn extension(&self) -> Option<&str> {
        self.0.extension().and_then(|ext| ext.to_str())
    }
}

/// 资产字节存储接口。
///
/// 解析失败表现为 `None`，读取失败表现为 `io::Error`；
/// 两者都由调用方（内联器）按单张图片隔离处理。
#[async_trait]
pub trait AssetStore {
    /// 在 `context_path`（笔记路径）的上下文中解析展示文件名。
    async fn resolve(&self, filename: &str, context_path: &str) -> Option<AssetId>;

    /// 读取资产的完整原始字节。
    async fn read_bytes(&self, id: &AssetId) -> io::Result<Vec<u8>>;
}

/// 以本地目录为根的素材库。
///
/// # 解析契约
///
/// 1. 文件名含 `/` 时按库内相对路径匹配，不存在则解析失败；
/// 2. 裸文件名先在笔记所在目录查找（同目录优先，使不同位置的
///    同名文件各自解析到各自的资产）；
/// 3. 仍未命中则全库扫描，文件名按字节精确比较（区分大小写），
///    多个候选按「路径层级最少、再按路径字典序」取第一个。
pub struct FolderVault {
    root: PathBuf,
}

impl FolderVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 递归收集文件名精确匹配的库内相对路径。
    fn collect_matches(&self, dir: &Path, rel: &Path, filename: &str, out: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("⚠️ 素材库目录不可读，跳过: dir={} err={}", dir.display(), err);
                return;
            }
        };

        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let rel_path = rel.join(name.as_ref());
            if path.is_dir() {
                self.collect_matches(&path, &rel_path, filename, out);
            } else if name == filename {
                out.push(rel_path);
            }
        }
    }
}

#[async_trait]
impl AssetStore for FolderVault {
    async fn resolve(&self, filename: &str, context_path: &str) -> Option<AssetId> {
        if filename.is_empty() {
            return None;
        }

        // 路径式名字：直接按库内相对路径匹配
        if filename.contains('/') {
            if self.root.join(filename).is_file() {
                return Some(AssetId::new(filename));
            }
            return None;
        }

        // 同目录优先
        if let Some(context_dir) = Path::new(context_path).parent() {
            let rel = context_dir.join(filename);
            if self.root.join(&rel).is_file() {
                return Some(AssetId::new(rel));
            }
        }

        // 全库扫描
        let mut matches = Vec::new();
        self.collect_matches(&self.root, Path::new(""), filename, &mut matches);
        matches.sort_by(|a, b| {
            a.components()
                .count()
                .cmp(&b.components().count())
                .then_with(|| a.cmp(b))
        });
        matches.into_iter().next().map(AssetId::new)
    }

    async fn read_bytes(&self, id: &AssetId) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.root.join(id.as_path())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create dirs failed");
        }
        fs::write(path, content).expect("write file failed");
    }

    #[tokio::test]
    async fn same_named_files_resolve_per_context() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        write_file(dir.path(), "a/pic.png", b"content-a");
        write_file(dir.path(), "b/pic.png", b"content-b");

        let vault = FolderVault::new(dir.path());

        let id_a = vault.resolve("pic.png", "a/note.md").await.expect("should resolve in a/");
        let id_b = vault.resolve("pic.png", "b/note.md").await.expect("should resolve in b/");

        assert_ne!(id_a, id_b);
        assert_eq!(vault.read_bytes(&id_a).await.expect("read a failed"), b"content-a");
        assert_eq!(vault.read_bytes(&id_b).await.expect("read b failed"), b"content-b");
    }

    #[tokio::test]
    async fn path_style_filename_resolves_relative_to_root() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        write_file(dir.path(), "assets/pic.png", b"bytes");

        let vault = FolderVault::new(dir.path());

        let id = vault
            .resolve("assets/pic.png", "notes/deep/note.md")
            .await
            .expect("path-style name should resolve");
        assert_eq!(id.as_path(), Path::new("assets/pic.png"));
    }

    #[tokio::test]
    async fn bare_filename_falls_back_to_vault_wide_search() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        write_file(dir.path(), "media/images/photo.png", b"bytes");

        let vault = FolderVault::new(dir.path());

        let id = vault
            .resolve("photo.png", "notes/note.md")
            .await
            .expect("vault-wide search should find the file");
        assert_eq!(id.as_path(), Path::new("media/images/photo.png"));
    }

    #[tokio::test]
    async fn tie_break_prefers_fewest_components_then_lexicographic() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        write_file(dir.path(), "z/pic.png", b"shallow-z");
        write_file(dir.path(), "a/deep/pic.png", b"deep-a");
        write_file(dir.path(), "m/pic.png", b"shallow-m");

        let vault = FolderVault::new(dir.path());

        let id = vault.resolve("pic.png", "note.md").await.expect("should resolve");
        assert_eq!(id.as_path(), Path::new("m/pic.png"));
    }

    #[tokio::test]
    async fn unknown_filename_returns_none() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        write_file(dir.path(), "a/pic.png", b"bytes");

        let vault = FolderVault::new(dir.path());

        assert!(vault.resolve("missing.png", "a/note.md").await.is_none());
        assert!(vault.resolve("", "a/note.md").await.is_none());
    }

    #[tokio::test]
    async fn hidden_directories_are_skipped() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        write_file(dir.path(), ".obsidian/cache.png", b"cached");

        let vault = FolderVault::new(dir.path());

        assert!(vault.resolve("cache.png", "note.md").await.is_none());
    }

    #[test]
    fn asset_id_exposes_extension() {
        assert_eq!(AssetId::new("a/photo.PNG").extension(), Some("PNG"));
        assert_eq!(AssetId::new("a/noext").extension(), None);
    }
}
